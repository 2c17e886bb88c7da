//! Media type detection

use serde::{Deserialize, Serialize};

/// Declared media type of an uploaded document.
///
/// Anything that is not a PDF or DOCX is treated as plain text. There is
/// no "unsupported" variant: unrecognized inputs are analyzed as raw text
/// instead of being rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MediaType {
    Pdf,
    Docx,
    PlainText,
}

impl MediaType {
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "pdf" => MediaType::Pdf,
            "docx" => MediaType::Docx,
            _ => MediaType::PlainText,
        }
    }

    pub fn from_mime(mime: &str) -> Self {
        match mime {
            "application/pdf" => MediaType::Pdf,
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document" => {
                MediaType::Docx
            }
            _ => MediaType::PlainText,
        }
    }
}
