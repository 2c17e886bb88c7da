//! Source document structure

use crate::input::file_detector::MediaType;
use serde::{Deserialize, Serialize};

/// An uploaded document: opaque bytes plus a declared media type and a
/// display name. Immutable; the analyzer never persists it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceDocument {
    pub bytes: Vec<u8>,
    pub media_type: MediaType,
    pub name: String,
}

impl SourceDocument {
    pub fn new(bytes: Vec<u8>, media_type: MediaType, name: impl Into<String>) -> Self {
        Self {
            bytes,
            media_type,
            name: name.into(),
        }
    }

    /// Build a plain-text document from a string. Convenience for callers
    /// that already hold the resume as text.
    pub fn from_text(text: &str, name: impl Into<String>) -> Self {
        Self {
            bytes: text.as_bytes().to_vec(),
            media_type: MediaType::PlainText,
            name: name.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
