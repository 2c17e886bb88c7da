//! Text extraction from various document formats
//!
//! Extraction is best-effort: a document that fails structural parsing is
//! re-read as raw UTF-8 text instead of failing the analysis. Every path
//! returns a string, possibly empty.

use crate::input::file_detector::MediaType;
use crate::processing::document::SourceDocument;
use log::warn;

pub trait TextExtractor {
    fn extract(&self, bytes: &[u8]) -> String;
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    fn extract(&self, bytes: &[u8]) -> String {
        match pdf_extract::extract_text_from_mem(bytes) {
            Ok(text) => text,
            Err(e) => {
                warn!("PDF extraction failed, falling back to raw text: {}", e);
                PlainTextExtractor.extract(bytes)
            }
        }
    }
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract(&self, bytes: &[u8]) -> String {
        String::from_utf8_lossy(bytes).into_owned()
    }
}

/// Extract the textual content of a document, dispatching on its declared
/// media type. DOCX gets no structural parsing; its bytes are interpreted
/// as text verbatim, matching the plain-text path.
pub fn extract_text(document: &SourceDocument) -> String {
    match document.media_type {
        MediaType::Pdf => PdfExtractor.extract(&document.bytes),
        MediaType::Docx | MediaType::PlainText => PlainTextExtractor.extract(&document.bytes),
    }
}
