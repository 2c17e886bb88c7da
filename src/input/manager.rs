//! Input manager for loading documents from disk

use crate::error::{Result, ResumeAnalyzerError};
use crate::input::file_detector::MediaType;
use crate::processing::document::SourceDocument;
use log::info;
use std::path::Path;
use tokio::fs;

/// Loads a file into a [`SourceDocument`]. Reading the bytes is the only
/// I/O an analysis performs; extracted text is never cached across runs.
pub struct InputManager;

impl InputManager {
    pub fn new() -> Self {
        Self
    }

    pub async fn load_document(&self, path: &Path) -> Result<SourceDocument> {
        if !path.exists() {
            return Err(ResumeAnalyzerError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let media_type = Self::detect_media_type(path);
        info!("Loading {:?} document: {}", media_type, path.display());

        let bytes = fs::read(path).await?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());

        Ok(SourceDocument::new(bytes, media_type, name))
    }

    pub async fn load_text(&self, path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(ResumeAnalyzerError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        Ok(fs::read_to_string(path).await?)
    }

    fn detect_media_type(path: &Path) -> MediaType {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(MediaType::from_extension)
            .unwrap_or(MediaType::PlainText)
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}
