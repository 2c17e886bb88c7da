//! Error handling for the resume analyzer application

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResumeAnalyzerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Analysis failed: {0}")]
    AnalysisFailed(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, ResumeAnalyzerError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for ResumeAnalyzerError {
    fn from(err: anyhow::Error) -> Self {
        ResumeAnalyzerError::AnalysisFailed(err.to_string())
    }
}
