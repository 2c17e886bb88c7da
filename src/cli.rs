//! CLI interface for the resume analyzer

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "resume-analyzer")]
#[command(about = "Heuristic resume quality and ATS compatibility analyzer")]
#[command(
    long_about = "Analyze a resume (optionally against a job description) and produce keyword \
                  matches, per-section feedback, content statistics, and improvement suggestions"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a resume file
    Analyze {
        /// Path to resume file (PDF, DOCX, or any text file)
        #[arg(short, long)]
        resume: PathBuf,

        /// Path to a job description text file to match against
        #[arg(short, long)]
        job: Option<PathBuf>,

        /// Output format: console, json, markdown
        #[arg(short, long, default_value = "console")]
        output: String,

        /// Output detailed analysis
        #[arg(short, long)]
        detailed: bool,

        /// Save the rendered report to a file
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// Show or reset configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        "markdown" | "md" => Ok(crate::config::OutputFormat::Markdown),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown",
            format
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("console").unwrap(), OutputFormat::Console);
        assert_eq!(parse_output_format("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(parse_output_format("md").unwrap(), OutputFormat::Markdown);
        assert!(parse_output_format("html").is_err());
    }
}
