//! Output formatters for analysis reports

use crate::config::OutputFormat;
use crate::error::Result;
use crate::processing::analyzer::AnalysisResult;
use crate::processing::section_scorer::SectionStatus;
use colored::{Color, Colorize};
use std::path::Path;

/// Trait for rendering an analysis result into a displayable string.
pub trait OutputFormatter {
    fn format_report(&self, report: &AnalysisResult) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with colors and score badges
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for API integration and structured data
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for documentation and saved reports
pub struct MarkdownFormatter;

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self {
            use_colors,
            detailed,
        }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str) -> String {
        if self.use_colors {
            format!("\n{}\n", title.blue().bold())
        } else {
            format!("\n{}\n", title)
        }
    }

    fn format_score_badge(&self, score: u8) -> String {
        let (badge, color) = match score {
            80..=100 => ("EXCELLENT", Color::Green),
            60..=79 => ("GOOD", Color::Yellow),
            40..=59 => ("FAIR", Color::BrightYellow),
            _ => ("NEEDS WORK", Color::Red),
        };

        if self.use_colors {
            format!("[{}]", badge.color(color).bold())
        } else {
            format!("[{}]", badge)
        }
    }

    fn format_status_icon(&self, status: &SectionStatus) -> &'static str {
        match status {
            SectionStatus::Good => "✅",
            SectionStatus::Warning => "⚠️ ",
            SectionStatus::Error => "❌",
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &AnalysisResult) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header("📊 RESUME ANALYSIS"));
        output.push_str(&format!(
            "Overall Score: {}% {}\n",
            report.overall_score,
            self.format_score_badge(report.overall_score)
        ));
        output.push_str(&format!(
            "ATS Compatibility: {}% {}\n",
            report.ats_compatibility,
            self.format_score_badge(report.ats_compatibility)
        ));

        output.push_str(&self.format_header("📄 Section Feedback"));
        for section in &report.sections {
            output.push_str(&format!(
                "{} {}: {}%\n",
                self.format_status_icon(&section.status),
                self.colorize(&section.name, Color::White),
                section.score
            ));
            output.push_str(&format!("   {}\n", section.feedback));
        }

        output.push_str(&self.format_header("🎯 Keywords"));
        output.push_str(&format!(
            "Matched: {} | Missing: {}\n",
            self.colorize(&report.keyword_matches.matched.len().to_string(), Color::Green),
            self.colorize(&report.keyword_matches.missing.len().to_string(), Color::Red)
        ));
        if self.detailed {
            if !report.keyword_matches.matched.is_empty() {
                output.push_str(&format!(
                    "  Matched: {}\n",
                    report.keyword_matches.matched.join(", ")
                ));
            }
            if !report.keyword_matches.missing.is_empty() {
                output.push_str(&format!(
                    "  Missing: {}\n",
                    report.keyword_matches.missing.join(", ")
                ));
            }
        }

        if !report.suggestions.is_empty() {
            output.push_str(&self.format_header("💡 Suggestions"));
            for (i, suggestion) in report.suggestions.iter().enumerate() {
                output.push_str(&format!("  {}. {}\n", i + 1, suggestion));
            }
        }

        output.push_str(&self.format_header("📈 Content Statistics"));
        let stats = &report.content_stats;
        output.push_str(&format!("Words: {}\n", stats.word_count));
        output.push_str(&format!("Characters (no whitespace): {}\n", stats.char_count));
        output.push_str(&format!(
            "Average sentence length: {} words\n",
            stats.average_sentence_length
        ));
        output.push_str(&format!("Readability: {}%\n", stats.readability_score));
        output.push_str(&format!("Experience level: {}\n", stats.experience_level));

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &AnalysisResult) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    fn status_label(status: &SectionStatus) -> &'static str {
        match status {
            SectionStatus::Good => "Good",
            SectionStatus::Warning => "Warning",
            SectionStatus::Error => "Error",
        }
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &AnalysisResult) -> Result<String> {
        let mut output = String::new();

        output.push_str("# Resume Analysis Report\n\n");
        output.push_str(&format!("**Overall Score:** {}%\n", report.overall_score));
        output.push_str(&format!(
            "**ATS Compatibility:** {}%\n\n",
            report.ats_compatibility
        ));

        output.push_str("## Section Feedback\n\n");
        output.push_str("| Section | Score | Status | Feedback |\n");
        output.push_str("|---------|-------|--------|----------|\n");
        for section in &report.sections {
            output.push_str(&format!(
                "| {} | {}% | {} | {} |\n",
                section.name,
                section.score,
                Self::status_label(&section.status),
                section.feedback
            ));
        }
        output.push('\n');

        output.push_str("## Keywords\n\n");
        if !report.keyword_matches.matched.is_empty() {
            output.push_str(&format!(
                "**Matched ({}):** {}\n\n",
                report.keyword_matches.matched.len(),
                report.keyword_matches.matched.join(", ")
            ));
        }
        if !report.keyword_matches.missing.is_empty() {
            output.push_str(&format!(
                "**Missing ({}):** {}\n\n",
                report.keyword_matches.missing.len(),
                report.keyword_matches.missing.join(", ")
            ));
        }

        if !report.suggestions.is_empty() {
            output.push_str("## Suggestions\n\n");
            for (i, suggestion) in report.suggestions.iter().enumerate() {
                output.push_str(&format!("{}. {}\n", i + 1, suggestion));
            }
            output.push('\n');
        }

        output.push_str("## Content Statistics\n\n");
        let stats = &report.content_stats;
        output.push_str(&format!("- Words: {}\n", stats.word_count));
        output.push_str(&format!(
            "- Characters (no whitespace): {}\n",
            stats.char_count
        ));
        output.push_str(&format!(
            "- Average sentence length: {} words\n",
            stats.average_sentence_length
        ));
        output.push_str(&format!("- Readability: {}%\n", stats.readability_score));
        output.push_str(&format!("- Experience level: {}\n", stats.experience_level));

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

/// Coordinates the formatters and routes by requested format.
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

impl ReportGenerator {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter::new(),
        }
    }

    pub fn generate(&self, report: &AnalysisResult, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
        }
    }

    pub fn save_to_file(&self, content: &str, path: &Path) -> Result<()> {
        std::fs::write(path, content)?;
        Ok(())
    }
}
