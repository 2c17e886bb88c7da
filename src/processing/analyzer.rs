//! Analysis engine: sequences extraction, matching, scoring, and
//! suggestion generation into a single result

use crate::config::Config;
use crate::error::Result;
use crate::input::text_extractor::extract_text;
use crate::processing::content_stats::{ContentAnalyzer, ContentStatistics};
use crate::processing::document::SourceDocument;
use crate::processing::keyword_matcher::{KeywordMatcher, KeywordMatches};
use crate::processing::section_scorer::{SectionResult, SectionScorer};
use crate::processing::suggestions::SuggestionGenerator;
use log::debug;
use serde::{Deserialize, Serialize};

/// Keyword-coverage weight in the overall score; the remainder weights
/// resume length against the optimal word count.
const OVERALL_KEYWORD_WEIGHT: f64 = 70.0;
const OVERALL_OPTIMAL_WORDS: usize = 500;

const ATS_KEYWORD_WEIGHT: f64 = 80.0;
const ATS_OPTIMAL_WORDS: usize = 400;

/// The complete outcome of one analysis run. Plain serializable data;
/// persistence and rendering are the caller's concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub overall_score: u8,
    pub ats_compatibility: u8,
    pub keyword_matches: KeywordMatches,
    pub sections: Vec<SectionResult>,
    pub suggestions: Vec<String>,
    pub content_stats: ContentStatistics,
}

/// Coordinates the analysis components. Stateless across calls: every
/// analysis re-extracts and re-derives everything, so identical inputs
/// produce identical results.
pub struct AnalysisEngine {
    keyword_matcher: KeywordMatcher,
    section_scorer: SectionScorer,
    content_analyzer: ContentAnalyzer,
    suggestion_generator: SuggestionGenerator,
}

impl AnalysisEngine {
    pub fn new() -> Self {
        Self::with_additional_skills(Vec::new())
    }

    /// Engine honoring the configuration's additional skill keywords.
    pub fn with_config(config: &Config) -> Self {
        Self::with_additional_skills(config.analysis.additional_skills.clone())
    }

    pub fn with_additional_skills(additional_skills: Vec<String>) -> Self {
        Self {
            keyword_matcher: KeywordMatcher::with_additional_skills(additional_skills),
            section_scorer: SectionScorer::new(),
            content_analyzer: ContentAnalyzer::new(),
            suggestion_generator: SuggestionGenerator::new(),
        }
    }

    /// Analyze a document, optionally against a job description.
    ///
    /// Extraction is best-effort and the scoring steps are total, so
    /// given a document this always produces a complete result; the only
    /// failure the caller can see is being unable to read the input in
    /// the first place.
    pub fn analyze(
        &self,
        document: &SourceDocument,
        job_description: Option<&str>,
    ) -> Result<AnalysisResult> {
        let text = extract_text(document);
        debug!(
            "Extracted {} characters from '{}'",
            text.len(),
            document.name
        );

        let keyword_matches = self.keyword_matcher.match_keywords(&text, job_description);
        let sections = self.section_scorer.score_sections(&text, &keyword_matches);
        let content_stats = self.content_analyzer.compute(&text);
        let suggestions = self.suggestion_generator.generate(
            &text,
            &keyword_matches,
            &content_stats,
            job_description,
        );

        let overall_score = Self::weighted_score(
            &keyword_matches,
            content_stats.word_count,
            OVERALL_KEYWORD_WEIGHT,
            OVERALL_OPTIMAL_WORDS,
        );
        let ats_compatibility = Self::weighted_score(
            &keyword_matches,
            content_stats.word_count,
            ATS_KEYWORD_WEIGHT,
            ATS_OPTIMAL_WORDS,
        );

        Ok(AnalysisResult {
            overall_score,
            ats_compatibility,
            keyword_matches,
            sections,
            suggestions,
            content_stats,
        })
    }

    /// Weighted blend of keyword coverage and word-count adequacy,
    /// rounded and clamped to 0-100.
    fn weighted_score(
        matches: &KeywordMatches,
        word_count: usize,
        keyword_weight: f64,
        optimal_words: usize,
    ) -> u8 {
        let universe = matches.universe_size();
        let keyword_ratio = if universe == 0 {
            0.0
        } else {
            matches.matched.len() as f64 / universe as f64
        };
        let length_ratio = word_count.min(optimal_words) as f64 / optimal_words as f64;

        let score = keyword_ratio * keyword_weight + length_ratio * (100.0 - keyword_weight);
        score.round().clamp(0.0, 100.0) as u8
    }
}

impl Default for AnalysisEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::content_stats::ExperienceLevel;
    use crate::processing::section_scorer::SectionStatus;

    #[test]
    fn test_empty_document_scores_low_without_errors() {
        let engine = AnalysisEngine::new();
        let doc = SourceDocument::from_text("", "empty.txt");

        let result = engine.analyze(&doc, None).unwrap();

        assert_eq!(result.overall_score, 0);
        assert_eq!(result.ats_compatibility, 0);
        assert_eq!(result.sections.len(), 5);
        for section in &result.sections {
            assert_ne!(section.status, SectionStatus::Good);
        }
        assert_eq!(
            result.content_stats.experience_level,
            ExperienceLevel::Unknown
        );
    }

    #[test]
    fn test_scores_are_always_in_bounds() {
        let engine = AnalysisEngine::new();
        let long_text = "word ".repeat(2000);
        let texts = [
            "",
            "python",
            long_text.as_str(),
            "python javascript react node java sql aws docker kubernetes agile scrum \
             leadership communication",
        ];

        for text in texts {
            let doc = SourceDocument::from_text(text, "resume.txt");
            let result = engine.analyze(&doc, None).unwrap();
            assert!(result.overall_score <= 100);
            assert!(result.ats_compatibility <= 100);
            assert!(result.suggestions.len() <= 5);
            assert_eq!(result.sections.len(), 5);
        }
    }

    #[test]
    fn test_score_formula() {
        let engine = AnalysisEngine::new();
        // 500+ words, so the length term saturates for both scores.
        let filler = "delivered consistent project outcomes every quarter ".repeat(100);
        let text = format!("python javascript react docker {}", filler);
        let doc = SourceDocument::from_text(&text, "resume.txt");

        let result = engine.analyze(&doc, None).unwrap();

        let matched = result.keyword_matches.matched.len() as f64;
        let universe = result.keyword_matches.universe_size() as f64;
        let expected_overall = (matched / universe * 70.0 + 30.0).round() as u8;
        let expected_ats = (matched / universe * 80.0 + 20.0).round() as u8;
        assert_eq!(result.overall_score, expected_overall);
        assert_eq!(result.ats_compatibility, expected_ats);
    }

    #[test]
    fn test_analysis_is_deterministic() {
        let engine = AnalysisEngine::new();
        let doc = SourceDocument::from_text(
            "Summary: skilled python developer. jane@example.com. Increased sales 25%.",
            "resume.txt",
        );
        let job = Some("kubernetes python experience");

        let first = engine.analyze(&doc, job).unwrap();
        let second = engine.analyze(&doc, job).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_keyword_partition_property() {
        let engine = AnalysisEngine::new();
        let doc = SourceDocument::from_text("python react developer", "resume.txt");
        let result = engine
            .analyze(&doc, Some("senior rust engineer with kafka experience"))
            .unwrap();

        let matches = &result.keyword_matches;
        for keyword in matches.matched.iter() {
            assert!(!matches.missing.contains(keyword));
        }
        assert_eq!(
            matches.matched.len() + matches.missing.len(),
            matches.universe_size()
        );
    }

    #[test]
    fn test_additional_skills_extend_the_universe() {
        let engine = AnalysisEngine::with_additional_skills(vec!["terraform".to_string()]);
        let doc = SourceDocument::from_text("terraform modules everywhere", "resume.txt");
        let result = engine.analyze(&doc, None).unwrap();
        assert!(result
            .keyword_matches
            .matched
            .contains(&"terraform".to_string()));
    }
}
