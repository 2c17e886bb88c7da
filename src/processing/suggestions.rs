//! Improvement suggestion generation
//!
//! Candidate checks run in a fixed priority order, each contributing at
//! most one suggestion; the final list is truncated to five entries.

use crate::processing::content_stats::ContentStatistics;
use crate::processing::keyword_matcher::KeywordMatches;
use crate::processing::section_scorer::SectionScorer;

/// Hard cap on the number of suggestions returned.
const MAX_SUGGESTIONS: usize = 5;

/// Missing keywords named in the keyword suggestion.
const NAMED_MISSING_KEYWORDS: usize = 3;

/// Word counts outside this range trigger a length suggestion.
const MIN_WORD_COUNT: usize = 300;
const MAX_WORD_COUNT: usize = 700;

/// Average sentence length above which a shorten-sentences suggestion fires.
const LONG_SENTENCE_THRESHOLD: u32 = 20;

pub struct SuggestionGenerator {
    probes: SectionScorer,
}

impl SuggestionGenerator {
    pub fn new() -> Self {
        Self {
            probes: SectionScorer::new(),
        }
    }

    /// Generate up to five suggestions, in priority order: missing
    /// keywords, missing contact info, missing summary, length, missing
    /// quantifiable achievements, sentence length, job-description
    /// tailoring, formatting.
    pub fn generate(
        &self,
        text: &str,
        matches: &KeywordMatches,
        stats: &ContentStatistics,
        job_description: Option<&str>,
    ) -> Vec<String> {
        let mut suggestions = Vec::new();
        let lower = text.to_lowercase();

        if !matches.missing.is_empty() {
            let named: Vec<&str> = matches
                .missing
                .iter()
                .take(NAMED_MISSING_KEYWORDS)
                .map(|k| k.as_str())
                .collect();
            suggestions.push(format!(
                "Consider adding these missing keywords: {}",
                named.join(", ")
            ));
        }

        if !self.probes.has_contact_info(text) {
            suggestions.push(
                "Add complete contact information including email, phone, and location"
                    .to_string(),
            );
        }

        if !self.probes.has_summary(text) {
            suggestions.push(
                "Add a compelling professional summary at the beginning of your resume"
                    .to_string(),
            );
        }

        if stats.word_count < MIN_WORD_COUNT {
            suggestions.push(
                "Your resume might be too brief. Consider adding more details about your \
                 experience and achievements"
                    .to_string(),
            );
        } else if stats.word_count > MAX_WORD_COUNT {
            suggestions.push(
                "Your resume might be too lengthy. Focus on your most relevant and recent \
                 experience"
                    .to_string(),
            );
        }

        if !self.probes.has_quantifiable_achievements(text) {
            suggestions
                .push("Add quantifiable achievements (e.g., 'Increased sales by 25%')".to_string());
        }

        if stats.average_sentence_length > LONG_SENTENCE_THRESHOLD {
            suggestions.push("Shorten your sentences to improve readability".to_string());
        }

        if job_description.is_some() && matches.matched.len() < matches.missing.len() {
            suggestions.push(
                "Tailor your resume to the job description by incorporating more of its \
                 required keywords"
                    .to_string(),
            );
        }

        if !text.chars().next().map_or(false, |c| c.is_uppercase()) {
            suggestions.push("Start your resume with a capitalized name or heading".to_string());
        }

        if text.contains("I ") || lower.contains("my ") || lower.contains("me ") {
            suggestions.push(
                "Remove first-person pronouns (I, my, me) to keep a professional tone"
                    .to_string(),
            );
        }

        suggestions.truncate(MAX_SUGGESTIONS);
        suggestions
    }
}

impl Default for SuggestionGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::content_stats::ContentAnalyzer;
    use crate::processing::keyword_matcher::KeywordMatcher;

    fn run(text: &str, job_description: Option<&str>) -> Vec<String> {
        let matcher = KeywordMatcher::new();
        let analyzer = ContentAnalyzer::new();
        let generator = SuggestionGenerator::new();

        let matches = matcher.match_keywords(text, job_description);
        let stats = analyzer.compute(text);
        generator.generate(text, &matches, &stats, job_description)
    }

    #[test]
    fn test_never_more_than_five_suggestions() {
        // Empty text trips nearly every check; the list still caps at 5.
        let suggestions = run("", None);
        assert_eq!(suggestions.len(), MAX_SUGGESTIONS);
    }

    #[test]
    fn test_missing_keywords_come_first() {
        let suggestions = run("", None);
        assert!(suggestions[0].contains("missing keywords"));
        // The built-in list enumerates in fixed order.
        assert!(suggestions[0].contains("javascript, react, typescript"));
    }

    #[test]
    fn test_contact_and_summary_prompts() {
        let suggestions = run("", None);
        assert!(suggestions[1].contains("contact information"));
        assert!(suggestions[2].contains("professional summary"));
    }

    #[test]
    fn test_length_checks_are_mutually_exclusive() {
        let brief = run("Summary. Short text here.", None);
        assert!(brief.iter().any(|s| s.contains("too brief")));
        assert!(!brief.iter().any(|s| s.contains("too lengthy")));
    }

    #[test]
    fn test_tailoring_suggestion_requires_job_description() {
        let text = "Contact: jane@example.com. Summary: skilled python developer. \
                    Experience: increased revenue 25%.";

        let with_job = run(text, Some("kubernetes terraform golang distributed systems"));
        assert!(with_job.iter().any(|s| s.contains("Tailor your resume")));

        let without_job = run(text, None);
        assert!(!without_job.iter().any(|s| s.contains("Tailor your resume")));
    }

    #[test]
    fn test_long_sentences_trigger_shorten_suggestion() {
        let sentence = "word ".repeat(30);
        let text = format!(
            "jane@example.com summary python javascript react node java sql aws docker \
             kubernetes agile scrum leadership communication increased 25% {}.",
            sentence
        );
        let suggestions = run(&text, None);
        assert!(suggestions.iter().any(|s| s.contains("Shorten your sentences")));
    }

    #[test]
    fn test_first_person_pronoun_suggestion() {
        let text = "jane@example.com Summary: python javascript react node java sql aws \
                    docker kubernetes agile scrum increased output 25%. I managed my team.";
        let suggestions = run(text, None);
        assert!(suggestions.iter().any(|s| s.contains("first-person pronouns")));
    }

    #[test]
    fn test_well_formed_resume_yields_few_suggestions() {
        let body = "Delivered measurable outcomes across projects. ".repeat(40);
        let text = format!(
            "Jane Doe jane@example.com 555-123-4567 Summary: skilled developer with \
             python javascript react node java sql aws docker kubernetes agile scrum \
             leadership communication experience. Increased revenue by 25%. {}",
            body
        );
        let suggestions = run(&text, None);
        assert!(suggestions.len() < MAX_SUGGESTIONS);
    }
}
