//! Keyword universe construction and matching against resume text

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Built-in skill keywords every analysis considers, independent of any
/// job description.
const SKILL_KEYWORDS: &[&str] = &[
    "javascript",
    "react",
    "typescript",
    "node",
    "python",
    "java",
    "sql",
    "aws",
    "docker",
    "kubernetes",
    "agile",
    "scrum",
    "leadership",
    "project management",
    "communication",
    "problem solving",
];

/// Characters stripped as token separators when building the word set.
const PUNCTUATION: &[char] = &[
    '.', ',', '/', '#', '!', '$', '%', '^', '&', '*', ';', ':', '{', '}', '=', '-', '_', '`', '~',
    '(', ')',
];

/// Minimum token length kept from the resume text.
const MIN_TOKEN_LEN: usize = 2;

/// Minimum word length kept from a job description.
const MIN_JOB_WORD_LEN: usize = 3;

/// Insertion-ordered set: deduplicates while preserving first-occurrence
/// order, so matched/missing output is reproducible run to run.
struct OrderedSet {
    items: Vec<String>,
    seen: HashSet<String>,
}

impl OrderedSet {
    fn new() -> Self {
        Self {
            items: Vec::new(),
            seen: HashSet::new(),
        }
    }

    fn insert(&mut self, value: String) {
        if self.seen.insert(value.clone()) {
            self.items.push(value);
        }
    }

    fn into_vec(self) -> Vec<String> {
        self.items
    }
}

/// The matched/missing partition of the keyword universe.
///
/// `matched` and `missing` are disjoint and together enumerate the whole
/// universe, in universe order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordMatches {
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

impl KeywordMatches {
    pub fn universe_size(&self) -> usize {
        self.matched.len() + self.missing.len()
    }
}

/// Matches the keyword universe (built-in skills plus job-description
/// words) against the extracted resume text.
pub struct KeywordMatcher {
    skill_keywords: Vec<String>,
}

impl KeywordMatcher {
    pub fn new() -> Self {
        Self::with_additional_skills(Vec::new())
    }

    /// Create a matcher with extra skill keywords appended to the built-in
    /// list (they participate in the universe before job-description words).
    pub fn with_additional_skills(additional_skills: Vec<String>) -> Self {
        let mut skill_keywords: Vec<String> =
            SKILL_KEYWORDS.iter().map(|s| s.to_string()).collect();
        skill_keywords.extend(additional_skills.into_iter().map(|s| s.to_lowercase()));

        Self { skill_keywords }
    }

    pub fn skill_count(&self) -> usize {
        self.skill_keywords.len()
    }

    /// Partition the keyword universe into matched and missing keywords.
    ///
    /// A keyword counts as matched when the text's word set contains it
    /// verbatim, or when any token contains it as a substring — so a
    /// compound token like "javascript-developer" matches "javascript".
    /// The substring rule also admits false positives (a keyword "go"
    /// would match the token "good"); that looseness is part of the
    /// matching contract, not an accident.
    pub fn match_keywords(&self, text: &str, job_description: Option<&str>) -> KeywordMatches {
        let universe = self.build_universe(job_description);
        let words = WordSet::from_text(text);

        let mut matched = Vec::new();
        let mut missing = Vec::new();
        for keyword in universe {
            if words.contains_or_embeds(&keyword) {
                matched.push(keyword);
            } else {
                missing.push(keyword);
            }
        }

        KeywordMatches { matched, missing }
    }

    /// Universe order: the fixed skill list first, then distinct
    /// job-description words of length > 3 in first-occurrence order.
    fn build_universe(&self, job_description: Option<&str>) -> Vec<String> {
        let mut universe = OrderedSet::new();

        for keyword in &self.skill_keywords {
            universe.insert(keyword.clone());
        }

        if let Some(job) = job_description {
            for word in job.to_lowercase().split_whitespace() {
                if word.len() > MIN_JOB_WORD_LEN {
                    universe.insert(word.to_string());
                }
            }
        }

        universe.into_vec()
    }
}

impl Default for KeywordMatcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Deduplicated tokens of the resume text: lower-cased, punctuation
/// treated as separators, tokens of length > 2 kept.
struct WordSet {
    tokens: Vec<String>,
    index: HashSet<String>,
}

impl WordSet {
    fn from_text(text: &str) -> Self {
        let normalized: String = text
            .to_lowercase()
            .chars()
            .map(|c| if PUNCTUATION.contains(&c) { ' ' } else { c })
            .collect();

        let mut tokens = Vec::new();
        let mut index = HashSet::new();
        for token in normalized.split_whitespace() {
            if token.len() > MIN_TOKEN_LEN && index.insert(token.to_string()) {
                tokens.push(token.to_string());
            }
        }

        Self { tokens, index }
    }

    fn contains_or_embeds(&self, keyword: &str) -> bool {
        self.index.contains(keyword) || self.tokens.iter().any(|token| token.contains(keyword))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matcher_creation() {
        let matcher = KeywordMatcher::new();
        assert_eq!(matcher.skill_count(), SKILL_KEYWORDS.len());

        let custom = KeywordMatcher::with_additional_skills(vec!["Terraform".to_string()]);
        assert_eq!(custom.skill_count(), SKILL_KEYWORDS.len() + 1);
    }

    #[test]
    fn test_partition_covers_universe() {
        let matcher = KeywordMatcher::new();
        let matches = matcher.match_keywords(
            "Experienced Python and React developer with Docker knowledge.",
            None,
        );

        assert_eq!(matches.universe_size(), SKILL_KEYWORDS.len());
        for keyword in SKILL_KEYWORDS {
            let in_matched = matches.matched.iter().any(|k| k == keyword);
            let in_missing = matches.missing.iter().any(|k| k == keyword);
            assert!(in_matched ^ in_missing, "{} must be in exactly one bucket", keyword);
        }

        assert!(matches.matched.contains(&"python".to_string()));
        assert!(matches.matched.contains(&"react".to_string()));
        assert!(matches.matched.contains(&"docker".to_string()));
        assert!(matches.missing.contains(&"kubernetes".to_string()));
    }

    #[test]
    fn test_compound_token_matches_by_substring() {
        let matcher = KeywordMatcher::new();

        // Hyphens are separators, so this splits into plain tokens.
        let matches = matcher.match_keywords("Senior javascript-developer wanted", None);
        assert!(matches.matched.contains(&"javascript".to_string()));

        // A fused token still matches through the substring rule.
        let matches = matcher.match_keywords("resident javascriptdeveloper", None);
        assert!(matches.matched.contains(&"javascript".to_string()));
    }

    #[test]
    fn test_substring_rule_admits_false_positives() {
        // Known quirk: any token containing the keyword counts as a match,
        // even mid-word. "inexperienced" embeds the job keyword
        // "experience" and so counts for it.
        let matcher = KeywordMatcher::new();
        let matches =
            matcher.match_keywords("inexperienced candidate", Some("experience required"));
        assert!(matches.matched.contains(&"experience".to_string()));
        assert!(matches.missing.contains(&"required".to_string()));
    }

    #[test]
    fn test_job_description_extends_universe_in_order() {
        let matcher = KeywordMatcher::new();
        let matches = matcher.match_keywords(
            "",
            Some("Kubernetes experience with kubernetes clusters required"),
        );

        // Lower-cased, length > 3, deduplicated by first occurrence; the
        // built-in keywords come first in the universe, job words after.
        let job_words: Vec<String> = matches
            .missing
            .iter()
            .skip(SKILL_KEYWORDS.len())
            .cloned()
            .collect();
        assert_eq!(job_words, ["experience", "with", "clusters", "required"]);
        // "kubernetes" was already in the universe via the built-in list.
        assert_eq!(matches.universe_size(), SKILL_KEYWORDS.len() + 4);
    }

    #[test]
    fn test_output_order_is_deterministic() {
        let matcher = KeywordMatcher::new();
        let text = "python java sql developer";
        let job = Some("rust tokio backend services");

        let first = matcher.match_keywords(text, job);
        let second = matcher.match_keywords(text, job);
        assert_eq!(first, second);

        // Matched keywords preserve built-in list order.
        let python_pos = first.matched.iter().position(|k| k == "python").unwrap();
        let java_pos = first.matched.iter().position(|k| k == "java").unwrap();
        let sql_pos = first.matched.iter().position(|k| k == "sql").unwrap();
        assert!(python_pos < java_pos && java_pos < sql_pos);
    }

    #[test]
    fn test_punctuation_is_stripped_before_matching() {
        let matcher = KeywordMatcher::new();
        let matches = matcher.match_keywords("Skills: python, react; docker.", None);
        assert!(matches.matched.contains(&"python".to_string()));
        assert!(matches.matched.contains(&"react".to_string()));
        assert!(matches.matched.contains(&"docker".to_string()));
    }

    #[test]
    fn test_empty_text_matches_nothing() {
        let matcher = KeywordMatcher::new();
        let matches = matcher.match_keywords("", None);
        assert!(matches.matched.is_empty());
        assert_eq!(matches.missing.len(), SKILL_KEYWORDS.len());
    }
}
