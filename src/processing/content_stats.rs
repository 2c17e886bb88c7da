//! Content statistics: counts, sentence structure, readability, and
//! inferred experience level

use regex::Regex;
use serde::{Deserialize, Serialize};

const SENIOR_CUES: &[&str] = &[
    "senior",
    "lead",
    "principal",
    "architect",
    "manager",
    "director",
    "head",
];
const ENTRY_CUES: &[&str] = &["junior", "entry", "intern", "assistant", "associate"];

/// Experience level inferred from the resume text. `Unknown` is an
/// explicit sentinel: when no indicator is found the level is reported as
/// undetermined rather than guessed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExperienceLevel {
    #[serde(rename = "Entry Level")]
    Entry,
    #[serde(rename = "Mid Level")]
    Mid,
    #[serde(rename = "Senior Level")]
    Senior,
    #[serde(rename = "Executive Level")]
    Executive,
    #[serde(rename = "Senior Level or Higher")]
    SeniorOrHigher,
    #[serde(rename = "Unknown (no indicators found)")]
    Unknown,
}

impl std::fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ExperienceLevel::Entry => "Entry Level",
            ExperienceLevel::Mid => "Mid Level",
            ExperienceLevel::Senior => "Senior Level",
            ExperienceLevel::Executive => "Executive Level",
            ExperienceLevel::SeniorOrHigher => "Senior Level or Higher",
            ExperienceLevel::Unknown => "Unknown (no indicators found)",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentStatistics {
    /// Whitespace-delimited tokens of length > 1.
    pub word_count: usize,
    /// Characters excluding whitespace.
    pub char_count: usize,
    /// Rounded mean words per sentence; 0 when there are no sentences.
    pub average_sentence_length: u32,
    /// Sentence-length-based readability heuristic, 0-100.
    pub readability_score: u8,
    pub experience_level: ExperienceLevel,
}

pub struct ContentAnalyzer {
    years_re: Regex,
}

impl ContentAnalyzer {
    pub fn new() -> Self {
        let years_re =
            Regex::new(r"(\d+)\+?\s*years?\s+of\s+experience").expect("Invalid years regex");

        Self { years_re }
    }

    pub fn compute(&self, text: &str) -> ContentStatistics {
        let word_count = text.split_whitespace().filter(|w| w.len() > 1).count();
        let char_count = text.chars().filter(|c| !c.is_whitespace()).count();

        let average = Self::average_words_per_sentence(text);

        ContentStatistics {
            word_count,
            char_count,
            average_sentence_length: average.round() as u32,
            readability_score: Self::readability_score(average),
            experience_level: self.experience_level(text),
        }
    }

    /// Mean words per sentence, where sentences are the non-empty
    /// segments between `.`, `!`, and `?` characters. Unrounded; callers
    /// round for display.
    fn average_words_per_sentence(text: &str) -> f64 {
        let sentence_lengths: Vec<usize> = text
            .split(['.', '!', '?'])
            .map(|sentence| sentence.split_whitespace().count())
            .filter(|&words| words > 0)
            .collect();

        if sentence_lengths.is_empty() {
            return 0.0;
        }

        sentence_lengths.iter().sum::<usize>() as f64 / sentence_lengths.len() as f64
    }

    /// Piecewise readability curve over average words per sentence:
    /// peaks at 95 for 12-18 words, shading down to 70 for very short and
    /// 60 for very long sentences, interpolating linearly in between.
    fn readability_score(average: f64) -> u8 {
        let score = if average < 8.0 {
            70.0
        } else if average > 25.0 {
            60.0
        } else if (12.0..=18.0).contains(&average) {
            95.0
        } else if average < 12.0 {
            70.0 + (average - 8.0) / 4.0 * 25.0
        } else {
            95.0 - (average - 18.0) / 7.0 * 35.0
        };

        score.round() as u8
    }

    /// Infer the experience level from an explicit "N years of experience"
    /// mention, falling back to title keywords, then to the Unknown
    /// sentinel.
    fn experience_level(&self, text: &str) -> ExperienceLevel {
        let lower = text.to_lowercase();

        if let Some(caps) = self.years_re.captures(&lower) {
            if let Ok(years) = caps[1].parse::<u32>() {
                return match years {
                    0..=1 => ExperienceLevel::Entry,
                    2..=4 => ExperienceLevel::Mid,
                    5..=9 => ExperienceLevel::Senior,
                    _ => ExperienceLevel::Executive,
                };
            }
        }

        if SENIOR_CUES.iter().any(|cue| lower.contains(cue)) {
            ExperienceLevel::SeniorOrHigher
        } else if ENTRY_CUES.iter().any(|cue| lower.contains(cue)) {
            ExperienceLevel::Entry
        } else {
            ExperienceLevel::Unknown
        }
    }
}

impl Default for ContentAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
