//! Per-section presence probes and scoring
//!
//! Five fixed sections are scored independently against the extracted
//! text. Each section is described by a rule record (presence, base
//! scores, bonus conditions, feedback pair, status on absence) and a
//! single loop evaluates the records, so the exactly-five invariant holds
//! by construction.

use crate::processing::keyword_matcher::KeywordMatches;
use regex::Regex;
use serde::{Deserialize, Serialize};

const SUMMARY_CUES: &[&str] = &["summary", "objective", "profile", "about"];
const SUMMARY_STRENGTH_CUES: &[&str] = &["skilled", "expertise", "proficient"];
const EXPERIENCE_CUES: &[&str] = &["experience", "work history", "employment", "career"];
const LEADERSHIP_CUES: &[&str] = &["led", "managed", "coordinated"];
const ACHIEVEMENT_VERBS: &[&str] = &[
    "increased",
    "decreased",
    "reduced",
    "improved",
    "grew",
    "expanded",
];
const EDUCATION_CUES: &[&str] = &["education", "university", "college", "degree", "diploma"];
const HONORS_CUES: &[&str] = &["gpa", "honors", "cum laude"];
const CONTINUED_LEARNING_CUES: &[&str] = &["certification", "course", "training"];

const BASE_PRESENT: u32 = 70;
const BASE_ABSENT: u32 = 40;

/// Matched-keyword count above which the skills section reads as good.
const SKILLS_GOOD_THRESHOLD: usize = 5;

/// Minimum denominator for the skills ratio, so a tiny universe cannot
/// inflate the score.
const SKILLS_MIN_UNIVERSE: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionStatus {
    Good,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionResult {
    pub name: String,
    pub score: u8,
    pub status: SectionStatus,
    pub feedback: String,
}

/// One section's scoring rule, with its predicates already evaluated
/// against the text.
struct SectionRule {
    name: &'static str,
    scoring: Scoring,
    status_when_unmet: SectionStatus,
    feedback_met: String,
    feedback_unmet: &'static str,
}

enum Scoring {
    /// Presence probe: base 70/40 plus flat bonuses, capped at 100.
    Presence {
        present: bool,
        bonuses: Vec<(bool, u32)>,
    },
    /// Keyword-ratio score for the skills section.
    Ratio { matched: usize, universe: usize },
}

impl SectionRule {
    fn evaluate(self) -> SectionResult {
        let (score, met) = match &self.scoring {
            Scoring::Presence { present, bonuses } => {
                let mut score = if *present { BASE_PRESENT } else { BASE_ABSENT };
                for (condition, bonus) in bonuses {
                    if *condition {
                        score += bonus;
                    }
                }
                (score.min(100) as u8, *present)
            }
            Scoring::Ratio { matched, universe } => {
                let denominator = (*universe).max(SKILLS_MIN_UNIVERSE);
                let score = (*matched as f64 / denominator as f64 * 100.0).round();
                (
                    score.clamp(0.0, 100.0) as u8,
                    *matched > SKILLS_GOOD_THRESHOLD,
                )
            }
        };

        SectionResult {
            name: self.name.to_string(),
            score,
            status: if met {
                SectionStatus::Good
            } else {
                self.status_when_unmet
            },
            feedback: if met {
                self.feedback_met
            } else {
                self.feedback_unmet.to_string()
            },
        }
    }
}

pub struct SectionScorer {
    email_re: Regex,
    phone_re: Regex,
    quantified_re: Regex,
    dollar_re: Regex,
}

impl SectionScorer {
    pub fn new() -> Self {
        let email_re = Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}")
            .expect("Invalid email regex");

        let phone_re = Regex::new(r"\b(?:\+?1[-. ]?)?\(?[0-9]{3}\)?[-. ]?[0-9]{3}[-. ]?[0-9]{4}\b")
            .expect("Invalid phone regex");

        let quantified_re = Regex::new(r"\d+\s*(?:%|percent)").expect("Invalid percent regex");

        let dollar_re = Regex::new(r"\$\d+").expect("Invalid dollar regex");

        Self {
            email_re,
            phone_re,
            quantified_re,
            dollar_re,
        }
    }

    /// Score the five fixed sections in identity order: Contact
    /// Information, Professional Summary, Work Experience, Education,
    /// Skills.
    pub fn score_sections(&self, text: &str, keywords: &KeywordMatches) -> Vec<SectionResult> {
        let lower = text.to_lowercase();

        let contact_present = self.has_contact_info(text);
        let summary_present = contains_any(&lower, SUMMARY_CUES);
        let experience_present = contains_any(&lower, EXPERIENCE_CUES);
        let education_present = contains_any(&lower, EDUCATION_CUES);
        let quantifiable = self.has_quantifiable_achievements(text);

        let rules = vec![
            SectionRule {
                name: "Contact Information",
                scoring: Scoring::Presence {
                    present: contact_present,
                    bonuses: vec![
                        (lower.contains("linkedin.com"), 10),
                        (lower.contains("github.com"), 10),
                    ],
                },
                status_when_unmet: SectionStatus::Warning,
                feedback_met: "Contact information is present and well-formatted.".to_string(),
                feedback_unmet: "Some contact information might be missing. Ensure you include \
                                 email, phone, and location.",
            },
            SectionRule {
                name: "Professional Summary",
                scoring: Scoring::Presence {
                    present: summary_present,
                    bonuses: vec![
                        (lower.contains("years of experience"), 10),
                        (contains_any(&lower, SUMMARY_STRENGTH_CUES), 10),
                    ],
                },
                status_when_unmet: SectionStatus::Warning,
                feedback_met: "Professional summary is present but could be more impactful."
                    .to_string(),
                feedback_unmet: "Consider adding a strong professional summary at the beginning \
                                 of your resume.",
            },
            SectionRule {
                name: "Work Experience",
                scoring: Scoring::Presence {
                    present: experience_present,
                    bonuses: vec![
                        (quantifiable, 15),
                        (contains_any(&lower, LEADERSHIP_CUES), 10),
                    ],
                },
                status_when_unmet: SectionStatus::Error,
                feedback_met: if quantifiable {
                    "Work experience section includes quantifiable achievements and strong \
                     action verbs."
                        .to_string()
                } else {
                    "Work experience section includes key details but could use more \
                     quantifiable achievements."
                        .to_string()
                },
                feedback_unmet: "Work experience section needs more detailed descriptions of \
                                 your roles and achievements.",
            },
            SectionRule {
                name: "Education",
                scoring: Scoring::Presence {
                    present: education_present,
                    bonuses: vec![
                        (contains_any(&lower, HONORS_CUES), 10),
                        (contains_any(&lower, CONTINUED_LEARNING_CUES), 10),
                    ],
                },
                status_when_unmet: SectionStatus::Warning,
                feedback_met: "Education section is well-structured.".to_string(),
                feedback_unmet: "Consider adding more details to your education section.",
            },
            SectionRule {
                name: "Skills",
                scoring: Scoring::Ratio {
                    matched: keywords.matched.len(),
                    universe: keywords.universe_size(),
                },
                status_when_unmet: SectionStatus::Warning,
                feedback_met: "Good range of skills listed, but consider adding more \
                               industry-specific keywords."
                    .to_string(),
                feedback_unmet: "Consider expanding your skills section with more relevant \
                                 technologies and soft skills.",
            },
        ];

        rules.into_iter().map(SectionRule::evaluate).collect()
    }

    pub fn has_contact_info(&self, text: &str) -> bool {
        self.email_re.is_match(text) || self.phone_re.is_match(text)
    }

    pub fn has_summary(&self, text: &str) -> bool {
        contains_any(&text.to_lowercase(), SUMMARY_CUES)
    }

    /// True when the text shows any quantifiable-achievement cue: a "%"
    /// character, an achievement verb, an "N percent" figure, or a dollar
    /// amount.
    pub fn has_quantifiable_achievements(&self, text: &str) -> bool {
        let lower = text.to_lowercase();
        text.contains('%')
            || contains_any(&lower, ACHIEVEMENT_VERBS)
            || self.quantified_re.is_match(&lower)
            || self.dollar_re.is_match(text)
    }
}

impl Default for SectionScorer {
    fn default() -> Self {
        Self::new()
    }
}

fn contains_any(haystack: &str, cues: &[&str]) -> bool {
    cues.iter().any(|cue| haystack.contains(cue))
}
