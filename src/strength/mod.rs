//! Password strength evaluation
//!
//! A password is scored out of 100 from four independent parts:
//!
//! - length: 2.5 points per character, capped at 40
//! - diversity: 7.5 points per character class present, capped at 30
//! - entropy: `length * log2(alphabet)` bits, scaled so 100 bits earns the full 30
//! - a flat 20 point penalty when a predictable pattern is present
//!
//! The clamped score selects the [`StrengthTier`]. Feedback is a list of
//! [`Feedback`] values; display text comes from
//! [`Translations`](crate::localization::Translations).

pub mod patterns;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::PASSWORD_MIN_LENGTH;
use crate::charset::ClassSet;
use crate::localization::Translations;
use patterns::detect_patterns;

/// Length at which a password earns the "good length" observation
pub const GOOD_PASSWORD_LENGTH: usize = 16;

/// Points subtracted when any predictable pattern is found
pub const PATTERN_PENALTY: f64 = 20.0;

const LENGTH_POINTS_PER_CHAR: f64 = 2.5;
const LENGTH_CAP: f64 = 40.0;
const DIVERSITY_POINTS_PER_CLASS: f64 = 7.5;
const ENTROPY_CAP: f64 = 30.0;
const ENTROPY_FULL_MARKS_BITS: f64 = 100.0;
const MIN_DIVERSITY: usize = 3;

/// Qualitative strength bucket, ordered weakest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrengthTier {
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl StrengthTier {
    /// Tier for a score already clamped to [0, 100]
    pub fn from_score(score: f64) -> Self {
        if score < 40.0 {
            StrengthTier::Weak
        } else if score < 60.0 {
            StrengthTier::Medium
        } else if score < 80.0 {
            StrengthTier::Strong
        } else {
            StrengthTier::VeryStrong
        }
    }

    /// Translation key of the tier's display label
    pub fn label_key(self) -> &'static str {
        match self {
            StrengthTier::Weak => "strength_weak",
            StrengthTier::Medium => "strength_medium",
            StrengthTier::Strong => "strength_strong",
            StrengthTier::VeryStrong => "strength_very_strong",
        }
    }
}

/// One observation about a password
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "tier", rename_all = "snake_case")]
pub enum Feedback {
    /// Shorter than the minimum generated length
    TooShort,
    /// At least [`GOOD_PASSWORD_LENGTH`] characters
    GoodLength,
    /// Fewer than three character classes present
    LowDiversity,
    /// Sequence, repeated run or keyboard row detected
    PredictablePattern,
    /// Closing verdict, always last
    Summary(StrengthTier),
}

impl Feedback {
    /// Translation key of the display message
    pub fn message_key(self) -> &'static str {
        match self {
            Feedback::TooShort => "feedback_too_short",
            Feedback::GoodLength => "feedback_good_length",
            Feedback::LowDiversity => "feedback_low_diversity",
            Feedback::PredictablePattern => "feedback_predictable_pattern",
            Feedback::Summary(StrengthTier::Weak) => "summary_weak",
            Feedback::Summary(StrengthTier::Medium) => "summary_medium",
            Feedback::Summary(StrengthTier::Strong) => "summary_strong",
            Feedback::Summary(StrengthTier::VeryStrong) => "summary_very_strong",
        }
    }
}

/// Result of [`evaluate`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrengthReport {
    pub tier: StrengthTier,
    /// Rounded score in [0, 100]
    pub score: u8,
    /// Rounded entropy estimate
    pub entropy_bits: u32,
    /// Observations in check order, never empty
    pub feedback: Vec<Feedback>,
}

impl StrengthReport {
    /// Render every feedback entry in the translator's current language
    pub fn messages(&self, translations: &Translations) -> Vec<String> {
        self.feedback
            .iter()
            .map(|item| translations.feedback(*item).to_string())
            .collect()
    }
}

/// Entropy estimate in bits: `length * log2(alphabet)`.
///
/// Computed in log space so long inputs cannot overflow.
pub fn estimate_entropy(password: &str) -> f64 {
    entropy_bits(password.chars().count(), &ClassSet::of(password))
}

fn entropy_bits(length: usize, classes: &ClassSet) -> f64 {
    let alphabet = classes.estimated_alphabet_size();
    if alphabet == 0 {
        return 0.0;
    }
    length as f64 * f64::from(alphabet).log2()
}

/// Score a password. Every input, including the empty string, yields a report.
///
/// # Example
/// ```
/// use passcore::{evaluate, StrengthTier};
///
/// let report = evaluate("Pass@word123");
/// assert_eq!(report.tier, StrengthTier::Strong);
/// assert!(!report.feedback.is_empty());
/// ```
pub fn evaluate(password: &str) -> StrengthReport {
    let length = password.chars().count();
    let classes = ClassSet::of(password);
    let diversity = classes.len();
    let entropy = entropy_bits(length, &classes);

    let mut feedback = Vec::new();
    let mut score = 0.0;

    score += (length as f64 * LENGTH_POINTS_PER_CHAR).min(LENGTH_CAP);
    if length < PASSWORD_MIN_LENGTH {
        feedback.push(Feedback::TooShort);
    } else if length >= GOOD_PASSWORD_LENGTH {
        feedback.push(Feedback::GoodLength);
    }

    score += diversity as f64 * DIVERSITY_POINTS_PER_CLASS;
    if diversity < MIN_DIVERSITY {
        feedback.push(Feedback::LowDiversity);
    }

    score += (entropy / ENTROPY_FULL_MARKS_BITS * ENTROPY_CAP).min(ENTROPY_CAP);

    let found = detect_patterns(password);
    if !found.is_empty() {
        trace!(patterns = ?found, "predictable patterns detected");
        score -= PATTERN_PENALTY;
        feedback.push(Feedback::PredictablePattern);
    }

    let score = score.clamp(0.0, 100.0);
    let tier = StrengthTier::from_score(score);
    feedback.push(Feedback::Summary(tier));

    let report = StrengthReport {
        tier,
        score: score.round() as u8,
        entropy_bits: entropy.round() as u32,
        feedback,
    };
    debug!(tier = ?report.tier, score = report.score, "evaluated password strength");
    report
}
