use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uuid::Uuid;

/// Mood score ceiling. Scores are clamped into 0..=100 at construction.
pub const MAX_MOOD_SCORE: u8 = 100;

/// How the user felt about a closed trade, in retrospect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    /// Conviction trade that played out as planned
    Confident,
    /// Acceptable outcome, nothing to change
    Satisfied,
    /// No strong feeling either way
    Neutral,
    /// Uncomfortable during the trade, sizing or setup felt wrong
    Anxious,
    /// Would not take this trade again
    Regretful,
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mood::Confident => write!(f, "confident"),
            Mood::Satisfied => write!(f, "satisfied"),
            Mood::Neutral => write!(f, "neutral"),
            Mood::Anxious => write!(f, "anxious"),
            Mood::Regretful => write!(f, "regretful"),
        }
    }
}

/// A user-authored retrospective on exactly one closed trade.
///
/// At most one annotation exists per trade identity — a second save for the
/// same trade overwrites the first (enforced by the review repository).
/// Annotations are only ever created by an explicit user save action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewAnnotation {
    /// Identity of the trade this review belongs to
    pub trade_id: Uuid,

    /// Mood label
    pub mood: Mood,

    /// Mood score, 0–100
    pub mood_score: u8,

    /// Free-form tags. Order-free and duplicate-free.
    #[serde(default)]
    pub tags: BTreeSet<String>,

    /// Free-text review body
    pub content: String,

    /// Calendar date the review was authored
    pub reviewed_on: NaiveDate,
}

impl ReviewAnnotation {
    /// Create an annotation. Clamps the mood score to 0–100 and
    /// deduplicates tags.
    pub fn new(
        trade_id: Uuid,
        mood: Mood,
        mood_score: u8,
        tags: impl IntoIterator<Item = String>,
        content: impl Into<String>,
        reviewed_on: NaiveDate,
    ) -> Self {
        Self {
            trade_id,
            mood,
            mood_score: mood_score.min(MAX_MOOD_SCORE),
            tags: tags.into_iter().collect(),
            content: content.into(),
            reviewed_on,
        }
    }
}
