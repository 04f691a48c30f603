use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use uuid::Uuid;

use super::review::{Mood, ReviewAnnotation, MAX_MOOD_SCORE};
use super::trade::TradeRecord;

/// Day-level mood, independent of any single trade's review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayMood {
    /// Mood label for the day
    pub label: Mood,

    /// Mood score, 0–100
    pub score: u8,
}

impl DayMood {
    /// Create a day mood, clamping the score to 0–100.
    pub fn new(label: Mood, score: u8) -> Self {
        Self {
            label,
            score: score.min(MAX_MOOD_SCORE),
        }
    }
}

/// One journal entry per calendar date — the day's trades, their reviews,
/// and the user's day-level memo.
///
/// The date is the natural key: saving a second entry for the same date
/// replaces the prior one (last-write-wins), never appends. Entries are
/// never deleted within a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Calendar date (unique key)
    pub date: NaiveDate,

    /// Day-level free-text memo
    #[serde(default)]
    pub memo: Option<String>,

    /// Day-level tags
    #[serde(default)]
    pub tags: Option<BTreeSet<String>>,

    /// Day-level mood
    #[serde(default)]
    pub mood: Option<DayMood>,

    /// All fills executed on this date, recomputed from the ledger on save
    pub trades: Vec<TradeRecord>,

    /// Reviews for this date's trades, keyed by trade identity
    pub reviews: HashMap<Uuid, ReviewAnnotation>,
}

impl JournalEntry {
    /// Create an empty entry for a date.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            memo: None,
            tags: None,
            mood: None,
            trades: Vec::new(),
            reviews: HashMap::new(),
        }
    }

    /// Number of this date's trades that have a review attached.
    #[must_use]
    pub fn reviewed_trade_count(&self) -> usize {
        self.reviews.len()
    }

    /// True when the entry carries neither trades nor any day-level field.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.memo.is_none()
            && self.tags.is_none()
            && self.mood.is_none()
            && self.trades.is_empty()
            && self.reviews.is_empty()
    }
}
