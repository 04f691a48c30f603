use chrono::NaiveDate;
use std::collections::{HashMap, HashSet};
use uuid::Uuid;

use crate::models::journal::JournalEntry;
use crate::models::review::ReviewAnnotation;

use super::traits::{JournalRepository, ReviewRepository};

/// Session-scoped review store. State lives only for the session — no
/// durability, matching the reference behavior.
#[derive(Debug, Clone, Default)]
pub struct InMemoryReviewStore {
    reviews: HashMap<Uuid, ReviewAnnotation>,
}

impl InMemoryReviewStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReviewRepository for InMemoryReviewStore {
    fn get(&self, trade_id: Uuid) -> Option<&ReviewAnnotation> {
        self.reviews.get(&trade_id)
    }

    fn upsert(&mut self, annotation: ReviewAnnotation) {
        self.reviews.insert(annotation.trade_id, annotation);
    }

    fn all(&self) -> Vec<&ReviewAnnotation> {
        self.reviews.values().collect()
    }

    fn reviewed_ids(&self) -> HashSet<Uuid> {
        self.reviews.keys().copied().collect()
    }

    fn len(&self) -> usize {
        self.reviews.len()
    }
}

/// Session-scoped journal store. One entry per date, last-write-wins.
#[derive(Debug, Clone, Default)]
pub struct InMemoryJournalStore {
    entries: HashMap<NaiveDate, JournalEntry>,
}

impl InMemoryJournalStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl JournalRepository for InMemoryJournalStore {
    fn get(&self, date: NaiveDate) -> Option<&JournalEntry> {
        self.entries.get(&date)
    }

    fn upsert(&mut self, entry: JournalEntry) {
        self.entries.insert(entry.date, entry);
    }

    fn all(&self) -> Vec<&JournalEntry> {
        let mut entries: Vec<&JournalEntry> = self.entries.values().collect();
        entries.sort_by_key(|e| e.date);
        entries
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
