use chrono::NaiveDate;
use std::collections::HashSet;
use uuid::Uuid;

use crate::models::journal::JournalEntry;
use crate::models::review::ReviewAnnotation;

/// Store of review annotations, keyed by trade identity.
///
/// The engine only needs `get`/`upsert` semantics, so a persisted backend
/// (key-value, SQL, anything) can replace the in-memory store without
/// touching the calculator or the queue policy. Upsert overwrites: at most
/// one annotation exists per trade.
pub trait ReviewRepository {
    /// Get the annotation for a trade, if one was saved.
    fn get(&self, trade_id: Uuid) -> Option<&ReviewAnnotation>;

    /// Insert or overwrite the annotation for its trade.
    fn upsert(&mut self, annotation: ReviewAnnotation);

    /// All saved annotations, in no particular order.
    fn all(&self) -> Vec<&ReviewAnnotation>;

    /// Identities of every reviewed trade.
    fn reviewed_ids(&self) -> HashSet<Uuid>;

    /// Whether a trade has been reviewed.
    fn contains(&self, trade_id: Uuid) -> bool {
        self.get(trade_id).is_some()
    }

    /// Number of saved annotations.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Store of journal entries, keyed by calendar date.
///
/// Upsert replaces the whole entry for its date (last-write-wins). Entries
/// are never deleted within a session.
pub trait JournalRepository {
    /// Get the entry for a date, if one was saved.
    fn get(&self, date: NaiveDate) -> Option<&JournalEntry>;

    /// Insert or replace the entry for its date.
    fn upsert(&mut self, entry: JournalEntry);

    /// All entries, sorted by date ascending.
    fn all(&self) -> Vec<&JournalEntry>;

    /// Number of saved entries.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
