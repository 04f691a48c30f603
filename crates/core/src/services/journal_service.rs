use chrono::NaiveDate;
use log::debug;
use std::collections::{BTreeSet, HashMap, HashSet};
use uuid::Uuid;

use crate::errors::CoreError;
use crate::models::journal::{DayMood, JournalEntry};
use crate::models::review::ReviewAnnotation;
use crate::models::trade::TradeRecord;
use crate::storage::traits::{JournalRepository, ReviewRepository};

/// Rolls a calendar day's trades, reviews, and memo into one journal entry.
///
/// Entries are rebuilt, not patched: each save constructs the full entry
/// for the date and replaces the stored one in a single upsert, so no
/// partial write is ever observable. Both save paths are idempotent —
/// re-saving identical content produces an equal entry.
pub struct JournalService;

impl JournalService {
    pub fn new() -> Self {
        Self
    }

    /// Save a trade-level review, then rebuild the journal entry for the
    /// calendar date owning that trade.
    ///
    /// The annotation must reference a fill present in the ledger —
    /// a review with no backing trade cannot be displayed, so an unknown
    /// identity is rejected before anything is stored. The rebuilt entry
    /// recomputes the date's trade list from the ledger (the external feed
    /// may have changed) and restricts the accumulated review map to that
    /// date's trade identities. Day-level memo/tags/mood are preserved
    /// from the prior entry: a trade-level review must not clobber them.
    pub fn save_review(
        &self,
        ledger: &[TradeRecord],
        reviews: &mut dyn ReviewRepository,
        journal: &mut dyn JournalRepository,
        annotation: ReviewAnnotation,
    ) -> Result<JournalEntry, CoreError> {
        let trade = ledger
            .iter()
            .find(|t| t.id == annotation.trade_id)
            .ok_or_else(|| CoreError::TradeNotFound(annotation.trade_id.to_string()))?;
        let date = trade.trade_date();

        reviews.upsert(annotation);

        let mut entry = self.build_entry(ledger, reviews, date);
        if let Some(prior) = journal.get(date) {
            entry.memo = prior.memo.clone();
            entry.tags = prior.tags.clone();
            entry.mood = prior.mood.clone();
        }

        debug!(
            "Rebuilt journal entry for {} ({} trades, {} reviews)",
            date,
            entry.trades.len(),
            entry.reviews.len()
        );

        journal.upsert(entry.clone());
        Ok(entry)
    }

    /// Save the day-level memo, tags, and mood for a date.
    ///
    /// Only the day-level fields are written. When an entry already exists
    /// its trades and reviews are preserved as stored; otherwise they are
    /// computed fresh from the ledger so the new entry is complete.
    pub fn save_day_memo(
        &self,
        ledger: &[TradeRecord],
        reviews: &dyn ReviewRepository,
        journal: &mut dyn JournalRepository,
        date: NaiveDate,
        memo: Option<String>,
        tags: Option<BTreeSet<String>>,
        mood: Option<DayMood>,
    ) -> Result<JournalEntry, CoreError> {
        let mut entry = match journal.get(date) {
            Some(prior) => prior.clone(),
            None => self.build_entry(ledger, reviews, date),
        };

        entry.memo = memo;
        entry.tags = tags;
        entry.mood = mood;

        debug!("Saved day memo for {}", date);

        journal.upsert(entry.clone());
        Ok(entry)
    }

    /// Construct the entry for a date from the ledger and the review store:
    /// the date's trades plus the review map restricted to their identities.
    fn build_entry(
        &self,
        ledger: &[TradeRecord],
        reviews: &dyn ReviewRepository,
        date: NaiveDate,
    ) -> JournalEntry {
        let trades: Vec<TradeRecord> = ledger
            .iter()
            .filter(|t| t.trade_date() == date)
            .cloned()
            .collect();

        let date_ids: HashSet<Uuid> = trades.iter().map(|t| t.id).collect();
        let day_reviews: HashMap<Uuid, ReviewAnnotation> = reviews
            .all()
            .into_iter()
            .filter(|r| date_ids.contains(&r.trade_id))
            .map(|r| (r.trade_id, r.clone()))
            .collect();

        let mut entry = JournalEntry::new(date);
        entry.trades = trades;
        entry.reviews = day_reviews;
        entry
    }
}

impl Default for JournalService {
    fn default() -> Self {
        Self::new()
    }
}
