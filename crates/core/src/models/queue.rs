use serde::{Deserialize, Serialize};

use super::trade::TradeRecord;

/// One slot in the review work-queue: a fill plus whether it still needs
/// a review. Borrowed view over the ledger, valid while the ledger lives.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QueuedTrade<'a> {
    /// The fill
    pub trade: &'a TradeRecord,

    /// True for sell fills with no review annotation yet
    pub needs_review: bool,
}

/// Review completion counters for a scope (the whole ledger or one ticker).
///
/// Both raw counts are exposed so callers can distinguish "no reviewable
/// trades" (denominator 0, not applicable) from "0% done". The numeric
/// ratio is still reported as 0.0 in the former case for display
/// simplicity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewProgress {
    /// Sell fills in scope that have a review annotation
    pub reviewed_count: usize,

    /// All sell fills in scope
    pub total_reviewable_count: usize,
}

impl ReviewProgress {
    /// reviewed / reviewable, 0.0 when there is nothing reviewable.
    #[must_use]
    pub fn completion(&self) -> f64 {
        if self.total_reviewable_count == 0 {
            return 0.0;
        }
        self.reviewed_count as f64 / self.total_reviewable_count as f64
    }

    /// True when the scope contains no sell fills at all.
    #[must_use]
    pub fn is_not_applicable(&self) -> bool {
        self.total_reviewable_count == 0
    }

    /// True when every reviewable fill in scope has been reviewed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.total_reviewable_count > 0 && self.reviewed_count >= self.total_reviewable_count
    }
}
