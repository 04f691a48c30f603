use std::collections::HashSet;
use uuid::Uuid;

use crate::models::queue::{QueuedTrade, ReviewProgress};
use crate::models::trade::{TradeRecord, TradeSide};

/// Derives the review work-queue and completion counters.
///
/// Only closed (sell) fills carry a realized outcome worth reflecting on;
/// buy fills are retained as context but never block the review workflow.
/// Everything here is a pure function of (fills, review keys present) —
/// deterministic and stable for identical input.
pub struct ReviewQueueService;

impl ReviewQueueService {
    pub fn new() -> Self {
        Self
    }

    /// Order one scope's fills into the review work-queue.
    ///
    /// Total order:
    /// 1. Sell fills with no review annotation sort first (these need
    ///    attention).
    /// 2. Everything else (reviewed sells and all buys) sorts after.
    ///
    /// Both buckets are timestamp-descending; ties keep the original
    /// ledger order (stable sort).
    pub fn ordered_queue<'a>(
        &self,
        trades: &[&'a TradeRecord],
        reviewed_ids: &HashSet<Uuid>,
    ) -> Vec<QueuedTrade<'a>> {
        let mut queue: Vec<QueuedTrade<'a>> = trades
            .iter()
            .map(|&t| QueuedTrade {
                trade: t,
                needs_review: t.side == TradeSide::Sell && !reviewed_ids.contains(&t.id),
            })
            .collect();

        queue.sort_by(|a, b| {
            b.needs_review
                .cmp(&a.needs_review)
                .then_with(|| b.trade.executed_at.cmp(&a.trade.executed_at))
        });

        queue
    }

    /// Count reviewed vs. reviewable sell fills for a scope.
    pub fn progress(
        &self,
        trades: &[&TradeRecord],
        reviewed_ids: &HashSet<Uuid>,
    ) -> ReviewProgress {
        let mut reviewed_count = 0;
        let mut total_reviewable_count = 0;

        for trade in trades {
            if trade.side != TradeSide::Sell {
                continue;
            }
            total_reviewable_count += 1;
            if reviewed_ids.contains(&trade.id) {
                reviewed_count += 1;
            }
        }

        ReviewProgress {
            reviewed_count,
            total_reviewable_count,
        }
    }
}

impl Default for ReviewQueueService {
    fn default() -> Self {
        Self::new()
    }
}
