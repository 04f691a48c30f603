pub mod errors;
pub mod models;
pub mod services;
pub mod storage;

use chrono::NaiveDate;
use std::collections::{BTreeSet, HashMap};
use uuid::Uuid;

use models::{
    journal::{DayMood, JournalEntry},
    queue::{QueuedTrade, ReviewProgress},
    review::ReviewAnnotation,
    summary::TickerSummary,
    trade::TradeRecord,
};
use services::{
    costbasis_service::CostBasisService,
    journal_service::JournalService,
    ledger_service::{LedgerService, RejectedTrade},
    review_queue_service::ReviewQueueService,
};
use storage::memory::{InMemoryJournalStore, InMemoryReviewStore};
use storage::traits::{JournalRepository, ReviewRepository};

use errors::CoreError;

/// Main entry point for the Trade Journal core library.
///
/// Holds the materialized trade ledger and the session's review/journal
/// state, plus the services that operate on them. The ledger is handed in
/// fully materialized by the execution venue (no fetching or pagination
/// here) and is immutable within a session; the only writers are the
/// user-initiated save paths. Everything is synchronous — the host UI
/// serializes events, so there is no concurrent-writer scenario.
#[must_use]
pub struct TradeJournal {
    ledger: Vec<TradeRecord>,
    rejected: Vec<RejectedTrade>,
    reviews: Box<dyn ReviewRepository>,
    journal: Box<dyn JournalRepository>,
    ledger_service: LedgerService,
    costbasis_service: CostBasisService,
    queue_service: ReviewQueueService,
    journal_service: JournalService,
}

impl std::fmt::Debug for TradeJournal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TradeJournal")
            .field("trades", &self.ledger.len())
            .field("rejected", &self.rejected.len())
            .field("reviews", &self.reviews.len())
            .field("journal_entries", &self.journal.len())
            .finish()
    }
}

impl TradeJournal {
    /// Create a journal over a trade feed, with in-memory session stores.
    /// Malformed fills are excluded from the ledger and kept for
    /// inspection via [`TradeJournal::rejected_trades`].
    pub fn new(trades: Vec<TradeRecord>) -> Self {
        Self::with_repositories(
            trades,
            Box::new(InMemoryReviewStore::new()),
            Box::new(InMemoryJournalStore::new()),
        )
    }

    /// Create a journal with injected repositories, e.g. a persisted
    /// backend satisfying the key-value contracts in `storage::traits`.
    pub fn with_repositories(
        trades: Vec<TradeRecord>,
        reviews: Box<dyn ReviewRepository>,
        journal: Box<dyn JournalRepository>,
    ) -> Self {
        let ledger_service = LedgerService::new();
        let (ledger, rejected) = Self::materialize(&ledger_service, trades);

        Self {
            ledger,
            rejected,
            reviews,
            journal,
            ledger_service,
            costbasis_service: CostBasisService::new(),
            queue_service: ReviewQueueService::new(),
            journal_service: JournalService::new(),
        }
    }

    /// Replace the ledger when the external trade feed changes.
    /// Reviews and journal entries are kept; entries are reconciled with
    /// the new feed on their next save.
    pub fn set_ledger(&mut self, trades: Vec<TradeRecord>) {
        let (ledger, rejected) = Self::materialize(&self.ledger_service, trades);
        self.ledger = ledger;
        self.rejected = rejected;
    }

    // ── Ledger Reads ────────────────────────────────────────────────

    /// All fills, newest first.
    #[must_use]
    pub fn trades(&self) -> Vec<&TradeRecord> {
        self.ledger_service.trades_newest_first(&self.ledger)
    }

    /// Fills for one ticker (case-insensitive), newest first.
    #[must_use]
    pub fn trades_for_symbol(&self, symbol: &str) -> Vec<&TradeRecord> {
        self.ledger_service.trades_for_symbol(&self.ledger, symbol)
    }

    /// Fills executed on one calendar date, in ledger order.
    #[must_use]
    pub fn trades_on(&self, date: NaiveDate) -> Vec<&TradeRecord> {
        self.ledger_service.trades_on(&self.ledger, date)
    }

    /// Look up a single fill by identity.
    #[must_use]
    pub fn trade(&self, id: Uuid) -> Option<&TradeRecord> {
        self.ledger_service.find(&self.ledger, id)
    }

    /// All distinct ticker symbols, sorted.
    #[must_use]
    pub fn unique_symbols(&self) -> Vec<String> {
        self.ledger_service.unique_symbols(&self.ledger)
    }

    /// Number of valid fills in the ledger.
    #[must_use]
    pub fn trade_count(&self) -> usize {
        self.ledger.len()
    }

    /// Fills excluded at materialization, with rejection reasons.
    #[must_use]
    pub fn rejected_trades(&self) -> &[RejectedTrade] {
        &self.rejected
    }

    // ── Cost Basis & PnL ────────────────────────────────────────────

    /// Aggregate one ticker's fills into buy/sell averages and realized
    /// PnL. Returns an empty summary (marker price `None`) for a symbol
    /// with no fills.
    #[must_use]
    pub fn ticker_summary(&self, symbol: &str) -> TickerSummary {
        let upper = symbol.to_uppercase();
        let trades: Vec<&TradeRecord> =
            self.ledger.iter().filter(|t| t.symbol == upper).collect();
        self.costbasis_service.summarize(&upper, &trades)
    }

    /// Summaries for every ticker in the ledger, sorted by symbol.
    #[must_use]
    pub fn ticker_summaries(&self) -> Vec<TickerSummary> {
        let groups = self.ledger_service.group_by_symbol(&self.ledger);
        let mut summaries: Vec<TickerSummary> = groups
            .into_iter()
            .map(|(symbol, trades)| self.costbasis_service.summarize(&symbol, &trades))
            .collect();
        summaries.sort_by(|a, b| a.symbol.cmp(&b.symbol));
        summaries
    }

    // ── Review Queue ────────────────────────────────────────────────

    /// The review work-queue for every ticker: unreviewed sells first,
    /// then the rest, newest first within each bucket.
    #[must_use]
    pub fn review_queue(&self) -> HashMap<String, Vec<QueuedTrade<'_>>> {
        let reviewed = self.reviews.reviewed_ids();
        self.ledger_service
            .group_by_symbol(&self.ledger)
            .into_iter()
            .map(|(symbol, trades)| {
                let queue = self.queue_service.ordered_queue(&trades, &reviewed);
                (symbol, queue)
            })
            .collect()
    }

    /// The review work-queue for one ticker.
    #[must_use]
    pub fn review_queue_for(&self, symbol: &str) -> Vec<QueuedTrade<'_>> {
        let reviewed = self.reviews.reviewed_ids();
        let upper = symbol.to_uppercase();
        let trades: Vec<&TradeRecord> =
            self.ledger.iter().filter(|t| t.symbol == upper).collect();
        self.queue_service.ordered_queue(&trades, &reviewed)
    }

    /// Review completion over the whole ledger.
    #[must_use]
    pub fn review_progress(&self) -> ReviewProgress {
        let reviewed = self.reviews.reviewed_ids();
        let trades: Vec<&TradeRecord> = self.ledger.iter().collect();
        self.queue_service.progress(&trades, &reviewed)
    }

    /// Review completion for one ticker.
    #[must_use]
    pub fn review_progress_for(&self, symbol: &str) -> ReviewProgress {
        let reviewed = self.reviews.reviewed_ids();
        let upper = symbol.to_uppercase();
        let trades: Vec<&TradeRecord> =
            self.ledger.iter().filter(|t| t.symbol == upper).collect();
        self.queue_service.progress(&trades, &reviewed)
    }

    // ── Journal Saves ───────────────────────────────────────────────

    /// Save a review for a trade, rebuilding that date's journal entry.
    ///
    /// The annotation is keyed by `trade_id` regardless of the id it was
    /// constructed with. Fails with [`CoreError::TradeNotFound`] when the
    /// trade is not in the ledger — no dangling review is ever stored.
    pub fn save_review(
        &mut self,
        trade_id: Uuid,
        mut annotation: ReviewAnnotation,
    ) -> Result<JournalEntry, CoreError> {
        annotation.trade_id = trade_id;
        self.journal_service.save_review(
            &self.ledger,
            self.reviews.as_mut(),
            self.journal.as_mut(),
            annotation,
        )
    }

    /// Save the day-level memo, tags, and mood for a date. Existing
    /// trades and reviews on the entry are untouched.
    pub fn save_day_memo(
        &mut self,
        date: NaiveDate,
        memo: Option<String>,
        tags: Option<BTreeSet<String>>,
        mood: Option<DayMood>,
    ) -> Result<JournalEntry, CoreError> {
        self.journal_service.save_day_memo(
            &self.ledger,
            self.reviews.as_ref(),
            self.journal.as_mut(),
            date,
            memo,
            tags,
            mood,
        )
    }

    // ── Journal Reads ───────────────────────────────────────────────

    /// The journal entry for a date, if one was saved.
    #[must_use]
    pub fn journal_entry(&self, date: NaiveDate) -> Option<&JournalEntry> {
        self.journal.get(date)
    }

    /// All journal entries, sorted by date ascending.
    #[must_use]
    pub fn journal_entries(&self) -> Vec<&JournalEntry> {
        self.journal.all()
    }

    /// The review for a trade, if one was saved.
    #[must_use]
    pub fn review(&self, trade_id: Uuid) -> Option<&ReviewAnnotation> {
        self.reviews.get(trade_id)
    }

    /// All saved reviews.
    #[must_use]
    pub fn reviews(&self) -> Vec<&ReviewAnnotation> {
        self.reviews.all()
    }

    /// Whether a trade has been reviewed.
    #[must_use]
    pub fn has_review(&self, trade_id: Uuid) -> bool {
        self.reviews.contains(trade_id)
    }

    // ── Search ──────────────────────────────────────────────────────

    /// Search reviews by matching query against content and tags
    /// (case-insensitive).
    #[must_use]
    pub fn search_reviews(&self, query: &str) -> Vec<&ReviewAnnotation> {
        let q = query.to_lowercase();
        self.reviews
            .all()
            .into_iter()
            .filter(|r| {
                r.content.to_lowercase().contains(&q)
                    || r.tags.iter().any(|t| t.to_lowercase().contains(&q))
            })
            .collect()
    }

    // ── Export ──────────────────────────────────────────────────────

    /// Export the ledger as a JSON string.
    pub fn export_ledger_to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(&self.ledger)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize ledger: {e}")))
    }

    /// Export the ledger as a CSV string.
    /// Columns: id, symbol, side, price, quantity, total, order_style, executed_at, pnl, pnl_percent
    #[must_use]
    pub fn export_ledger_to_csv(&self) -> String {
        let mut csv =
            String::from("id,symbol,side,price,quantity,total,order_style,executed_at,pnl,pnl_percent\n");
        for trade in &self.ledger {
            let pnl = trade.pnl.map(|v| v.to_string()).unwrap_or_default();
            let pnl_percent = trade.pnl_percent.map(|v| v.to_string()).unwrap_or_default();
            csv.push_str(&format!(
                "{},{},{},{},{},{},{},{},{},{}\n",
                trade.id,
                trade.symbol,
                trade.side,
                trade.price,
                trade.quantity,
                trade.total,
                trade.order_style,
                trade.executed_at,
                pnl,
                pnl_percent,
            ));
        }
        csv
    }

    /// Export all journal entries as a JSON string.
    pub fn export_journal_to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(&self.journal.all())
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize journal: {e}")))
    }

    // ── Internal ────────────────────────────────────────────────────

    /// Validate and time-order an incoming feed. The ledger is stored
    /// oldest-first; ties keep the feed's original order (stable sort).
    fn materialize(
        ledger_service: &LedgerService,
        trades: Vec<TradeRecord>,
    ) -> (Vec<TradeRecord>, Vec<RejectedTrade>) {
        let (mut valid, rejected) = ledger_service.partition_valid(trades);
        valid.sort_by(|a, b| a.executed_at.cmp(&b.executed_at));
        (valid, rejected)
    }
}
