use chrono::NaiveDate;
use log::warn;
use std::collections::HashMap;
use uuid::Uuid;

use crate::models::trade::TradeRecord;

/// A fill excluded from the ledger, with the reason it was rejected.
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedTrade {
    /// The offending fill, kept for inspection
    pub trade: TradeRecord,

    /// Human-readable rejection reason
    pub reason: String,
}

/// Read-side logic over the trade ledger: validation, grouping, and
/// time-ordered listings.
///
/// Pure business logic — no I/O, no shared state. The ledger itself is an
/// immutable, time-ordered log handed in by the execution venue; this
/// service never mutates it.
pub struct LedgerService;

impl LedgerService {
    pub fn new() -> Self {
        Self
    }

    /// Split an incoming trade feed into valid fills and rejected ones.
    ///
    /// One malformed fill (non-positive price/quantity, inconsistent total)
    /// must never hide an entire ticker's position, so bad records are
    /// excluded individually and surfaced to the caller instead of failing
    /// the whole feed. Each rejection is logged.
    pub fn partition_valid(
        &self,
        trades: Vec<TradeRecord>,
    ) -> (Vec<TradeRecord>, Vec<RejectedTrade>) {
        let mut valid = Vec::with_capacity(trades.len());
        let mut rejected = Vec::new();

        for trade in trades {
            match trade.validate() {
                Ok(()) => valid.push(trade),
                Err(e) => {
                    let reason = e.to_string();
                    warn!("Excluding malformed fill {} ({})", trade.id, reason);
                    rejected.push(RejectedTrade { trade, reason });
                }
            }
        }

        (valid, rejected)
    }

    /// Group fills by ticker symbol. The groups are derived views, not
    /// persisted — they exist only as calculator input.
    pub fn group_by_symbol<'a>(
        &self,
        trades: &'a [TradeRecord],
    ) -> HashMap<String, Vec<&'a TradeRecord>> {
        let mut groups: HashMap<String, Vec<&TradeRecord>> = HashMap::new();
        for trade in trades {
            groups.entry(trade.symbol.clone()).or_default().push(trade);
        }
        groups
    }

    /// All fills, newest first (for display).
    pub fn trades_newest_first<'a>(&self, trades: &'a [TradeRecord]) -> Vec<&'a TradeRecord> {
        let mut list: Vec<&TradeRecord> = trades.iter().collect();
        list.sort_by(|a, b| b.executed_at.cmp(&a.executed_at)); // stable: ties keep ledger order
        list
    }

    /// Fills for one ticker (case-insensitive), newest first.
    pub fn trades_for_symbol<'a>(
        &self,
        trades: &'a [TradeRecord],
        symbol: &str,
    ) -> Vec<&'a TradeRecord> {
        let upper = symbol.to_uppercase();
        let mut list: Vec<&TradeRecord> = trades.iter().filter(|t| t.symbol == upper).collect();
        list.sort_by(|a, b| b.executed_at.cmp(&a.executed_at));
        list
    }

    /// Fills executed on one calendar date, in ledger order.
    pub fn trades_on<'a>(
        &self,
        trades: &'a [TradeRecord],
        date: NaiveDate,
    ) -> Vec<&'a TradeRecord> {
        trades.iter().filter(|t| t.trade_date() == date).collect()
    }

    /// Look up a single fill by its identity.
    pub fn find<'a>(&self, trades: &'a [TradeRecord], id: Uuid) -> Option<&'a TradeRecord> {
        trades.iter().find(|t| t.id == id)
    }

    /// All distinct ticker symbols in the ledger, sorted for deterministic
    /// display order.
    pub fn unique_symbols(&self, trades: &[TradeRecord]) -> Vec<String> {
        let mut seen = std::collections::HashSet::new();
        let mut symbols: Vec<String> = trades
            .iter()
            .filter_map(|t| {
                if seen.insert(t.symbol.as_str()) {
                    Some(t.symbol.clone())
                } else {
                    None
                }
            })
            .collect();
        symbols.sort();
        symbols
    }
}

impl Default for LedgerService {
    fn default() -> Self {
        Self::new()
    }
}
