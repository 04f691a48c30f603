use log::warn;

use crate::models::summary::{NetDirection, TickerSummary};
use crate::models::trade::{TradeRecord, TradeSide};

/// Computes per-ticker cost basis and realized PnL.
///
/// A pure aggregator: buy/sell sums and weighted averages over one asset's
/// fills, plus realized PnL as attributed per-fill by the execution venue.
/// PnL is never recomputed from cost lots here (no FIFO/LIFO matching —
/// cost basis is a simple weighted average).
pub struct CostBasisService;

impl CostBasisService {
    pub fn new() -> Self {
        Self
    }

    /// Aggregate one ticker's fills into a [`TickerSummary`].
    ///
    /// Input order is irrelevant. Empty input is a normal state, not an
    /// error — an asset with only buys and no closes is expected — so all
    /// derived quantities degrade to zero rather than failing. Malformed
    /// fills are excluded from the sums individually.
    pub fn summarize(&self, symbol: &str, trades: &[&TradeRecord]) -> TickerSummary {
        let mut summary = TickerSummary::empty(symbol.to_uppercase());

        for trade in trades {
            if let Err(e) = trade.validate() {
                warn!("Skipping malformed fill in {} aggregation: {}", summary.symbol, e);
                continue;
            }

            match trade.side {
                TradeSide::Buy => {
                    summary.total_buy_quantity += trade.quantity;
                    summary.total_buy_value += trade.total;
                }
                TradeSide::Sell => {
                    summary.total_sell_quantity += trade.quantity;
                    summary.total_sell_value += trade.total;
                    summary.realized_pnl += trade.pnl.unwrap_or(0.0);
                }
            }
        }

        if summary.total_buy_quantity > 0.0 {
            summary.avg_buy_price = summary.total_buy_value / summary.total_buy_quantity;
        }
        if summary.total_sell_quantity > 0.0 {
            summary.avg_sell_price = summary.total_sell_value / summary.total_sell_quantity;
        }

        summary.net_direction = if summary.total_buy_quantity >= summary.total_sell_quantity {
            NetDirection::NetBuy
        } else {
            NetDirection::NetSell
        };

        summary.realized_cost_basis = summary.total_sell_value - summary.realized_pnl;
        // Guard against division by zero and misleading ratios on a
        // non-positive basis.
        summary.realized_roi = if summary.realized_cost_basis > 0.0 {
            summary.realized_pnl / summary.realized_cost_basis
        } else {
            0.0
        };

        summary
    }
}

impl Default for CostBasisService {
    fn default() -> Self {
        Self::new()
    }
}
