use serde::{Deserialize, Serialize};

/// Which side dominates a ticker's filled quantity.
///
/// `NetBuy` when total bought quantity is greater than or equal to total
/// sold quantity. Determines which average price represents the position
/// marker for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NetDirection {
    NetBuy,
    NetSell,
}

impl std::fmt::Display for NetDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NetDirection::NetBuy => write!(f, "net-buy"),
            NetDirection::NetSell => write!(f, "net-sell"),
        }
    }
}

/// Aggregate cost-basis and realized-PnL figures for one ticker.
///
/// Produced by the cost-basis calculator from the unordered set of one
/// asset's fills. All averages are zero-guarded: an asset with no buys
/// (or no sells) reports 0.0 rather than dividing by zero. Callers must
/// check [`TickerSummary::marker_price`] before rendering — `None` means
/// the summary is empty and has nothing to display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickerSummary {
    /// Ticker symbol
    pub symbol: String,

    /// Sum of buy-fill quantities
    pub total_buy_quantity: f64,

    /// Sum of buy-fill totals
    pub total_buy_value: f64,

    /// total_buy_value / total_buy_quantity (0.0 when no buys)
    pub avg_buy_price: f64,

    /// Sum of sell-fill quantities
    pub total_sell_quantity: f64,

    /// Sum of sell-fill totals
    pub total_sell_value: f64,

    /// total_sell_value / total_sell_quantity (0.0 when no sells)
    pub avg_sell_price: f64,

    /// Which side dominates the filled quantity
    pub net_direction: NetDirection,

    /// Sum of venue-attributed `pnl` over sell fills
    pub realized_pnl: f64,

    /// total_sell_value − realized_pnl
    pub realized_cost_basis: f64,

    /// realized_pnl / realized_cost_basis (0.0 when cost basis <= 0)
    pub realized_roi: f64,
}

impl TickerSummary {
    /// Zeroed summary for a ticker with no valid fills.
    pub fn empty(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            total_buy_quantity: 0.0,
            total_buy_value: 0.0,
            avg_buy_price: 0.0,
            total_sell_quantity: 0.0,
            total_sell_value: 0.0,
            avg_sell_price: 0.0,
            net_direction: NetDirection::NetBuy,
            realized_pnl: 0.0,
            realized_cost_basis: 0.0,
            realized_roi: 0.0,
        }
    }

    /// True when both buy and sell quantities are zero.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total_buy_quantity == 0.0 && self.total_sell_quantity == 0.0
    }

    /// The average price on the net side — the "position marker" shown on
    /// price charts. `None` when the summary is empty; callers must not
    /// render an empty summary.
    #[must_use]
    pub fn marker_price(&self) -> Option<f64> {
        if self.is_empty() {
            return None;
        }
        match self.net_direction {
            NetDirection::NetBuy => Some(self.avg_buy_price),
            NetDirection::NetSell => Some(self.avg_sell_price),
        }
    }
}
