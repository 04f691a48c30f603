use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::CoreError;

/// Relative tolerance for the `total == price × quantity` consistency check.
/// Covers rounding introduced by the execution venue's decimal formatting.
const TOTAL_ROUNDING_TOLERANCE: f64 = 1e-6;

/// Direction of an executed fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeSide {
    /// Opening / adding to a position
    Buy,
    /// Closing / reducing a position — carries realized PnL
    Sell,
}

impl std::fmt::Display for TradeSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TradeSide::Buy => write!(f, "buy"),
            TradeSide::Sell => write!(f, "sell"),
        }
    }
}

/// How the order that produced this fill was placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStyle {
    /// Executed at the prevailing market price
    Market,
    /// Executed at a user-specified limit price
    Limit,
}

impl std::fmt::Display for OrderStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderStyle::Market => write!(f, "market"),
            OrderStyle::Limit => write!(f, "limit"),
        }
    }
}

/// A single executed fill in the ledger.
///
/// **Important**: TradeRecords are created by the execution venue and are
/// immutable within a session — the engine never edits or deletes them.
/// Realized PnL on sell fills is attributed by the venue, not recomputed here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeRecord {
    /// Unique identifier assigned by the execution venue
    pub id: Uuid,

    /// Asset ticker symbol, uppercased (e.g., "BTC", "ETH")
    pub symbol: String,

    /// Buy or sell
    pub side: TradeSide,

    /// Unit price at execution (always positive)
    pub price: f64,

    /// Filled quantity (always positive)
    pub quantity: f64,

    /// Total fill value — must equal price × quantity within rounding tolerance
    pub total: f64,

    /// Market or limit order
    pub order_style: OrderStyle,

    /// Wall-clock execution timestamp (date + time)
    pub executed_at: NaiveDateTime,

    /// Realized profit/loss in quote currency. Sell fills only.
    #[serde(default)]
    pub pnl: Option<f64>,

    /// Realized profit/loss as a percentage. Sell fills only.
    #[serde(default)]
    pub pnl_percent: Option<f64>,

    /// Indicator snapshot captured at execution time (RSI, moving averages, ...).
    /// Opaque to this engine — stored and passed through, never interpreted.
    #[serde(default)]
    pub market_context: serde_json::Value,
}

impl TradeRecord {
    /// Create a fill. Computes `total` from price × quantity and uppercases
    /// the symbol.
    pub fn new(
        symbol: impl Into<String>,
        side: TradeSide,
        price: f64,
        quantity: f64,
        order_style: OrderStyle,
        executed_at: NaiveDateTime,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            symbol: symbol.into().to_uppercase(),
            side,
            price,
            quantity,
            total: price * quantity,
            order_style,
            executed_at,
            pnl: None,
            pnl_percent: None,
            market_context: serde_json::Value::Null,
        }
    }

    /// Create a sell fill with venue-attributed realized PnL.
    pub fn with_pnl(
        symbol: impl Into<String>,
        price: f64,
        quantity: f64,
        order_style: OrderStyle,
        executed_at: NaiveDateTime,
        pnl: f64,
        pnl_percent: f64,
    ) -> Self {
        let mut trade = Self::new(symbol, TradeSide::Sell, price, quantity, order_style, executed_at);
        trade.pnl = Some(pnl);
        trade.pnl_percent = Some(pnl_percent);
        trade
    }

    /// Attach an indicator snapshot to the fill.
    #[must_use]
    pub fn with_market_context(mut self, context: serde_json::Value) -> Self {
        self.market_context = context;
        self
    }

    /// The calendar date this fill belongs to (journal-entry key).
    #[must_use]
    pub fn trade_date(&self) -> NaiveDate {
        self.executed_at.date()
    }

    /// Check the record against the ledger invariants.
    ///
    /// Rules:
    /// - Price and quantity must be strictly positive
    /// - `total` must equal price × quantity within rounding tolerance
    ///
    /// A malformed fill is excluded from aggregation, never silently included.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.price <= 0.0 || !self.price.is_finite() {
            return Err(CoreError::ValidationError(format!(
                "Fill {} has non-positive price {}",
                self.id, self.price
            )));
        }
        if self.quantity <= 0.0 || !self.quantity.is_finite() {
            return Err(CoreError::ValidationError(format!(
                "Fill {} has non-positive quantity {}",
                self.id, self.quantity
            )));
        }

        let expected = self.price * self.quantity;
        let tolerance = expected.abs() * TOTAL_ROUNDING_TOLERANCE + f64::EPSILON;
        if (self.total - expected).abs() > tolerance {
            return Err(CoreError::ValidationError(format!(
                "Fill {} total {} does not match price × quantity = {}",
                self.id, self.total, expected
            )));
        }

        Ok(())
    }
}
