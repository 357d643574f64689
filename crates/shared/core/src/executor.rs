//! Executor-facing value objects
//!
//! The decision core does not submit orders. Each control cycle it hands
//! the downstream DCA executor a structured config describing one ladder:
//! the per-level price/amount sequences plus the risk parameters carried
//! through from static configuration. The executor owns submission and
//! cancellation of the resulting orders.

use crate::level_id::LevelId;
use crate::side::TradeSide;
use crate::values::{Price, Quantity, Timestamp};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Trailing stop parameters (carried opaquely to the executor)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrailingStop {
    /// Fractional gain at which the trailing stop activates
    pub activation_price: Decimal,
    /// Fractional give-back that closes the position once active
    pub trailing_delta: Decimal,
}

/// Risk parameters attached to every ladder level
///
/// These are never enforced here; they travel with the executor config so
/// the downstream executor can apply its triple-barrier logic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskParams {
    pub leverage: u32,
    /// Seconds after which the position is closed at market
    pub time_limit: Option<u64>,
    /// Fractional loss that closes the position
    pub stop_loss: Option<Decimal>,
    pub trailing_stop: Option<TrailingStop>,
}

impl Default for RiskParams {
    fn default() -> Self {
        Self {
            leverage: 1,
            time_limit: None,
            stop_loss: None,
            trailing_stop: None,
        }
    }
}

/// One level of a DCA ladder
///
/// Index 0 is closest to the reference price; higher indices sit further
/// away. Downstream activation-bound logic relies on this ordering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLevelSpec {
    pub level_index: usize,
    pub price: Price,
    pub amount_quote: Quantity,
    pub side: TradeSide,
    pub risk: RiskParams,
}

/// Complete per-level-request config handed to the DCA executor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DcaExecutorConfig {
    pub timestamp: Timestamp,
    pub level_id: LevelId,
    pub connector_name: String,
    pub trading_pair: String,
    /// Ladder prices, index 0 nearest the reference price
    pub prices: Vec<Price>,
    /// Quote-denominated amounts, aligned with `prices`
    pub amounts_quote: Vec<Quantity>,
    pub leverage: u32,
    pub side: TradeSide,
    pub time_limit: Option<u64>,
    pub stop_loss: Option<Decimal>,
    pub trailing_stop: Option<TrailingStop>,
    /// Fractional distances gating when deeper levels become placeable
    pub activation_bounds: Option<Vec<Decimal>>,
}

impl DcaExecutorConfig {
    /// Build an executor config from a ladder of level specs
    pub fn from_levels(
        timestamp: Timestamp,
        level_id: LevelId,
        connector_name: impl Into<String>,
        trading_pair: impl Into<String>,
        levels: &[OrderLevelSpec],
        activation_bounds: Option<Vec<Decimal>>,
    ) -> Self {
        let risk = levels
            .first()
            .map(|l| l.risk.clone())
            .unwrap_or_default();
        Self {
            timestamp,
            level_id,
            connector_name: connector_name.into(),
            trading_pair: trading_pair.into(),
            prices: levels.iter().map(|l| l.price).collect(),
            amounts_quote: levels.iter().map(|l| l.amount_quote).collect(),
            leverage: risk.leverage,
            side: level_id.side,
            time_limit: risk.time_limit,
            stop_loss: risk.stop_loss,
            trailing_stop: risk.trailing_stop,
            activation_bounds,
        }
    }
}
