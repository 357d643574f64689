//! Market-making configuration
//!
//! Raw configuration is parsed into this typed structure and range-checked
//! exactly once, at controller construction. Validation failures are fatal
//! (`ConfigError::InvalidLadderConfig`); nothing is silently coerced.
//!
//! The candle connector/trading pair default to the main connector/pair
//! when unset - a plain post-construction derivation, resolved through
//! `candles_connector()` / `candles_trading_pair()`.

use crate::ladder::LadderConfig;
use crate::signal::LOOKBACK_MARGIN;
use midas_core::{RiskParams, TradeSide, TrailingStop};
use midas_ports::{ConfigError, ConfigResult};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Static configuration for one market-making controller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketMakingConfig {
    /// Exchange connector orders are placed on
    pub connector_name: String,
    /// Trading pair orders are placed on (e.g. "BTC-USDT")
    pub trading_pair: String,
    /// Total base amount split across spread levels
    pub total_amount: Decimal,

    /// Per-level distances from the reference price, in units of the
    /// spread multiplier
    pub buy_spreads: Vec<Decimal>,
    pub sell_spreads: Vec<Decimal>,

    /// Candle source connector; defaults to `connector_name` when unset
    pub candles_connector: Option<String>,
    /// Candle source pair; defaults to `trading_pair` when unset
    pub candles_trading_pair: Option<String>,
    /// Candle interval (e.g. "1m", "3m", "1h")
    pub interval: String,

    pub macd_fast: usize,
    pub macd_slow: usize,
    pub macd_signal: usize,
    pub natr_length: usize,

    /// Number of DCA levels each spread level expands into
    pub dca_levels: usize,
    /// DCA level offset in units of the spread multiplier
    pub dca_spread_scalar: Decimal,
    /// Geometric growth of capital between adjacent DCA levels
    pub dca_amount_ratio_increment: Decimal,
    /// Fractional distances gating when deeper DCA levels become placeable
    pub executor_activation_bounds: Option<Vec<Decimal>>,

    pub leverage: u32,
    /// Seconds after which the executor closes the position
    pub time_limit: Option<u64>,
    /// Fractional loss at which the executor closes the position
    pub stop_loss: Option<Decimal>,
    pub trailing_stop: Option<TrailingStop>,
}

impl Default for MarketMakingConfig {
    fn default() -> Self {
        Self {
            connector_name: "binance_perpetual".to_string(),
            trading_pair: "BTC-USDT".to_string(),
            total_amount: dec!(1),
            buy_spreads: vec![dec!(1), dec!(2), dec!(4)],
            sell_spreads: vec![dec!(1), dec!(2), dec!(4)],
            candles_connector: None,
            candles_trading_pair: None,
            interval: "3m".to_string(),
            macd_fast: 12,
            macd_slow: 26,
            macd_signal: 9,
            natr_length: 14,
            dca_levels: 5,
            dca_spread_scalar: dec!(2),
            dca_amount_ratio_increment: dec!(1.5),
            executor_activation_bounds: None,
            leverage: 20,
            time_limit: Some(60 * 60 * 6),
            stop_loss: Some(dec!(0.03)),
            trailing_stop: Some(TrailingStop {
                activation_price: dec!(0.015),
                trailing_delta: dec!(0.003),
            }),
        }
    }
}

impl MarketMakingConfig {
    /// Range-check the whole config. Run once at controller construction.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.macd_fast < 1 || self.macd_slow < 1 || self.macd_signal < 1 {
            return Err(ConfigError::InvalidLadderConfig(
                "macd periods must be >= 1".to_string(),
            ));
        }
        if self.natr_length < 1 {
            return Err(ConfigError::InvalidLadderConfig(
                "natr_length must be >= 1".to_string(),
            ));
        }
        if self.total_amount < Decimal::ZERO {
            return Err(ConfigError::InvalidLadderConfig(format!(
                "total_amount must be >= 0, got {}",
                self.total_amount
            )));
        }
        if self.buy_spreads.is_empty() || self.sell_spreads.is_empty() {
            return Err(ConfigError::InvalidLadderConfig(
                "buy_spreads and sell_spreads must not be empty".to_string(),
            ));
        }
        if self
            .buy_spreads
            .iter()
            .chain(&self.sell_spreads)
            .any(|s| *s < Decimal::ZERO)
        {
            return Err(ConfigError::InvalidLadderConfig(
                "spreads must be non-negative".to_string(),
            ));
        }
        if self.leverage < 1 {
            return Err(ConfigError::InvalidLadderConfig(
                "leverage must be >= 1".to_string(),
            ));
        }
        self.ladder_config().validate()
    }

    /// Candle history depth: the longest indicator lookback plus margin
    pub fn max_records(&self) -> usize {
        self.macd_fast
            .max(self.macd_slow)
            .max(self.macd_signal)
            .max(self.natr_length)
            + LOOKBACK_MARGIN
    }

    /// Candle source connector, defaulting to the order connector
    pub fn candles_connector(&self) -> &str {
        self.candles_connector
            .as_deref()
            .unwrap_or(&self.connector_name)
    }

    /// Candle source pair, defaulting to the order pair
    pub fn candles_trading_pair(&self) -> &str {
        self.candles_trading_pair
            .as_deref()
            .unwrap_or(&self.trading_pair)
    }

    /// Spread list for one side
    pub fn spreads(&self, side: TradeSide) -> &[Decimal] {
        match side {
            TradeSide::Buy => &self.buy_spreads,
            TradeSide::Sell => &self.sell_spreads,
        }
    }

    /// The DCA ladder shape carried by this config
    pub fn ladder_config(&self) -> LadderConfig {
        LadderConfig {
            level_count: self.dca_levels,
            spread_scalar: self.dca_spread_scalar,
            amount_growth_ratio: self.dca_amount_ratio_increment,
            activation_bounds: self.executor_activation_bounds.clone(),
        }
    }

    /// Risk parameters attached to every generated level
    pub fn risk_params(&self) -> RiskParams {
        RiskParams {
            leverage: self.leverage,
            time_limit: self.time_limit,
            stop_loss: self.stop_loss,
            trailing_stop: self.trailing_stop,
        }
    }
}
