//! Market-making controller
//!
//! Per-cycle orchestration: fetch the candle window and mid-price through
//! the market-data port, run the signal processor, and expand level
//! requests into DCA executor configs.

use crate::error::{ControllerError, ControllerResult};
use midas_core::{DcaExecutorConfig, LevelId, Price, Quantity, TradeSide};
use midas_indicators::TaEngine;
use midas_ports::{Clock, IndicatorEngine, MarketDataProvider, PriceType};
use midas_strategy::{LadderGenerator, MarketMakingConfig, SignalOutput, SignalProcessor};
use rust_decimal::Decimal;
use std::sync::Arc;

/// One market-making controller instance
///
/// Construction validates the config and memoizes the ladder weights;
/// both are read-only afterwards. `processed` holds the latest signal
/// output and is replaced wholesale every cycle.
pub struct MarketMakingController {
    config: MarketMakingConfig,
    provider: Arc<dyn MarketDataProvider>,
    clock: Arc<dyn Clock>,
    engine: Arc<dyn IndicatorEngine>,
    signal: SignalProcessor,
    ladder: LadderGenerator,
    processed: Option<SignalOutput>,
}

impl MarketMakingController {
    /// Validate the config and build the controller.
    ///
    /// Fails with `ConfigError::InvalidLadderConfig` on any malformed
    /// static configuration.
    pub fn new(
        config: MarketMakingConfig,
        provider: Arc<dyn MarketDataProvider>,
        clock: Arc<dyn Clock>,
    ) -> ControllerResult<Self> {
        config.validate()?;
        let signal = SignalProcessor::new(
            config.macd_fast,
            config.macd_slow,
            config.macd_signal,
            config.natr_length,
        );
        let ladder = LadderGenerator::new(config.ladder_config())?;
        Ok(Self {
            config,
            provider,
            clock,
            engine: Arc::new(TaEngine),
            signal,
            ladder,
            processed: None,
        })
    }

    /// Swap the indicator implementation (tests use synthetic engines)
    pub fn with_engine(mut self, engine: Arc<dyn IndicatorEngine>) -> Self {
        self.engine = engine;
        self
    }

    pub fn config(&self) -> &MarketMakingConfig {
        &self.config
    }

    /// Latest signal output, if a cycle has completed
    pub fn processed_data(&self) -> Option<&SignalOutput> {
        self.processed.as_ref()
    }

    /// Run the signal half of one control cycle.
    ///
    /// On error the previous cycle's data is kept and the caller is
    /// expected to skip this tick.
    pub async fn update_processed_data(&mut self) -> ControllerResult<()> {
        let candles = self
            .provider
            .get_candles(
                self.config.candles_connector(),
                self.config.candles_trading_pair(),
                &self.config.interval,
                self.config.max_records(),
            )
            .await?;
        let mid_price = self
            .provider
            .get_price(
                &self.config.connector_name,
                &self.config.trading_pair,
                PriceType::MidPrice,
            )
            .await?;

        let output = self.signal.compute(&candles, mid_price, self.engine.as_ref())?;
        log::info!(
            "[{}] cycle: reference_price={} spread_multiplier={}",
            self.config.trading_pair,
            output.reference_price,
            output.spread_multiplier
        );
        self.processed = Some(output);
        Ok(())
    }

    /// Target price for a spread level, derived from the current cycle's
    /// reference price and spread multiplier
    pub fn level_target_price(&self, level_id: LevelId) -> ControllerResult<Price> {
        let data = self.processed.as_ref().ok_or(ControllerError::NotReady)?;
        let spread = self
            .config
            .spreads(level_id.side)
            .get(level_id.index)
            .copied()
            .ok_or_else(|| ControllerError::UnknownLevel(level_id.to_string()))?;
        let offset = spread * data.spread_multiplier;
        Ok(match level_id.side {
            TradeSide::Buy => data.reference_price * (Decimal::ONE - offset),
            TradeSide::Sell => data.reference_price * (Decimal::ONE + offset),
        })
    }

    /// Base amount for one spread level: the side's share of
    /// `total_amount`, split evenly across that side's levels
    pub fn level_amount(&self, side: TradeSide) -> Quantity {
        let count = self.config.spreads(side).len();
        self.config.total_amount / Decimal::from(count as u64)
    }

    /// Expand one level request into the executor config for its DCA
    /// ladder, stamped with the controller clock
    pub fn executor_config(
        &self,
        level_id: LevelId,
        target_price: Price,
        target_amount: Quantity,
    ) -> ControllerResult<DcaExecutorConfig> {
        let data = self.processed.as_ref().ok_or(ControllerError::NotReady)?;
        let levels = self.ladder.generate(
            level_id.side,
            target_price,
            target_amount,
            data.spread_multiplier,
            &self.config.risk_params(),
        )?;
        Ok(DcaExecutorConfig::from_levels(
            self.clock.now(),
            level_id,
            &self.config.connector_name,
            &self.config.trading_pair,
            &levels,
            self.config.executor_activation_bounds.clone(),
        ))
    }
}
