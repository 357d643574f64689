//! Midas Indicators
//!
//! Series implementations of the indicators the signal pipeline consumes:
//! EMA, MACD and NATR. Semantics follow the pandas conventions the
//! strategy was calibrated against: EMA seeds on the first observation
//! (`ewm(adjust=False)`), ATR uses Wilder smoothing with an SMA seed, and
//! warmup rows are `NaN`.
//!
//! Everything here is pure `f64` series math; decimal precision only
//! matters once prices and amounts are derived from the final values.

pub mod ema;
pub mod macd;
pub mod natr;

use midas_ports::{IndicatorEngine, MacdOutput};

pub use ema::{Ema, ema_series};

/// Default `IndicatorEngine` implementation backed by this crate
#[derive(Debug, Clone, Copy, Default)]
pub struct TaEngine;

impl TaEngine {
    pub fn new() -> Self {
        Self
    }
}

impl IndicatorEngine for TaEngine {
    fn natr(&self, high: &[f64], low: &[f64], close: &[f64], length: usize) -> Vec<f64> {
        natr::natr(high, low, close, length)
    }

    fn macd(&self, close: &[f64], fast: usize, slow: usize, signal: usize) -> MacdOutput {
        macd::macd(close, fast, slow, signal)
    }
}
