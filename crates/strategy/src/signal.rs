//! Signal processor
//!
//! Blends a momentum z-score with a binary trend direction, bounds the
//! result by half the NATR, and shifts the mid-price by the outcome. The
//! momentum deviation is sign-inverted so positive deviation biases the
//! reference price *downward* (contrarian, mean-reversion shift).

use midas_core::{CandleSeries, Price};
use midas_ports::{IndicatorEngine, SignalError, SignalResult};
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;

/// Extra candles required beyond the longest indicator lookback, so the
/// trailing values are clear of indicator warmup
pub const LOOKBACK_MARGIN: usize = 10;

/// Output of one signal computation. Fresh per cycle, no lifecycle.
#[derive(Debug, Clone, PartialEq)]
pub struct SignalOutput {
    /// Momentum-shifted mid-price the ladders quote around
    pub reference_price: Price,
    /// Non-negative fractional volatility estimate scaling all level offsets
    pub spread_multiplier: Decimal,
}

/// Computes `(reference_price, spread_multiplier)` from candle history
#[derive(Debug, Clone)]
pub struct SignalProcessor {
    macd_fast: usize,
    macd_slow: usize,
    macd_signal: usize,
    natr_length: usize,
}

impl SignalProcessor {
    pub fn new(macd_fast: usize, macd_slow: usize, macd_signal: usize, natr_length: usize) -> Self {
        Self {
            macd_fast,
            macd_slow,
            macd_signal,
            natr_length,
        }
    }

    /// Minimum candle count for the trailing indicator values to be defined
    pub fn required_history(&self) -> usize {
        self.macd_fast
            .max(self.macd_slow)
            .max(self.macd_signal)
            .max(self.natr_length)
            + LOOKBACK_MARGIN
    }

    /// Run one signal computation over the cycle's candle window.
    ///
    /// Errors are recoverable: the caller skips the cycle and retries on
    /// the next tick.
    pub fn compute(
        &self,
        candles: &CandleSeries,
        mid_price: Price,
        engine: &dyn IndicatorEngine,
    ) -> SignalResult<SignalOutput> {
        let required = self.required_history();
        if candles.len() < required {
            return Err(SignalError::InsufficientHistory {
                required,
                available: candles.len(),
            });
        }

        let closes = candles.closes();
        let natr = engine.natr(&candles.highs(), &candles.lows(), &closes, self.natr_length);
        let natr_last = natr.last().copied().unwrap_or(f64::NAN);
        if !natr_last.is_finite() || natr_last < 0.0 {
            return Err(SignalError::InvalidIndicatorOutput(format!(
                "natr produced {natr_last} for length {}",
                self.natr_length
            )));
        }

        let macd = engine.macd(&closes, self.macd_fast, self.macd_slow, self.macd_signal);
        let macd_last = macd.line.last().copied().unwrap_or(f64::NAN);
        let histogram_last = macd.histogram.last().copied().unwrap_or(f64::NAN);

        // Z-score of the MACD line over the window, sign-inverted.
        // Zero variance (flat history) is a legitimate market state: no shift.
        let (mean, stddev) = mean_stddev(&macd.line);
        let momentum_z = if stddev > 0.0 && stddev.is_finite() {
            -(macd_last - mean) / stddev
        } else {
            0.0
        };

        let trend_direction = if histogram_last > 0.0 { 1.0 } else { -1.0 };

        // The volatility envelope bounds how far price can be shifted
        let max_price_shift = natr_last / 2.0;
        let price_multiplier = (0.5 * momentum_z + 0.5 * trend_direction) * max_price_shift;
        if !price_multiplier.is_finite() {
            return Err(SignalError::InvalidIndicatorOutput(format!(
                "macd produced non-finite shift (line={macd_last}, histogram={histogram_last})"
            )));
        }

        let price_multiplier = decimal_from_f64(price_multiplier)?;
        let spread_multiplier = decimal_from_f64(natr_last)?;

        log::debug!(
            "signal: shift={price_multiplier} spread_multiplier={spread_multiplier} mid={mid_price}"
        );

        Ok(SignalOutput {
            reference_price: mid_price * (Decimal::ONE + price_multiplier),
            spread_multiplier,
        })
    }
}

fn decimal_from_f64(value: f64) -> SignalResult<Decimal> {
    Decimal::from_f64(value).ok_or_else(|| {
        SignalError::InvalidIndicatorOutput(format!("{value} is not representable as Decimal"))
    })
}

/// Mean and sample standard deviation, skipping non-finite values
/// (pandas semantics: `mean()` / `std(ddof=1)` with skipna)
fn mean_stddev(values: &[f64]) -> (f64, f64) {
    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if finite.is_empty() {
        return (f64::NAN, f64::NAN);
    }
    let mean = finite.iter().sum::<f64>() / finite.len() as f64;
    if finite.len() < 2 {
        return (mean, 0.0);
    }
    let variance = finite.iter().map(|v| (v - mean).powi(2)).sum::<f64>()
        / (finite.len() - 1) as f64;
    (mean, variance.sqrt())
}
