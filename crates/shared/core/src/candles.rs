//! Candle data model
//!
//! A `CandleSeries` is a bounded, time-ordered window of OHLCV candles.
//! It is fetched once per control cycle and treated as immutable by the
//! signal pipeline. Indicator inputs are exposed as `f64` series; the
//! decimal-to-float conversion is confined to this module.

use crate::values::{Price, Quantity, Timestamp};
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

/// A single OHLCV candle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub timestamp: Timestamp,
    pub open: Price,
    pub high: Price,
    pub low: Price,
    pub close: Price,
    pub volume: Quantity,
}

/// Bounded, time-ordered candle window
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandleSeries {
    candles: Vec<Candle>,
    max_records: usize,
}

impl CandleSeries {
    /// Create an empty series holding at most `max_records` candles
    pub fn new(max_records: usize) -> Self {
        Self {
            candles: Vec::with_capacity(max_records),
            max_records,
        }
    }

    /// Build a series from candles already in time order.
    /// Only the trailing `max_records` candles are kept.
    pub fn from_candles(candles: Vec<Candle>, max_records: usize) -> Self {
        let mut series = Self::new(max_records);
        for candle in candles {
            series.push(candle);
        }
        series
    }

    /// Append a candle, evicting the oldest once the bound is reached.
    /// Out-of-order candles (timestamp not after the last) are dropped.
    pub fn push(&mut self, candle: Candle) {
        if let Some(last) = self.candles.last()
            && candle.timestamp <= last.timestamp
        {
            return;
        }
        if self.candles.len() == self.max_records {
            self.candles.remove(0);
        }
        self.candles.push(candle);
    }

    pub fn len(&self) -> usize {
        self.candles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candles.is_empty()
    }

    pub fn max_records(&self) -> usize {
        self.max_records
    }

    pub fn last(&self) -> Option<&Candle> {
        self.candles.last()
    }

    pub fn candles(&self) -> &[Candle] {
        &self.candles
    }

    /// High prices as an `f64` series (`NaN` for non-representable values)
    pub fn highs(&self) -> Vec<f64> {
        self.to_f64(|c| c.high)
    }

    /// Low prices as an `f64` series
    pub fn lows(&self) -> Vec<f64> {
        self.to_f64(|c| c.low)
    }

    /// Close prices as an `f64` series
    pub fn closes(&self) -> Vec<f64> {
        self.to_f64(|c| c.close)
    }

    fn to_f64(&self, field: impl Fn(&Candle) -> Price) -> Vec<f64> {
        self.candles
            .iter()
            .map(|c| field(c).to_f64().unwrap_or(f64::NAN))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn candle(secs: i64, close: Price) -> Candle {
        Candle {
            timestamp: Utc.timestamp_opt(secs, 0).unwrap(),
            open: close,
            high: close + dec!(1),
            low: close - dec!(1),
            close,
            volume: dec!(10),
        }
    }

    #[test]
    fn test_push_evicts_oldest() {
        let mut series = CandleSeries::new(3);
        for i in 0..5 {
            series.push(candle(i * 60, dec!(100) + Decimal::from(i)));
        }
        assert_eq!(series.len(), 3);
        // Oldest two were evicted
        assert_eq!(series.candles()[0].close, dec!(102));
        assert_eq!(series.last().unwrap().close, dec!(104));
    }

    #[test]
    fn test_push_drops_out_of_order() {
        let mut series = CandleSeries::new(10);
        series.push(candle(120, dec!(100)));
        series.push(candle(60, dec!(99))); // earlier timestamp, dropped
        series.push(candle(120, dec!(98))); // duplicate timestamp, dropped
        assert_eq!(series.len(), 1);
        assert_eq!(series.last().unwrap().close, dec!(100));
    }

    #[test]
    fn test_f64_accessors() {
        let series = CandleSeries::from_candles(vec![candle(0, dec!(100)), candle(60, dec!(101))], 10);
        assert_eq!(series.closes(), vec![100.0, 101.0]);
        assert_eq!(series.highs(), vec![101.0, 102.0]);
        assert_eq!(series.lows(), vec![99.0, 100.0]);
    }
}
