//! Integration test: signal output feeding the ladder generator
//!
//! Exercises the pipeline the way the controller drives it: compute
//! (reference_price, spread_multiplier) from a synthetic candle window,
//! then expand both sides into DCA ladders around the reference price.

use chrono::{TimeZone, Utc};
use midas_core::{Candle, CandleSeries, RiskParams, TradeSide};
use midas_indicators::TaEngine;
use midas_strategy::{LadderConfig, LadderGenerator, SignalProcessor};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn trending_series(count: usize) -> CandleSeries {
    // Gentle downtrend with a 1% range per candle
    let candles = (0..count)
        .map(|i| {
            let close = dec!(200) - Decimal::from(i as u64) * dec!(0.5);
            Candle {
                timestamp: Utc.timestamp_opt(i as i64 * 180, 0).unwrap(),
                open: close,
                high: close + dec!(1),
                low: close - dec!(1),
                close,
                volume: dec!(2),
            }
        })
        .collect();
    CandleSeries::from_candles(candles, count)
}

#[test]
fn test_signal_feeds_both_ladders() {
    let processor = SignalProcessor::new(12, 26, 9, 14);
    let candles = trending_series(60);
    let mid_price = candles.last().unwrap().close;

    let signal = processor.compute(&candles, mid_price, &TaEngine).unwrap();
    assert!(signal.spread_multiplier >= Decimal::ZERO);
    assert!(signal.reference_price > Decimal::ZERO);

    let generator = LadderGenerator::new(LadderConfig {
        level_count: 4,
        spread_scalar: dec!(2),
        amount_growth_ratio: dec!(1.5),
        activation_bounds: None,
    })
    .unwrap();

    let risk = RiskParams::default();
    let buys = generator
        .generate(
            TradeSide::Buy,
            signal.reference_price,
            dec!(1),
            signal.spread_multiplier,
            &risk,
        )
        .unwrap();
    let sells = generator
        .generate(
            TradeSide::Sell,
            signal.reference_price,
            dec!(1),
            signal.spread_multiplier,
            &risk,
        )
        .unwrap();

    assert_eq!(buys.len(), 4);
    assert_eq!(sells.len(), 4);

    // Both ladders start at the reference price and widen away from it
    assert_eq!(buys[0].price, signal.reference_price);
    assert_eq!(sells[0].price, signal.reference_price);
    for pair in buys.windows(2) {
        assert!(pair[1].price <= pair[0].price);
    }
    for pair in sells.windows(2) {
        assert!(pair[1].price >= pair[0].price);
    }

    // Deeper levels carry more capital (growth ratio > 1), dominated by
    // the weight even as the buy price falls
    for pair in buys.windows(2) {
        assert!(pair[1].amount_quote > pair[0].amount_quote);
    }
}

#[test]
fn test_selloff_shifts_reference_above_mid() {
    // Flat market followed by a sharp drop: the MACD line sits far below
    // its window mean, so the inverted z-score is strongly positive and
    // outweighs the negative trend direction - the reference price is
    // biased upward, averaging into the move
    let candles: Vec<Candle> = (0..60)
        .map(|i| {
            let close = if i < 40 {
                dec!(200)
            } else {
                dec!(200) - Decimal::from(i as u64 - 39) * dec!(2)
            };
            Candle {
                timestamp: Utc.timestamp_opt(i as i64 * 180, 0).unwrap(),
                open: close,
                high: close + dec!(1),
                low: close - dec!(1),
                close,
                volume: dec!(2),
            }
        })
        .collect();
    let candles = CandleSeries::from_candles(candles, 60);

    let processor = SignalProcessor::new(12, 26, 9, 14);
    let mid_price = candles.last().unwrap().close;
    let signal = processor.compute(&candles, mid_price, &TaEngine).unwrap();
    assert!(signal.reference_price > mid_price);
}
