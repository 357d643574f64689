//! DCA ladder generation
//!
//! Expands one target price/amount into `level_count` staggered limit
//! levels per side. Capital is distributed geometrically across levels
//! (ratio `amount_growth_ratio`), so deeper levels carry more size: the
//! averaging-into-position execution style.
//!
//! All price/amount arithmetic is `Decimal`; the float pipeline stops at
//! the signal output.

use midas_core::{OrderLevelSpec, Price, Quantity, RiskParams, TradeSide};
use midas_ports::{ConfigError, ConfigResult};
use rust_decimal::Decimal;

/// Static ladder shape, validated once at construction
#[derive(Debug, Clone, PartialEq)]
pub struct LadderConfig {
    /// Number of levels per side (>= 1)
    pub level_count: usize,
    /// Per-level offset in units of the spread multiplier (>= 0)
    pub spread_scalar: Decimal,
    /// Geometric growth of capital between adjacent levels (> 0)
    pub amount_growth_ratio: Decimal,
    /// Fractional distances gating when deeper levels become placeable
    pub activation_bounds: Option<Vec<Decimal>>,
}

impl LadderConfig {
    pub fn validate(&self) -> ConfigResult<()> {
        if self.level_count < 1 {
            return Err(ConfigError::InvalidLadderConfig(
                "level_count must be >= 1".to_string(),
            ));
        }
        if self.spread_scalar < Decimal::ZERO {
            return Err(ConfigError::InvalidLadderConfig(format!(
                "spread_scalar must be >= 0, got {}",
                self.spread_scalar
            )));
        }
        if self.amount_growth_ratio <= Decimal::ZERO {
            return Err(ConfigError::InvalidLadderConfig(format!(
                "amount_growth_ratio must be > 0, got {}",
                self.amount_growth_ratio
            )));
        }
        if let Some(bounds) = &self.activation_bounds
            && bounds.iter().any(|b| *b < Decimal::ZERO)
        {
            return Err(ConfigError::InvalidLadderConfig(
                "activation_bounds must be non-negative".to_string(),
            ));
        }
        Ok(())
    }
}

/// Normalized geometric amount distribution
///
/// First term 1, ratio `amount_growth_ratio`, normalized to sum to 1.
/// Decimal division leaves the sum within ~1e-28 of 1; the residual is
/// tolerated (callers assert within 1e-9), never redistributed onto the
/// last weight.
#[derive(Debug, Clone, PartialEq)]
pub struct Weights(Vec<Decimal>);

impl Weights {
    /// Compute the distribution for `level_count` levels
    pub fn geometric(level_count: usize, ratio: Decimal) -> ConfigResult<Self> {
        if level_count < 1 {
            return Err(ConfigError::InvalidLadderConfig(
                "level_count must be >= 1".to_string(),
            ));
        }
        if ratio <= Decimal::ZERO {
            return Err(ConfigError::InvalidLadderConfig(format!(
                "amount_growth_ratio must be > 0, got {ratio}"
            )));
        }

        let mut terms = Vec::with_capacity(level_count);
        let mut term = Decimal::ONE;
        for _ in 0..level_count {
            terms.push(term);
            term *= ratio;
        }
        let total: Decimal = terms.iter().sum();
        Ok(Self(terms.into_iter().map(|t| t / total).collect()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[Decimal] {
        &self.0
    }
}

/// Expands a target price/amount into an ordered DCA ladder
///
/// Stateless across calls except for the weights, which depend only on
/// static config and are computed once at construction.
#[derive(Debug, Clone)]
pub struct LadderGenerator {
    config: LadderConfig,
    weights: Weights,
}

impl LadderGenerator {
    /// Validate the config and memoize the amount distribution
    pub fn new(config: LadderConfig) -> ConfigResult<Self> {
        config.validate()?;
        let weights = Weights::geometric(config.level_count, config.amount_growth_ratio)?;
        Ok(Self { config, weights })
    }

    pub fn config(&self) -> &LadderConfig {
        &self.config
    }

    pub fn weights(&self) -> &Weights {
        &self.weights
    }

    /// Generate the ladder for one side.
    ///
    /// Levels are emitted in index order, index 0 closest to the target
    /// price and increasing index further away. Downstream
    /// activation-bound logic relies on this ordering.
    ///
    /// A zero `spread_scalar` or `spread_multiplier` collapses the ladder
    /// onto a single price; that is a legitimate low-volatility state,
    /// not an error.
    pub fn generate(
        &self,
        side: TradeSide,
        target_price: Price,
        target_amount_quote: Quantity,
        spread_multiplier: Decimal,
        risk: &RiskParams,
    ) -> ConfigResult<Vec<OrderLevelSpec>> {
        if target_price < Decimal::ZERO {
            return Err(ConfigError::InvalidLadderConfig(format!(
                "target_price must be >= 0, got {target_price}"
            )));
        }
        if target_amount_quote < Decimal::ZERO {
            return Err(ConfigError::InvalidLadderConfig(format!(
                "target_amount_quote must be >= 0, got {target_amount_quote}"
            )));
        }

        let step = self.config.spread_scalar * spread_multiplier;
        let levels = self
            .weights
            .as_slice()
            .iter()
            .enumerate()
            .map(|(n, weight)| {
                let offset = Decimal::from(n as u64) * step;
                let price = match side {
                    TradeSide::Buy => target_price * (Decimal::ONE - offset),
                    TradeSide::Sell => target_price * (Decimal::ONE + offset),
                };
                OrderLevelSpec {
                    level_index: n,
                    price,
                    amount_quote: target_amount_quote * weight * price,
                    side,
                    risk: risk.clone(),
                }
            })
            .collect();
        Ok(levels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn config(level_count: usize, spread_scalar: Decimal, ratio: Decimal) -> LadderConfig {
        LadderConfig {
            level_count,
            spread_scalar,
            amount_growth_ratio: ratio,
            activation_bounds: None,
        }
    }

    fn weight_sum(weights: &Weights) -> Decimal {
        weights.as_slice().iter().copied().sum()
    }

    #[test]
    fn test_equal_ratio_gives_equal_weights() {
        let weights = Weights::geometric(3, dec!(1)).unwrap();
        for w in weights.as_slice() {
            assert!((w - Decimal::ONE / dec!(3)).abs() < dec!(0.000000001));
        }
        assert!((weight_sum(&weights) - Decimal::ONE).abs() < dec!(0.000000001));
    }

    #[test]
    fn test_geometric_weights_ratio_two() {
        // Terms 1, 2, 4 -> weights 1/7, 2/7, 4/7
        let weights = Weights::geometric(3, dec!(2)).unwrap();
        let expected = [dec!(1), dec!(2), dec!(4)];
        for (w, e) in weights.as_slice().iter().zip(expected) {
            assert!((w - e / dec!(7)).abs() < dec!(0.000000001));
        }
    }

    #[test]
    fn test_weight_sum_within_tolerance() {
        for (count, ratio) in [(1, dec!(1.5)), (5, dec!(1.5)), (8, dec!(0.5)), (10, dec!(3))] {
            let weights = Weights::geometric(count, ratio).unwrap();
            assert_eq!(weights.len(), count);
            assert!(
                (weight_sum(&weights) - Decimal::ONE).abs() < dec!(0.000000001),
                "sum off for count={count} ratio={ratio}"
            );
        }
    }

    #[test]
    fn test_invalid_weights_config() {
        assert!(Weights::geometric(0, dec!(1.5)).is_err());
        assert!(Weights::geometric(3, Decimal::ZERO).is_err());
        assert!(Weights::geometric(3, dec!(-1)).is_err());
    }

    #[test]
    fn test_buy_ladder_prices() {
        // target 100, scalar 2, spread multiplier 0.01 -> 100, 98, 96
        let generator = LadderGenerator::new(config(3, dec!(2), dec!(1))).unwrap();
        let levels = generator
            .generate(
                TradeSide::Buy,
                dec!(100),
                dec!(30),
                dec!(0.01),
                &RiskParams::default(),
            )
            .unwrap();

        let prices: Vec<Decimal> = levels.iter().map(|l| l.price).collect();
        assert_eq!(prices, vec![dec!(100), dec!(98), dec!(96)]);
        assert!(levels.iter().all(|l| l.side == TradeSide::Buy));
    }

    #[test]
    fn test_sell_ladder_is_non_decreasing() {
        let generator = LadderGenerator::new(config(4, dec!(1.5), dec!(1.5))).unwrap();
        let levels = generator
            .generate(
                TradeSide::Sell,
                dec!(100),
                dec!(10),
                dec!(0.02),
                &RiskParams::default(),
            )
            .unwrap();

        for pair in levels.windows(2) {
            assert!(pair[1].price >= pair[0].price);
        }
        assert_eq!(levels[0].price, dec!(100));
    }

    #[test]
    fn test_amounts_follow_weights_times_price() {
        let generator = LadderGenerator::new(config(3, dec!(2), dec!(1))).unwrap();
        let levels = generator
            .generate(
                TradeSide::Buy,
                dec!(100),
                dec!(30),
                dec!(0.01),
                &RiskParams::default(),
            )
            .unwrap();

        // amount_quote_n = 30 * (1/3) * price_n
        let expected = [dec!(1000), dec!(980), dec!(960)];
        for (level, e) in levels.iter().zip(expected) {
            assert!((level.amount_quote - e).abs() < dec!(0.000001));
        }
    }

    #[test]
    fn test_single_level_degenerates_to_target() {
        let generator = LadderGenerator::new(config(1, dec!(2), dec!(1.5))).unwrap();
        let levels = generator
            .generate(
                TradeSide::Buy,
                dec!(250),
                dec!(4),
                dec!(0.05),
                &RiskParams::default(),
            )
            .unwrap();

        assert_eq!(levels.len(), 1);
        assert_eq!(levels[0].price, dec!(250));
        assert!((levels[0].amount_quote - dec!(1000)).abs() < dec!(0.000001));
    }

    #[test]
    fn test_zero_spread_collapses_ladder() {
        let generator = LadderGenerator::new(config(3, Decimal::ZERO, dec!(1.5))).unwrap();
        let levels = generator
            .generate(
                TradeSide::Sell,
                dec!(100),
                dec!(10),
                dec!(0.02),
                &RiskParams::default(),
            )
            .unwrap();
        assert!(levels.iter().all(|l| l.price == dec!(100)));
    }

    #[test]
    fn test_negative_inputs_rejected() {
        let generator = LadderGenerator::new(config(3, dec!(2), dec!(1.5))).unwrap();
        let risk = RiskParams::default();
        assert!(
            generator
                .generate(TradeSide::Buy, dec!(-1), dec!(10), dec!(0.01), &risk)
                .is_err()
        );
        assert!(
            generator
                .generate(TradeSide::Buy, dec!(100), dec!(-10), dec!(0.01), &risk)
                .is_err()
        );
    }

    #[test]
    fn test_invalid_config_rejected_at_construction() {
        assert!(LadderGenerator::new(config(0, dec!(2), dec!(1.5))).is_err());
        assert!(LadderGenerator::new(config(3, dec!(-2), dec!(1.5))).is_err());
        assert!(LadderGenerator::new(config(3, dec!(2), Decimal::ZERO)).is_err());
    }
}
