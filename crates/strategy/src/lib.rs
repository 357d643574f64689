//! Midas Strategy
//!
//! The signal-to-order-ladder pipeline of the Midas market-making system:
//! - `SignalProcessor`: candles + indicator pair -> shifted reference price
//!   and volatility-scaled spread multiplier
//! - `LadderGenerator`: one target price/amount -> a geometric DCA ladder
//!   of limit-order levels per side
//! - `MarketMakingConfig`: static configuration, validated once
//!
//! ## Data flow
//!
//! ```text
//! candle feed ──► SignalProcessor ──► (reference_price, spread_multiplier)
//!                                              │ per side/level request
//!                                              ▼
//!                                       LadderGenerator
//!                                              │
//!                                              ▼
//!                                    Vec<OrderLevelSpec> ──► executor
//! ```

pub mod config;
pub mod ladder;
pub mod signal;

// Re-export main types
pub use config::MarketMakingConfig;
pub use ladder::{LadderConfig, LadderGenerator, Weights};
pub use signal::{LOOKBACK_MARGIN, SignalOutput, SignalProcessor};
