//! Midas Core Domain
//!
//! Pure domain types for the Midas market-making system.
//! This crate contains no async, no I/O, and is 100% unit testable.

pub mod candles;
pub mod executor;
pub mod level_id;
pub mod side;
pub mod values;

// Re-export commonly used types at crate root
pub use candles::{Candle, CandleSeries};
pub use executor::{DcaExecutorConfig, OrderLevelSpec, RiskParams, TrailingStop};
pub use level_id::LevelId;
pub use side::TradeSide;
pub use values::{Price, Quantity, Symbol, Timestamp};
