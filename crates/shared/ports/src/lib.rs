//! Midas Ports
//!
//! Port definitions (traits) for the Midas market-making system.
//! These define the boundaries between the decision core and its
//! collaborators: the market-data feed, the indicator library, and time.

mod clock;
mod error;
mod indicators;
mod market_data;

pub use clock::Clock;
pub use error::{
    ConfigError, ConfigResult, MarketDataError, MarketDataResult, SignalError, SignalResult,
};
pub use indicators::{IndicatorEngine, MacdOutput};
pub use market_data::{MarketDataProvider, PriceType};
