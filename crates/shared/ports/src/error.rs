use thiserror::Error;

/// Errors from the signal pipeline
///
/// Both variants are recoverable: the controller skips the cycle and
/// retries on the next tick.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SignalError {
    #[error("insufficient candle history: need {required}, have {available}")]
    InsufficientHistory { required: usize, available: usize },

    #[error("indicator violated its contract: {0}")]
    InvalidIndicatorOutput(String),
}

pub type SignalResult<T> = std::result::Result<T, SignalError>;

/// Errors from static configuration validation
///
/// Fatal at construction: a malformed config is rejected, never silently
/// coerced to a default.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid ladder config: {0}")]
    InvalidLadderConfig(String),
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Errors from the market-data provider
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MarketDataError {
    #[error("candle feed unavailable for {trading_pair}@{connector}: {reason}")]
    CandlesUnavailable {
        connector: String,
        trading_pair: String,
        reason: String,
    },

    #[error("no price available for {trading_pair}@{connector}")]
    PriceUnavailable {
        connector: String,
        trading_pair: String,
    },
}

pub type MarketDataResult<T> = std::result::Result<T, MarketDataError>;
