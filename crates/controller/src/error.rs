use midas_ports::{ConfigError, MarketDataError, SignalError};
use thiserror::Error;

/// Controller-level error, aggregating the seam errors
///
/// `Config` is fatal at construction; the rest are recoverable and mean
/// "skip this cycle, retry next tick".
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ControllerError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    MarketData(#[from] MarketDataError),

    #[error(transparent)]
    Signal(#[from] SignalError),

    #[error("no processed data: update_processed_data has not run this cycle")]
    NotReady,

    #[error("unknown level id {0}: no spread configured at that index")]
    UnknownLevel(String),
}

pub type ControllerResult<T> = std::result::Result<T, ControllerError>;
