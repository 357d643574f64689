//! Level identifiers
//!
//! A level id names one entry of the per-side spread ladder, e.g. `buy_0`
//! is the first buy level. The side is recovered from the id when the
//! executor config for that level is requested.

use crate::side::TradeSide;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier for a single ladder level (`side` + zero-based index)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LevelId {
    pub side: TradeSide,
    pub index: usize,
}

impl LevelId {
    pub fn new(side: TradeSide, index: usize) -> Self {
        Self { side, index }
    }
}

impl fmt::Display for LevelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.side.as_str(), self.index)
    }
}

/// Error parsing a level id string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelIdError(pub String);

impl fmt::Display for ParseLevelIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid level id: {}", self.0)
    }
}

impl std::error::Error for ParseLevelIdError {}

impl FromStr for LevelId {
    type Err = ParseLevelIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (side, index) = s
            .rsplit_once('_')
            .ok_or_else(|| ParseLevelIdError(s.to_string()))?;
        let side = match side {
            "buy" => TradeSide::Buy,
            "sell" => TradeSide::Sell,
            _ => return Err(ParseLevelIdError(s.to_string())),
        };
        let index = index
            .parse::<usize>()
            .map_err(|_| ParseLevelIdError(s.to_string()))?;
        Ok(Self { side, index })
    }
}
