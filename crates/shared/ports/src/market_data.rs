use crate::error::MarketDataResult;
use async_trait::async_trait;
use midas_core::{CandleSeries, Price};

/// Which price to query from the provider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceType {
    /// Midpoint between best bid and best ask
    MidPrice,
    BestBid,
    BestAsk,
    LastTrade,
}

/// Port for read-only market data access
///
/// The decision core never talks to an exchange directly; it consumes a
/// bounded candle window and a current price through this seam.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Fetch the trailing `max_records` candles for a trading pair,
    /// oldest first
    async fn get_candles(
        &self,
        connector: &str,
        trading_pair: &str,
        interval: &str,
        max_records: usize,
    ) -> MarketDataResult<CandleSeries>;

    /// Current price of the given type for a trading pair
    async fn get_price(
        &self,
        connector: &str,
        trading_pair: &str,
        price_type: PriceType,
    ) -> MarketDataResult<Price>;
}
