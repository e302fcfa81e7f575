use async_trait::async_trait;

use super::types::{RawMarketRecord, TickerSymbol};
use crate::error::ProviderError;

pub type ProviderResult<T> = Result<T, ProviderError>;

#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    fn name(&self) -> &'static str;

    /// Recommendations and recent news for one ticker.
    async fn fetch(&self, symbol: &TickerSymbol) -> ProviderResult<RawMarketRecord>;
}
