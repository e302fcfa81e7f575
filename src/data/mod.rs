pub mod traits;
pub mod types;
pub mod yahoo;

pub use traits::{MarketDataProvider, ProviderResult};
pub use types::{RawMarketRecord, RawNewsItem, RecommendationRow, TickerSymbol};
pub use yahoo::YahooClient;
