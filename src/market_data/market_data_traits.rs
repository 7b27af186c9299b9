use async_trait::async_trait;

use super::market_data_errors::MarketDataError;
use super::market_data_model::{FundamentalRecord, LiveQuote, StockDetail};
use crate::screener::FilterPatch;

/// Seam to the quote/fundamentals backend.
#[async_trait]
pub trait MarketDataProviderTrait: Send + Sync {
    /// Full fundamentals universe.
    async fn fetch_fundamentals(&self) -> Result<Vec<FundamentalRecord>, MarketDataError>;

    /// Live quote batch for the given symbols.
    async fn fetch_quotes(&self, symbols: &[String]) -> Result<Vec<LiveQuote>, MarketDataError>;

    /// Fundamentals plus detail extras for one symbol.
    async fn fetch_detail(&self, symbol: &str) -> Result<StockDetail, MarketDataError>;

    /// Natural-language query translated to a partial filter state. The
    /// translation itself is opaque; only the resulting object is used.
    async fn translate_search(&self, query: &str) -> Result<FilterPatch, MarketDataError>;
}
