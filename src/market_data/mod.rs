pub(crate) mod market_data_errors;
pub(crate) mod market_data_model;
pub(crate) mod market_data_service;
pub(crate) mod market_data_traits;
pub(crate) mod providers;
pub(crate) mod quote_merger;

// Re-export the public interface
pub use market_data_errors::MarketDataError;
pub use market_data_model::{
    normalize_symbol, FundamentalRecord, LiveQuote, MergedRecord, StockDetail,
};
pub use market_data_service::{MarketDataService, QuotePoller};
pub use market_data_traits::MarketDataProviderTrait;
pub use providers::ApiProvider;
pub use quote_merger::merge_quotes;

#[cfg(test)]
pub(crate) mod tests;
