use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::market_data::market_data_errors::MarketDataError;
use crate::market_data::market_data_model::{FundamentalRecord, LiveQuote, StockDetail};
use crate::market_data::market_data_traits::MarketDataProviderTrait;
use crate::screener::FilterPatch;

/// REST provider backed by the dashboard's own stocks API.
pub struct ApiProvider {
    client: Client,
    base_url: String,
}

#[derive(Deserialize)]
struct StocksEnvelope {
    stocks: Vec<FundamentalRecord>,
}

#[derive(Deserialize)]
struct QuotesEnvelope {
    stocks: Vec<LiveQuote>,
}

#[derive(Serialize)]
struct QuoteBatchRequest<'a> {
    symbols: &'a [String],
}

#[derive(Serialize)]
struct SearchRequest<'a> {
    query: &'a str,
}

#[derive(Deserialize)]
struct SearchEnvelope {
    filters: FilterPatch,
}

impl ApiProvider {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl MarketDataProviderTrait for ApiProvider {
    async fn fetch_fundamentals(&self) -> Result<Vec<FundamentalRecord>, MarketDataError> {
        let url = self.url("/api/stocks/");
        debug!("Fetching fundamentals from {}", url);
        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(MarketDataError::ProviderError(format!(
                "Fundamentals fetch failed: HTTP {}",
                response.status()
            )));
        }
        let envelope: StocksEnvelope = response
            .json()
            .await
            .map_err(|e| MarketDataError::ParsingError(e.to_string()))?;
        Ok(envelope.stocks)
    }

    async fn fetch_quotes(&self, symbols: &[String]) -> Result<Vec<LiveQuote>, MarketDataError> {
        let url = self.url("/api/stocks/data");
        debug!("Fetching {} quotes from {}", symbols.len(), url);
        let response = self
            .client
            .post(&url)
            .json(&QuoteBatchRequest { symbols })
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(MarketDataError::ProviderError(format!(
                "Quote fetch failed: HTTP {}",
                response.status()
            )));
        }
        let envelope: QuotesEnvelope = response
            .json()
            .await
            .map_err(|e| MarketDataError::ParsingError(e.to_string()))?;
        Ok(envelope.stocks)
    }

    async fn fetch_detail(&self, symbol: &str) -> Result<StockDetail, MarketDataError> {
        let url = self.url(&format!("/api/stocks/detail/{}", symbol));
        debug!("Fetching detail from {}", url);
        let response = self.client.get(&url).send().await?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(MarketDataError::NotFound(symbol.to_string()));
        }
        if !response.status().is_success() {
            return Err(MarketDataError::ProviderError(format!(
                "Detail fetch failed: HTTP {}",
                response.status()
            )));
        }
        response
            .json()
            .await
            .map_err(|e| MarketDataError::ParsingError(e.to_string()))
    }

    async fn translate_search(&self, query: &str) -> Result<FilterPatch, MarketDataError> {
        let url = self.url("/api/stocks/search");
        debug!("Translating search query via {}", url);
        let response = self
            .client
            .post(&url)
            .json(&SearchRequest { query })
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(MarketDataError::ProviderError(format!(
                "Search translation failed: HTTP {}",
                response.status()
            )));
        }
        let envelope: SearchEnvelope = response
            .json()
            .await
            .map_err(|e| MarketDataError::ParsingError(e.to_string()))?;
        Ok(envelope.filters)
    }
}
