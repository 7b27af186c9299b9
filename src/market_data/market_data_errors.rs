use thiserror::Error;

#[derive(Error, Debug)]
pub enum MarketDataError {
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Provider error: {0}")]
    ProviderError(String),

    #[error("Parsing error: {0}")]
    ParsingError(String),

    #[error("Not found: {0}")]
    NotFound(String),
}
