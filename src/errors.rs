use thiserror::Error;

use crate::auth::AuthError;
use crate::market_data::MarketDataError;
use crate::portfolio::PortfolioError;
use crate::screens::ScreenError;
use crate::watchlist::WatchlistError;

// Type alias for Result using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the screening and valuation engine
#[derive(Error, Debug)]
pub enum Error {
    #[error("Market data operation failed: {0}")]
    MarketData(#[from] MarketDataError),

    #[error("Portfolio operation failed: {0}")]
    Portfolio(#[from] PortfolioError),

    #[error("Watchlist operation failed: {0}")]
    Watchlist(#[from] WatchlistError),

    #[error("Screen operation failed: {0}")]
    Screen(#[from] ScreenError),

    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    #[error("Input validation failed: {0}")]
    Validation(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Validation(err.to_string())
    }
}
