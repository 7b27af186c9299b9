use thiserror::Error;

#[derive(Error, Debug)]
pub enum WatchlistError {
    /// Toggle attempted without a signed-in user. Raised locally,
    /// before any repository call.
    #[error("Must sign in to use the watchlist")]
    Unauthenticated,

    /// Uniqueness violation from the store. An expected, recoverable
    /// outcome of concurrent inserts, not a failure.
    #[error("Watchlist entry already exists for {symbol}")]
    DuplicateEntry { symbol: String },

    #[error("Watchlist entry not found: {0}")]
    NotFound(String),

    #[error("Repository error: {0}")]
    Repository(String),
}
