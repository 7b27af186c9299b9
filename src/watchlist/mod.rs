pub(crate) mod watchlist_errors;
pub(crate) mod watchlist_model;
pub(crate) mod watchlist_service;
pub(crate) mod watchlist_traits;

// Re-export the public interface
pub use watchlist_errors::WatchlistError;
pub use watchlist_model::{WatchlistEntry, WatchlistStatus};
pub use watchlist_service::WatchlistService;
pub use watchlist_traits::WatchlistRepositoryTrait;
