use async_trait::async_trait;

use super::watchlist_errors::WatchlistError;
use super::watchlist_model::WatchlistEntry;

/// Seam to the watchlist row store. Uniqueness of `(user_id, symbol)`
/// is enforced server-side; `insert_entry` reports a violation as
/// `WatchlistError::DuplicateEntry`.
#[async_trait]
pub trait WatchlistRepositoryTrait: Send + Sync {
    async fn insert_entry(&self, entry: &WatchlistEntry) -> Result<WatchlistEntry, WatchlistError>;
    async fn find_entry(
        &self,
        user_id: &str,
        symbol: &str,
    ) -> Result<Option<WatchlistEntry>, WatchlistError>;
    async fn delete_entry(&self, id: &str) -> Result<(), WatchlistError>;
    async fn list_entries(&self, user_id: &str) -> Result<Vec<WatchlistEntry>, WatchlistError>;
}
