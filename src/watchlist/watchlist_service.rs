use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use log::{debug, info};

use crate::auth::UserSession;
use crate::market_data::normalize_symbol;

use super::watchlist_errors::WatchlistError;
use super::watchlist_model::{WatchlistEntry, WatchlistStatus};
use super::watchlist_traits::WatchlistRepositoryTrait;

/// Two-state membership toggle per `(user, symbol)`: absent → present
/// via insert, present → absent via delete. Tolerant of double-click
/// and concurrent-tab races: a duplicate insert resolves to `Present`
/// and a missing row on delete resolves to `Absent`.
pub struct WatchlistService {
    repository: Arc<dyn WatchlistRepositoryTrait>,
    in_flight: DashMap<(String, String), ()>,
}

impl WatchlistService {
    pub fn new(repository: Arc<dyn WatchlistRepositoryTrait>) -> Self {
        Self {
            repository,
            in_flight: DashMap::new(),
        }
    }

    /// Toggles membership. Requires a signed-in user; an
    /// unauthenticated attempt fails fast with no repository call. A
    /// second toggle for the same row while one is in flight is
    /// ignored: it reports the current membership without issuing
    /// another mutation.
    pub async fn toggle(
        &self,
        user: Option<&UserSession>,
        symbol: &str,
    ) -> Result<WatchlistStatus, WatchlistError> {
        let user = user.ok_or(WatchlistError::Unauthenticated)?;
        let symbol = normalize_symbol(symbol);
        let key = (user.user_id.clone(), symbol.clone());

        // The entry guard holds a shard lock; it is resolved to a bool
        // here so it is never held across an await.
        let acquired = match self.in_flight.entry(key.clone()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(());
                true
            }
        };
        if !acquired {
            debug!(
                "Toggle for {}/{} ignored, previous toggle still in flight",
                user.user_id, symbol
            );
            return self.membership(&user.user_id, &symbol).await;
        }

        let result = self.toggle_inner(&user.user_id, &symbol).await;
        self.in_flight.remove(&key);
        result
    }

    async fn toggle_inner(
        &self,
        user_id: &str,
        symbol: &str,
    ) -> Result<WatchlistStatus, WatchlistError> {
        match self.repository.find_entry(user_id, symbol).await? {
            Some(entry) => match self.repository.delete_entry(&entry.id).await {
                Ok(()) => {
                    info!("Removed {} from watchlist of {}", symbol, user_id);
                    Ok(WatchlistStatus::Absent)
                }
                Err(WatchlistError::NotFound(_)) => {
                    debug!("Entry for {} already removed concurrently", symbol);
                    Ok(WatchlistStatus::Absent)
                }
                Err(e) => Err(e),
            },
            None => {
                let entry = WatchlistEntry::new(user_id, symbol);
                match self.repository.insert_entry(&entry).await {
                    Ok(_) => {
                        info!("Added {} to watchlist of {}", symbol, user_id);
                        Ok(WatchlistStatus::Present)
                    }
                    Err(WatchlistError::DuplicateEntry { .. }) => {
                        debug!("Entry for {} inserted concurrently, treating as present", symbol);
                        Ok(WatchlistStatus::Present)
                    }
                    Err(e) => Err(e),
                }
            }
        }
    }

    pub async fn is_watched(
        &self,
        user: Option<&UserSession>,
        symbol: &str,
    ) -> Result<bool, WatchlistError> {
        let user = user.ok_or(WatchlistError::Unauthenticated)?;
        let symbol = normalize_symbol(symbol);
        Ok(self
            .membership(&user.user_id, &symbol)
            .await?
            == WatchlistStatus::Present)
    }

    pub async fn list(
        &self,
        user: Option<&UserSession>,
    ) -> Result<Vec<WatchlistEntry>, WatchlistError> {
        let user = user.ok_or(WatchlistError::Unauthenticated)?;
        self.repository.list_entries(&user.user_id).await
    }

    async fn membership(
        &self,
        user_id: &str,
        symbol: &str,
    ) -> Result<WatchlistStatus, WatchlistError> {
        Ok(match self.repository.find_entry(user_id, symbol).await? {
            Some(_) => WatchlistStatus::Present,
            None => WatchlistStatus::Absent,
        })
    }
}
