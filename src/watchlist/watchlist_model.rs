use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::market_data::normalize_symbol;

/// One tracked symbol for one user. The store enforces at most one
/// entry per `(user_id, symbol)` pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchlistEntry {
    pub id: String,
    pub user_id: String,
    pub symbol: String,
    pub added_at: DateTime<Utc>,
}

impl WatchlistEntry {
    pub fn new(user_id: &str, symbol: &str) -> Self {
        WatchlistEntry {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            symbol: normalize_symbol(symbol),
            added_at: Utc::now(),
        }
    }
}

/// Membership state of a `(user, symbol)` pair after a toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WatchlistStatus {
    Present,
    Absent,
}
