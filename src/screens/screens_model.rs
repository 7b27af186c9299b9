use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::screener::{FilterState, SelectionSet, SortState};

/// The screening view state a saved screen captures. Persisted as an
/// opaque blob by the store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenConfig {
    pub filters: FilterState,
    pub sort: SortState,
    pub selection: SelectionSet,
}

impl ScreenConfig {
    /// Serializes the config to the opaque blob the store persists.
    pub fn to_json(&self) -> crate::errors::Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Restores a config from its stored blob.
    pub fn from_json(raw: &str) -> crate::errors::Result<ScreenConfig> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// A named screen configuration owned by one user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedScreen {
    pub id: String,
    pub owner_id: String,
    pub name: String,
    pub config: ScreenConfig,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SavedScreen {
    pub fn new(owner_id: &str, name: &str, config: ScreenConfig) -> Self {
        let now = Utc::now();
        SavedScreen {
            id: Uuid::new_v4().to_string(),
            owner_id: owner_id.to_string(),
            name: name.to_string(),
            config,
            created_at: now,
            updated_at: now,
        }
    }
}
