use std::sync::Arc;

use chrono::Utc;
use log::info;

use crate::auth::UserSession;

use super::screens_errors::ScreenError;
use super::screens_model::{SavedScreen, ScreenConfig};
use super::screens_traits::ScreenRepositoryTrait;

/// Service managing named, per-user screen configurations. Every
/// operation requires a signed-in user and fails locally otherwise.
pub struct ScreenService {
    repository: Arc<dyn ScreenRepositoryTrait>,
}

impl ScreenService {
    pub fn new(repository: Arc<dyn ScreenRepositoryTrait>) -> Self {
        Self { repository }
    }

    pub async fn save_screen(
        &self,
        user: Option<&UserSession>,
        name: &str,
        config: ScreenConfig,
    ) -> Result<SavedScreen, ScreenError> {
        let user = user.ok_or(ScreenError::Unauthenticated)?;
        let name = name.trim();
        if name.is_empty() {
            return Err(ScreenError::InvalidInput(
                "Screen name must not be empty".to_string(),
            ));
        }
        let screen = SavedScreen::new(&user.user_id, name, config);
        info!("Saving screen '{}' for {}", name, user.user_id);
        self.repository.insert_screen(&screen).await
    }

    pub async fn list_screens(
        &self,
        user: Option<&UserSession>,
    ) -> Result<Vec<SavedScreen>, ScreenError> {
        let user = user.ok_or(ScreenError::Unauthenticated)?;
        self.repository.list_screens(&user.user_id).await
    }

    pub async fn update_screen(
        &self,
        user: Option<&UserSession>,
        id: &str,
        name: Option<&str>,
        config: Option<ScreenConfig>,
    ) -> Result<SavedScreen, ScreenError> {
        let user = user.ok_or(ScreenError::Unauthenticated)?;
        let mut screen = self.owned_screen(user, id).await?;

        if let Some(name) = name {
            let name = name.trim();
            if name.is_empty() {
                return Err(ScreenError::InvalidInput(
                    "Screen name must not be empty".to_string(),
                ));
            }
            screen.name = name.to_string();
        }
        if let Some(config) = config {
            screen.config = config;
        }
        screen.updated_at = Utc::now();
        self.repository.update_screen(&screen).await
    }

    pub async fn delete_screen(
        &self,
        user: Option<&UserSession>,
        id: &str,
    ) -> Result<(), ScreenError> {
        let user = user.ok_or(ScreenError::Unauthenticated)?;
        self.owned_screen(user, id).await?;
        info!("Deleting screen {} for {}", id, user.user_id);
        self.repository.delete_screen(id).await
    }

    async fn owned_screen(
        &self,
        user: &UserSession,
        id: &str,
    ) -> Result<SavedScreen, ScreenError> {
        let screen = self
            .repository
            .find_screen(id)
            .await?
            .ok_or_else(|| ScreenError::NotFound(id.to_string()))?;
        if screen.owner_id != user.user_id {
            return Err(ScreenError::NotOwner);
        }
        Ok(screen)
    }
}
