use async_trait::async_trait;

use super::screens_errors::ScreenError;
use super::screens_model::SavedScreen;

/// Seam to the saved-screen store (CRUD keyed by owner).
#[async_trait]
pub trait ScreenRepositoryTrait: Send + Sync {
    async fn insert_screen(&self, screen: &SavedScreen) -> Result<SavedScreen, ScreenError>;
    async fn find_screen(&self, id: &str) -> Result<Option<SavedScreen>, ScreenError>;
    async fn list_screens(&self, owner_id: &str) -> Result<Vec<SavedScreen>, ScreenError>;
    async fn update_screen(&self, screen: &SavedScreen) -> Result<SavedScreen, ScreenError>;
    async fn delete_screen(&self, id: &str) -> Result<(), ScreenError>;
}
