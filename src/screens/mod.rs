pub(crate) mod screens_errors;
pub(crate) mod screens_model;
pub(crate) mod screens_service;
pub(crate) mod screens_traits;

// Re-export the public interface
pub use screens_errors::ScreenError;
pub use screens_model::{SavedScreen, ScreenConfig};
pub use screens_service::ScreenService;
pub use screens_traits::ScreenRepositoryTrait;
