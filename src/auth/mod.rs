pub(crate) mod auth_errors;
pub(crate) mod auth_model;
pub(crate) mod auth_traits;
pub(crate) mod session_manager;

pub use auth_errors::AuthError;
pub use auth_model::{Credentials, UserSession};
pub use auth_traits::AuthProviderTrait;
pub use session_manager::SessionManager;
