use async_trait::async_trait;

use super::auth_errors::AuthError;
use super::auth_model::{Credentials, UserSession};

/// Seam to the managed auth collaborator. The engine never talks to the
/// auth backend directly; it only consumes this surface.
#[async_trait]
pub trait AuthProviderTrait: Send + Sync {
    async fn current_user(&self) -> Result<Option<UserSession>, AuthError>;
    async fn sign_in(&self, credentials: &Credentials) -> Result<UserSession, AuthError>;
    async fn sign_up(&self, credentials: &Credentials) -> Result<UserSession, AuthError>;
    async fn sign_out(&self) -> Result<(), AuthError>;
    async fn reset_password(&self, email: &str) -> Result<(), AuthError>;
}
