use std::sync::{Arc, Mutex, RwLock};

use log::{debug, warn};

use super::auth_errors::AuthError;
use super::auth_model::{Credentials, UserSession};
use super::auth_traits::AuthProviderTrait;

type SessionListener = Arc<dyn Fn(Option<&UserSession>) + Send + Sync>;

/// Explicit session state with a defined lifecycle: `init` on mount,
/// `subscribe` for change events, `teardown` on unmount. No ambient
/// global auth state anywhere else in the crate.
pub struct SessionManager {
    provider: Arc<dyn AuthProviderTrait>,
    session: RwLock<Option<UserSession>>,
    listeners: Mutex<Vec<SessionListener>>,
}

impl SessionManager {
    pub fn new(provider: Arc<dyn AuthProviderTrait>) -> Self {
        Self {
            provider,
            session: RwLock::new(None),
            listeners: Mutex::new(Vec::new()),
        }
    }

    /// Loads the current user from the provider. Called once when the
    /// consuming view mounts.
    pub async fn init(&self) -> Result<(), AuthError> {
        let user = self.provider.current_user().await?;
        debug!(
            "Session initialized, signed in: {}",
            user.is_some()
        );
        self.replace_session(user);
        Ok(())
    }

    /// Registers a listener invoked on every session change.
    pub fn subscribe<F>(&self, listener: F)
    where
        F: Fn(Option<&UserSession>) + Send + Sync + 'static,
    {
        let mut listeners = self.listeners.lock().unwrap_or_else(|e| e.into_inner());
        listeners.push(Arc::new(listener));
    }

    /// Drops all listeners and the cached session.
    pub fn teardown(&self) {
        let mut listeners = self.listeners.lock().unwrap_or_else(|e| e.into_inner());
        listeners.clear();
        drop(listeners);
        self.replace_session(None);
    }

    /// Snapshot of the signed-in user, if any.
    pub fn current_user(&self) -> Option<UserSession> {
        self.session
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Signed-in session or a fast local failure, no network call issued.
    pub fn require_user(&self) -> Result<UserSession, AuthError> {
        self.current_user().ok_or(AuthError::NotSignedIn)
    }

    pub async fn sign_in(&self, credentials: &Credentials) -> Result<UserSession, AuthError> {
        let user = self.provider.sign_in(credentials).await?;
        self.replace_session(Some(user.clone()));
        Ok(user)
    }

    pub async fn sign_up(&self, credentials: &Credentials) -> Result<UserSession, AuthError> {
        let user = self.provider.sign_up(credentials).await?;
        self.replace_session(Some(user.clone()));
        Ok(user)
    }

    pub async fn sign_out(&self) -> Result<(), AuthError> {
        if let Err(e) = self.provider.sign_out().await {
            warn!("Provider sign-out failed, clearing local session anyway: {}", e);
        }
        self.replace_session(None);
        Ok(())
    }

    pub async fn reset_password(&self, email: &str) -> Result<(), AuthError> {
        self.provider.reset_password(email).await
    }

    fn replace_session(&self, user: Option<UserSession>) {
        {
            let mut session = self.session.write().unwrap_or_else(|e| e.into_inner());
            *session = user.clone();
        }
        // Notified outside the lock so a listener can subscribe or
        // tear down re-entrantly.
        let snapshot: Vec<SessionListener> = self
            .listeners
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone();
        for listener in &snapshot {
            listener(user.as_ref());
        }
    }
}
