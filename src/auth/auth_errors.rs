use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Not signed in")]
    NotSignedIn,

    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    #[error("Provider error: {0}")]
    ProviderError(String),
}
