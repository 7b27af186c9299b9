use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScreenError {
    #[error("Must sign in to save screens")]
    Unauthenticated,

    #[error("Screen not found: {0}")]
    NotFound(String),

    #[error("Screen does not belong to the current user")]
    NotOwner,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Repository error: {0}")]
    Repository(String),
}
