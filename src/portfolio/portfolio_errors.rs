use thiserror::Error;

#[derive(Error, Debug)]
pub enum PortfolioError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Holding not found: {0}")]
    NotFound(String),

    #[error("Repository error: {0}")]
    Repository(String),
}
