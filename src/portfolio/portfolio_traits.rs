use async_trait::async_trait;

use super::portfolio_errors::PortfolioError;
use super::portfolio_model::Holding;

/// Seam to the holdings store (CRUD collaborator).
#[async_trait]
pub trait HoldingRepositoryTrait: Send + Sync {
    async fn list_holdings(&self) -> Result<Vec<Holding>, PortfolioError>;
    async fn insert_holding(&self, holding: &Holding) -> Result<Holding, PortfolioError>;
    async fn delete_holding(&self, id: &str) -> Result<(), PortfolioError>;
}
