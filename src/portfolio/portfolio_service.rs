use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use log::{debug, info};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::market_data::normalize_symbol;

use super::portfolio_errors::PortfolioError;
use super::portfolio_model::{Holding, HoldingValuation, NewHolding, PortfolioSummary};
use super::portfolio_traits::HoldingRepositoryTrait;
use super::valuation_calculator::value_portfolio;

/// Service managing the user's lots and their derived valuation.
pub struct PortfolioService {
    repository: Arc<dyn HoldingRepositoryTrait>,
}

impl PortfolioService {
    pub fn new(repository: Arc<dyn HoldingRepositoryTrait>) -> Self {
        Self { repository }
    }

    /// Validates and stores a new lot. Validation failures are rejected
    /// before any repository call is made.
    pub async fn add_holding(&self, new_holding: NewHolding) -> Result<Holding, PortfolioError> {
        let symbol = normalize_symbol(&new_holding.symbol);
        if symbol.is_empty() {
            return Err(PortfolioError::InvalidInput(
                "Symbol must not be empty".to_string(),
            ));
        }
        if new_holding.quantity == 0 {
            return Err(PortfolioError::InvalidInput(
                "Quantity must be a positive integer".to_string(),
            ));
        }
        if new_holding.buy_price <= Decimal::ZERO {
            return Err(PortfolioError::InvalidInput(
                "Buy price must be positive".to_string(),
            ));
        }

        let holding = Holding {
            id: Uuid::new_v4().to_string(),
            symbol,
            quantity: new_holding.quantity,
            buy_price: new_holding.buy_price,
            buy_date: new_holding
                .buy_date
                .unwrap_or_else(|| Utc::now().date_naive()),
            created_at: Utc::now(),
        };

        info!(
            "Adding holding {} x{} @ {}",
            holding.symbol, holding.quantity, holding.buy_price
        );
        self.repository.insert_holding(&holding).await
    }

    pub async fn delete_holding(&self, id: &str) -> Result<(), PortfolioError> {
        info!("Deleting holding {}", id);
        self.repository.delete_holding(id).await
    }

    pub async fn list_holdings(&self) -> Result<Vec<Holding>, PortfolioError> {
        self.repository.list_holdings().await
    }

    /// Lists all lots valued against the given price map, plus the
    /// portfolio summary. Recomputed on every call.
    pub async fn holdings_with_valuation(
        &self,
        prices: &HashMap<String, Decimal>,
    ) -> Result<(Vec<HoldingValuation>, PortfolioSummary), PortfolioError> {
        let holdings = self.repository.list_holdings().await?;
        debug!("Valuing {} holdings", holdings.len());
        Ok(value_portfolio(&holdings, prices))
    }
}
