pub(crate) mod portfolio_errors;
pub(crate) mod portfolio_model;
pub(crate) mod portfolio_service;
pub(crate) mod portfolio_traits;
pub(crate) mod valuation_calculator;

// Re-export the public interface
pub use portfolio_errors::PortfolioError;
pub use portfolio_model::{Holding, HoldingValuation, NewHolding, PortfolioSummary};
pub use portfolio_service::PortfolioService;
pub use portfolio_traits::HoldingRepositoryTrait;
pub use valuation_calculator::{price_map_from_merged, value_holding, value_portfolio};

#[cfg(test)]
pub(crate) mod tests;
