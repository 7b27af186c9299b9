use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use rust_decimal_macros::dec;

use crate::portfolio::portfolio_errors::PortfolioError;
use crate::portfolio::portfolio_model::{Holding, NewHolding};
use crate::portfolio::portfolio_service::PortfolioService;
use crate::portfolio::portfolio_traits::HoldingRepositoryTrait;

#[derive(Default)]
struct InMemoryHoldingRepository {
    holdings: Mutex<Vec<Holding>>,
    insert_calls: Mutex<u32>,
}

#[async_trait]
impl HoldingRepositoryTrait for InMemoryHoldingRepository {
    async fn list_holdings(&self) -> Result<Vec<Holding>, PortfolioError> {
        Ok(self.holdings.lock().unwrap().clone())
    }

    async fn insert_holding(&self, holding: &Holding) -> Result<Holding, PortfolioError> {
        *self.insert_calls.lock().unwrap() += 1;
        self.holdings.lock().unwrap().push(holding.clone());
        Ok(holding.clone())
    }

    async fn delete_holding(&self, id: &str) -> Result<(), PortfolioError> {
        let mut holdings = self.holdings.lock().unwrap();
        let before = holdings.len();
        holdings.retain(|h| h.id != id);
        if holdings.len() == before {
            return Err(PortfolioError::NotFound(id.to_string()));
        }
        Ok(())
    }
}

fn service() -> (Arc<InMemoryHoldingRepository>, PortfolioService) {
    let repository = Arc::new(InMemoryHoldingRepository::default());
    let service = PortfolioService::new(
        Arc::clone(&repository) as Arc<dyn HoldingRepositoryTrait>
    );
    (repository, service)
}

fn new_holding(symbol: &str, quantity: u32) -> NewHolding {
    NewHolding {
        symbol: symbol.to_string(),
        quantity,
        buy_price: dec!(100),
        buy_date: None,
    }
}

#[tokio::test]
async fn add_normalizes_the_symbol_and_assigns_an_id() {
    let (_, service) = service();

    let holding = service.add_holding(new_holding(" tcs ", 10)).await.unwrap();
    assert_eq!(holding.symbol, "TCS");
    assert!(!holding.id.is_empty());

    let listed = service.list_holdings().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0], holding);
}

#[tokio::test]
async fn invalid_input_never_reaches_the_repository() {
    let (repository, service) = service();

    let empty_symbol = service.add_holding(new_holding("   ", 10)).await;
    assert!(matches!(empty_symbol, Err(PortfolioError::InvalidInput(_))));

    let zero_quantity = service.add_holding(new_holding("TCS", 0)).await;
    assert!(matches!(zero_quantity, Err(PortfolioError::InvalidInput(_))));

    let negative_price = service
        .add_holding(NewHolding {
            buy_price: dec!(-5),
            ..new_holding("TCS", 10)
        })
        .await;
    assert!(matches!(negative_price, Err(PortfolioError::InvalidInput(_))));

    assert_eq!(*repository.insert_calls.lock().unwrap(), 0);
}

#[tokio::test]
async fn delete_removes_the_lot() {
    let (_, service) = service();
    let holding = service.add_holding(new_holding("ITC", 50)).await.unwrap();

    service.delete_holding(&holding.id).await.unwrap();
    assert!(service.list_holdings().await.unwrap().is_empty());

    let missing = service.delete_holding(&holding.id).await;
    assert!(matches!(missing, Err(PortfolioError::NotFound(_))));
}

#[tokio::test]
async fn valuation_covers_every_stored_lot() {
    let (_, service) = service();
    service.add_holding(new_holding("TCS", 10)).await.unwrap();
    service.add_holding(new_holding("INFY", 5)).await.unwrap();

    let prices: HashMap<_, _> = [("TCS".to_string(), dec!(110))].into_iter().collect();
    let (valuations, summary) = service.holdings_with_valuation(&prices).await.unwrap();

    assert_eq!(valuations.len(), 2);
    assert_eq!(summary.total_invested, dec!(1500));
    // INFY has no price and values at cost, so only TCS moves the total.
    assert_eq!(summary.total_current, dec!(1600));
}
