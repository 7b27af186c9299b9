use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One purchase lot. Immutable after creation: a correction is a delete
/// followed by a re-add.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    pub id: String,
    pub symbol: String,
    pub quantity: u32,
    pub buy_price: Decimal,
    pub buy_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

/// Input model for creating a holding.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewHolding {
    pub symbol: String,
    pub quantity: u32,
    pub buy_price: Decimal,
    pub buy_date: Option<NaiveDate>,
}

/// A holding valued against the current price. Derived on every
/// refresh, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoldingValuation {
    pub id: String,
    pub symbol: String,
    pub quantity: u32,
    pub buy_price: Decimal,
    pub buy_date: NaiveDate,
    pub current_price: Decimal,
    pub invested_value: Decimal,
    pub current_value: Decimal,
    pub profit_loss: Decimal,
    pub profit_loss_percent: Decimal,
}

/// Portfolio-wide aggregate over all valued holdings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub total_invested: Decimal,
    pub total_current: Decimal,
    pub total_profit_loss: Decimal,
    pub total_profit_loss_percent: Decimal,
}

impl Default for PortfolioSummary {
    fn default() -> Self {
        PortfolioSummary {
            total_invested: Decimal::ZERO,
            total_current: Decimal::ZERO,
            total_profit_loss: Decimal::ZERO,
            total_profit_loss_percent: Decimal::ZERO,
        }
    }
}
