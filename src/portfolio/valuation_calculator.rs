use std::collections::HashMap;

use log::debug;
use num_traits::FromPrimitive;
use rust_decimal::Decimal;

use crate::market_data::MergedRecord;

use super::portfolio_model::{Holding, HoldingValuation, PortfolioSummary};

/// Values a single lot against the current price map. A symbol with no
/// current price falls back to its own buy price, so an unpriced
/// holding reports zero P&L rather than a fabricated loss.
pub fn value_holding(holding: &Holding, prices: &HashMap<String, Decimal>) -> HoldingValuation {
    let current_price = match prices.get(&holding.symbol) {
        Some(price) => *price,
        None => {
            debug!(
                "No current price for {}, valuing at buy price",
                holding.symbol
            );
            holding.buy_price
        }
    };

    let quantity = Decimal::from(holding.quantity);
    let invested_value = quantity * holding.buy_price;
    let current_value = quantity * current_price;
    let profit_loss = current_value - invested_value;
    // Zero invested cannot occur for positive quantity and price, but
    // the division is guarded anyway.
    let profit_loss_percent = if invested_value.is_zero() {
        Decimal::ZERO
    } else {
        profit_loss / invested_value * Decimal::ONE_HUNDRED
    };

    HoldingValuation {
        id: holding.id.clone(),
        symbol: holding.symbol.clone(),
        quantity: holding.quantity,
        buy_price: holding.buy_price,
        buy_date: holding.buy_date,
        current_price,
        invested_value,
        current_value,
        profit_loss,
        profit_loss_percent,
    }
}

/// Values every holding and aggregates the portfolio summary. Always
/// derived from the inputs; nothing here is cached.
pub fn value_portfolio(
    holdings: &[Holding],
    prices: &HashMap<String, Decimal>,
) -> (Vec<HoldingValuation>, PortfolioSummary) {
    let valuations: Vec<HoldingValuation> = holdings
        .iter()
        .map(|holding| value_holding(holding, prices))
        .collect();

    let total_invested: Decimal = valuations.iter().map(|v| v.invested_value).sum();
    let total_current: Decimal = valuations.iter().map(|v| v.current_value).sum();
    let total_profit_loss = total_current - total_invested;
    let total_profit_loss_percent = if total_invested.is_zero() {
        Decimal::ZERO
    } else {
        total_profit_loss / total_invested * Decimal::ONE_HUNDRED
    };

    let summary = PortfolioSummary {
        total_invested,
        total_current,
        total_profit_loss,
        total_profit_loss_percent,
    };
    (valuations, summary)
}

/// Current prices keyed by symbol, taken from a merged snapshot.
pub fn price_map_from_merged(records: &[MergedRecord]) -> HashMap<String, Decimal> {
    records
        .iter()
        .filter_map(|record| {
            let price = record.price?;
            Decimal::from_f64(price).map(|price| (record.symbol.clone(), price))
        })
        .collect()
}
