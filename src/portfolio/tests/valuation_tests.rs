use std::collections::HashMap;

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::market_data::MergedRecord;
use crate::portfolio::portfolio_model::Holding;
use crate::portfolio::valuation_calculator::{
    price_map_from_merged, value_holding, value_portfolio,
};

fn holding(id: &str, symbol: &str, quantity: u32, buy_price: Decimal) -> Holding {
    Holding {
        id: id.to_string(),
        symbol: symbol.to_string(),
        quantity,
        buy_price,
        buy_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        created_at: Utc::now(),
    }
}

fn prices(pairs: &[(&str, Decimal)]) -> HashMap<String, Decimal> {
    pairs.iter().map(|(s, p)| (s.to_string(), *p)).collect()
}

#[test]
fn values_a_priced_holding() {
    let h = holding("h1", "TCS", 10, dec!(100));
    let valuation = value_holding(&h, &prices(&[("TCS", dec!(120))]));

    assert_eq!(valuation.invested_value, dec!(1000));
    assert_eq!(valuation.current_value, dec!(1200));
    assert_eq!(valuation.profit_loss, dec!(200));
    assert_eq!(valuation.profit_loss_percent, dec!(20));
}

#[test]
fn unpriced_holding_falls_back_to_buy_price_with_zero_pl() {
    let h = holding("h1", "UNLISTED", 5, dec!(250.50));
    let valuation = value_holding(&h, &HashMap::new());

    assert_eq!(valuation.current_price, dec!(250.50));
    assert_eq!(valuation.invested_value, valuation.current_value);
    assert_eq!(valuation.profit_loss, Decimal::ZERO);
    assert_eq!(valuation.profit_loss_percent, Decimal::ZERO);
}

#[test]
fn losses_are_negative() {
    let h = holding("h1", "INFY", 4, dec!(1500));
    let valuation = value_holding(&h, &prices(&[("INFY", dec!(1425))]));

    assert_eq!(valuation.profit_loss, dec!(-300));
    assert_eq!(valuation.profit_loss_percent, dec!(-5));
}

#[test]
fn portfolio_summary_aggregates_every_lot() {
    let holdings = vec![
        holding("h1", "TCS", 10, dec!(100)),
        holding("h2", "INFY", 2, dec!(500)),
        holding("h3", "UNLISTED", 1, dec!(1000)),
    ];
    let prices = prices(&[("TCS", dec!(120)), ("INFY", dec!(450))]);

    let (valuations, summary) = value_portfolio(&holdings, &prices);
    assert_eq!(valuations.len(), 3);
    // 1000 + 1000 + 1000 invested; 1200 + 900 + 1000 current.
    assert_eq!(summary.total_invested, dec!(3000));
    assert_eq!(summary.total_current, dec!(3100));
    assert_eq!(summary.total_profit_loss, dec!(100));
    assert_eq!(
        summary.total_profit_loss_percent,
        dec!(100) / dec!(3000) * dec!(100)
    );
}

#[test]
fn empty_portfolio_reports_zero_percent() {
    let (valuations, summary) = value_portfolio(&[], &HashMap::new());
    assert!(valuations.is_empty());
    assert_eq!(summary.total_invested, Decimal::ZERO);
    assert_eq!(summary.total_profit_loss_percent, Decimal::ZERO);
}

#[test]
fn price_map_skips_records_without_a_price() {
    let priced = MergedRecord {
        symbol: "TCS".to_string(),
        name: None,
        sector: None,
        price: Some(3589.25),
        pe_ratio: None,
        market_cap: None,
        roe: None,
        debt_ratio: None,
        change: None,
        change_percent: None,
        dividend_yield: None,
        volume: None,
    };
    let unpriced = MergedRecord {
        symbol: "GHOST".to_string(),
        price: None,
        ..priced.clone()
    };

    let map = price_map_from_merged(&[priced, unpriced]);
    assert_eq!(map.len(), 1);
    assert_eq!(map.get("TCS"), Some(&dec!(3589.25)));
}
