use crate::market_data::{FundamentalRecord, LiveQuote};

pub(crate) fn fundamental(symbol: &str, price: f64, change_percent: f64) -> FundamentalRecord {
    FundamentalRecord {
        symbol: symbol.to_string(),
        name: Some(format!("{} Ltd", symbol)),
        sector: Some("Misc".to_string()),
        price: Some(price),
        pe_ratio: Some(20.0),
        market_cap: Some(100_000.0),
        roe: Some(15.0),
        debt_ratio: Some(0.2),
        change_percent: Some(change_percent),
        dividend_yield: Some(1.0),
    }
}

pub(crate) fn quote(symbol: &str, price: f64, change: f64) -> LiveQuote {
    LiveQuote {
        symbol: symbol.to_string(),
        price,
        change,
        change_percent: None,
        volume: None,
        market_cap: None,
    }
}
