use serde::{Deserialize, Serialize};

/// Canonical symbol form used as the identity key everywhere.
pub fn normalize_symbol(symbol: &str) -> String {
    symbol.trim().to_uppercase()
}

/// Fundamentals snapshot for one equity. Replaced wholesale on each
/// fetch, never mutated in place. Numeric fields are `None` when the
/// backend does not know the value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundamentalRecord {
    pub symbol: String,
    pub name: Option<String>,
    pub sector: Option<String>,
    pub price: Option<f64>,
    pub pe_ratio: Option<f64>,
    pub market_cap: Option<f64>,
    pub roe: Option<f64>,
    pub debt_ratio: Option<f64>,
    pub change_percent: Option<f64>,
    pub dividend_yield: Option<f64>,
}

/// Near-real-time quote polled on an interval. Ephemeral: each refresh
/// supersedes the previous batch entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveQuote {
    pub symbol: String,
    pub price: f64,
    pub change: f64,
    pub change_percent: Option<f64>,
    pub volume: Option<f64>,
    pub market_cap: Option<f64>,
}

/// Fundamental record with any present live-quote fields overriding.
/// Derived, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MergedRecord {
    pub symbol: String,
    pub name: Option<String>,
    pub sector: Option<String>,
    pub price: Option<f64>,
    pub pe_ratio: Option<f64>,
    pub market_cap: Option<f64>,
    pub roe: Option<f64>,
    pub debt_ratio: Option<f64>,
    pub change: Option<f64>,
    pub change_percent: Option<f64>,
    pub dividend_yield: Option<f64>,
    pub volume: Option<f64>,
}

impl From<&FundamentalRecord> for MergedRecord {
    fn from(record: &FundamentalRecord) -> Self {
        MergedRecord {
            symbol: record.symbol.clone(),
            name: record.name.clone(),
            sector: record.sector.clone(),
            price: record.price,
            pe_ratio: record.pe_ratio,
            market_cap: record.market_cap,
            roe: record.roe,
            debt_ratio: record.debt_ratio,
            change: None,
            change_percent: record.change_percent,
            dividend_yield: record.dividend_yield,
            volume: None,
        }
    }
}

/// Single-symbol detail payload: the fundamental record plus the extras
/// the detail endpoint reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockDetail {
    #[serde(flatten)]
    pub record: FundamentalRecord,
    pub week52_high: Option<f64>,
    pub week52_low: Option<f64>,
    pub quarterly_profit: Option<f64>,
    pub profit_growth: Option<f64>,
}
