use std::cmp::Ordering;

use crate::market_data::MergedRecord;

use super::screener_model::{SortDirection, SortField, SortState};

/// One comparable cell value, tagged by type so the comparator stays
/// total without dynamic inspection.
enum SortKey {
    Number(f64),
    Text(String),
}

/// Returns a newly ordered vector; the input is never sorted in place.
/// With no active field the filter order is returned unchanged. `Desc`
/// is the exact reversal of the `Asc` comparator, and the underlying
/// sort is stable, so ties keep their filter order.
pub fn sort_records(records: &[MergedRecord], state: &SortState) -> Vec<MergedRecord> {
    let mut sorted = records.to_vec();
    let field = match state.field {
        Some(field) => field,
        None => return sorted,
    };

    sorted.sort_by(|a, b| {
        let ordering = compare_asc(a, b, field);
        match state.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
    sorted
}

fn compare_asc(a: &MergedRecord, b: &MergedRecord, field: SortField) -> Ordering {
    match (sort_key(a, field), sort_key(b, field)) {
        (Some(SortKey::Number(x)), Some(SortKey::Number(y))) => x.total_cmp(&y),
        (Some(SortKey::Text(x)), Some(SortKey::Text(y))) => locale_cmp(&x, &y),
        // Mixed or missing on either side: coerce both to strings so a
        // single unexpected null never panics the comparator.
        (x, y) => locale_cmp(&coerce(x), &coerce(y)),
    }
}

fn sort_key(record: &MergedRecord, field: SortField) -> Option<SortKey> {
    match field {
        SortField::Symbol => Some(SortKey::Text(record.symbol.clone())),
        SortField::Name => record.name.clone().map(SortKey::Text),
        SortField::Sector => record.sector.clone().map(SortKey::Text),
        SortField::Price => record.price.map(SortKey::Number),
        SortField::PeRatio => record.pe_ratio.map(SortKey::Number),
        SortField::MarketCap => record.market_cap.map(SortKey::Number),
        SortField::Roe => record.roe.map(SortKey::Number),
        SortField::DebtRatio => record.debt_ratio.map(SortKey::Number),
        SortField::ChangePercent => record.change_percent.map(SortKey::Number),
        SortField::DividendYield => record.dividend_yield.map(SortKey::Number),
    }
}

fn coerce(key: Option<SortKey>) -> String {
    match key {
        Some(SortKey::Text(s)) => s,
        Some(SortKey::Number(n)) => n.to_string(),
        None => String::new(),
    }
}

/// Case-folded ordering with a byte-order tiebreak, mirroring the
/// locale-aware comparison the table headers use.
fn locale_cmp(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
