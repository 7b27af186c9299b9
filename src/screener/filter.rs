use crate::constants::SECTOR_ALL;
use crate::market_data::MergedRecord;

use super::screener_model::FilterState;

/// Evaluates every active constraint as a conjunction. A record with a
/// missing value for a constrained metric is compared as `0`, so any
/// positive lower bound excludes it while an upper bound keeps it.
pub fn passes_filters(record: &MergedRecord, filters: &FilterState) -> bool {
    if filters.sector != SECTOR_ALL && record.sector.as_deref() != Some(filters.sector.as_str()) {
        return false;
    }

    within_bounds(record.pe_ratio, filters.pe_min, filters.pe_max)
        && within_bounds(
            record.market_cap,
            filters.market_cap_min,
            filters.market_cap_max,
        )
        && within_bounds(record.roe, filters.roe_min, filters.roe_max)
        && within_bounds(
            record.debt_ratio,
            filters.debt_ratio_min,
            filters.debt_ratio_max,
        )
        && within_bounds(record.dividend_yield, filters.dividend_yield_min, None)
}

fn within_bounds(value: Option<f64>, min: Option<f64>, max: Option<f64>) -> bool {
    let value = value.unwrap_or(0.0);
    if let Some(min) = min {
        if value < min {
            return false;
        }
    }
    if let Some(max) = max {
        if value > max {
            return false;
        }
    }
    true
}
