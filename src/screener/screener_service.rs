use std::cmp::Ordering;
use std::sync::Arc;

use log::debug;

use crate::market_data::{MarketDataError, MarketDataService, MergedRecord};

use super::filter::passes_filters;
use super::screener_model::{FilterState, SortState};
use super::sort::sort_records;

/// Filter-then-sort pipeline over a merged snapshot. Side-effect free
/// and O(n log n), so it is re-run on every state change.
pub fn run_screen(
    records: &[MergedRecord],
    filters: &FilterState,
    sort: &SortState,
) -> Vec<MergedRecord> {
    let filtered: Vec<MergedRecord> = records
        .iter()
        .filter(|record| passes_filters(record, filters))
        .cloned()
        .collect();
    sort_records(&filtered, sort)
}

/// Top movers by day change, descending.
pub fn top_gainers(records: &[MergedRecord], limit: usize) -> Vec<MergedRecord> {
    ranked(records, limit, |a, b| {
        metric(b.change_percent).total_cmp(&metric(a.change_percent))
    })
}

/// Worst movers by day change, ascending.
pub fn top_losers(records: &[MergedRecord], limit: usize) -> Vec<MergedRecord> {
    ranked(records, limit, |a, b| {
        metric(a.change_percent).total_cmp(&metric(b.change_percent))
    })
}

/// Most traded by volume, descending.
pub fn most_active(records: &[MergedRecord], limit: usize) -> Vec<MergedRecord> {
    ranked(records, limit, |a, b| {
        metric(b.volume).total_cmp(&metric(a.volume))
    })
}

/// Case-insensitive symbol or name substring match.
pub fn search_records<'a>(records: &'a [MergedRecord], query: &str) -> Vec<&'a MergedRecord> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }
    records
        .iter()
        .filter(|record| {
            record.symbol.to_lowercase().contains(&query)
                || record
                    .name
                    .as_deref()
                    .is_some_and(|name| name.to_lowercase().contains(&query))
        })
        .collect()
}

/// Distinct sectors present in the universe, sorted.
pub fn sectors(records: &[MergedRecord]) -> Vec<String> {
    let mut sectors: Vec<String> = records
        .iter()
        .filter_map(|record| record.sector.clone())
        .collect();
    sectors.sort();
    sectors.dedup();
    sectors
}

fn metric(value: Option<f64>) -> f64 {
    value.unwrap_or(0.0)
}

fn ranked<F>(records: &[MergedRecord], limit: usize, compare: F) -> Vec<MergedRecord>
where
    F: Fn(&MergedRecord, &MergedRecord) -> Ordering,
{
    let mut ranked = records.to_vec();
    ranked.sort_by(compare);
    ranked.truncate(limit);
    ranked
}

/// Screening facade over the market data feed: fetches the fundamentals
/// universe, overlays the latest quote batch, and applies the caller's
/// filter and sort state.
pub struct ScreenerService {
    market_data: Arc<MarketDataService>,
}

impl ScreenerService {
    pub fn new(market_data: Arc<MarketDataService>) -> Self {
        Self { market_data }
    }

    pub async fn screen_universe(
        &self,
        filters: &FilterState,
        sort: &SortState,
    ) -> Result<Vec<MergedRecord>, MarketDataError> {
        let fundamentals = self.market_data.fetch_fundamentals().await?;
        let merged = self.market_data.merged_snapshot(&fundamentals);
        let screened = run_screen(&merged, filters, sort);
        debug!(
            "Screen kept {} of {} records",
            screened.len(),
            merged.len()
        );
        Ok(screened)
    }

    /// Runs an NL query through the translation endpoint and merges the
    /// resulting partial filters into `filters`.
    pub async fn apply_search_query(
        &self,
        query: &str,
        filters: &mut FilterState,
    ) -> Result<(), MarketDataError> {
        let patch = self.market_data.translate_search(query).await?;
        filters.apply_patch(&patch);
        Ok(())
    }
}
