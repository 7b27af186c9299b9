use std::collections::HashMap;

use super::market_data_model::{FundamentalRecord, LiveQuote, MergedRecord};

/// Overlays live quotes on a fundamentals snapshot. Pure transform: the
/// output has the same order and cardinality as `fundamentals`, live-only
/// symbols are never introduced, and inputs are left untouched so the
/// merge is safe to re-run every poll cycle.
pub fn merge_quotes(
    fundamentals: &[FundamentalRecord],
    quotes: &HashMap<String, LiveQuote>,
) -> Vec<MergedRecord> {
    fundamentals
        .iter()
        .map(|record| match quotes.get(&record.symbol) {
            Some(quote) => overlay(record, quote),
            None => MergedRecord::from(record),
        })
        .collect()
}

fn overlay(record: &FundamentalRecord, quote: &LiveQuote) -> MergedRecord {
    let mut merged = MergedRecord::from(record);

    merged.price = Some(quote.price);
    merged.change = Some(quote.change);
    merged.change_percent = match quote.change_percent {
        Some(pct) => Some(pct),
        // Recompute from change/price; a zero price keeps the
        // fundamental change percent instead of dividing by zero.
        None if quote.price != 0.0 => Some(quote.change / quote.price * 100.0),
        None => record.change_percent,
    };
    if quote.volume.is_some() {
        merged.volume = quote.volume;
    }
    if quote.market_cap.is_some() {
        merged.market_cap = quote.market_cap;
    }

    merged
}
