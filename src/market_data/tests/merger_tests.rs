use std::collections::HashMap;

use super::fixtures::{fundamental, quote};
use crate::market_data::{merge_quotes, LiveQuote, MergedRecord};

fn quotes_of(list: Vec<LiveQuote>) -> HashMap<String, LiveQuote> {
    list.into_iter().map(|q| (q.symbol.clone(), q)).collect()
}

#[test]
fn empty_quote_map_yields_the_fundamentals_unchanged() {
    let fundamentals = vec![fundamental("RELIANCE", 2456.80, 2.34)];
    let merged = merge_quotes(&fundamentals, &HashMap::new());

    assert_eq!(merged.len(), 1);
    assert_eq!(merged[0], MergedRecord::from(&fundamentals[0]));
    assert_eq!(merged[0].price, Some(2456.80));
    assert_eq!(merged[0].change_percent, Some(2.34));
    assert!(merged[0].volume.is_none());
}

#[test]
fn quote_overrides_price_and_change() {
    let fundamentals = vec![fundamental("TCS", 3500.0, 0.85)];
    let quotes = quotes_of(vec![LiveQuote {
        change_percent: Some(1.50),
        ..quote("TCS", 3589.25, 53.0)
    }]);

    let merged = merge_quotes(&fundamentals, &quotes);
    assert_eq!(merged[0].price, Some(3589.25));
    assert_eq!(merged[0].change, Some(53.0));
    assert_eq!(merged[0].change_percent, Some(1.50));
    // Fundamental-only columns pass through.
    assert_eq!(merged[0].roe, Some(15.0));
}

#[test]
fn missing_change_percent_is_recomputed_from_the_quote() {
    let fundamentals = vec![fundamental("INFY", 1400.0, 1.10)];
    let quotes = quotes_of(vec![quote("INFY", 200.0, 5.0)]);

    let merged = merge_quotes(&fundamentals, &quotes);
    assert_eq!(merged[0].change_percent, Some(2.5));
}

#[test]
fn zero_quote_price_keeps_the_fundamental_change_percent() {
    let fundamentals = vec![fundamental("INFY", 1400.0, 1.10)];
    let quotes = quotes_of(vec![quote("INFY", 0.0, 5.0)]);

    let merged = merge_quotes(&fundamentals, &quotes);
    assert_eq!(merged[0].price, Some(0.0));
    assert_eq!(merged[0].change_percent, Some(1.10));
}

#[test]
fn absent_volume_and_market_cap_do_not_clobber_fundamentals() {
    let fundamentals = vec![fundamental("ITC", 456.70, 0.65)];
    let quotes = quotes_of(vec![quote("ITC", 458.0, 1.3)]);

    let merged = merge_quotes(&fundamentals, &quotes);
    assert_eq!(merged[0].market_cap, Some(100_000.0));
    assert!(merged[0].volume.is_none());

    let quotes = quotes_of(vec![LiveQuote {
        volume: Some(2_000_000.0),
        market_cap: Some(570_500.0),
        ..quote("ITC", 458.0, 1.3)
    }]);
    let merged = merge_quotes(&fundamentals, &quotes);
    assert_eq!(merged[0].volume, Some(2_000_000.0));
    assert_eq!(merged[0].market_cap, Some(570_500.0));
}

#[test]
fn merge_preserves_order_and_never_invents_symbols() {
    let fundamentals = vec![
        fundamental("RELIANCE", 2456.80, 2.34),
        fundamental("TCS", 3589.25, 0.85),
        fundamental("INFY", 1432.30, 1.10),
    ];
    // One overlapping quote, one live-only symbol.
    let quotes = quotes_of(vec![quote("TCS", 3600.0, 10.0), quote("GHOST", 1.0, 0.0)]);

    let merged = merge_quotes(&fundamentals, &quotes);
    let order: Vec<&str> = merged.iter().map(|r| r.symbol.as_str()).collect();
    assert_eq!(order, vec!["RELIANCE", "TCS", "INFY"]);
}
