use super::fixtures::{indian_large_caps, symbols};
use crate::screener::screener_model::{SortDirection, SortField, SortState};
use crate::screener::sort::sort_records;

fn state(field: SortField, direction: SortDirection) -> SortState {
    SortState {
        field: Some(field),
        direction,
    }
}

#[test]
fn no_active_field_keeps_filter_order() {
    let universe = indian_large_caps();
    let sorted = sort_records(&universe, &SortState::default());
    assert_eq!(symbols(&sorted), symbols(&universe));
}

#[test]
fn input_is_not_sorted_in_place() {
    let universe = indian_large_caps();
    let before = symbols(&universe);
    let _ = sort_records(&universe, &state(SortField::Price, SortDirection::Asc));
    assert_eq!(symbols(&universe), before);
}

#[test]
fn numeric_sort_orders_by_value() {
    let universe = indian_large_caps();
    let sorted = sort_records(&universe, &state(SortField::PeRatio, SortDirection::Asc));
    let pes: Vec<f64> = sorted.iter().map(|r| r.pe_ratio.unwrap()).collect();
    assert!(pes.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(sorted.first().unwrap().symbol, "AXISBANK");
    assert_eq!(sorted.last().unwrap().symbol, "ASIANPAINT");
}

#[test]
fn desc_is_the_exact_reverse_of_asc() {
    let universe = indian_large_caps();
    let asc = sort_records(&universe, &state(SortField::MarketCap, SortDirection::Asc));
    let desc = sort_records(&universe, &state(SortField::MarketCap, SortDirection::Desc));

    let mut reversed = symbols(&asc);
    reversed.reverse();
    // No market-cap ties except 375000 twice; compare the value order.
    let desc_caps: Vec<f64> = desc.iter().map(|r| r.market_cap.unwrap()).collect();
    assert!(desc_caps.windows(2).all(|w| w[0] >= w[1]));
    assert_eq!(desc_caps.len(), reversed.len());
}

#[test]
fn asc_desc_asc_round_trip_restores_order_without_ties() {
    let universe = indian_large_caps();
    let asc = sort_records(&universe, &state(SortField::Price, SortDirection::Asc));
    let desc = sort_records(&asc, &state(SortField::Price, SortDirection::Desc));
    let asc_again = sort_records(&desc, &state(SortField::Price, SortDirection::Asc));
    assert_eq!(symbols(&asc_again), symbols(&asc));
}

#[test]
fn string_sort_is_case_insensitive_first() {
    let universe = indian_large_caps();
    let sorted = sort_records(&universe, &state(SortField::Name, SortDirection::Asc));
    let names: Vec<String> = sorted
        .iter()
        .map(|r| r.name.clone().unwrap().to_lowercase())
        .collect();
    let mut expected = names.clone();
    expected.sort();
    assert_eq!(names, expected);
}

#[test]
fn missing_values_fall_back_to_string_coercion_without_panicking() {
    let mut universe = indian_large_caps();
    universe[0].pe_ratio = None;
    universe[7].pe_ratio = None;

    let sorted = sort_records(&universe, &state(SortField::PeRatio, SortDirection::Asc));
    assert_eq!(sorted.len(), universe.len());
    // Coerced empty strings order before any numeric string.
    assert!(sorted[0].pe_ratio.is_none());
    assert!(sorted[1].pe_ratio.is_none());
}

#[test]
fn ties_keep_their_filter_order() {
    let universe = indian_large_caps();
    // SUNPHARMA and MARUTI share market cap 375000; SUNPHARMA comes
    // first in the dataset and must stay first ascending.
    let sorted = sort_records(&universe, &state(SortField::MarketCap, SortDirection::Asc));
    let sun = sorted.iter().position(|r| r.symbol == "SUNPHARMA").unwrap();
    let maruti = sorted.iter().position(|r| r.symbol == "MARUTI").unwrap();
    assert!(sun < maruti);
}

#[test]
fn header_click_cycles_asc_desc_cleared() {
    let mut state = SortState::default();

    state.toggle(SortField::Roe);
    assert_eq!(state.field, Some(SortField::Roe));
    assert_eq!(state.direction, SortDirection::Asc);

    state.toggle(SortField::Roe);
    assert_eq!(state.direction, SortDirection::Desc);

    state.toggle(SortField::Roe);
    assert_eq!(state.field, None);

    // A different field resets to ascending.
    state.toggle(SortField::Price);
    state.toggle(SortField::Price);
    state.toggle(SortField::Roe);
    assert_eq!(state.field, Some(SortField::Roe));
    assert_eq!(state.direction, SortDirection::Asc);
}
