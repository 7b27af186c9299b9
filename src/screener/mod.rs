pub(crate) mod filter;
pub(crate) mod presets;
pub(crate) mod screener_model;
pub(crate) mod screener_service;
pub(crate) mod selection;
pub(crate) mod sort;

// Re-export the public interface
pub use filter::passes_filters;
pub use presets::{resolve_preset, ScreenPreset, ALL_PRESETS};
pub use screener_model::{FilterPatch, FilterState, SortDirection, SortField, SortState};
pub use screener_service::{
    most_active, run_screen, search_records, sectors, top_gainers, top_losers, ScreenerService,
};
pub use selection::SelectionSet;
pub use sort::sort_records;

#[cfg(test)]
pub(crate) mod tests;
