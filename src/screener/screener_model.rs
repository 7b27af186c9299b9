use serde::{Deserialize, Serialize};

use crate::constants::SECTOR_ALL;

/// Active filter constraints for the screening view. Absent bounds mean
/// "unbounded"; `sector == "All"` is the wildcard. Mutated only by user
/// input, a preset, or an NL-search patch; `clear` resets everything.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    pub sector: String,
    pub pe_min: Option<f64>,
    pub pe_max: Option<f64>,
    pub market_cap_min: Option<f64>,
    pub market_cap_max: Option<f64>,
    pub roe_min: Option<f64>,
    pub roe_max: Option<f64>,
    pub debt_ratio_min: Option<f64>,
    pub debt_ratio_max: Option<f64>,
    pub dividend_yield_min: Option<f64>,
}

impl Default for FilterState {
    fn default() -> Self {
        FilterState {
            sector: SECTOR_ALL.to_string(),
            pe_min: None,
            pe_max: None,
            market_cap_min: None,
            market_cap_max: None,
            roe_min: None,
            roe_max: None,
            debt_ratio_min: None,
            debt_ratio_max: None,
            dividend_yield_min: None,
        }
    }
}

impl FilterState {
    pub fn clear(&mut self) {
        *self = FilterState::default();
    }

    /// Merges an NL-search translation into the current state. Only the
    /// fields the translation set are touched.
    pub fn apply_patch(&mut self, patch: &FilterPatch) {
        if let Some(sector) = &patch.sector {
            self.sector = sector.clone();
        }
        if patch.pe_min.is_some() {
            self.pe_min = patch.pe_min;
        }
        if patch.pe_max.is_some() {
            self.pe_max = patch.pe_max;
        }
        if patch.market_cap_min.is_some() {
            self.market_cap_min = patch.market_cap_min;
        }
        if patch.market_cap_max.is_some() {
            self.market_cap_max = patch.market_cap_max;
        }
        if patch.roe_min.is_some() {
            self.roe_min = patch.roe_min;
        }
        if patch.roe_max.is_some() {
            self.roe_max = patch.roe_max;
        }
        if patch.debt_ratio_min.is_some() {
            self.debt_ratio_min = patch.debt_ratio_min;
        }
        if patch.debt_ratio_max.is_some() {
            self.debt_ratio_max = patch.debt_ratio_max;
        }
        if patch.dividend_yield_min.is_some() {
            self.dividend_yield_min = patch.dividend_yield_min;
        }
    }
}

/// Partial filter object as returned by the search-translation endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterPatch {
    pub sector: Option<String>,
    pub pe_min: Option<f64>,
    pub pe_max: Option<f64>,
    pub market_cap_min: Option<f64>,
    pub market_cap_max: Option<f64>,
    pub roe_min: Option<f64>,
    pub roe_max: Option<f64>,
    pub debt_ratio_min: Option<f64>,
    pub debt_ratio_max: Option<f64>,
    pub dividend_yield_min: Option<f64>,
}

/// Closed set of sortable columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    Symbol,
    Name,
    Sector,
    Price,
    PeRatio,
    MarketCap,
    Roe,
    DebtRatio,
    ChangePercent,
    DividendYield,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// Active sort column and direction. `field == None` means unsorted
/// (the deterministic filter order is kept).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortState {
    pub field: Option<SortField>,
    pub direction: SortDirection,
}

impl SortState {
    /// Header-click cycle: asc on a new field, then desc, then cleared.
    pub fn toggle(&mut self, field: SortField) {
        match (self.field, self.direction) {
            (Some(current), SortDirection::Asc) if current == field => {
                self.direction = SortDirection::Desc;
            }
            (Some(current), SortDirection::Desc) if current == field => {
                self.field = None;
                self.direction = SortDirection::Asc;
            }
            _ => {
                self.field = Some(field);
                self.direction = SortDirection::Asc;
            }
        }
    }
}
