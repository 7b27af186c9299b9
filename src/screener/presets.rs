use serde::{Deserialize, Serialize};

use crate::constants::{
    LARGE_CAP_MARKET_CAP_MIN, PRESET_DIVIDEND_STOCKS, PRESET_HIGH_ROE_WINNERS,
    PRESET_LARGE_CAP_QUALITY, PRESET_LOW_DEBT_STABLE, PRESET_VALUE_PICKS,
};

use super::screener_model::FilterState;

/// Closed enumeration of the named "smart screen" presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScreenPreset {
    HighRoeWinners,
    ValuePicks,
    LowDebtStable,
    LargeCapQuality,
    DividendStocks,
}

pub const ALL_PRESETS: [ScreenPreset; 5] = [
    ScreenPreset::HighRoeWinners,
    ScreenPreset::ValuePicks,
    ScreenPreset::LowDebtStable,
    ScreenPreset::LargeCapQuality,
    ScreenPreset::DividendStocks,
];

impl ScreenPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScreenPreset::HighRoeWinners => PRESET_HIGH_ROE_WINNERS,
            ScreenPreset::ValuePicks => PRESET_VALUE_PICKS,
            ScreenPreset::LowDebtStable => PRESET_LOW_DEBT_STABLE,
            ScreenPreset::LargeCapQuality => PRESET_LARGE_CAP_QUALITY,
            ScreenPreset::DividendStocks => PRESET_DIVIDEND_STOCKS,
        }
    }

    /// Parses the `?screen=` query parameter value.
    pub fn parse(id: &str) -> Option<Self> {
        match id {
            PRESET_HIGH_ROE_WINNERS => Some(ScreenPreset::HighRoeWinners),
            PRESET_VALUE_PICKS => Some(ScreenPreset::ValuePicks),
            PRESET_LOW_DEBT_STABLE => Some(ScreenPreset::LowDebtStable),
            PRESET_LARGE_CAP_QUALITY => Some(ScreenPreset::LargeCapQuality),
            PRESET_DIVIDEND_STOCKS => Some(ScreenPreset::DividendStocks),
            _ => None,
        }
    }

    /// The complete filter state a preset stands for. Always built from
    /// defaults, so switching presets never leaves residual constraints
    /// from the previous one.
    pub fn filter_state(&self) -> FilterState {
        let mut filters = FilterState::default();
        match self {
            ScreenPreset::HighRoeWinners => {
                filters.roe_min = Some(20.0);
                filters.debt_ratio_max = Some(0.5);
            }
            ScreenPreset::ValuePicks => {
                filters.pe_max = Some(15.0);
                filters.roe_min = Some(15.0);
            }
            ScreenPreset::LowDebtStable => {
                filters.debt_ratio_max = Some(0.3);
            }
            ScreenPreset::LargeCapQuality => {
                filters.market_cap_min = Some(LARGE_CAP_MARKET_CAP_MIN);
                filters.roe_min = Some(18.0);
            }
            ScreenPreset::DividendStocks => {
                filters.dividend_yield_min = Some(3.0);
            }
        }
        filters
    }
}

/// Resolves a preset identifier to its filter state. Unrecognized
/// identifiers resolve to `None` and leave the caller's state alone.
pub fn resolve_preset(id: &str) -> Option<FilterState> {
    ScreenPreset::parse(id).map(|preset| preset.filter_state())
}
