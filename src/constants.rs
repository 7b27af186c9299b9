/// Refresh cadence shared by the quote feed and portfolio valuation views.
pub const QUOTE_POLL_INTERVAL_SECS: u64 = 60;

/// Sector filter value meaning "no sector constraint".
pub const SECTOR_ALL: &str = "All";

pub const PRESET_HIGH_ROE_WINNERS: &str = "high-roe-winners";
pub const PRESET_VALUE_PICKS: &str = "value-picks";
pub const PRESET_LOW_DEBT_STABLE: &str = "low-debt-stable";
pub const PRESET_LARGE_CAP_QUALITY: &str = "large-cap-quality";
pub const PRESET_DIVIDEND_STOCKS: &str = "dividend-stocks";

/// Market-cap floor (in ₹ crore) used by the large-cap preset.
pub const LARGE_CAP_MARKET_CAP_MIN: f64 = 500_000.0;
