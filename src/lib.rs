pub mod auth;
pub mod constants;
pub mod errors;
pub mod market_data;
pub mod portfolio;
pub mod screener;
pub mod screens;
pub mod watchlist;

pub use errors::{Error, Result};
pub use screener::*;
