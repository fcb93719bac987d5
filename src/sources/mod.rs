//! Market data sources.
//!
//! - Synthetic: seeded random walks for a fixed ticker catalogue
//! - Alpha Vantage: saved `TIME_SERIES_DAILY` documents

pub mod alphavantage;
pub mod synthetic;

pub use alphavantage::{parse_daily_response, to_stock_prediction, TimeSeriesDailyResponse};
pub use synthetic::{catalog, catalog_entry, popular_tickers, CatalogEntry, SyntheticMarket};
