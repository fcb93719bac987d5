use std::env;
use std::path::PathBuf;

use crate::types::DisplayCurrency;

/// Synthetic market generator configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// Days of history before today (default: 90, producing 91 closes).
    pub history_days: u32,
    /// Forecast days after today (default: 14).
    pub forecast_days: u32,
    /// Trailing historical days re-predicted for backtest comparison (default: 7).
    pub comparison_days: usize,
    /// Maximum relative error on comparison predictions (default: 0.05).
    pub error_margin: f64,
    /// Maximum relative daily price move (default: 0.02).
    pub daily_volatility: f64,
    /// Volume around which daily volume is drawn (default: 1,000,000).
    pub base_volume: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            history_days: 90,
            forecast_days: 14,
            comparison_days: 7,
            error_margin: 0.05,
            daily_volatility: 0.02,
            base_volume: 1_000_000.0,
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Ticker to analyze.
    pub ticker: String,
    /// Seed for the synthetic generator. Entropy-seeded when absent.
    pub seed: Option<u64>,
    /// Saved Alpha Vantage `TIME_SERIES_DAILY` document to analyze instead of
    /// synthetic data.
    pub quote_file: Option<PathBuf>,
    /// Currency the quote header is rendered in.
    pub display_currency: DisplayCurrency,
    /// Synthetic generator settings.
    pub generator: GeneratorConfig,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = GeneratorConfig::default();

        Self {
            ticker: env::var("STOCKCAST_TICKER")
                .ok()
                .map(|t| t.trim().to_uppercase())
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| "AAPL".to_string()),
            seed: env::var("STOCKCAST_SEED").ok().and_then(|v| v.parse().ok()),
            quote_file: env::var("STOCKCAST_QUOTE_FILE")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
            display_currency: env::var("STOCKCAST_DISPLAY_CURRENCY")
                .ok()
                .and_then(|v| DisplayCurrency::from_str(&v))
                .unwrap_or_default(),
            generator: GeneratorConfig {
                history_days: parse_env("STOCKCAST_HISTORY_DAYS").unwrap_or(defaults.history_days),
                forecast_days: parse_env("STOCKCAST_FORECAST_DAYS").unwrap_or(defaults.forecast_days),
                comparison_days: parse_env("STOCKCAST_COMPARISON_DAYS")
                    .unwrap_or(defaults.comparison_days),
                error_margin: parse_env("STOCKCAST_ERROR_MARGIN").unwrap_or(defaults.error_margin),
                ..defaults
            },
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

fn parse_env<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.trim().parse().ok())
}
