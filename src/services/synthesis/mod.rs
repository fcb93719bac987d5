//! Display series for the indicator panels.
//!
//! RSI and MACD are oscillated deterministically around the snapshot value;
//! only the Bollinger envelope reads the historical price distribution. The
//! same prediction always yields the same series.

pub mod bollinger;
pub mod macd;
pub mod rsi;

pub use bollinger::BollingerSeries;
pub use macd::MacdSeries;
pub use rsi::RsiSeries;

use crate::error::Result;
use crate::types::{IndicatorKind, PricePoint, StockPrediction};

/// Number of trailing historical points each series covers.
pub const DEFAULT_WINDOW: usize = 30;

/// Trait for indicator series derived from a prediction.
pub trait IndicatorSeries: Send + Sync {
    /// Record type emitted per date.
    type Point;

    /// Which indicator panel this series feeds.
    fn kind(&self) -> IndicatorKind;

    /// Number of trailing historical points used.
    fn window(&self) -> usize;

    /// Build the series. Never mutates the prediction.
    fn synthesize(&self, prediction: &StockPrediction) -> Result<Vec<Self::Point>>;
}

/// The last `window` points of a historical series.
pub(crate) fn trailing(history: &[PricePoint], window: usize) -> &[PricePoint] {
    &history[history.len().saturating_sub(window)..]
}

#[cfg(test)]
pub(crate) mod fixtures {
    use chrono::{Duration, NaiveDate};

    use crate::types::*;

    pub fn start_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    pub fn history(prices: &[f64]) -> Vec<PricePoint> {
        prices
            .iter()
            .enumerate()
            .map(|(i, &price)| PricePoint {
                date: start_date() + Duration::days(i as i64),
                price,
                volume: 1_000_000,
            })
            .collect()
    }

    pub fn prediction(prices: &[f64], forecast: Vec<ForecastPoint>) -> StockPrediction {
        let historical_data = history(prices);
        let last = prices.last().copied().unwrap_or(0.0);
        StockPrediction {
            ticker: "TEST".to_string(),
            metadata: StockMetadata {
                ticker: "TEST".to_string(),
                name: "Test Corp".to_string(),
                current_price: last,
                previous_close: last,
                change: 0.0,
                change_percent: 0.0,
            },
            historical_data,
            prediction_data: forecast,
            metrics: ModelMetrics {
                mse: 1.0,
                rmse: 1.0,
                mae: 0.5,
                accuracy: 80.0,
                confidence: 0.8,
            },
            indicators: IndicatorSnapshot {
                rsi: 50.0,
                macd: 0.0,
                bollinger_upper: last * 1.1,
                bollinger_lower: last * 0.9,
                recommendation: Recommendation::Hold,
            },
        }
    }
}
