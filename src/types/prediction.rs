use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Recommendation;

/// One historical close.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub price: f64,
    pub volume: u64,
}

/// One forecast point.
///
/// `actual` is only present where the forecast overlaps the historical range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub date: NaiveDate,
    #[serde(default)]
    pub actual: Option<f64>,
    pub predicted: f64,
}

impl ForecastPoint {
    /// Whether this point carries a usable prediction.
    ///
    /// Zero and NaN predictions are treated as missing. Infinite ones count as
    /// present and are rejected downstream.
    pub fn has_prediction(&self) -> bool {
        self.predicted != 0.0 && !self.predicted.is_nan()
    }
}

/// Indicator values at a single point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndicatorSnapshot {
    /// Relative Strength Index, nominally 0-100.
    pub rsi: f64,
    pub macd: f64,
    pub bollinger_upper: f64,
    pub bollinger_lower: f64,
    pub recommendation: Recommendation,
}

/// Model error and confidence figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelMetrics {
    pub mse: f64,
    pub rmse: f64,
    pub mae: f64,
    /// Accuracy as a percentage.
    pub accuracy: f64,
    /// Prediction confidence (0-1).
    pub confidence: f64,
}

/// Quote header shown above the chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockMetadata {
    pub ticker: String,
    pub name: String,
    pub current_price: f64,
    pub previous_close: f64,
    pub change: f64,
    pub change_percent: f64,
}

/// A full prediction for one ticker.
///
/// Built by a source (synthetic generator or quote adapter) and only read by
/// the analytics services, which derive new views instead of mutating it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockPrediction {
    pub ticker: String,
    pub metadata: StockMetadata,
    pub historical_data: Vec<PricePoint>,
    pub prediction_data: Vec<ForecastPoint>,
    pub metrics: ModelMetrics,
    pub indicators: IndicatorSnapshot,
}

impl StockPrediction {
    /// Historical closes in date order.
    pub fn historical_prices(&self) -> impl Iterator<Item = f64> + '_ {
        self.historical_data.iter().map(|p| p.price)
    }

    /// The most recent historical close, if any.
    pub fn last_close(&self) -> Option<f64> {
        self.historical_data.last().map(|p| p.price)
    }

    /// Date of the first forecast point, if any.
    pub fn forecast_start(&self) -> Option<NaiveDate> {
        self.prediction_data.first().map(|p| p.date)
    }
}
