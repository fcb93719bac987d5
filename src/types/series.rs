//! Derived, display-ready series records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::decimal::fixed2;
use super::ForecastPoint;

/// RSI value for one date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RsiPoint {
    pub date: NaiveDate,
    pub rsi: f64,
}

/// MACD line, signal line and histogram for one date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacdPoint {
    pub date: NaiveDate,
    pub macd: f64,
    pub signal: f64,
    pub histogram: f64,
}

/// Bollinger envelope for one date, historical or forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BollingerPoint {
    pub date: NaiveDate,
    pub price: f64,
    pub upper_band: f64,
    pub lower_band: f64,
    pub middle_band: f64,
    pub is_prediction: bool,
    /// Band half-width, only reported for forecast points.
    #[serde(default, skip_serializing_if = "Option::is_none", with = "fixed2")]
    pub confidence_interval: Option<f64>,
}

impl BollingerPoint {
    /// Distance between the upper and lower band.
    pub fn width(&self) -> f64 {
        self.upper_band - self.lower_band
    }
}

/// Forecast point with an uncertainty interval attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhancedForecastPoint {
    pub date: NaiveDate,
    #[serde(default)]
    pub actual: Option<f64>,
    pub predicted: f64,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "fixed2")]
    pub confidence_interval: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "fixed2")]
    pub lower_bound: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "fixed2")]
    pub upper_bound: Option<f64>,
}

impl EnhancedForecastPoint {
    /// Whether any part of an interval has already been attached.
    pub fn has_interval(&self) -> bool {
        self.confidence_interval.is_some() || self.lower_bound.is_some() || self.upper_bound.is_some()
    }

    pub fn has_prediction(&self) -> bool {
        self.predicted != 0.0 && !self.predicted.is_nan()
    }
}

impl From<&ForecastPoint> for EnhancedForecastPoint {
    fn from(point: &ForecastPoint) -> Self {
        Self {
            date: point.date,
            actual: point.actual,
            predicted: point.predicted,
            confidence_interval: None,
            lower_bound: None,
            upper_bound: None,
        }
    }
}
