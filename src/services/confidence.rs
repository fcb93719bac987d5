//! Prediction uncertainty intervals.
//!
//! For forecast point `i`, `interval = predicted * (1 - confidence) * (1 + 0.1 i) * 0.05`,
//! so the band widens about 10% per step. Points that already carry any part of
//! an interval are passed through untouched, which makes the estimator
//! idempotent.

use tracing::{debug, warn};

use crate::error::{ensure_finite, AppError, Result};
use crate::types::{EnhancedForecastPoint, StockPrediction};

const HORIZON_GROWTH: f64 = 0.1;
const INTERVAL_SCALE: f64 = 0.05;

/// Attach intervals to a prediction's forecast series.
pub fn add_confidence_intervals(prediction: &StockPrediction) -> Result<Vec<EnhancedForecastPoint>> {
    let points: Vec<EnhancedForecastPoint> = prediction
        .prediction_data
        .iter()
        .map(EnhancedForecastPoint::from)
        .collect();
    apply_confidence_intervals(&points, prediction.metrics.confidence)
}

/// Attach intervals to forecast points that do not have one yet.
///
/// Points without a prediction and points with an existing interval are
/// returned unchanged.
pub fn apply_confidence_intervals(
    points: &[EnhancedForecastPoint],
    confidence: f64,
) -> Result<Vec<EnhancedForecastPoint>> {
    if !confidence.is_finite() {
        return Err(AppError::invalid(format!(
            "model confidence must be finite, got {}",
            confidence
        )));
    }
    if !(0.0..=1.0).contains(&confidence) {
        warn!(confidence, "Model confidence outside [0, 1]");
    }

    let volatility = 1.0 - confidence;
    let mut attached = 0usize;

    let enhanced = points
        .iter()
        .enumerate()
        .map(|(i, point)| {
            if !point.has_prediction() || point.has_interval() {
                return Ok(point.clone());
            }

            let predicted = ensure_finite("forecast prediction", point.predicted)?;
            let volatility_factor = volatility * (1.0 + i as f64 * HORIZON_GROWTH);
            let interval = predicted * volatility_factor * INTERVAL_SCALE;
            attached += 1;

            Ok(EnhancedForecastPoint {
                confidence_interval: Some(interval),
                lower_bound: Some(predicted - interval),
                upper_bound: Some(predicted + interval),
                ..point.clone()
            })
        })
        .collect::<Result<Vec<_>>>()?;

    debug!(points = points.len(), attached, "Applied confidence intervals");
    Ok(enhanced)
}
