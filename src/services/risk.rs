//! Risk scoring.
//!
//! Combines model confidence, RSI distance from neutral and relative
//! Bollinger width into one weighted score:
//!
//! ```text
//! score = 0.4 * (1 - confidence) + 0.3 * |rsi - 50| / 50 + 0.3 * (upper - lower) / mid
//! ```
//!
//! Weights and cut points are fixed.

use tracing::{debug, warn};

use crate::error::{ensure_finite, AppError, Result};
use crate::types::{RiskLevel, StockPrediction};

const VOLATILITY_WEIGHT: f64 = 0.4;
const RSI_EXTREME_WEIGHT: f64 = 0.3;
const BAND_WIDTH_WEIGHT: f64 = 0.3;
const RSI_NEUTRAL: f64 = 50.0;

/// Scores below this are [`RiskLevel::Low`].
pub const LOW_RISK_CEILING: f64 = 0.35;
/// Scores below this (and not low) are [`RiskLevel::Medium`].
pub const MEDIUM_RISK_CEILING: f64 = 0.65;

/// Weighted risk score, nominally in `[0, 1]`.
///
/// Fails when the band midpoint is zero or any input is not finite.
pub fn risk_score(confidence: f64, rsi: f64, bollinger_upper: f64, bollinger_lower: f64) -> Result<f64> {
    for (name, value) in [
        ("confidence", confidence),
        ("rsi", rsi),
        ("bollinger upper", bollinger_upper),
        ("bollinger lower", bollinger_lower),
    ] {
        ensure_finite(name, value)?;
    }

    let midpoint = (bollinger_upper + bollinger_lower) / 2.0;
    if midpoint == 0.0 {
        return Err(AppError::invalid(
            "bollinger band midpoint is zero; band width is undefined",
        ));
    }
    if bollinger_upper < bollinger_lower {
        warn!(
            upper = bollinger_upper,
            lower = bollinger_lower,
            "Bollinger bands are inverted"
        );
    }

    let volatility = 1.0 - confidence;
    let rsi_extreme = (rsi - RSI_NEUTRAL).abs() / RSI_NEUTRAL;
    let band_width = (bollinger_upper - bollinger_lower) / midpoint;

    Ok(volatility * VOLATILITY_WEIGHT + rsi_extreme * RSI_EXTREME_WEIGHT + band_width * BAND_WIDTH_WEIGHT)
}

/// Bucket a score into a risk level.
pub fn classify_risk(score: f64) -> RiskLevel {
    if score < LOW_RISK_CEILING {
        RiskLevel::Low
    } else if score < MEDIUM_RISK_CEILING {
        RiskLevel::Medium
    } else {
        RiskLevel::High
    }
}

pub fn calculate_risk(
    confidence: f64,
    rsi: f64,
    bollinger_upper: f64,
    bollinger_lower: f64,
) -> Result<RiskLevel> {
    let score = risk_score(confidence, rsi, bollinger_upper, bollinger_lower)?;
    let level = classify_risk(score);
    debug!(score, %level, "Calculated risk");
    Ok(level)
}

/// Risk level for a prediction's snapshot indicators and model confidence.
pub fn calculate_risk_level(prediction: &StockPrediction) -> Result<RiskLevel> {
    let indicators = &prediction.indicators;
    calculate_risk(
        prediction.metrics.confidence,
        indicators.rsi,
        indicators.bollinger_upper,
        indicators.bollinger_lower,
    )
}
