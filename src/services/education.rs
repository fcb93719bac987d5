//! Plain-language explanations for indicator readings.

use crate::error::{AppError, Result};
use crate::types::Recommendation;

const BAND_PROXIMITY: f64 = 0.03;

pub fn rsi_context(rsi: f64) -> &'static str {
    if rsi >= 70.0 {
        "RSI above 70 indicates an overbought condition, suggesting potential price reversal or correction."
    } else if rsi <= 30.0 {
        "RSI below 30 indicates an oversold condition, suggesting a potential buying opportunity."
    } else {
        "RSI between 30-70 indicates the asset is trading in a neutral zone."
    }
}

pub fn macd_context(macd: f64) -> &'static str {
    if macd > 0.5 {
        "Positive MACD suggests strong upward momentum. Consider a bullish outlook."
    } else if macd < -0.5 {
        "Negative MACD suggests strong downward momentum. Consider a bearish outlook."
    } else {
        "MACD near zero indicates a potential trend change or consolidation phase."
    }
}

/// Where `price` sits relative to the bands. Within 3% of a band counts as near it,
/// with the upper band checked first.
pub fn bollinger_context(price: f64, upper: f64, lower: f64) -> Result<&'static str> {
    if price == 0.0 || !price.is_finite() {
        return Err(AppError::invalid(format!(
            "price must be non-zero and finite for band proximity, got {}",
            price
        )));
    }

    let near_upper = (upper - price) / price < BAND_PROXIMITY;
    let near_lower = (price - lower) / price < BAND_PROXIMITY;

    Ok(if near_upper {
        "Price near upper Bollinger Band suggests strong uptrend but potential overbought condition."
    } else if near_lower {
        "Price near lower Bollinger Band suggests strong downtrend but potential oversold condition."
    } else {
        "Price between Bollinger Bands indicates normal trading conditions."
    })
}

pub fn recommendation_context(recommendation: Recommendation) -> &'static str {
    match recommendation {
        Recommendation::StrongBuy => {
            "Technical indicators strongly suggest an entry point, with RSI indicating oversold conditions."
        }
        Recommendation::Buy => {
            "Positive momentum detected with favorable technical indicators supporting a buying opportunity."
        }
        Recommendation::Hold => {
            "Technical indicators suggest waiting for clearer signals before making any trading decisions."
        }
        Recommendation::Sell => {
            "Some technical indicators suggest taking profits or reducing position size."
        }
        Recommendation::StrongSell => {
            "Technical indicators suggest significant downside risk, with RSI potentially showing overbought conditions."
        }
    }
}

/// Fallback when a recommendation label is not one we know.
pub const GENERIC_RECOMMENDATION_CONTEXT: &str = "Analyze technical indicators for further insights.";

/// Like [`recommendation_context`] but keyed by display label.
pub fn recommendation_context_for_label(label: &str) -> &'static str {
    Recommendation::from_label(label)
        .map(recommendation_context)
        .unwrap_or(GENERIC_RECOMMENDATION_CONTEXT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rsi_context_zones() {
        assert!(rsi_context(70.0).contains("overbought"));
        assert!(rsi_context(85.0).contains("overbought"));
        assert!(rsi_context(30.0).contains("oversold"));
        assert!(rsi_context(50.0).contains("neutral"));
        assert!(rsi_context(30.01).contains("neutral"));
    }

    #[test]
    fn test_macd_context_zones() {
        assert!(macd_context(0.51).contains("upward"));
        assert!(macd_context(0.5).contains("consolidation"));
        assert!(macd_context(-0.5).contains("consolidation"));
        assert!(macd_context(-0.51).contains("downward"));
    }

    #[test]
    fn test_bollinger_context_positions() {
        assert!(bollinger_context(100.0, 102.0, 80.0).unwrap().contains("upper"));
        assert!(bollinger_context(100.0, 120.0, 98.0).unwrap().contains("lower"));
        assert!(bollinger_context(100.0, 110.0, 90.0).unwrap().contains("normal"));
    }

    #[test]
    fn test_bollinger_context_upper_wins_on_narrow_bands() {
        assert!(bollinger_context(100.0, 101.0, 99.0).unwrap().contains("upper"));
    }

    #[test]
    fn test_bollinger_context_zero_price_is_error() {
        let err = bollinger_context(0.0, 1.0, -1.0).unwrap_err();
        assert!(err.is_invalid_input());
        assert!(bollinger_context(f64::NAN, 1.0, -1.0).is_err());
    }

    #[test]
    fn test_recommendation_context_table() {
        for rec in Recommendation::ALL {
            assert_ne!(recommendation_context(rec), GENERIC_RECOMMENDATION_CONTEXT);
        }
        assert!(recommendation_context(Recommendation::Sell).contains("taking profits"));
    }

    #[test]
    fn test_recommendation_context_for_label() {
        assert_eq!(
            recommendation_context_for_label("Strong Buy"),
            recommendation_context(Recommendation::StrongBuy)
        );
        assert_eq!(recommendation_context_for_label("Moon"), GENERIC_RECOMMENDATION_CONTEXT);
    }
}
