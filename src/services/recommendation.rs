//! RSI-driven recommendation policy.

use crate::types::Recommendation;

/// Map an RSI reading to a recommendation.
///
/// Half-open bands: `< 30` strong buy, `< 40` buy, `< 60` hold, `< 70` sell,
/// everything else (including NaN) strong sell.
pub fn recommend(rsi: f64) -> Recommendation {
    if rsi < 30.0 {
        Recommendation::StrongBuy
    } else if rsi < 40.0 {
        Recommendation::Buy
    } else if rsi < 60.0 {
        Recommendation::Hold
    } else if rsi < 70.0 {
        Recommendation::Sell
    } else {
        Recommendation::StrongSell
    }
}
