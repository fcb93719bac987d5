//! One-call analysis of a prediction, plus the display currency pass.

use tracing::{debug, info};

use super::confidence::add_confidence_intervals;
use super::currency::{display_price, exchange_rate_info, format_price, needs_conversion};
use super::education::{bollinger_context, macd_context, recommendation_context, rsi_context};
use super::recommendation::recommend;
use super::risk::{classify_risk, risk_score};
use super::synthesis::{BollingerSeries, IndicatorSeries, MacdSeries, RsiSeries};
use crate::error::Result;
use crate::types::decimal::to_fixed;
use crate::types::{
    DisplayCurrency, DisplaySummary, EducationalContext, PredictionAnalysis, StockPrediction,
};

/// Derive every dashboard view from a prediction.
///
/// Fails if any component rejects the input (empty history, zero band
/// midpoint, zero current price, non-finite confidence).
pub fn analyze(prediction: &StockPrediction) -> Result<PredictionAnalysis> {
    let indicators = &prediction.indicators;

    let rsi_series = RsiSeries::default().synthesize(prediction)?;
    let macd_series = MacdSeries::default().synthesize(prediction)?;
    let bollinger_series = BollingerSeries::default().synthesize(prediction)?;
    let forecast = add_confidence_intervals(prediction)?;

    let score = risk_score(
        prediction.metrics.confidence,
        indicators.rsi,
        indicators.bollinger_upper,
        indicators.bollinger_lower,
    )?;
    let risk_level = classify_risk(score);
    let recommendation = recommend(indicators.rsi);

    if recommendation != indicators.recommendation {
        debug!(
            ticker = %prediction.ticker,
            snapshot = %indicators.recommendation,
            derived = %recommendation,
            "Snapshot recommendation differs from RSI policy"
        );
    }

    let context = EducationalContext {
        rsi: rsi_context(indicators.rsi).to_string(),
        macd: macd_context(indicators.macd).to_string(),
        bollinger: bollinger_context(
            prediction.metadata.current_price,
            indicators.bollinger_upper,
            indicators.bollinger_lower,
        )?
        .to_string(),
        recommendation: recommendation_context(recommendation).to_string(),
    };

    info!(
        ticker = %prediction.ticker,
        %risk_level,
        %recommendation,
        history = prediction.historical_data.len(),
        forecast = forecast.len(),
        "Analyzed prediction"
    );

    Ok(PredictionAnalysis {
        ticker: prediction.ticker.clone(),
        rsi_series,
        macd_series,
        bollinger_series,
        forecast,
        risk_score: score,
        risk_level,
        recommendation,
        snapshot_recommendation: indicators.recommendation,
        context,
    })
}

/// Format the quote header in `currency`, converting at the fixed rate when
/// the ticker is quoted in the other currency.
pub fn display_summary(prediction: &StockPrediction, currency: DisplayCurrency) -> DisplaySummary {
    let ticker = prediction.ticker.as_str();
    let metadata = &prediction.metadata;
    let converted = needs_conversion(ticker, currency);
    let price = |amount: f64| format_price(display_price(ticker, amount, currency), currency);

    DisplaySummary {
        ticker: prediction.ticker.clone(),
        name: metadata.name.clone(),
        currency,
        converted,
        current_price: price(metadata.current_price),
        previous_close: price(metadata.previous_close),
        change: price(metadata.change),
        change_percent: format!("{}%", to_fixed(metadata.change_percent, 2)),
        exchange_rate_note: converted.then(exchange_rate_info),
    }
}
