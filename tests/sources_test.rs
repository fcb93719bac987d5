//! Integration tests for market data sources

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::SeedableRng;
use stockcast::config::GeneratorConfig;
use stockcast::services::{analyze, display_summary, recommend};
use stockcast::sources::{alphavantage, catalog, popular_tickers, SyntheticMarket};
use stockcast::types::{DisplayCurrency, RiskLevel};
use stockcast::AppError;

const DAILY_RESPONSE: &str = r#"{
    "Meta Data": {
        "1. Information": "Daily Prices (open, high, low, close) and Volumes",
        "2. Symbol": "IBM",
        "3. Last Refreshed": "2024-05-03"
    },
    "Time Series (Daily)": {
        "2024-05-03": {"1. open": "166.00", "2. high": "167.00", "3. low": "165.00", "4. close": "165.71", "5. volume": "3000000"},
        "2024-05-02": {"1. open": "164.00", "2. high": "166.50", "3. low": "163.80", "4. close": "166.27", "5. volume": "2800000"},
        "2024-05-01": {"1. open": "165.00", "2. high": "166.10", "3. low": "164.00", "4. close": "164.43", "5. volume": "3200000"},
        "2024-04-30": {"1. open": "167.00", "2. high": "167.50", "3. low": "165.50", "4. close": "166.20", "5. volume": "2900000"}
    }
}"#;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 6).unwrap()
}

#[test]
fn test_catalog_has_popular_tickers() {
    let tickers: Vec<&str> = catalog().iter().map(|e| e.ticker).collect();
    for ticker in popular_tickers() {
        assert!(tickers.contains(&ticker));
    }
}

#[test]
fn test_synthetic_market_is_reproducible() {
    let a = SyntheticMarket::seeded(7).stock_prediction("AAPL", today()).unwrap();
    let b = SyntheticMarket::seeded(7).stock_prediction("AAPL", today()).unwrap();
    let c = SyntheticMarket::seeded(8).stock_prediction("AAPL", today()).unwrap();

    assert_eq!(a, b);
    assert_ne!(a.historical_data, c.historical_data);
}

#[test]
fn test_synthetic_market_respects_config() {
    let config = GeneratorConfig {
        history_days: 20,
        forecast_days: 5,
        comparison_days: 3,
        ..GeneratorConfig::default()
    };
    let mut market = SyntheticMarket::seeded(1).with_config(config);
    let prediction = market.stock_prediction("GOOG", today()).unwrap();

    assert_eq!(prediction.historical_data.len(), 21);
    assert_eq!(prediction.prediction_data.len(), 3 + 5);
    assert_eq!(prediction.historical_data.last().unwrap().date, today());
}

#[test]
fn test_synthetic_unknown_ticker() {
    let err = SyntheticMarket::seeded(1).stock_prediction("RELIANCE", today()).unwrap_err();
    assert!(matches!(err, AppError::UnknownTicker(_)));
}

#[test]
fn test_synthetic_prediction_end_to_end() {
    let prediction = SyntheticMarket::seeded(17).stock_prediction("AMZN", today()).unwrap();
    let analysis = analyze(&prediction).unwrap();
    let summary = display_summary(&prediction, DisplayCurrency::Inr);

    assert_eq!(analysis.recommendation, recommend(prediction.indicators.rsi));
    assert_eq!(analysis.rsi_series.len(), 30);
    assert!(summary.converted);
    assert!(summary.current_price.starts_with('₹'));

    let json = serde_json::to_value(&analysis).unwrap();
    assert!(json["bollingerSeries"].is_array());
    assert!(json["forecast"][0]["confidenceInterval"].is_string());
}

#[test]
fn test_alpha_vantage_document_to_analysis() {
    let response = alphavantage::parse_daily_response(DAILY_RESPONSE).unwrap();
    let mut rng = StdRng::seed_from_u64(3);
    let prediction =
        alphavantage::to_stock_prediction(&response, "IBM", today(), &mut rng).unwrap();

    assert_eq!(prediction.historical_data.len(), 4);
    assert_eq!(prediction.metadata.current_price, 165.71);
    assert_eq!(prediction.metadata.previous_close, 166.27);
    assert!(prediction.metadata.change < 0.0);
    assert_eq!(prediction.prediction_data.len(), 30);

    let analysis = analyze(&prediction).unwrap();
    assert_eq!(analysis.bollinger_series.len(), 4 + 30);
    assert_eq!(analysis.forecast.len(), 30);
    // confidence >= 0.75, rsi within 15 of neutral, bands +-2%
    assert_eq!(analysis.risk_level, RiskLevel::Low);
}

#[test]
fn test_alpha_vantage_rate_limit_note() {
    let err = alphavantage::parse_daily_response(
        r#"{"Note": "Our standard API call frequency is 5 calls per minute."}"#,
    )
    .unwrap_err();
    assert!(matches!(err, AppError::ExternalApi(_)));
}
