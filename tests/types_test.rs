//! Unit tests for types module

use chrono::NaiveDate;
use stockcast::types::*;

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, day).unwrap()
}

#[test]
fn test_recommendation_labels() {
    assert_eq!(Recommendation::StrongBuy.label(), "Strong Buy");
    assert_eq!(format!("{}", Recommendation::StrongSell), "Strong Sell");
    assert_eq!(Recommendation::from_label(" strong sell "), Some(Recommendation::StrongSell));
    assert_eq!(Recommendation::from_label("Accumulate"), None);
}

#[test]
fn test_recommendation_serialization() {
    let json = serde_json::to_string(&Recommendation::StrongBuy).unwrap();
    assert_eq!(json, "\"Strong Buy\"");

    let parsed: Recommendation = serde_json::from_str("\"Hold\"").unwrap();
    assert_eq!(parsed, Recommendation::Hold);
}

#[test]
fn test_risk_level_ordering() {
    assert!(RiskLevel::Low < RiskLevel::Medium);
    assert!(RiskLevel::Medium < RiskLevel::High);
    assert_eq!(format!("{}", RiskLevel::Medium), "Medium");
}

#[test]
fn test_indicator_kind_titles() {
    let titles: Vec<&str> = IndicatorKind::ALL.iter().map(|k| k.title()).collect();
    assert_eq!(titles.len(), 3);
    assert!(IndicatorKind::ALL.iter().all(|k| !k.description().is_empty()));
}

#[test]
fn test_display_currency_from_str() {
    assert_eq!(DisplayCurrency::from_str("₹"), Some(DisplayCurrency::Inr));
    assert_eq!(DisplayCurrency::from_str("dollar"), Some(DisplayCurrency::Usd));
    assert_eq!(DisplayCurrency::from_str("GBP"), None);
    assert_eq!(DisplayCurrency::Inr.code(), "INR");
}

#[test]
fn test_enhanced_forecast_serializes_two_decimal_strings() {
    let point = EnhancedForecastPoint {
        date: date(3),
        actual: None,
        predicted: 101.5,
        confidence_interval: Some(1.0),
        lower_bound: Some(100.4987),
        upper_bound: Some(102.5),
    };
    let json = serde_json::to_value(&point).unwrap();

    assert_eq!(json["date"], "2024-06-03");
    assert_eq!(json["confidenceInterval"], "1.00");
    assert_eq!(json["lowerBound"], "100.50");
    assert_eq!(json["upperBound"], "102.50");
}

#[test]
fn test_enhanced_forecast_without_interval_omits_fields() {
    let point = EnhancedForecastPoint::from(&ForecastPoint {
        date: date(4),
        actual: Some(99.0),
        predicted: 98.0,
    });
    let json = serde_json::to_value(&point).unwrap();

    assert!(json.get("confidenceInterval").is_none());
    assert!(json.get("lowerBound").is_none());
    assert_eq!(json["actual"], 99.0);
}

#[test]
fn test_enhanced_forecast_accepts_numbers_or_strings() {
    let parsed: EnhancedForecastPoint = serde_json::from_str(
        r#"{"date":"2024-06-05","predicted":50.0,"confidenceInterval":"1.25","lowerBound":48.75,"upperBound":""}"#,
    )
    .unwrap();

    assert_eq!(parsed.confidence_interval, Some(1.25));
    assert_eq!(parsed.lower_bound, Some(48.75));
    assert_eq!(parsed.upper_bound, None);
    assert!(parsed.has_interval());
}

#[test]
fn test_forecast_point_without_actual() {
    let point: ForecastPoint =
        serde_json::from_str(r#"{"date":"2024-06-06","predicted":120.25}"#).unwrap();
    assert_eq!(point.actual, None);
    assert!(point.has_prediction());

    let empty = ForecastPoint {
        predicted: 0.0,
        ..point
    };
    assert!(!empty.has_prediction());
}

#[test]
fn test_bollinger_point_width() {
    let point = BollingerPoint {
        date: date(7),
        price: 100.0,
        upper_band: 104.0,
        lower_band: 97.0,
        middle_band: 100.0,
        is_prediction: false,
        confidence_interval: None,
    };
    assert_eq!(point.width(), 7.0);

    let json = serde_json::to_value(&point).unwrap();
    assert_eq!(json["isPrediction"], false);
    assert!(json.get("confidenceInterval").is_none());
}

#[test]
fn test_stock_prediction_camel_case_payload() {
    let json = r#"{
        "ticker": "AAPL",
        "metadata": {
            "ticker": "AAPL",
            "name": "Apple Inc.",
            "currentPrice": 190.0,
            "previousClose": 188.0,
            "change": 2.0,
            "changePercent": 1.06
        },
        "historicalData": [
            {"date": "2024-06-01", "price": 188.0, "volume": 1000},
            {"date": "2024-06-02", "price": 190.0, "volume": 1200}
        ],
        "predictionData": [
            {"date": "2024-06-03", "predicted": 191.5}
        ],
        "metrics": {"mse": 3.1, "rmse": 1.7, "mae": 1.1, "accuracy": 88.0, "confidence": 0.82},
        "indicators": {
            "rsi": 61.0,
            "macd": 0.4,
            "bollingerUpper": 199.5,
            "bollingerLower": 180.5,
            "recommendation": "Sell"
        }
    }"#;

    let prediction: StockPrediction = serde_json::from_str(json).unwrap();
    assert_eq!(prediction.last_close(), Some(190.0));
    assert_eq!(prediction.forecast_start(), Some(date(3)));
    assert_eq!(prediction.indicators.recommendation, Recommendation::Sell);
    assert_eq!(prediction.historical_prices().collect::<Vec<_>>(), vec![188.0, 190.0]);
}
