use serde::{Deserialize, Serialize};

use super::{
    BollingerPoint, DisplayCurrency, EnhancedForecastPoint, MacdPoint, Recommendation, RiskLevel,
    RsiPoint,
};

/// Plain-language interpretation of the current indicator values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationalContext {
    pub rsi: String,
    pub macd: String,
    pub bollinger: String,
    pub recommendation: String,
}

/// Everything the dashboard derives from one [`super::StockPrediction`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionAnalysis {
    pub ticker: String,
    pub rsi_series: Vec<RsiPoint>,
    pub macd_series: Vec<MacdPoint>,
    pub bollinger_series: Vec<BollingerPoint>,
    pub forecast: Vec<EnhancedForecastPoint>,
    pub risk_score: f64,
    pub risk_level: RiskLevel,
    /// Recommendation derived from the snapshot RSI.
    pub recommendation: Recommendation,
    /// Recommendation carried by the snapshot itself.
    pub snapshot_recommendation: Recommendation,
    pub context: EducationalContext,
}

/// Quote header formatted for a display currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplaySummary {
    pub ticker: String,
    pub name: String,
    pub currency: DisplayCurrency,
    /// Whether prices were converted from the quote currency.
    pub converted: bool,
    pub current_price: String,
    pub previous_close: String,
    pub change: String,
    pub change_percent: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exchange_rate_note: Option<String>,
}
