//! Analytics services: indicator synthesis, uncertainty, risk, recommendations,
//! explanations and currency display.

pub mod analysis;
pub mod confidence;
pub mod currency;
pub mod education;
pub mod recommendation;
pub mod risk;
pub mod synthesis;

pub use analysis::{analyze, display_summary};
pub use confidence::{add_confidence_intervals, apply_confidence_intervals};
pub use recommendation::recommend;
pub use risk::{calculate_risk, calculate_risk_level, classify_risk, risk_score};
pub use synthesis::{BollingerSeries, IndicatorSeries, MacdSeries, RsiSeries};
