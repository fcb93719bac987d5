//! RSI display series.

use super::{trailing, IndicatorSeries, DEFAULT_WINDOW};
use crate::error::{ensure_finite, Result};
use crate::types::{IndicatorKind, RsiPoint, StockPrediction};

/// RSI series oscillating around the snapshot RSI.
///
/// `rsi[i] = clamp(base + sin(i / 3) * 8, 0, 100)` over the trailing window.
pub struct RsiSeries {
    window: usize,
}

impl Default for RsiSeries {
    fn default() -> Self {
        Self { window: DEFAULT_WINDOW }
    }
}

impl RsiSeries {
    pub fn new(window: usize) -> Self {
        Self { window }
    }

    fn value_at(base_rsi: f64, index: usize) -> f64 {
        let fluctuation = (index as f64 / 3.0).sin() * 8.0;
        (base_rsi + fluctuation).clamp(0.0, 100.0)
    }
}

impl IndicatorSeries for RsiSeries {
    type Point = RsiPoint;

    fn kind(&self) -> IndicatorKind {
        IndicatorKind::Rsi
    }

    fn window(&self) -> usize {
        self.window
    }

    fn synthesize(&self, prediction: &StockPrediction) -> Result<Vec<RsiPoint>> {
        let base_rsi = ensure_finite("snapshot rsi", prediction.indicators.rsi)?;

        Ok(trailing(&prediction.historical_data, self.window)
            .iter()
            .enumerate()
            .map(|(i, point)| RsiPoint {
                date: point.date,
                rsi: Self::value_at(base_rsi, i),
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::synthesis::fixtures;

    #[test]
    fn test_rsi_series_covers_trailing_window() {
        let prices: Vec<f64> = (0..45).map(|i| 100.0 + i as f64).collect();
        let prediction = fixtures::prediction(&prices, Vec::new());
        let series = RsiSeries::default().synthesize(&prediction).unwrap();

        assert_eq!(series.len(), 30);
        assert_eq!(series[0].date, prediction.historical_data[15].date);
        assert_eq!(series[29].date, prediction.historical_data[44].date);
    }

    #[test]
    fn test_rsi_series_values() {
        let mut prediction = fixtures::prediction(&[100.0; 4], Vec::new());
        prediction.indicators.rsi = 55.0;
        let series = RsiSeries::default().synthesize(&prediction).unwrap();

        assert_eq!(series[0].rsi, 55.0);
        assert!((series[3].rsi - (55.0 + 1f64.sin() * 8.0)).abs() < 1e-12);
    }

    #[test]
    fn test_rsi_series_is_clamped() {
        let mut prediction = fixtures::prediction(&[100.0; 30], Vec::new());
        prediction.indicators.rsi = 97.0;
        let high = RsiSeries::default().synthesize(&prediction).unwrap();
        assert!(high.iter().all(|p| p.rsi <= 100.0));
        assert!(high.iter().any(|p| p.rsi == 100.0));

        prediction.indicators.rsi = 2.0;
        let low = RsiSeries::default().synthesize(&prediction).unwrap();
        assert!(low.iter().all(|p| p.rsi >= 0.0));
        assert!(low.iter().any(|p| p.rsi == 0.0));
    }

    #[test]
    fn test_rsi_series_empty_history() {
        let prediction = fixtures::prediction(&[], Vec::new());
        assert!(RsiSeries::default().synthesize(&prediction).unwrap().is_empty());
    }

    #[test]
    fn test_rsi_custom_window() {
        let prediction = fixtures::prediction(&[100.0; 20], Vec::new());
        let series = RsiSeries::new(5).synthesize(&prediction).unwrap();
        assert_eq!(series.len(), 5);
        assert_eq!(RsiSeries::new(5).window(), 5);
    }

    #[test]
    fn test_rsi_series_rejects_non_finite_snapshot() {
        let mut prediction = fixtures::prediction(&[100.0; 5], Vec::new());
        prediction.indicators.rsi = f64::NAN;
        assert!(RsiSeries::default().synthesize(&prediction).unwrap_err().is_invalid_input());

        prediction.indicators.rsi = f64::INFINITY;
        assert!(RsiSeries::default().synthesize(&prediction).is_err());
    }
}
