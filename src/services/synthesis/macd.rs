//! MACD display series.

use super::{trailing, IndicatorSeries, DEFAULT_WINDOW};
use crate::error::{ensure_finite, Result};
use crate::types::{IndicatorKind, MacdPoint, StockPrediction};

/// MACD series oscillating around the snapshot MACD.
///
/// - Signal = base - 0.5 + sin(i / 4) * 0.7
/// - Histogram = (base - signal) * 2
/// - MACD = base + sin(i / 3) * 0.8
///
/// The histogram is measured against the base value, not the oscillated line.
pub struct MacdSeries {
    window: usize,
}

impl Default for MacdSeries {
    fn default() -> Self {
        Self { window: DEFAULT_WINDOW }
    }
}

impl MacdSeries {
    pub fn new(window: usize) -> Self {
        Self { window }
    }
}

impl IndicatorSeries for MacdSeries {
    type Point = MacdPoint;

    fn kind(&self) -> IndicatorKind {
        IndicatorKind::Macd
    }

    fn window(&self) -> usize {
        self.window
    }

    fn synthesize(&self, prediction: &StockPrediction) -> Result<Vec<MacdPoint>> {
        let base_macd = ensure_finite("snapshot macd", prediction.indicators.macd)?;

        Ok(trailing(&prediction.historical_data, self.window)
            .iter()
            .enumerate()
            .map(|(i, point)| {
                let i = i as f64;
                let signal = base_macd - 0.5 + (i / 4.0).sin() * 0.7;
                MacdPoint {
                    date: point.date,
                    macd: base_macd + (i / 3.0).sin() * 0.8,
                    signal,
                    histogram: (base_macd - signal) * 2.0,
                }
            })
            .collect())
    }
}
