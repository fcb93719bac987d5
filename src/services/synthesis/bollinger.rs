//! Bollinger Bands display series.

use tracing::{debug, warn};

use super::{trailing, IndicatorSeries, DEFAULT_WINDOW};
use crate::error::{ensure_finite, AppError, Result};
use crate::types::{BollingerPoint, IndicatorKind, StockPrediction};

/// Bollinger envelope over the trailing history followed by the forecast.
///
/// Band width is driven by the relative volatility of the whole history
/// (population std dev / mean):
/// - Historical point i: `vol * (1 + sin(i / 10) * 0.3)`
/// - Forecast point `d` days after the first forecast date: `vol * (1 + d * 0.05)`
///
/// Each band sits `price * factor * multiplier` away from the middle band.
pub struct BollingerSeries {
    window: usize,
    std_dev_multiplier: f64,
}

impl Default for BollingerSeries {
    fn default() -> Self {
        Self {
            window: DEFAULT_WINDOW,
            std_dev_multiplier: 2.0,
        }
    }
}

/// Mean and population standard deviation of a price series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceStatistics {
    pub mean: f64,
    pub std_dev: f64,
}

impl PriceStatistics {
    /// Fails on an empty series or a zero/non-finite mean, since relative
    /// volatility divides by the mean.
    pub fn from_prices(prices: &[f64]) -> Result<Self> {
        if prices.is_empty() {
            return Err(AppError::invalid(
                "historical series is empty; cannot compute price volatility",
            ));
        }

        let count = prices.len() as f64;
        let mean = prices.iter().sum::<f64>() / count;
        if mean == 0.0 || !mean.is_finite() {
            return Err(AppError::invalid(format!(
                "average historical price must be non-zero and finite, got {}",
                mean
            )));
        }

        let variance = prices.iter().map(|p| (p - mean).powi(2)).sum::<f64>() / count;
        Ok(Self {
            mean,
            std_dev: variance.sqrt(),
        })
    }

    /// Standard deviation as a fraction of the mean.
    pub fn relative_volatility(&self) -> f64 {
        self.std_dev / self.mean
    }
}

impl BollingerSeries {
    pub fn new(window: usize) -> Self {
        Self {
            window,
            ..Self::default()
        }
    }

    fn band(&self, center: f64, volatility_factor: f64) -> f64 {
        center * volatility_factor * self.std_dev_multiplier
    }
}

impl IndicatorSeries for BollingerSeries {
    type Point = BollingerPoint;

    fn kind(&self) -> IndicatorKind {
        IndicatorKind::Bollinger
    }

    fn window(&self) -> usize {
        self.window
    }

    fn synthesize(&self, prediction: &StockPrediction) -> Result<Vec<BollingerPoint>> {
        let prices: Vec<f64> = prediction.historical_prices().collect();
        let stats = PriceStatistics::from_prices(&prices)?;
        let base_volatility = stats.relative_volatility();

        let mut series: Vec<BollingerPoint> = trailing(&prediction.historical_data, self.window)
            .iter()
            .enumerate()
            .map(|(i, point)| {
                let price = point.price;
                let volatility_factor = base_volatility * (1.0 + (i as f64 / 10.0).sin() * 0.3);
                let band_width = self.band(price, volatility_factor);
                BollingerPoint {
                    date: point.date,
                    price,
                    upper_band: price + band_width,
                    lower_band: price - band_width,
                    middle_band: price,
                    is_prediction: false,
                    confidence_interval: None,
                }
            })
            .collect();

        if let Some(forecast_start) = prediction.forecast_start() {
            for point in &prediction.prediction_data {
                if !point.has_prediction() {
                    warn!(date = %point.date, "Skipping forecast point without a prediction");
                    continue;
                }

                let predicted = ensure_finite("forecast prediction", point.predicted)?;
                let actual = point
                    .actual
                    .map(|actual| ensure_finite("forecast actual", actual))
                    .transpose()?;

                let days_offset = (point.date - forecast_start).num_days() as f64;
                let volatility_factor = base_volatility * (1.0 + days_offset * 0.05);
                let band_width = self.band(predicted, volatility_factor);

                series.push(BollingerPoint {
                    date: point.date,
                    price: actual.unwrap_or(predicted),
                    upper_band: predicted + band_width,
                    lower_band: predicted - band_width,
                    middle_band: predicted,
                    is_prediction: true,
                    confidence_interval: Some(band_width),
                });
            }
        }

        debug!(
            ticker = %prediction.ticker,
            points = series.len(),
            base_volatility,
            "Synthesized Bollinger series"
        );

        Ok(series)
    }
}
