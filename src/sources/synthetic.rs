//! Synthetic market data.
//!
//! Random walks for a small catalogue of US tickers. The generator owns its
//! RNG so callers (and tests) choose between a fixed seed and entropy, and all
//! dates are anchored on a caller-supplied `today`.

use chrono::{Duration, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::config::GeneratorConfig;
use crate::error::{AppError, Result};
use crate::services::recommend;
use crate::types::decimal::round_to;
use crate::types::{
    ForecastPoint, IndicatorSnapshot, ModelMetrics, PricePoint, StockMetadata, StockPrediction,
};

/// A ticker the generator knows how to simulate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatalogEntry {
    pub ticker: &'static str,
    pub name: &'static str,
    pub base_price: f64,
}

const CATALOG: &[CatalogEntry] = &[
    CatalogEntry { ticker: "AAPL", name: "Apple Inc.", base_price: 173.50 },
    CatalogEntry { ticker: "MSFT", name: "Microsoft Corporation", base_price: 329.80 },
    CatalogEntry { ticker: "TSLA", name: "Tesla, Inc.", base_price: 251.45 },
    CatalogEntry { ticker: "AMZN", name: "Amazon.com, Inc.", base_price: 139.75 },
    CatalogEntry { ticker: "GOOG", name: "Alphabet Inc.", base_price: 132.60 },
    CatalogEntry { ticker: "META", name: "Meta Platforms, Inc.", base_price: 302.85 },
    CatalogEntry { ticker: "NFLX", name: "Netflix, Inc.", base_price: 434.20 },
    CatalogEntry { ticker: "NVDA", name: "NVIDIA Corporation", base_price: 432.50 },
];

/// Look up a ticker, ignoring case.
pub fn catalog_entry(ticker: &str) -> Option<&'static CatalogEntry> {
    let wanted = ticker.trim();
    CATALOG.iter().find(|e| e.ticker.eq_ignore_ascii_case(wanted))
}

pub fn catalog() -> &'static [CatalogEntry] {
    CATALOG
}

/// Tickers suggested in the search box.
pub fn popular_tickers() -> Vec<&'static str> {
    CATALOG.iter().take(5).map(|e| e.ticker).collect()
}

/// Seedable generator of synthetic [`StockPrediction`]s.
pub struct SyntheticMarket<R: Rng = StdRng> {
    rng: R,
    config: GeneratorConfig,
}

impl SyntheticMarket<StdRng> {
    /// Reproducible generator.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> SyntheticMarket<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            config: GeneratorConfig::default(),
        }
    }

    pub fn with_config(mut self, config: GeneratorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Uniform value in `[lo, lo + span)`.
    fn uniform(&mut self, lo: f64, span: f64) -> f64 {
        lo + self.rng.gen::<f64>() * span
    }

    /// Symmetric relative move in `[-volatility, volatility)`.
    fn random_change(&mut self, volatility: f64) -> f64 {
        (self.rng.gen::<f64>() * 2.0 - 1.0) * volatility
    }

    fn random_volume(&mut self) -> u64 {
        (self.config.base_volume * self.uniform(0.5, 1.0)).floor() as u64
    }

    /// Daily closes from `today - days` through `today` inclusive.
    pub fn generate_historical_data(
        &mut self,
        days: u32,
        base_price: f64,
        today: NaiveDate,
    ) -> Vec<PricePoint> {
        let volatility = self.config.daily_volatility;
        let mut price = base_price;

        (0..=days)
            .rev()
            .map(|offset| {
                price *= 1.0 + self.random_change(volatility);
                PricePoint {
                    date: today - Duration::days(offset as i64),
                    price: round_to(price, 2),
                    volume: self.random_volume(),
                }
            })
            .collect()
    }

    /// Comparison predictions over the last few historical days followed by
    /// `future_days` forward predictions starting the day after `today`.
    pub fn generate_predictions(
        &mut self,
        history: &[PricePoint],
        future_days: u32,
        today: NaiveDate,
    ) -> Result<Vec<ForecastPoint>> {
        let last = history
            .last()
            .ok_or_else(|| AppError::invalid("cannot predict from an empty history"))?;

        let error_margin = self.config.error_margin;
        let volatility = self.config.daily_volatility;
        let start = history.len().saturating_sub(self.config.comparison_days);

        let mut predictions: Vec<ForecastPoint> = history[start..]
            .iter()
            .map(|point| {
                let error = self.random_change(error_margin);
                ForecastPoint {
                    date: point.date,
                    actual: Some(point.price),
                    predicted: round_to(point.price * (1.0 + error), 2),
                }
            })
            .collect();

        let mut last_price = last.price;
        for day in 1..=future_days {
            last_price *= 1.0 + self.random_change(volatility);
            predictions.push(ForecastPoint {
                date: today + Duration::days(day as i64),
                actual: None,
                predicted: round_to(last_price, 2),
            });
        }

        Ok(predictions)
    }

    /// Full prediction for a catalogue ticker.
    pub fn stock_prediction(&mut self, ticker: &str, today: NaiveDate) -> Result<StockPrediction> {
        let entry =
            catalog_entry(ticker).ok_or_else(|| AppError::UnknownTicker(ticker.to_string()))?;

        let historical_data =
            self.generate_historical_data(self.config.history_days, entry.base_price, today);
        let [.., previous, latest] = historical_data.as_slice() else {
            return Err(AppError::invalid(format!(
                "history of {} days is too short to derive a daily change",
                self.config.history_days
            )));
        };
        let last_close = latest.price;
        let previous_close = previous.price;
        let change = last_close - previous_close;

        let prediction_data =
            self.generate_predictions(&historical_data, self.config.forecast_days, today)?;

        let rsi = round_to(self.uniform(30.0, 40.0), 2);
        let macd = round_to(self.uniform(-2.0, 4.0), 2);
        let bollinger_range = last_close * 0.1;

        let metrics = ModelMetrics {
            mse: round_to(self.uniform(0.0, 10.0), 2),
            rmse: round_to(self.uniform(0.0, 3.0), 2),
            mae: round_to(self.uniform(0.0, 2.0), 2),
            accuracy: round_to(self.uniform(70.0, 20.0), 2),
            confidence: round_to(self.uniform(0.6, 0.3), 2),
        };

        debug!(
            ticker = entry.ticker,
            history = historical_data.len(),
            forecast = prediction_data.len(),
            "Generated synthetic prediction"
        );

        Ok(StockPrediction {
            ticker: entry.ticker.to_string(),
            metadata: StockMetadata {
                ticker: entry.ticker.to_string(),
                name: entry.name.to_string(),
                current_price: last_close,
                previous_close,
                change,
                change_percent: change / previous_close * 100.0,
            },
            historical_data,
            prediction_data,
            metrics,
            indicators: IndicatorSnapshot {
                rsi,
                macd,
                bollinger_upper: round_to(last_close + bollinger_range, 2),
                bollinger_lower: round_to(last_close - bollinger_range, 2),
                recommendation: recommend(rsi),
            },
        })
    }
}
