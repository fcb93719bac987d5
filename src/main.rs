use std::fs;

use anyhow::Context;
use chrono::Utc;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::json;
use stockcast::config::Config;
use stockcast::services::{analyze, display_summary};
use stockcast::sources::{alphavantage, SyntheticMarket};
use stockcast::StockPrediction;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stockcast=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();
    let today = Utc::now().date_naive();
    info!(ticker = %config.ticker, currency = %config.display_currency, "Starting stockcast");

    let prediction = load_prediction(&config, today)?;
    let analysis = analyze(&prediction)
        .with_context(|| format!("failed to analyze {}", prediction.ticker))?;
    let display = display_summary(&prediction, config.display_currency);

    let output = json!({
        "analysis": analysis,
        "display": display,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}

fn load_prediction(config: &Config, today: chrono::NaiveDate) -> anyhow::Result<StockPrediction> {
    if let Some(path) = &config.quote_file {
        info!(path = %path.display(), "Loading Alpha Vantage quote file");
        let body = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let response = alphavantage::parse_daily_response(&body)?;
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        return Ok(alphavantage::to_stock_prediction(
            &response,
            &config.ticker,
            today,
            &mut rng,
        )?);
    }

    let market = match config.seed {
        Some(seed) => SyntheticMarket::seeded(seed),
        None => SyntheticMarket::from_entropy(),
    };
    let mut market = market.with_config(config.generator.clone());
    Ok(market.stock_prediction(&config.ticker, today)?)
}
