use std::sync::Arc;

use stock_insights::api::{run_server, AppState};
use stock_insights::{AppConfig, Pipeline};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    dotenvy::dotenv().ok();

    // Setup Logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Starting Stock Insights web server...");

    // Load Configuration
    let config = AppConfig::load()?;
    info!("Default ticker: {}", config.default_ticker);

    let pipeline = Pipeline::from_config(&config);
    let app_state = Arc::new(AppState { pipeline, config });

    info!("Initializing API Server...");
    run_server(app_state).await?;

    Ok(())
}
