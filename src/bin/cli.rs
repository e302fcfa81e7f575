//! Console entry point: runs the pipeline once for the default ticker.

use stock_insights::constants::{messages, DEFAULT_TICKER};
use stock_insights::{AppConfig, Pipeline, PipelineError};
use tracing::error;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // Logs go to stderr so stdout only carries the insight
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            error!("❌ {}", e);
            AppConfig::default()
        }
    };

    let pipeline = Pipeline::from_config(&config);
    match pipeline.run(DEFAULT_TICKER).await {
        Ok(report) => {
            println!("Generated Insights:");
            println!("{}", report.insight);
        }
        Err(PipelineError::FetchFailed(_)) => println!("{}", messages::CLI_NO_DATA),
        Err(e) => println!("{}", e),
    }
}
