//! Fetch, process, generate: the one operation both front ends call.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use tracing::{error, info, info_span, Instrument};
use uuid::Uuid;

use crate::agents::InsightAgent;
use crate::config::AppConfig;
use crate::data::{MarketDataProvider, TickerSymbol, YahooClient};
use crate::error::PipelineError;
use crate::llm::{LLMClient, TextGenerator};
use crate::services::processor::{self, ProcessedSummary};

/// Result of one successful run, handed to the UI for display.
#[derive(Clone, Debug, Serialize)]
pub struct InsightReport {
    pub ticker: TickerSymbol,
    pub summary: ProcessedSummary,
    pub insight: String,
    pub generated_at: DateTime<Utc>,
}

#[derive(Clone)]
pub struct Pipeline {
    market_data: Arc<dyn MarketDataProvider>,
    llm: Arc<dyn TextGenerator>,
    agent: InsightAgent,
}

impl Pipeline {
    pub fn new(market_data: Arc<dyn MarketDataProvider>, llm: Arc<dyn TextGenerator>) -> Self {
        Self {
            market_data,
            llm,
            agent: InsightAgent,
        }
    }

    /// Yahoo for market data, the configured OpenAI-compatible endpoint for text.
    pub fn from_config(config: &AppConfig) -> Self {
        let api_key = config.llm.api_key.clone().unwrap_or_default();
        if api_key.is_empty() {
            tracing::warn!("⚠️ No LLM API key configured (set OPENAI_API_KEY)");
        }
        if let Some(url) = &config.llm.base_url {
            info!("Using Custom OpenAI Base URL: {}", url);
        }
        info!("Using LLM Model: {}", config.llm.model);

        let llm = LLMClient::new(api_key, config.llm.base_url.clone(), config.llm.model.clone());
        let market_data = YahooClient::new(config.market_data.clone());
        Self::new(Arc::new(market_data), Arc::new(llm))
    }

    pub async fn run(&self, raw_ticker: &str) -> Result<InsightReport, PipelineError> {
        let ticker = TickerSymbol::parse(raw_ticker)?;
        let span = info_span!("pipeline", request_id = %Uuid::new_v4(), ticker = %ticker);
        self.run_ticker(ticker).instrument(span).await
    }

    async fn run_ticker(&self, ticker: TickerSymbol) -> Result<InsightReport, PipelineError> {
        info!("🔎 Fetching data via {}", self.market_data.name());
        let record = self.market_data.fetch(&ticker).await.map_err(|e| {
            error!("❌ Fetch failed: {}", e);
            PipelineError::FetchFailed(e)
        })?;

        let summary = processor::process(&record);
        info!(
            "🧮 Processed summary (recommendations: {}, news items: {})",
            summary.recommendations.is_some(),
            summary.news.as_ref().map_or(0, Vec::len)
        );

        let insight = self
            .agent
            .generate_insight(&ticker, &summary, self.llm.as_ref())
            .await
            .map_err(|e| {
                error!("❌ Insight generation failed: {}", e);
                PipelineError::InsightFailed(e)
            })?;

        info!("✅ Insight generated");
        Ok(InsightReport {
            ticker,
            summary,
            insight,
            generated_at: Utc::now(),
        })
    }
}
