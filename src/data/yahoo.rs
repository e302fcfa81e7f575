//! Yahoo Finance market-data provider.
//!
//! Analyst recommendations come from the `quoteSummary` endpoint
//! (`recommendationTrend` module) and headlines from the search endpoint.
//! `quoteSummary` needs a cookie and crumb pair, fetched fresh on every call.

use async_trait::async_trait;
use reqwest::{header, Client, Response};
use serde::Deserialize;
use tracing::{debug, info};
use url::Url;

use super::traits::{MarketDataProvider, ProviderResult};
use super::types::{RawMarketRecord, RawNewsItem, RecommendationRow, TickerSymbol};
use crate::config::MarketDataConfig;
use crate::constants::yahoo::RECOMMENDATION_MODULE;
use crate::error::ProviderError;

#[derive(Debug, Clone)]
struct CrumbData {
    cookie: String,
    crumb: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct QuoteSummaryResponse {
    quote_summary: QuoteSummary,
}

#[derive(Debug, Deserialize)]
struct QuoteSummary {
    #[serde(default)]
    result: Option<Vec<QuoteSummaryResult>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct QuoteSummaryResult {
    recommendation_trend: Option<RecommendationTrend>,
}

#[derive(Debug, Deserialize)]
struct RecommendationTrend {
    #[serde(default)]
    trend: Vec<RecommendationRow>,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    news: Option<Vec<RawNewsItem>>,
}

/// Decode a `quoteSummary` body. An empty `result` means Yahoo does not know
/// the symbol; a missing or empty trend means no analyst coverage.
pub fn parse_recommendation_trend(
    symbol: &str,
    body: &str,
) -> ProviderResult<Option<Vec<RecommendationRow>>> {
    let response: QuoteSummaryResponse = serde_json::from_str(body)?;
    let result = response
        .quote_summary
        .result
        .and_then(|results| results.into_iter().next())
        .ok_or_else(|| ProviderError::NoResult {
            symbol: symbol.to_string(),
        })?;

    Ok(result
        .recommendation_trend
        .map(|t| t.trend)
        .filter(|rows| !rows.is_empty()))
}

/// Decode a search body into its news list, preserving provider order.
pub fn parse_news(body: &str) -> ProviderResult<Option<Vec<RawNewsItem>>> {
    let response: SearchResponse = serde_json::from_str(body)?;
    Ok(response.news)
}

#[derive(Clone)]
pub struct YahooClient {
    client: Client,
    config: MarketDataConfig,
}

impl YahooClient {
    pub fn new(config: MarketDataConfig) -> Self {
        info!("Yahoo client config: Base URL = {}", config.base_url);
        Self {
            client: Client::new(),
            config,
        }
    }

    async fn fetch_crumb(&self) -> ProviderResult<CrumbData> {
        // fc.yahoo.com answers 404 but still sets the session cookie
        let response = self
            .client
            .get(&self.config.cookie_url)
            .header(header::USER_AGENT, &self.config.user_agent)
            .send()
            .await?;

        let cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|h| h.to_str().ok())
            .and_then(|s| s.split_once(';').map(|(v, _)| v.to_string()))
            .ok_or_else(|| ProviderError::AuthFailed {
                reason: "no session cookie returned".to_string(),
            })?;

        let url = format!("{}/v1/test/getcrumb", self.config.base_url);
        let response = self
            .client
            .get(&url)
            .header(header::USER_AGENT, &self.config.user_agent)
            .header(header::COOKIE, &cookie)
            .send()
            .await?;
        let crumb = Self::checked_text(response).await?.trim().to_string();

        if crumb.is_empty() {
            return Err(ProviderError::AuthFailed {
                reason: "empty crumb".to_string(),
            });
        }

        debug!("Obtained Yahoo crumb");
        Ok(CrumbData { cookie, crumb })
    }

    async fn get_recommendations(
        &self,
        symbol: &TickerSymbol,
        crumb: &CrumbData,
    ) -> ProviderResult<Option<Vec<RecommendationRow>>> {
        let url = self.summary_url(symbol)?;
        let response = self
            .client
            .get(url)
            .query(&[
                ("modules", RECOMMENDATION_MODULE),
                ("crumb", crumb.crumb.as_str()),
            ])
            .header(header::USER_AGENT, &self.config.user_agent)
            .header(header::COOKIE, &crumb.cookie)
            .send()
            .await?;

        let body = Self::checked_text(response).await?;
        parse_recommendation_trend(symbol.as_str(), &body)
    }

    async fn get_news(&self, symbol: &TickerSymbol) -> ProviderResult<Option<Vec<RawNewsItem>>> {
        let url = format!("{}/v1/finance/search", self.config.base_url);
        let news_count = self.config.news_count.to_string();
        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", symbol.as_str()),
                ("quotesCount", "0"),
                ("newsCount", news_count.as_str()),
            ])
            .header(header::USER_AGENT, &self.config.user_agent)
            .send()
            .await?;

        let body = Self::checked_text(response).await?;
        parse_news(&body)
    }

    /// The symbol goes in as one encoded path segment so `#`, `?` or `/`
    /// cannot cut the path short.
    fn summary_url(&self, symbol: &TickerSymbol) -> ProviderResult<Url> {
        let invalid = || ProviderError::InvalidUrl {
            url: self.config.base_url.clone(),
        };
        let mut url = Url::parse(&self.config.base_url).map_err(|_| invalid())?;
        url.path_segments_mut()
            .map_err(|_| invalid())?
            .pop_if_empty()
            .extend(["v10", "finance", "quoteSummary", symbol.as_str()]);
        Ok(url)
    }

    async fn checked_text(response: Response) -> ProviderResult<String> {
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ProviderError::Http {
                status: status.as_u16(),
                body,
            });
        }
        Ok(body)
    }
}

#[async_trait]
impl MarketDataProvider for YahooClient {
    fn name(&self) -> &'static str {
        "yahoo"
    }

    async fn fetch(&self, symbol: &TickerSymbol) -> ProviderResult<RawMarketRecord> {
        info!("📈 [YAHOO] Fetching recommendations and news for {}", symbol);

        let crumb = self.fetch_crumb().await?;
        let recommendations = self.get_recommendations(symbol, &crumb).await?;
        let news = self.get_news(symbol).await?;

        info!(
            "📈 [YAHOO] {}: {} recommendation rows, {} news items",
            symbol,
            recommendations.as_ref().map_or(0, Vec::len),
            news.as_ref().map_or(0, Vec::len)
        );

        Ok(RawMarketRecord {
            recommendations,
            news,
        })
    }
}
