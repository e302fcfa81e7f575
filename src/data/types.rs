use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use crate::constants::news::{DEFAULT_PUBLISHER, DEFAULT_TITLE};
use crate::error::PipelineError;

/// Upper-cased, non-empty ticker such as "NVDA".
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TickerSymbol(String);

impl TickerSymbol {
    pub fn parse(raw: &str) -> Result<Self, PipelineError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(PipelineError::InvalidTicker);
        }
        Ok(Self(trimmed.to_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TickerSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One row of the analyst recommendation table (one period).
/// A cell that is missing or `null` stays `None` and is left out of the mean.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRow {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
    #[serde(default)]
    pub strong_buy: Option<f64>,
    #[serde(default)]
    pub buy: Option<f64>,
    #[serde(default)]
    pub hold: Option<f64>,
    #[serde(default)]
    pub sell: Option<f64>,
    #[serde(default)]
    pub strong_sell: Option<f64>,
}

/// A provider news article. Only `title` and `publisher` are interpreted;
/// everything else (links, thumbnails, timestamps) rides along in `extra`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RawNewsItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RawNewsItem {
    pub fn title_or_default(&self) -> &str {
        self.title.as_deref().unwrap_or(DEFAULT_TITLE)
    }

    pub fn publisher_or_default(&self) -> &str {
        self.publisher.as_deref().unwrap_or(DEFAULT_PUBLISHER)
    }
}

/// Everything the provider returned for one ticker, in provider order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RawMarketRecord {
    pub recommendations: Option<Vec<RecommendationRow>>,
    pub news: Option<Vec<RawNewsItem>>,
}
