//! Error types for the insight pipeline
//!
//! Each stage has its own error enum so the detail can be logged, while the
//! pipeline folds everything into the two user-facing outcomes.

use thiserror::Error;

use crate::constants::messages;

/// Market-data provider errors
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Authentication failed: {reason}")]
    AuthFailed { reason: String },

    #[error("Invalid provider URL: {url}")]
    InvalidUrl { url: String },

    #[error("No result returned for {symbol}")]
    NoResult { symbol: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Deserialization error: {0}")]
    Deserialization(#[from] serde_json::Error),
}

/// Text-generation errors
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("LLM API error: {0}")]
    Api(#[from] async_openai::error::OpenAIError),

    #[error("LLM returned an empty response")]
    EmptyResponse,
}

/// Outcomes surfaced to the user. `Display` is the message shown verbatim.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("{}", messages::INVALID_TICKER)]
    InvalidTicker,

    #[error("{}", messages::FETCH_FAILED)]
    FetchFailed(#[source] ProviderError),

    #[error("{}", messages::INSIGHT_FAILED)]
    InsightFailed(#[source] GenerationError),
}

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },
}
