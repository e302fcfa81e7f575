//! Stock Insights - analyst recommendations and news, summarised by an LLM
//!
//! This library fetches a ticker's recommendation trend and headlines,
//! reduces them to a small summary and asks a text-generation model for a
//! short narrative. The web server and the CLI both drive [`Pipeline`].

pub mod agents;
pub mod api;
pub mod config;
pub mod constants;
pub mod data;
pub mod error;
pub mod llm;
pub mod page;
pub mod services;

// Re-export commonly used types
pub use config::AppConfig;
pub use data::{RawMarketRecord, TickerSymbol};
pub use error::PipelineError;
pub use services::processor::{process, ProcessedSummary};
pub use services::{InsightReport, Pipeline};
