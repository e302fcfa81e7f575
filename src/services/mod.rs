pub mod pipeline;
pub mod processor;

pub use pipeline::{InsightReport, Pipeline};

#[cfg(test)]
mod processor_tests;
