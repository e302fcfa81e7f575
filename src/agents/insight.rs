use std::fmt::Write;

use crate::agents::Agent;
use crate::data::TickerSymbol;
use crate::error::GenerationError;
use crate::llm::{GenerationResult, TextGenerator};
use crate::services::processor::{format_mean, ProcessedSummary};

#[derive(Clone, Copy, Debug, Default)]
pub struct InsightAgent;

impl Agent for InsightAgent {
    fn name(&self) -> &str {
        "Insight-Agent"
    }

    fn system_prompt(&self) -> &str {
        r#"You are a financial analyst assistant. You receive a summary of a single stock: the mean number of analysts in each recommendation category over recent periods, and the latest news headlines with their publishers.

Write a short, plain-language insight (one to three paragraphs) covering:
- what the analyst consensus suggests,
- what themes stand out in the headlines,
- any tension between the two.

Only use the data provided. If a section is marked as not available, say so instead of guessing. Do not give personalised investment advice.
"#
    }
}

impl InsightAgent {
    /// User prompt embedding every category mean and every headline.
    pub fn build_prompt(&self, ticker: &TickerSymbol, summary: &ProcessedSummary) -> String {
        let mut prompt = String::new();
        let _ = writeln!(prompt, "Analyze the following data for {} and provide insights.", ticker);
        prompt.push('\n');

        prompt.push_str("Analyst recommendations (mean count per category):\n");
        match &summary.recommendations {
            Some(means) => {
                for (category, mean) in means.iter() {
                    let _ = writeln!(prompt, "- {}: {}", category, format_mean(mean));
                }
            }
            None => prompt.push_str("- not available\n"),
        }
        prompt.push('\n');

        prompt.push_str("Latest news:\n");
        match &summary.news {
            Some(items) => {
                for (i, item) in items.iter().enumerate() {
                    let _ = writeln!(prompt, "{}. \"{}\" ({})", i + 1, item.title, item.publisher);
                }
            }
            None => prompt.push_str("- not available\n"),
        }

        prompt
    }

    /// Blank replies count as failures.
    pub async fn generate_insight(
        &self,
        ticker: &TickerSymbol,
        summary: &ProcessedSummary,
        llm: &dyn TextGenerator,
    ) -> GenerationResult<String> {
        let prompt = self.build_prompt(ticker, summary);
        let response = self.run(&prompt, llm).await?;
        if response.trim().is_empty() {
            return Err(GenerationError::EmptyResponse);
        }
        Ok(response)
    }
}
