pub mod insight;

use crate::llm::{GenerationResult, TextGenerator};

use tracing::info;

pub use insight::InsightAgent;

#[allow(async_fn_in_trait)]
pub trait Agent {
    fn name(&self) -> &str;
    fn system_prompt(&self) -> &str;

    /// Send `query` under this agent's system prompt and return the reply verbatim.
    async fn run(&self, query: &str, llm: &dyn TextGenerator) -> GenerationResult<String> {
        info!("🤖 [AGENT] Sending request to {}...", self.name());
        let response = llm.generate(self.system_prompt(), query).await?;
        info!("🤖 [AGENT] Response from {} ({} chars)", self.name(), response.len());
        Ok(response)
    }
}
