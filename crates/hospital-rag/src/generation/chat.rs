//! Per-request chat pipeline: retrieve, prompt, generate, attribute

use std::sync::Arc;
use std::time::Instant;

use crate::error::{Error, Result};
use crate::providers::LlmProvider;
use crate::retrieval::VectorIndex;
use crate::types::{ChatResponse, Source};

use super::prompt::PromptBuilder;

/// Detail reported when the model returns no text
pub const GENERATION_FAILED: &str = "Failed to generate response";

/// Answers questions from the indexed records
pub struct ChatService {
    index: Arc<VectorIndex>,
    llm: Arc<dyn LlmProvider>,
    top_k: usize,
}

impl ChatService {
    /// Create a chat service retrieving `top_k` chunks per question
    pub fn new(index: Arc<VectorIndex>, llm: Arc<dyn LlmProvider>, top_k: usize) -> Self {
        Self { index, llm, top_k }
    }

    /// Answer one question
    pub async fn answer(&self, message: &str) -> Result<ChatResponse> {
        let start = Instant::now();
        tracing::info!("Chat question: {}", message);

        let results = self.index.similarity_search(message, self.top_k).await?;
        tracing::debug!("Retrieved {} chunks", results.len());

        let context = PromptBuilder::build_context(&results);
        let prompt = PromptBuilder::build_chat_prompt(&context, message);

        let response = self.llm.generate(&prompt).await?;
        if response.is_empty() {
            return Err(Error::Generation(GENERATION_FAILED.to_string()));
        }

        let sources = results
            .iter()
            .map(|r| Source::from_metadata(&r.chunk.metadata))
            .collect();

        tracing::info!(
            "Answered with {} in {}ms",
            self.llm.model(),
            start.elapsed().as_millis()
        );

        Ok(ChatResponse { response, sources })
    }

    /// The index backing retrieval
    pub fn index(&self) -> &Arc<VectorIndex> {
        &self.index
    }
}
