//! LLM provider trait for generating answers

use async_trait::async_trait;
use crate::error::Result;

/// Trait for prompt completion
///
/// Implementations:
/// - `GeminiClient`: Google Generative Language API (gemini-pro)
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Complete a fully assembled prompt.
    ///
    /// Returns the generated text, which is empty when the model produced
    /// none; callers decide whether that is an error.
    async fn generate(&self, prompt: &str) -> Result<String>;

    /// Get provider name for logging
    fn name(&self) -> &str;

    /// Get the model being used
    fn model(&self) -> &str;
}
