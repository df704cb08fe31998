//! Provider abstractions for embeddings and answer generation
//!
//! The index and chat service depend only on these traits; the concrete
//! backends are the local ONNX embedder and the Gemini API.

pub mod embedding;
pub mod gemini;
pub mod llm;
pub mod local;

pub use embedding::EmbeddingProvider;
pub use gemini::GeminiClient;
pub use llm::LlmProvider;
pub use local::LocalEmbedder;

#[cfg(test)]
pub(crate) mod testing;
