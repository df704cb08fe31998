//! Local embedding provider backed by the in-process ONNX model

use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::Arc;

use crate::embeddings::OnnxEmbedder;
use crate::error::{Error, Result};

use super::embedding::EmbeddingProvider;

/// Local embedder wrapping an `OnnxEmbedder`
///
/// Inference is CPU-bound and needs `&mut` access to the session, so every
/// call runs on the blocking pool behind a mutex.
pub struct LocalEmbedder {
    embedder: Arc<Mutex<OnnxEmbedder>>,
    dimensions: usize,
}

impl LocalEmbedder {
    /// Wrap a loaded embedder
    pub fn new(embedder: OnnxEmbedder) -> Self {
        let dimensions = embedder.dimensions();
        Self {
            embedder: Arc::new(Mutex::new(embedder)),
            dimensions,
        }
    }
}

#[async_trait]
impl EmbeddingProvider for LocalEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let embedder = Arc::clone(&self.embedder);
        let text = text.to_string();
        tokio::task::spawn_blocking(move || embedder.lock().embed_one(&text))
            .await
            .map_err(|e| Error::internal(format!("Task join error: {}", e)))?
    }

    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        let embedder = Arc::clone(&self.embedder);
        let texts = texts.to_vec();
        tokio::task::spawn_blocking(move || {
            let refs: Vec<&str> = texts.iter().map(String::as_str).collect();
            embedder.lock().embed_batch(&refs)
        })
        .await
        .map_err(|e| Error::internal(format!("Task join error: {}", e)))?
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "local-onnx"
    }
}
