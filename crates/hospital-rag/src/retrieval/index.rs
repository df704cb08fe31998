//! In-memory vector index with brute-force cosine search

use std::sync::Arc;

use crate::error::{Error, Result};
use crate::providers::EmbeddingProvider;
use crate::types::Chunk;

/// Chunks sent to the embedder per call during build
const BUILD_BATCH_SIZE: usize = 64;

/// Search result with chunk and similarity
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The retrieved chunk
    pub chunk: Chunk,
    /// Cosine similarity to the query (higher is better)
    pub similarity: f32,
}

struct IndexedEntry {
    embedding: Vec<f32>,
    chunk: Chunk,
}

/// Immutable index of embedded chunks
///
/// Built once at startup; lookups only read, so the index is shared through
/// an `Arc` without locking.
pub struct VectorIndex {
    embedder: Arc<dyn EmbeddingProvider>,
    entries: Vec<IndexedEntry>,
    dimensions: usize,
}

impl VectorIndex {
    /// Embed every chunk and build the index
    pub async fn build(embedder: Arc<dyn EmbeddingProvider>, chunks: Vec<Chunk>) -> Result<Self> {
        let dimensions = embedder.dimensions();
        let mut entries = Vec::with_capacity(chunks.len());

        tracing::info!(
            "Embedding {} chunks with {} ({} dimensions)",
            chunks.len(),
            embedder.name(),
            dimensions
        );

        let mut chunks = chunks.into_iter().peekable();
        while chunks.peek().is_some() {
            let batch: Vec<Chunk> = chunks.by_ref().take(BUILD_BATCH_SIZE).collect();
            let texts: Vec<String> = batch.iter().map(|c| c.content.clone()).collect();
            let embeddings = embedder.embed_batch(&texts).await?;

            if embeddings.len() != batch.len() {
                return Err(Error::embedding(format!(
                    "Expected {} embeddings, got {}",
                    batch.len(),
                    embeddings.len()
                )));
            }

            for (embedding, chunk) in embeddings.into_iter().zip(batch) {
                check_dimensions(&embedding, dimensions)?;
                entries.push(IndexedEntry { embedding, chunk });
            }

            tracing::debug!("Indexed {} chunks", entries.len());
        }

        tracing::info!("Vector index built with {} entries", entries.len());

        Ok(Self {
            embedder,
            entries,
            dimensions,
        })
    }

    /// Embed `query` and return its `k` nearest chunks
    pub async fn similarity_search(&self, query: &str, k: usize) -> Result<Vec<SearchResult>> {
        let embedding = self.embedder.embed(query).await?;
        self.nearest(&embedding, k)
    }

    /// The `k` entries most similar to `embedding`, by non-increasing cosine
    /// similarity; equal scores keep insertion order.
    pub fn nearest(&self, embedding: &[f32], k: usize) -> Result<Vec<SearchResult>> {
        check_dimensions(embedding, self.dimensions)?;

        let mut scored: Vec<(f32, &IndexedEntry)> = self
            .entries
            .iter()
            .map(|entry| (cosine_similarity(&entry.embedding, embedding), entry))
            .collect();

        // Stable and total; NaN scores rank last
        scored.sort_by(|a, b| rank(b.0).total_cmp(&rank(a.0)));

        Ok(scored
            .into_iter()
            .take(k)
            .map(|(similarity, entry)| SearchResult {
                chunk: entry.chunk.clone(),
                similarity,
            })
            .collect())
    }

    /// Number of indexed chunks
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the index holds no chunks
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Embedding dimensions
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }
}

fn rank(similarity: f32) -> f32 {
    if similarity.is_nan() {
        f32::NEG_INFINITY
    } else {
        similarity
    }
}

fn check_dimensions(embedding: &[f32], expected: usize) -> Result<()> {
    if embedding.len() != expected {
        return Err(Error::embedding(format!(
            "Dimension mismatch: expected {}, got {}",
            expected,
            embedding.len()
        )));
    }
    Ok(())
}

/// Cosine similarity; 0.0 if either vector has zero magnitude.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}
