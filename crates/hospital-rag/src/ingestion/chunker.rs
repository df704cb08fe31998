//! Fixed-size character chunking with overlap

use crate::config::ChunkingConfig;
use crate::error::{Error, Result};
use crate::types::{Chunk, Document};

/// Text chunker with configurable size and overlap
///
/// Sizes are counted in characters, not bytes, so windows never split a
/// multi-byte character.
#[derive(Debug, Clone)]
pub struct TextChunker {
    /// Maximum chunk size in characters
    chunk_size: usize,
    /// Characters shared by consecutive chunks
    overlap: usize,
}

impl TextChunker {
    /// Create a new chunker; `overlap` must be smaller than `chunk_size`
    pub fn new(chunk_size: usize, overlap: usize) -> Result<Self> {
        if chunk_size == 0 || overlap >= chunk_size {
            return Err(Error::Config(format!(
                "Invalid chunking: size {} with overlap {}",
                chunk_size, overlap
            )));
        }
        Ok(Self {
            chunk_size,
            overlap,
        })
    }

    /// Create from config
    pub fn from_config(config: &ChunkingConfig) -> Result<Self> {
        Self::new(config.chunk_size, config.chunk_overlap)
    }

    /// Chunk every document, preserving document order
    pub fn chunk_all(&self, documents: &[Document]) -> Vec<Chunk> {
        documents
            .iter()
            .flat_map(|doc| self.chunk_document(doc))
            .collect()
    }

    /// Chunk a single document; each chunk inherits the document's metadata
    pub fn chunk_document(&self, doc: &Document) -> Vec<Chunk> {
        self.split_text(&doc.content)
            .into_iter()
            .enumerate()
            .map(|(index, content)| Chunk::new(&doc.metadata, content, index as u32))
            .collect()
    }

    /// Split text into windows of at most `chunk_size` characters, each
    /// starting `chunk_size - overlap` characters after the previous one.
    pub fn split_text(&self, text: &str) -> Vec<String> {
        // Byte offset of every char, plus the end of the string
        let boundaries: Vec<usize> = text
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(text.len()))
            .collect();
        let char_count = boundaries.len() - 1;

        let mut chunks = Vec::new();
        if char_count == 0 {
            return chunks;
        }

        let step = self.chunk_size - self.overlap;
        let mut start = 0usize;

        loop {
            let end = (start + self.chunk_size).min(char_count);
            chunks.push(text[boundaries[start]..boundaries[end]].to_string());

            if end == char_count {
                break;
            }
            start += step;
        }

        chunks
    }
}

impl Default for TextChunker {
    fn default() -> Self {
        Self {
            chunk_size: 1000,
            overlap: 200,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DocumentKind, DocumentMetadata};

    fn doc(content: &str) -> Document {
        Document::new(
            content.to_string(),
            DocumentMetadata::named(DocumentKind::Review, "40", "Wheeler"),
        )
    }

    #[test]
    fn test_short_document_is_one_chunk() {
        let chunker = TextChunker::default();
        let chunks = chunker.chunk_document(&doc("The hospital St. Mary is located in CA."));

        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].content, "The hospital St. Mary is located in CA.");
        assert_eq!(chunks[0].chunk_index, 0);
    }

    #[test]
    fn test_exact_size_is_one_chunk() {
        let chunker = TextChunker::default();
        assert_eq!(chunker.split_text(&"a".repeat(1000)).len(), 1);
        assert_eq!(chunker.split_text(&"a".repeat(1001)).len(), 2);
    }

    #[test]
    fn test_long_document_windows_and_overlap() {
        let chunker = TextChunker::default();
        let text: String = (0..2500).map(|i| char::from(b'a' + (i % 26) as u8)).collect();
        let chunks = chunker.split_text(&text);

        // starts at 0, 800, 1600
        assert_eq!(chunks.len(), 3);
        for chunk in &chunks {
            assert!(chunk.chars().count() <= 1000);
        }
        for pair in chunks.windows(2) {
            let prev_tail: String = pair[0].chars().skip(800).collect();
            assert!(prev_tail.chars().count() >= 200);
            assert!(pair[1].starts_with(&prev_tail));
        }
        assert!(text.ends_with(chunks.last().unwrap().as_str()));
    }

    #[test]
    fn test_multibyte_characters_counted_as_chars() {
        let chunker = TextChunker::new(10, 2).unwrap();
        let text = "é".repeat(25);
        let chunks = chunker.split_text(&text);

        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0].chars().count(), 10);
        assert_eq!(chunks[2].chars().count(), 9);
    }

    #[test]
    fn test_chunking_is_deterministic() {
        let chunker = TextChunker::new(50, 10).unwrap();
        let document = doc(&"Staff were kind and the rooms were clean. ".repeat(10));

        let first = chunker.chunk_document(&document);
        let second = chunker.chunk_document(&document);
        assert_eq!(first, second);
    }

    #[test]
    fn test_chunks_inherit_metadata() {
        let chunker = TextChunker::new(20, 5).unwrap();
        let document = doc(&"x".repeat(100));

        for chunk in chunker.chunk_document(&document) {
            assert_eq!(chunk.metadata, document.metadata);
        }
    }

    #[test]
    fn test_empty_document_has_no_chunks() {
        assert!(TextChunker::default().chunk_document(&doc("")).is_empty());
    }

    #[test]
    fn test_overlap_must_be_smaller_than_size() {
        assert!(TextChunker::new(100, 100).is_err());
        assert!(TextChunker::new(0, 0).is_err());
    }
}
