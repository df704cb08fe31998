//! Response types for chat answers

use serde::{Deserialize, Serialize};

use super::document::DocumentMetadata;

/// Placeholder for metadata fields a source does not carry
pub const UNKNOWN: &str = "unknown";

/// Attribution of one retrieved chunk
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Source {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: String,
    pub name: String,
}

impl Source {
    /// Build a source from chunk metadata; visits and reviews carry no name.
    pub fn from_metadata(metadata: &DocumentMetadata) -> Self {
        Self {
            kind: metadata.kind.to_string(),
            id: if metadata.id.is_empty() {
                UNKNOWN.to_string()
            } else {
                metadata.id.clone()
            },
            name: metadata
                .name
                .clone()
                .unwrap_or_else(|| UNKNOWN.to_string()),
        }
    }
}

/// Answer to a chat request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Generated answer
    pub response: String,
    /// One entry per retrieved chunk, in retrieval order
    pub sources: Vec<Source>,
}
