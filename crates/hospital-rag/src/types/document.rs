//! Document and chunk types with the metadata used for source attribution

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Entity a document was rendered from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Hospital,
    Physician,
    Patient,
    Payer,
    Visit,
    Review,
}

impl DocumentKind {
    /// Wire name, as it appears in `type` fields
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hospital => "hospital",
            Self::Physician => "physician",
            Self::Patient => "patient",
            Self::Payer => "payer",
            Self::Visit => "visit",
            Self::Review => "review",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured metadata linking a document back to its source row
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DocumentMetadata {
    /// Entity type
    #[serde(rename = "type")]
    pub kind: DocumentKind,
    /// Row identifier as written in the CSV
    pub id: String,
    /// Display name (hospitals, physicians, patients, payers)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Foreign keys carried by visits
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hospital_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub physician_id: Option<String>,
    /// Names carried by reviews
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hospital: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub physician: Option<String>,
}

impl DocumentMetadata {
    /// Metadata with only type, id and name set
    pub fn named(kind: DocumentKind, id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            kind,
            id: id.into(),
            name: Some(name.into()),
            hospital_id: None,
            physician_id: None,
            hospital: None,
            physician: None,
        }
    }

    /// Metadata with only type and id set
    pub fn unnamed(kind: DocumentKind, id: impl Into<String>) -> Self {
        Self {
            kind,
            id: id.into(),
            name: None,
            hospital_id: None,
            physician_id: None,
            hospital: None,
            physician: None,
        }
    }
}

/// A rendered record: one per CSV row
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Document {
    /// Natural-language rendering of the row
    pub content: String,
    pub metadata: DocumentMetadata,
}

impl Document {
    pub fn new(content: String, metadata: DocumentMetadata) -> Self {
        Self { content, metadata }
    }
}

/// A window of a document's content, the unit of embedding and retrieval
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Chunk {
    /// Deterministic ID derived from the parent's type, id and the chunk index
    pub id: Uuid,
    /// Chunk index within the parent document
    pub chunk_index: u32,
    /// Text content
    pub content: String,
    /// Copy of the parent document's metadata
    pub metadata: DocumentMetadata,
}

impl Chunk {
    /// Create a chunk of `parent`
    pub fn new(parent: &DocumentMetadata, content: String, chunk_index: u32) -> Self {
        Self {
            id: Self::derive_id(parent, chunk_index),
            chunk_index,
            content,
            metadata: parent.clone(),
        }
    }

    fn derive_id(parent: &DocumentMetadata, chunk_index: u32) -> Uuid {
        let key = format!("{}/{}/{}", parent.kind, parent.id, chunk_index);
        Uuid::new_v5(&Uuid::NAMESPACE_OID, key.as_bytes())
    }
}
