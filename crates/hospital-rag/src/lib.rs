//! hospital-rag: retrieval-augmented chat over hospital records
//!
//! At startup the six record tables (hospitals, physicians, patients, visits,
//! payers, reviews) are loaded from CSV, rendered into short natural-language
//! documents, chunked, embedded with a local ONNX sentence model and held in
//! an in-memory vector index. Each chat request retrieves the nearest chunks,
//! asks Gemini for an answer and returns it with the sources it drew on.

pub mod config;
pub mod embeddings;
pub mod error;
pub mod generation;
pub mod ingestion;
pub mod providers;
pub mod retrieval;
pub mod server;
pub mod types;

pub use config::RagConfig;
pub use error::{Error, Result};
pub use types::{
    document::{Chunk, Document, DocumentKind, DocumentMetadata},
    query::ChatRequest,
    response::{ChatResponse, Source},
};
