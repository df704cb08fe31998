//! Core types for the hospital RAG backend

pub mod document;
pub mod query;
pub mod record;
pub mod response;

pub use document::{Chunk, Document, DocumentKind, DocumentMetadata};
pub use query::ChatRequest;
pub use record::{
    HospitalRecord, PatientRecord, PayerRecord, PhysicianRecord, ReviewRecord, VisitRecord,
};
pub use response::{ChatResponse, Source};
