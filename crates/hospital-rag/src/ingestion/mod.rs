//! Record ingestion: CSV tables → documents → chunks

mod chunker;
pub mod formatter;
pub mod loader;

pub use chunker::TextChunker;
pub use formatter::build_documents;
pub use loader::HospitalDataset;
