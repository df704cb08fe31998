//! Local embedding models

pub mod onnx_embedder;

pub use onnx_embedder::OnnxEmbedder;
