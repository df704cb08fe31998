//! Hospital chat server binary
//!
//! Run with: cargo run -p hospital-rag --bin hospital-rag-server
//!
//! Requires `GOOGLE_API_KEY` (a `.env` file is honoured). An optional TOML
//! config file can be named with `HOSPITAL_RAG_CONFIG`.

use chrono::{Datelike, Utc};
use hospital_rag::{
    config::RagConfig,
    embeddings::OnnxEmbedder,
    generation::ChatService,
    ingestion::{build_documents, HospitalDataset, TextChunker},
    providers::{EmbeddingProvider, GeminiClient, LlmProvider, LocalEmbedder},
    retrieval::VectorIndex,
    server::{state::AppState, RagServer},
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const CONFIG_PATH_VAR: &str = "HOSPITAL_RAG_CONFIG";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hospital_rag=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!(
        r#"
╔═══════════════════════════════════════════════════════════╗
║                    Hospital RAG Server                    ║
║          Questions over hospital records, with sources    ║
╚═══════════════════════════════════════════════════════════╝
"#
    );

    // Load configuration; fails before anything else without an API key
    let config_path = std::env::var_os(CONFIG_PATH_VAR).map(PathBuf::from);
    let config = RagConfig::load(config_path.as_deref())?;

    tracing::info!("Configuration loaded");
    tracing::info!("  - Data directory: {}", config.data.data_dir.display());
    tracing::info!("  - Embedding model: {}", config.embeddings.model);
    tracing::info!("  - Embedding dimensions: {}", config.embeddings.dimensions);
    tracing::info!("  - LLM model: {}", config.llm.model);
    tracing::info!(
        "  - Chunk size: {} (overlap {})",
        config.chunking.chunk_size,
        config.chunking.chunk_overlap
    );

    // Records -> documents -> chunks
    let dataset = HospitalDataset::load(&config.data.data_dir)?;
    tracing::info!("Loaded {} record rows", dataset.total_rows());

    let documents = build_documents(&dataset, Utc::now().year())?;
    let chunker = TextChunker::from_config(&config.chunking)?;
    let chunks = chunker.chunk_all(&documents);
    tracing::info!("Split {} documents into {} chunks", documents.len(), chunks.len());

    // Embed and index
    let embedder: Arc<dyn EmbeddingProvider> =
        Arc::new(LocalEmbedder::new(OnnxEmbedder::new(&config.embeddings).await?));
    let index = Arc::new(VectorIndex::build(embedder, chunks).await?);

    let llm: Arc<dyn LlmProvider> = Arc::new(GeminiClient::new(&config.llm)?);
    tracing::info!("Using {} model {}", llm.name(), llm.model());

    let chat = ChatService::new(index, llm, config.llm.top_k);
    let server = RagServer::new(config.server.clone(), AppState::new(chat))?;

    println!("\nServer starting...");
    println!("  API: http://{}", server.address());
    println!("  Health: http://{}/health", server.address());
    println!("\nEndpoints:");
    println!("  POST /chat   - Ask a question");
    println!("\nPress Ctrl+C to stop\n");

    server.start().await?;

    Ok(())
}
