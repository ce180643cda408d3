//! Document Q&A server binary
//!
//! Run with: cargo run -p docqa-rag --bin docqa-rag-server

use docqa_rag::{config::AppConfig, server::QaServer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "docqa_rag=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!(
        r#"
╔═══════════════════════════════════════════════════════════╗
║                     Document Q&A Server                   ║
║          PDF upload, TF-IDF retrieval, Gemini answers     ║
╚═══════════════════════════════════════════════════════════╝
"#
    );

    // Load configuration
    let config_path =
        std::env::var("DOCQA_CONFIG").unwrap_or_else(|_| "config.toml".to_string());
    let config = if std::path::Path::new(&config_path).exists() {
        tracing::info!("Loading configuration from {}", config_path);
        AppConfig::from_file(&config_path)?
    } else {
        AppConfig::default()
    };

    tracing::info!("Configuration loaded");
    tracing::info!("  - LLM model: {}", config.llm.model);
    tracing::info!("  - Chunk size: {}", config.chunking.chunk_size);
    tracing::info!("  - Chunk overlap: {}", config.chunking.chunk_overlap);
    tracing::info!("  - Top K: {}", config.retrieval.top_k);
    tracing::info!("  - Database: {}", config.storage.db_path.display());

    if config.llm.resolve_api_key().is_none() {
        tracing::warn!("GEMINI_API_KEY is not set");
        tracing::warn!("Questions will fail until a key is provided:");
        tracing::warn!("  1. Create a key at https://aistudio.google.com/apikey");
        tracing::warn!("  2. Export it: export GEMINI_API_KEY=...");
    }

    // Create and start server
    let server = QaServer::new(config)?;

    println!("\nServer starting...");
    println!("  Frontend: http://{}/", server.address());
    println!("  Health: http://{}/health", server.address());
    println!("\nEndpoints:");
    println!("  POST /upload     - Upload a PDF document");
    println!("  POST /ask        - Ask a question about a document");
    println!("  GET  /documents  - List documents");
    println!("\nPress Ctrl+C to stop\n");

    server.start().await?;

    Ok(())
}
