//! Application state for the Q&A server

use std::fs;
use std::sync::Arc;

use crate::config::AppConfig;
use crate::error::Result;
use crate::providers::{GeminiClient, LlmProvider};
use crate::retrieval::Retriever;
use crate::storage::DocumentStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    /// Configuration
    config: AppConfig,
    /// Document store
    store: DocumentStore,
    /// Chunk-and-rank retriever
    retriever: Retriever,
    /// LLM provider (Gemini in production, a mock in tests)
    llm_provider: Arc<dyn LlmProvider>,
}

impl AppState {
    /// Create new application state
    pub fn new(config: AppConfig) -> Result<Self> {
        tracing::info!("Initializing application state...");

        fs::create_dir_all(&config.storage.uploads_dir)?;

        let store = DocumentStore::new(&config.storage.db_path)?;
        tracing::info!(
            "Document store ready at {}",
            config.storage.db_path.display()
        );

        let retriever = Retriever::new(&config.chunking, &config.retrieval)?;
        tracing::info!(
            "Retriever ready (chunk_size: {}, overlap: {}, top_k: {})",
            config.chunking.chunk_size,
            config.chunking.chunk_overlap,
            config.retrieval.top_k
        );

        let gemini = GeminiClient::new(&config.llm)?;
        if !gemini.has_api_key() {
            tracing::warn!("No Gemini API key found; /ask will fail until one is provided");
        }
        let llm_provider: Arc<dyn LlmProvider> = Arc::new(gemini);
        tracing::info!("LLM provider initialized ({})", config.llm.model);

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                store,
                retriever,
                llm_provider,
            }),
        })
    }

    /// Build state around explicit parts (for testing)
    #[cfg(test)]
    pub fn with_parts(
        config: AppConfig,
        store: DocumentStore,
        llm_provider: Arc<dyn LlmProvider>,
    ) -> Result<Self> {
        let retriever = Retriever::new(&config.chunking, &config.retrieval)?;
        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                store,
                retriever,
                llm_provider,
            }),
        })
    }

    /// Get configuration
    pub fn config(&self) -> &AppConfig {
        &self.inner.config
    }

    /// Get the document store
    pub fn store(&self) -> &DocumentStore {
        &self.inner.store
    }

    /// Get the retriever
    pub fn retriever(&self) -> &Retriever {
        &self.inner.retriever
    }

    /// Get the LLM provider
    pub fn llm_provider(&self) -> &Arc<dyn LlmProvider> {
        &self.inner.llm_provider
    }
}
