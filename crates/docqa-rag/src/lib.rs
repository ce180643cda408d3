//! docqa-rag: Document Q&A service with TF-IDF retrieval
//!
//! Upload PDFs, ask questions about them, get answers grounded in the
//! most relevant chunks of the document. Retrieval is classic TF-IDF
//! over fixed-size overlapping character windows; answers come from
//! Gemini behind a provider trait.

pub mod config;
pub mod error;
pub mod generation;
pub mod ingestion;
pub mod providers;
pub mod retrieval;
pub mod server;
pub mod storage;
pub mod types;

pub use config::AppConfig;
pub use error::{Error, Result};
pub use retrieval::{Retriever, ScoredChunk, TextChunker};
pub use types::{
    document::{Document, DocumentSummary},
    query::AskRequest,
    response::{AskResponse, UploadResponse},
};
