//! Response types for the HTTP endpoints

use serde::{Deserialize, Serialize};

use super::document::DocumentSummary;

/// Response for a successful upload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    /// Id assigned to the stored document
    pub doc_id: i64,
    /// Original filename of the upload
    pub filename: String,
    /// Number of pages in the PDF (if the page tree could be read)
    pub total_pages: Option<u32>,
    /// Extracted text length in characters
    pub content_chars: usize,
}

/// Response for an answered question
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskResponse {
    /// The generated answer
    pub response: String,
    /// Number of chunks that made it into the prompt context
    pub chunks_used: usize,
    /// Whether the prompt was grounded in document content
    pub grounded: bool,
    /// End-to-end processing time in milliseconds
    pub processing_time_ms: u64,
}

/// Response for listing documents
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentListResponse {
    /// Document summaries, newest first
    pub documents: Vec<DocumentSummary>,
    /// Total number of stored documents
    pub total_count: usize,
}
