//! Document types backed by the SQLite store

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored document with its full extracted text
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Row id assigned by the store on insert
    pub id: i64,
    /// Original filename of the upload
    pub filename: String,
    /// Full extracted text (may be empty for image-only PDFs)
    pub content: String,
    /// SHA-256 hex digest of the extracted text
    pub content_hash: String,
    /// Upload timestamp
    pub created_at: DateTime<Utc>,
}

/// Summary of a stored document (content omitted)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentSummary {
    /// Document id
    pub id: i64,
    /// Filename
    pub filename: String,
    /// SHA-256 hex digest of the extracted text
    pub content_hash: String,
    /// Extracted text length in characters
    pub content_chars: usize,
    /// Upload timestamp
    pub created_at: DateTime<Utc>,
}

impl From<&Document> for DocumentSummary {
    fn from(doc: &Document) -> Self {
        Self {
            id: doc.id,
            filename: doc.filename.clone(),
            content_hash: doc.content_hash.clone(),
            content_chars: doc.content.chars().count(),
            created_at: doc.created_at,
        }
    }
}
