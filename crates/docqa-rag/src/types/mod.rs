//! Core types for the document Q&A service

pub mod document;
pub mod query;
pub mod response;

pub use document::{Document, DocumentSummary};
pub use query::AskRequest;
pub use response::{AskResponse, DocumentListResponse, UploadResponse};
