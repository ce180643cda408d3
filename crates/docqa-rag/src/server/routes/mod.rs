//! HTTP routes for the Q&A server

pub mod ask;
pub mod documents;
pub mod upload;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::server::state::AppState;

/// Build the application routes
pub fn app_routes(max_upload_size: usize) -> Router<AppState> {
    Router::new()
        // Upload - with larger body limit for PDF files
        .route(
            "/upload",
            post(upload::upload_document).layer(DefaultBodyLimit::max(max_upload_size)),
        )
        // Question answering
        .route("/ask", post(ask::ask_question))
        // Document management
        .route("/documents", get(documents::list_documents))
        .route("/documents/:id", get(documents::get_document))
        // Info
        .route("/info", get(info))
}

/// API info endpoint
async fn info() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "name": "docqa-rag",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "Document Q&A over uploaded PDFs with TF-IDF retrieval",
        "endpoints": {
            "POST /upload": "Upload a PDF document",
            "POST /ask": "Ask a question about a stored document",
            "GET /documents": "List stored documents",
            "GET /documents/:id": "Get document details",
            "GET /health": "Health check"
        }
    }))
}
