//! Document listing endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::{Error, Result};
use crate::server::state::AppState;
use crate::types::{DocumentListResponse, DocumentSummary};

/// GET /documents - List all stored documents
pub async fn list_documents(State(state): State<AppState>) -> Result<Json<DocumentListResponse>> {
    let documents = state.store().list_documents()?;
    let total_count = documents.len();

    Ok(Json(DocumentListResponse {
        documents,
        total_count,
    }))
}

/// GET /documents/:id - Get one document's summary
pub async fn get_document(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<DocumentSummary>> {
    let document = state
        .store()
        .get_document(id)?
        .ok_or(Error::DocumentNotFound(id))?;

    Ok(Json(DocumentSummary::from(&document)))
}
