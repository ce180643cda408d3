//! PDF upload endpoint

use axum::{
    extract::{Multipart, State},
    Json,
};
use std::path::Path;

use crate::error::{Error, Result};
use crate::ingestion::PdfParser;
use crate::server::state::AppState;
use crate::types::UploadResponse;

/// POST /upload - Upload a PDF and store its extracted text
pub async fn upload_document(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| Error::Internal(format!("Failed to read multipart field: {}", e)))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field
            .file_name()
            .map(sanitize_filename)
            .unwrap_or_else(|| "upload.pdf".to_string());

        let data = field
            .bytes()
            .await
            .map_err(|e| Error::Internal(format!("Failed to read file: {}", e)))?;

        tracing::info!("Processing file: {} ({} bytes)", filename, data.len());

        // Keep the original bytes next to the extracted text
        let saved_path = state.config().storage.uploads_dir.join(&filename);
        tokio::fs::write(&saved_path, &data).await?;

        // Extraction can block for up to a minute on complex fonts
        let parse_filename = filename.clone();
        let parsed = tokio::task::spawn_blocking(move || PdfParser::parse(&parse_filename, &data))
            .await
            .map_err(|e| Error::Internal(format!("Parse task failed: {}", e)))??;

        if let Some(existing) = state.store().find_by_hash(&parsed.content_hash)? {
            tracing::info!(
                "Content matches existing document {} ('{}'), storing a fresh copy",
                existing.id,
                existing.filename
            );
        }

        let content_chars = parsed.content.chars().count();
        let doc_id = state
            .store()
            .insert_document(&filename, &parsed.content, &parsed.content_hash)?;

        tracing::info!(
            "Stored document {} ('{}'): {:?} pages, {} chars",
            doc_id,
            filename,
            parsed.total_pages,
            content_chars
        );

        return Ok(Json(UploadResponse {
            doc_id,
            filename,
            total_pages: parsed.total_pages,
            content_chars,
        }));
    }

    Err(Error::InvalidRequest(
        "multipart field 'file' is required".to_string(),
    ))
}

/// Strip any path components from a client-supplied filename
fn sanitize_filename(raw: &str) -> String {
    Path::new(raw)
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| "upload.pdf".to_string())
}
