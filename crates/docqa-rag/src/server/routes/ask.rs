//! Question answering endpoint

use axum::{
    extract::{Form, State},
    Json,
};
use std::time::Instant;

use crate::error::{Error, Result};
use crate::generation::PromptBuilder;
use crate::server::state::AppState;
use crate::types::{AskRequest, AskResponse};

/// POST /ask - Answer a question about a stored document
pub async fn ask_question(
    State(state): State<AppState>,
    Form(request): Form<AskRequest>,
) -> Result<Json<AskResponse>> {
    let start = Instant::now();
    tracing::info!(
        "Question for document {}: \"{}\"",
        request.doc_id,
        request.question
    );

    let document = state
        .store()
        .get_document(request.doc_id)?
        .ok_or(Error::DocumentNotFound(request.doc_id))?;

    let chunks = state
        .retriever()
        .retrieve(&document.content, &request.question);
    let grounded = !chunks.is_empty();

    let prompt = if grounded {
        let context = PromptBuilder::build_context(&chunks);
        PromptBuilder::build_grounded_prompt(&document.filename, &context, &request.question)
    } else {
        tracing::info!("No relevant chunks found, using un-grounded fallback prompt");
        PromptBuilder::build_fallback_prompt(&request.question)
    };

    let answer = state.llm_provider().generate(&prompt).await?;

    let processing_time_ms = start.elapsed().as_millis() as u64;
    tracing::info!(
        "Answered question for document {} in {}ms ({} chunks used)",
        request.doc_id,
        processing_time_ms,
        chunks.len()
    );

    Ok(Json(AskResponse {
        response: answer,
        chunks_used: chunks.len(),
        grounded,
        processing_time_ms,
    }))
}
