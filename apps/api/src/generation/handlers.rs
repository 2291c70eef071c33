//! Axum route handlers for document generation and download.

use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::generation::assembler::assemble;
use crate::generation::Submission;
use crate::questionnaire::loader::load_questions;
use crate::state::AppState;
use crate::store::{sanitize_filename, section_slug};

#[derive(Debug, Serialize)]
pub struct GenerateDocumentResponse {
    pub document_id: Uuid,
    pub download_url: String,
}

/// POST /api/v1/documents
///
/// Validates required answers against the section's question set, assembles
/// markdown and PDF, and persists both under a fresh document id. Nothing is
/// stored when validation or rendering fails.
pub async fn handle_generate_document(
    State(state): State<AppState>,
    Json(submission): Json<Submission>,
) -> Result<Json<GenerateDocumentResponse>, AppError> {
    // Also rejects unknown frameworks before any side effect.
    let questions = load_questions(
        &state.frameworks,
        &state.config.templates_dir,
        &submission.framework_id,
        &submission.section,
    )
    .await?;

    let missing: Vec<&str> = questions
        .iter()
        .filter(|q| q.required && submission.is_unanswered(&q.id))
        .map(|q| q.id.as_str())
        .collect();
    if !missing.is_empty() {
        return Err(AppError::Validation(format!(
            "Missing required fields: {}",
            missing.join(", ")
        )));
    }

    let assembled = assemble(
        &state.frameworks,
        &state.config,
        state.renderer.as_ref(),
        &submission,
    )
    .await?;

    let document_id = state
        .store
        .create(&submission, &assembled.markdown, &assembled.pdf)
        .await?;

    let slug = section_slug(&submission.section);
    info!(
        "Generated document {document_id} for {}/{}",
        submission.framework_id, submission.section
    );

    Ok(Json(GenerateDocumentResponse {
        document_id,
        download_url: format!("/api/v1/documents/{document_id}/{slug}"),
    }))
}

/// GET /api/v1/documents/:document_id/:filename
///
/// Serves a stored PDF as a file attachment.
pub async fn handle_download_document(
    State(state): State<AppState>,
    Path((document_id, filename)): Path<(Uuid, String)>,
) -> Result<Response, AppError> {
    let pdf = state.store.fetch_pdf(document_id, &filename).await?;
    let attachment_name = sanitize_filename(&filename);

    let headers = [
        (header::CONTENT_TYPE, "application/pdf".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{attachment_name}.pdf\""),
        ),
    ];

    Ok((headers, Bytes::from(pdf)).into_response())
}
