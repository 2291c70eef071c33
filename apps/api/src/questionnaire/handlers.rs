use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::errors::AppError;
use crate::questionnaire::loader::load_questions;
use crate::questionnaire::models::Question;
use crate::state::AppState;

#[derive(Serialize)]
pub struct QuestionListResponse {
    pub framework_id: String,
    pub section: String,
    pub questions: Vec<Question>,
}

/// GET /api/v1/frameworks/:id/sections/:section/questions
pub async fn handle_list_questions(
    State(state): State<AppState>,
    Path((framework_id, section)): Path<(String, String)>,
) -> Result<Json<QuestionListResponse>, AppError> {
    let questions = load_questions(
        &state.frameworks,
        &state.config.templates_dir,
        &framework_id,
        &section,
    )
    .await?;

    Ok(Json(QuestionListResponse {
        framework_id,
        section,
        questions,
    }))
}
