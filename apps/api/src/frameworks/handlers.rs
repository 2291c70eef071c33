use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::errors::AppError;
use crate::frameworks::Framework;
use crate::state::AppState;

#[derive(Serialize)]
pub struct FrameworkListResponse {
    pub frameworks: Vec<Framework>,
}

/// GET /api/v1/frameworks
pub async fn handle_list_frameworks(
    State(state): State<AppState>,
) -> Result<Json<FrameworkListResponse>, AppError> {
    Ok(Json(FrameworkListResponse {
        frameworks: state.frameworks.all().to_vec(),
    }))
}

/// GET /api/v1/frameworks/:id
pub async fn handle_get_framework(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Framework>, AppError> {
    let framework = state
        .frameworks
        .get(&id)
        .ok_or_else(|| AppError::NotFound(format!("Framework '{id}' not found")))?;

    Ok(Json(framework.clone()))
}
