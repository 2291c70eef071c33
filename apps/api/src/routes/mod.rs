pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::frameworks::handlers as framework_handlers;
use crate::generation::handlers as generation_handlers;
use crate::questionnaire::handlers as questionnaire_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/frameworks",
            get(framework_handlers::handle_list_frameworks),
        )
        .route(
            "/api/v1/frameworks/:id",
            get(framework_handlers::handle_get_framework),
        )
        .route(
            "/api/v1/frameworks/:id/sections/:section/questions",
            get(questionnaire_handlers::handle_list_questions),
        )
        .route(
            "/api/v1/documents",
            post(generation_handlers::handle_generate_document),
        )
        .route(
            "/api/v1/documents/:document_id/:filename",
            get(generation_handlers::handle_download_document),
        )
        .with_state(state)
}
