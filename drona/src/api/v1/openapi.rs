use axum::Json;
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};

use super::dto;
use super::handlers;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Drona API",
        version = "1.0.0",
        description = "Self-hostable AI tutoring backend for JEE preparation.",
    ),
    paths(
        handlers::health::health_check,
        handlers::solve::solve_question,
        handlers::profile::get_current_profile,
    ),
    components(schemas(
        // Common
        crate::models::InteractionType,
        // Solve
        dto::solve::SolveRequest,
        dto::solve::SolveContextDto,
        dto::solve::SolveResponse,
        dto::solve::SolveResponseContext,
        dto::solve::InteractionDto,
        dto::solve::InteractionContextDto,
        // Profile
        dto::profile::ProfileResponse,
        // Health (handler-local types)
        handlers::health::HealthData,
        handlers::health::DatabaseStatus,
        handlers::health::LlmStatus,
    )),
    tags(
        (name = "health", description = "Health check"),
        (name = "solve", description = "Question answering with conversational history"),
        (name = "profile", description = "Student profile lookup and session allocation"),
    ),
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn redoc_router<S: Clone + Send + Sync + 'static>() -> axum::Router<S> {
    Redoc::with_url("/docs", ApiDoc::openapi()).into()
}
