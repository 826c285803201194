use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DronaError {
    #[error("Database error: {0}")]
    Database(#[from] libsql::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("LLM unavailable: {0}")]
    LlmUnavailable(String),

    #[error("LLM rate limit exceeded, retry after {retry_after:?} seconds")]
    LlmRateLimit { retry_after: Option<u64> },
}

impl IntoResponse for DronaError {
    /// Map an error to the wire shape `{ "error": ..., "details": ... }`.
    ///
    /// Client errors echo their message. Completion failures collapse to the
    /// fixed "No solution generated" payload. Everything else is logged with
    /// full detail and scrubbed to a generic message.
    fn into_response(self) -> Response {
        let (status, message, details) = match &self {
            DronaError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone(), None),
            DronaError::Json(e) => (StatusCode::BAD_REQUEST, e.to_string(), None),
            DronaError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone(), None),
            DronaError::LlmRateLimit { retry_after } => (
                StatusCode::TOO_MANY_REQUESTS,
                "Rate limit exceeded".to_string(),
                retry_after.map(|secs| format!("Retry after {secs} seconds")),
            ),
            DronaError::Llm(msg) | DronaError::LlmUnavailable(msg) => {
                tracing::error!(error = %msg, "Completion failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "No solution generated".to_string(),
                    Some("The AI agent failed to generate a response.".to_string()),
                )
            }
            internal @ (DronaError::Database(_)
            | DronaError::Http(_)
            | DronaError::Io(_)
            | DronaError::Internal(_)) => {
                tracing::error!(error = %internal, "Internal error mapped to response");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An unexpected error occurred while processing your request.".to_string(),
                    None,
                )
            }
        };

        let body = match details {
            Some(details) => Json(json!({ "error": message, "details": details })),
            None => Json(json!({ "error": message })),
        };

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, DronaError>;
