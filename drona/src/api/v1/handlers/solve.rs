//! v1 Solve handler.

use axum::{extract::State, Json};

use crate::api::v1::dto::solve::{SolveRequest, SolveResponse};
use crate::api::{AppJson, AppState};
use crate::error::Result;

/// `POST /api/v1/solve`
///
/// Answers one student question: resolves conversation history, assembles
/// the tutoring prompt, runs a single completion, and persists the
/// exchange. Greetings short-circuit to a canned reply without a
/// completion call.
#[utoipa::path(
    post,
    path = "/api/v1/solve",
    tag = "solve",
    request_body = SolveRequest,
    responses(
        (status = 200, description = "Solution generated", body = SolveResponse),
        (status = 400, description = "Missing question or malformed payload"),
        (status = 500, description = "No solution generated"),
    )
)]
pub async fn solve_question(
    State(state): State<AppState>,
    AppJson(req): AppJson<SolveRequest>,
) -> Result<Json<SolveResponse>> {
    let context = req.context.into_context()?;
    let solved = state.tutor.solve(&req.question, &context).await?;

    Ok(Json(SolveResponse::from_outcome(solved, &context)))
}
