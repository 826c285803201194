//! v1 Profile handlers.

use axum::{
    extract::{Query, State},
    http::HeaderMap,
    Json,
};
use chrono::Utc;

use crate::api::v1::dto::profile::{ProfileQuery, ProfileResponse};
use crate::api::AppState;
use crate::error::{DronaError, Result};
use crate::models::Profile;

/// `GET /api/v1/profile`
///
/// Looks up a student profile by `user_id` (query param or `X-User-Id`
/// header). A profile without a current session gets one allocated and
/// persisted as a side effect of the read, so callers can always start a
/// conversation from the returned `current_session_id`.
#[utoipa::path(
    get,
    path = "/api/v1/profile",
    tag = "profile",
    params(ProfileQuery),
    responses(
        (status = 200, description = "Profile found", body = ProfileResponse),
        (status = 400, description = "User ID is required"),
        (status = 404, description = "Profile not found"),
    )
)]
pub async fn get_current_profile(
    State(state): State<AppState>,
    Query(query): Query<ProfileQuery>,
    headers: HeaderMap,
) -> Result<Json<ProfileResponse>> {
    let user_id = query
        .user_id
        .or_else(|| {
            headers
                .get("X-User-Id")
                .and_then(|value| value.to_str().ok())
                .map(str::to_string)
        })
        .filter(|id| !id.trim().is_empty())
        .ok_or_else(|| DronaError::Validation("User ID is required".to_string()))?;

    let mut profile = state
        .db
        .get_profile(&user_id)
        .await?
        .ok_or_else(|| DronaError::NotFound("Profile not found".to_string()))?;

    if profile.current_session_id.is_none() {
        let session_id = Profile::new_session_id();
        state.db.set_current_session(&user_id, &session_id).await?;
        profile.current_session_id = Some(session_id);
        profile.updated_at = Utc::now();
    }

    Ok(Json(ProfileResponse::from(profile)))
}
