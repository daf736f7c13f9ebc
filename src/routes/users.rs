use axum::{
    Json,
    extract::{OriginalUri, Path, State, rejection::PathRejection},
    http::StatusCode,
    response::IntoResponse,
};
use tracing::instrument;

use crate::errors::ApiError;
use crate::models::user::{UpdatedUser, UserEnvelope, UserUpdatePayload};
use crate::routes::extract::ApiJson;
use crate::startup::AppState;

/// Only plain ASCII digits name a user. Anything else, including a segment
/// that does not decode as UTF-8, is a 404 rather than a path rejection.
#[instrument(name = "HTTP: Get user", skip(state))]
pub async fn get_user(
    user_id: Result<Path<String>, PathRejection>,
    State(state): State<AppState>,
) -> Result<Json<UserEnvelope>, ApiError> {
    let Ok(Path(user_id)) = user_id else {
        tracing::warn!("User id is not a valid path segment");
        return Err(ApiError::NotFound);
    };
    let id = parse_user_id(&user_id).ok_or_else(|| {
        tracing::warn!(%user_id, "User id is not numeric");
        ApiError::NotFound
    })?;

    Ok(Json(state.user_service.find(id)?))
}

fn parse_user_id(segment: &str) -> Option<u64> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment.parse().ok()
}

#[instrument(name = "HTTP: Create user", skip(state, payload))]
pub async fn create_user(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<UserUpdatePayload>,
) -> impl IntoResponse {
    (StatusCode::CREATED, Json(state.user_service.create(payload)))
}

/// PUT and PATCH behave identically. The id segment is never extracted, so
/// any segment is accepted.
#[instrument(name = "HTTP: Update user", skip(state, payload))]
pub async fn update_user(
    OriginalUri(uri): OriginalUri,
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<UserUpdatePayload>,
) -> Json<UpdatedUser> {
    Json(state.user_service.update(payload))
}

#[instrument(name = "HTTP: Delete user")]
pub async fn delete_user(OriginalUri(uri): OriginalUri) -> StatusCode {
    StatusCode::NO_CONTENT
}
