use axum::{Json, extract::State};
use tracing::instrument;

use crate::errors::ApiError;
use crate::models::credentials::{Credentials, LoginBody, RegisterBody};
use crate::routes::extract::ApiJson;
use crate::startup::AppState;

#[instrument(name = "HTTP: Register", skip(state, payload))]
pub async fn register_handler(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<Credentials>,
) -> Result<Json<RegisterBody>, ApiError> {
    tracing::info!("Received register request");
    let body = state.auth_service.register(&payload)?;
    Ok(Json(body))
}

#[instrument(name = "HTTP: Login", skip(state, payload))]
pub async fn login_handler(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<Credentials>,
) -> Result<Json<LoginBody>, ApiError> {
    tracing::info!("Received login request");
    let body = state.auth_service.login(&payload)?;
    Ok(Json(body))
}
