use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Failures of the credential and business checks. All of them are a 400.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("Missing email or username")]
    MissingEmail,

    #[error("Missing password")]
    MissingPassword,

    #[error("Note: Only defined users succeed registration")]
    RegistrationRejected,

    #[error("user not found")]
    UnknownUser,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("User not found")]
    NotFound,

    #[error(transparent)]
    BadRequest(#[from] RequestError),

    #[error("{}", .0.body_text())]
    MalformedBody(#[from] JsonRejection),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::MalformedBody(rejection) => rejection.status(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::warn!(error = %self, %status, "request rejected");
        }

        let body = Json(json!({
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}
