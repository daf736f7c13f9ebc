use axum::extract::FromRequest;

use crate::errors::ApiError;

/// `Json` whose rejections use the `{"error": ...}` body every other failure uses.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);
