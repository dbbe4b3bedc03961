use axum::{http::StatusCode, Json};
use serde::Serialize;

use crate::provider::GenerationError;

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<&'static str>,
}

pub type ApiFailure = (StatusCode, Json<ApiError>);

pub type ApiResult<T> = Result<Json<T>, ApiFailure>;

fn failure(status: StatusCode, error: String) -> ApiFailure {
    (status, Json(ApiError { error, kind: None }))
}

pub fn bad_request(error: impl Into<String>) -> ApiFailure {
    failure(StatusCode::BAD_REQUEST, error.into())
}

pub fn not_found(error: impl Into<String>) -> ApiFailure {
    failure(StatusCode::NOT_FOUND, error.into())
}

pub fn internal(error: impl Into<String>) -> ApiFailure {
    failure(StatusCode::INTERNAL_SERVER_ERROR, error.into())
}

/// Provider detail stays in the log; the client gets the category only.
pub fn generation_failed(err: &GenerationError) -> ApiFailure {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiError {
            error: "Failed to generate contract".to_string(),
            kind: Some(err.kind()),
        }),
    )
}
