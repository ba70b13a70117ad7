use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::submission::validate::FieldError;

#[derive(Debug)]
pub enum AppError {
    InvalidJson,
    Validation(Vec<FieldError>),
    Storage(std::io::Error),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::InvalidJson => write!(f, "Invalid JSON: Body must be application/json"),
            AppError::Validation(errors) => {
                write!(f, "Validation Error: {} invalid field(s)", errors.len())
            }
            AppError::Storage(err) => write!(f, "Storage Error: {err}"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::InvalidJson => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "invalid_json", "detail": "Body must be application/json" }),
            ),
            AppError::Validation(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                json!({ "error": "validation_error", "detail": errors }),
            ),
            AppError::Storage(err) => {
                tracing::error!("Storage error: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "internal_error", "detail": "Internal server error" }),
                )
            }
        };

        (status, axum::Json(body)).into_response()
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Storage(err)
    }
}
