use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use shorty_core::ShortenerError;

use crate::model::ErrorResponse;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug)]
pub enum AppError {
    InvalidInput(String),
    NotFound(String),
}

impl From<ShortenerError> for AppError {
    fn from(value: ShortenerError) -> Self {
        match value {
            ShortenerError::InvalidInput(message) => Self::InvalidInput(message),
            ShortenerError::NotFound(key) => {
                Self::NotFound(format!("Short URL not found: {}", key))
            }
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidInput(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, message) = match self {
            AppError::InvalidInput(message) => (StatusCode::BAD_REQUEST, "invalid_input", message),
            AppError::NotFound(message) => (StatusCode::NOT_FOUND, "not_found", message),
        };

        (status, Json(ErrorResponse { error, message })).into_response()
    }
}
