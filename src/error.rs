//! Error taxonomy for the HTTP surface.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::dtos::ErrorBody;

/// Handler-level result type.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Everything the add endpoint can report to a caller.
///
/// The arithmetic itself is total, so the only failures are the request
/// method and the payload shape.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("method not allowed")]
    MethodNotAllowed,

    #[error("invalid JSON body")]
    InvalidPayload,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            // Plain text, mirroring the stock 405 reason phrase.
            ApiError::MethodNotAllowed => {
                (StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed").into_response()
            }
            ApiError::InvalidPayload => (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody {
                    error: self.to_string(),
                }),
            )
                .into_response(),
        }
    }
}
