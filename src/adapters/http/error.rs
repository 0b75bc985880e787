//! Shared error envelope for the HTTP API.
//!
//! Every failure the service itself reports is rendered as
//! `{"status": "error", "message": ...}`. Extractor rejections (malformed
//! JSON, wrong content type) keep axum's own responses.

use axum::extract::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::domain::contact::ContactError;
use crate::domain::foundation::{ErrorCode, ValidationError};

/// Standard error body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: message.into(),
        }
    }
}

/// API error type that converts domain errors to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// Unreadable multipart upload; keeps the status the body reader chose
    /// (400 for malformed input, 413 past the size limit).
    Upload(StatusCode, String),
    /// Well-formed request with unacceptable content.
    Validation(String),
    /// Persistence failure.
    Storage(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            ApiError::Upload(status, msg) => (status, msg),
            ApiError::Validation(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::Storage(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };
        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::Validation(err.to_string())
    }
}

impl From<ContactError> for ApiError {
    fn from(err: ContactError) -> Self {
        match err.code() {
            ErrorCode::ValidationFailed => ApiError::Validation(err.to_string()),
            ErrorCode::StorageUnavailable | ErrorCode::DatabaseError => {
                ApiError::Storage(err.to_string())
            }
        }
    }
}
