//! # API errors
//!
//! Every failure on the search path becomes an [`ApiError`], which renders as
//! a JSON envelope `{"error": "...", "code": N}` with a matching status. No
//! partial result body is ever written.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use quarry_core::EngineError;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// The query segment could not be decoded (e.g. invalid UTF-8 after
    /// percent-decoding).
    #[error("invalid query segment: {0}")]
    InvalidQuery(String),

    // ==================
    // Upstream Errors (5xx)
    // ==================
    #[error(transparent)]
    Engine(#[from] EngineError),

    // ==================
    // Server Errors (5xx)
    // ==================
    /// The engine's result could not be serialized.
    #[error("failed to encode search result: {0}")]
    Encode(#[from] serde_json::Error),

    /// The blocking search task panicked or was cancelled.
    #[error("search task failed: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidQuery(_) => StatusCode::BAD_REQUEST,
            ApiError::Engine(err) if err.is_unavailable() => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Engine(_) => StatusCode::BAD_GATEWAY,
            ApiError::Encode(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl From<&ApiError> for ErrorResponse {
    fn from(err: &ApiError) -> Self {
        Self {
            code: err.status_code().as_u16(),
            error: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(ErrorResponse::from(&self))).into_response()
    }
}
