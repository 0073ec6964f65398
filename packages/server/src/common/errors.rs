//! HTTP error envelope for the API surface.
//!
//! Handlers convert domain errors into [`ApiError`] before responding. Only
//! two classes are visible on the wire: validation failures (400) and server
//! failures (500). Lookup misses are reported through `Internal` so callers
//! cannot probe for record existence; the detail behind a 500 lives in the
//! log, never in the response body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Errors surfaced to API callers.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request payload failed validation. The message names the offending
    /// field and is safe to show to callers.
    #[error("{0}")]
    Validation(String),

    /// The operation failed server-side. The message is a generic
    /// per-operation phrase; the underlying cause has already been logged.
    #[error("{0}")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Validation(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::Internal(message) => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_bad_request() {
        let response = ApiError::Validation("name is required".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn internal_maps_to_server_error() {
        let response = ApiError::Internal("group operation failed".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
