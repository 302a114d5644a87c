//! HTTP error mapping.
//!
//! Every failure renders as `{"error": message}` with the status from the
//! taxonomy: validation 400, not-found 404, anything downstream 500 with
//! the underlying message passed through.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use pitchrank_core::PitchrankError;
use serde_json::json;

/// An API-level error with its HTTP status.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: msg.into(),
        }
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: msg.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

impl From<PitchrankError> for ApiError {
    fn from(err: PitchrankError) -> Self {
        let status = match err {
            PitchrankError::Validation(_) => StatusCode::BAD_REQUEST,
            PitchrankError::NotFound(_) => StatusCode::NOT_FOUND,
            PitchrankError::Engine(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }
}
