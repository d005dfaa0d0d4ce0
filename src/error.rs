//! Counter error types with HTTP status code mapping.
//!
//! [`CounterError`] is the central error type shared by the counter
//! service and the edge proxy. Each variant maps to an HTTP status code
//! and a structured JSON error response. Server-side failures are logged
//! here, at the request boundary, and never echoed back to the caller.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Structured JSON error response body.
///
/// All error responses follow this shape:
/// ```json
/// {
///   "error": {
///     "code": 3001,
///     "message": "internal server error"
///   }
/// }
/// ```
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Structured error payload.
    pub error: ErrorBody,
}

/// Inner error body with numeric code and human-readable message.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// Numeric error code.
    pub code: u32,
    /// Human-readable error message.
    pub message: String,
}

/// Server-side error enum with HTTP status code mapping.
///
/// # Error Code Ranges
///
/// | Range     | Category   | HTTP Status                |
/// |-----------|------------|----------------------------|
/// | 1000–1999 | Validation | 400 Bad Request            |
/// | 3000–3999 | Server     | 500 / 502                  |
#[derive(Debug, thiserror::Error)]
pub enum CounterError {
    /// Request could not be interpreted.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The visit store could not be reached or the query failed.
    #[error("store unavailable: {0}")]
    StoreUnavailable(String),

    /// The proxied counter service could not be reached.
    #[error("upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl CounterError {
    /// Returns the numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self {
            Self::InvalidRequest(_) => 1001,
            Self::Internal(_) => 3000,
            Self::StoreUnavailable(_) => 3001,
            Self::UpstreamUnavailable(_) => 3002,
        }
    }

    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::StoreUnavailable(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::UpstreamUnavailable(_) => StatusCode::BAD_GATEWAY,
        }
    }

    /// Returns the message exposed to clients.
    ///
    /// Server-side variants collapse to a fixed string so that driver or
    /// network detail never leaves the process.
    #[must_use]
    pub fn public_message(&self) -> String {
        match self {
            Self::InvalidRequest(_) => self.to_string(),
            Self::StoreUnavailable(_) | Self::Internal(_) => "internal server error".to_string(),
            Self::UpstreamUnavailable(_) => "upstream unavailable".to_string(),
        }
    }
}

impl From<sqlx::Error> for CounterError {
    fn from(err: sqlx::Error) -> Self {
        Self::StoreUnavailable(err.to_string())
    }
}

impl IntoResponse for CounterError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(code = self.error_code(), error = %self, "request failed");
        } else {
            tracing::debug!(code = self.error_code(), error = %self, "request rejected");
        }

        let body = ErrorResponse {
            error: ErrorBody {
                code: self.error_code(),
                message: self.public_message(),
            },
        };
        let mut response = axum::Json(body).into_response();
        *response.status_mut() = status;
        response
    }
}
