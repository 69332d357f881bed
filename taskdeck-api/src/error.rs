/// Error handling for the API server
///
/// This module provides a unified error type that maps to HTTP responses.
/// All handlers return `Result<T, ApiError>` which automatically converts
/// to the appropriate status code and body.
///
/// The mapping mirrors the REST contract:
/// - NotFound → 404 with `{ "message": … }`
/// - Conflict and BadRequest → 400 with `{ "message": … }`
/// - InternalError → 500 with `{ "error": … }`
///
/// Store errors arrive already classified as `DataError`; the conversion
/// below threads that classification through without re-deriving it.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use taskdeck_shared::error::DataError;

/// API result type alias
pub type ApiResult<T> = Result<T, ApiError>;

/// Unified API error type
#[derive(Debug)]
pub enum ApiError {
    /// Bad request (400): malformed input or invalid relational reference
    BadRequest(String),

    /// Not found (404)
    NotFound(String),

    /// Conflict (400): duplicate unique field, e.g. email
    ///
    /// Kept distinct from BadRequest so the classification survives even
    /// though both map to 400 on the wire.
    Conflict(String),

    /// Internal server error (500)
    InternalError(String),
}

/// Error body for domain failures
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageBody {
    /// Human-readable error message
    pub message: String,
}

/// Error body for unexpected failures
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable error description
    pub error: String,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
            ApiError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            ApiError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(message) | ApiError::Conflict(message) => {
                (StatusCode::BAD_REQUEST, Json(MessageBody { message })).into_response()
            }
            ApiError::NotFound(message) => {
                (StatusCode::NOT_FOUND, Json(MessageBody { message })).into_response()
            }
            ApiError::InternalError(error) => {
                // Log internal errors but don't expose details to clients
                tracing::error!("Internal error: {}", error);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorBody {
                        error: "An internal error occurred".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}

/// Threads store classifications through to transport errors
impl From<DataError> for ApiError {
    fn from(err: DataError) -> Self {
        match err {
            DataError::NotFound(msg) => ApiError::NotFound(msg),
            DataError::Conflict(msg) => ApiError::Conflict(msg),
            DataError::BadInput(msg) => ApiError::BadRequest(msg),
            DataError::Internal(msg) => ApiError::InternalError(msg),
        }
    }
}
