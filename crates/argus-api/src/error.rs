//! API error types and JSON error response formatting.
//!
//! ApiError provides a consistent JSON error response format across all
//! endpoints, mapping internal errors to appropriate HTTP status codes.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use argus_chat::ChatError;

/// JSON error response body.
///
/// `message` is always present. `errors` carries structured validation
/// detail for rejected search queries, `error` carries the underlying
/// failure detail for chat processing errors.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Human-readable error message.
    pub message: String,
    /// Validation errors for a rejected search query.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
    /// Underlying error detail for chat failures.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// API error type that maps to HTTP status codes and JSON responses.
#[derive(Debug)]
pub enum ApiError {
    /// 400 Bad Request - missing or malformed parameters.
    BadRequest(String),
    /// 400 Bad Request - search body failed StructuredQuery validation.
    InvalidQuery(Vec<String>),
    /// 404 Not Found - resource does not exist.
    NotFound(String),
    /// 409 Conflict - a chat turn is already in flight.
    Conflict(String),
    /// 500 Internal Server Error - generic message only.
    Internal(String),
    /// 500 Internal Server Error - chat failure with underlying detail.
    ChatFailed(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::BadRequest(message) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    message,
                    errors: None,
                    error: None,
                },
            ),
            ApiError::InvalidQuery(errors) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    message: "Invalid search query".to_string(),
                    errors: Some(errors),
                    error: None,
                },
            ),
            ApiError::NotFound(message) => (
                StatusCode::NOT_FOUND,
                ErrorBody {
                    message,
                    errors: None,
                    error: None,
                },
            ),
            ApiError::Conflict(message) => (
                StatusCode::CONFLICT,
                ErrorBody {
                    message,
                    errors: None,
                    error: None,
                },
            ),
            ApiError::Internal(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody {
                    message,
                    errors: None,
                    error: None,
                },
            ),
            ApiError::ChatFailed(detail) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody {
                    message: "Failed to process chat request".to_string(),
                    errors: None,
                    error: Some(detail),
                },
            ),
        };

        (status, Json(body)).into_response()
    }
}

impl From<ChatError> for ApiError {
    fn from(err: ChatError) -> Self {
        match &err {
            ChatError::EmptyMessage | ChatError::MessageTooLong(_) => {
                ApiError::BadRequest(err.to_string())
            }
            ChatError::Busy => ApiError::Conflict(err.to_string()),
            ChatError::TurnNotFound(_) => ApiError::NotFound(err.to_string()),
            ChatError::SearchError(_) | ChatError::StoreError(_) => {
                ApiError::ChatFailed(err.to_string())
            }
        }
    }
}
