//! Error codes carried in every [`ErrorResponse`](super::ErrorResponse).
//!
//! A code has a wire name (`"VALIDATION_ERROR"`), a stable integer for log
//! queries (`1001`), a fallback message and the HTTP status it is usually
//! returned with.
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::ValidationError;
//! assert_eq!(code.as_str(), "VALIDATION_ERROR");
//! assert_eq!(code.code(), 1001);
//! assert_eq!(code.status().as_u16(), 400);
//! ```

use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// A field failed a validation rule
    ValidationError,
    /// Body could not be read as JSON for a reason other than its content
    JsonExtraction,
    NotFound,
    InternalError,
    /// Body is malformed JSON or misses required fields
    InvalidJson,
    /// The translation backend cannot serve requests right now
    ServiceUnavailable,
    MethodNotAllowed,
}

struct Entry {
    name: &'static str,
    code: i32,
    message: &'static str,
    status: StatusCode,
}

impl ErrorCode {
    const fn entry(self) -> Entry {
        let (name, code, message, status) = match self {
            Self::ValidationError => (
                "VALIDATION_ERROR",
                1001,
                "Request validation failed",
                StatusCode::BAD_REQUEST,
            ),
            Self::JsonExtraction => (
                "JSON_EXTRACTION",
                1003,
                "Failed to read request body",
                StatusCode::BAD_REQUEST,
            ),
            Self::NotFound => (
                "NOT_FOUND",
                1004,
                "The requested resource was not found",
                StatusCode::NOT_FOUND,
            ),
            Self::InternalError => (
                "INTERNAL_ERROR",
                1005,
                "An internal server error occurred",
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            Self::InvalidJson => (
                "INVALID_JSON",
                1010,
                "Invalid JSON format",
                StatusCode::BAD_REQUEST,
            ),
            Self::ServiceUnavailable => (
                "SERVICE_UNAVAILABLE",
                1011,
                "Service is temporarily unavailable",
                StatusCode::SERVICE_UNAVAILABLE,
            ),
            Self::MethodNotAllowed => (
                "METHOD_NOT_ALLOWED",
                1012,
                "The HTTP method is not allowed for this resource",
                StatusCode::METHOD_NOT_ALLOWED,
            ),
        };

        Entry {
            name,
            code,
            message,
            status,
        }
    }

    /// Wire name, identical to the serde representation.
    pub const fn as_str(self) -> &'static str {
        self.entry().name
    }

    pub const fn code(self) -> i32 {
        self.entry().code
    }

    pub const fn default_message(self) -> &'static str {
        self.entry().message
    }

    pub const fn status(self) -> StatusCode {
        self.entry().status
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
