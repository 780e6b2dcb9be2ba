use axum_helpers::ErrorResponse;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Invalid base URL '{url}': {details}")]
    InvalidBaseUrl { url: String, details: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-2xx status
    #[error("API error ({status}): {message}")]
    Api {
        status: u16,
        message: String,
        /// Decoded error body, when the server sent the standard shape
        body: Option<ErrorResponse>,
    },
}

impl ClientError {
    /// HTTP status for API errors, `None` for transport failures.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type ClientResult<T> = Result<T, ClientError>;
