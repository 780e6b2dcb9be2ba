use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TranslationError {
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Translator unavailable: {0}")]
    Unavailable(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type TranslationResult<T> = Result<T, TranslationError>;

/// Convert TranslationError to AppError for standardized error responses
impl From<TranslationError> for AppError {
    fn from(err: TranslationError) -> Self {
        match err {
            TranslationError::Validation(msg) => AppError::BadRequest(msg),
            TranslationError::Unavailable(msg) => AppError::ServiceUnavailable(msg),
            TranslationError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for TranslationError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
