use axum::{
    Json,
    response::{IntoResponse, Response},
};

use super::{ErrorCode, ErrorResponse};

fn fallback(code: ErrorCode) -> Response {
    let body = ErrorResponse::new(code, code.default_message());
    (code.status(), Json(body)).into_response()
}

/// Router fallback for unknown paths.
pub async fn not_found() -> Response {
    fallback(ErrorCode::NotFound)
}

/// Fallback for known paths hit with an unsupported method.
pub async fn method_not_allowed() -> Response {
    fallback(ErrorCode::MethodNotAllowed)
}
