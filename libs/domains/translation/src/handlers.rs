use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};
use axum_helpers::{
    ErrorResponse, ValidatedJson,
    errors::responses::{
        BadRequestJsonResponse, BadRequestValidationResponse, InternalServerErrorResponse,
        ServiceUnavailableResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::TranslationResult;
use crate::models::{Language, LanguagesResponse, TranslateRequest, TranslateResponse};
use crate::service::TranslationService;
use crate::translator::Translator;

pub const TAG: &str = "translation";

/// OpenAPI documentation for the Translation API
#[derive(OpenApi)]
#[openapi(
    paths(translate, get_supported_languages),
    components(
        schemas(
            TranslateRequest,
            TranslateResponse,
            Language,
            LanguagesResponse,
            ErrorResponse
        ),
        responses(
            BadRequestJsonResponse,
            BadRequestValidationResponse,
            ServiceUnavailableResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = TAG, description = "Text translation endpoints")
    )
)]
pub struct ApiDoc;

/// Create the translation router; the app mounts it under `/translation`
pub fn router<T: Translator + 'static>(service: TranslationService<T>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/translate", post(translate::<T>))
        .route("/languages", get(get_supported_languages::<T>))
        .with_state(shared_service)
}

/// Translate text from one language to another
#[utoipa::path(
    post,
    path = "/translate",
    tag = TAG,
    request_body = TranslateRequest,
    responses(
        (status = 200, description = "Text translated successfully", body = TranslateResponse),
        (status = 400, response = BadRequestJsonResponse),
        (status = 503, response = ServiceUnavailableResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn translate<T: Translator>(
    State(service): State<Arc<TranslationService<T>>>,
    ValidatedJson(input): ValidatedJson<TranslateRequest>,
) -> TranslationResult<Json<TranslateResponse>> {
    let response = service.translate(input).await?;
    Ok(Json(response))
}

/// Get supported languages
#[utoipa::path(
    get,
    path = "/languages",
    tag = TAG,
    responses(
        (status = 200, description = "List of supported languages", body = LanguagesResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_supported_languages<T: Translator>(
    State(service): State<Arc<TranslationService<T>>>,
) -> Json<LanguagesResponse> {
    Json(service.languages())
}
