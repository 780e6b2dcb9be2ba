//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for all APIs
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Turbo Translator API",
        version = "1.0",
        description = "API for translation service"
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    nest(
        (path = "/translation", api = domain_translation::ApiDoc)
    ),
    tags(
        (name = "translator", description = "Turbo Translator service")
    )
)]
pub struct ApiDoc;

/// The document as pretty-printed JSON.
pub fn openapi_json() -> Result<String, serde_json::Error> {
    ApiDoc::openapi().to_pretty_json()
}
