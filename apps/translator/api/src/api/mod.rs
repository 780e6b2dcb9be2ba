//! API routes module

use axum::Router;
use domain_translation::{EchoTranslator, TranslationService, handlers};

/// Create all API routes
pub fn routes() -> Router {
    let service = TranslationService::new(EchoTranslator::new());

    Router::new().nest("/translation", handlers::router(service))
}
