//! Turbo Translator HTTP API.
//!
//! Routes:
//! - `POST /translation/translate`
//! - `GET /translation/languages`
//! - `GET /api-json` (OpenAPI document), `/api` (Swagger UI), `/health`

pub mod api;
pub mod config;
pub mod openapi;

use axum::Router;
use axum_helpers::server::{create_router, health_router};

use config::Config;

/// Assemble the full application router: API, docs, health and middleware.
pub fn build_app(config: &Config) -> eyre::Result<Router> {
    let router = create_router::<openapi::ApiDoc>(api::routes(), &config.cors)?;

    Ok(router.merge(health_router(config.app)))
}
