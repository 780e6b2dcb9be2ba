//! Shared HTTP plumbing for the translator services.
//!
//! [`server::create_router`] takes the domain routes and an OpenAPI document
//! type and returns an app with `/api-json`, the docs viewers, JSON 404/405
//! fallbacks and the standard middleware stack. Handlers return
//! [`AppError`] and read bodies through [`ValidatedJson`], so every failure
//! leaves as an [`ErrorResponse`].
//!
//! ```ignore
//! let routes = Router::new()
//!     .nest("/translation", domain_translation::handlers::router(service))
//!     .merge(health_router(app_info!()));
//! let app = create_router::<ApiDoc>(routes, &CorsConfig::from_env()?)?;
//! let server = ServerConfig::from_env()?;
//! create_production_app(app, &server, Duration::from_secs(30), async {}).await?;
//! ```

pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

pub use server::{
    HealthResponse, OPENAPI_JSON_PATH, SWAGGER_UI_PATH, ShutdownCoordinator,
    create_production_app, create_router, docs_router, health_router, shutdown_signal,
};

pub use http::{create_cors_layer, security_headers};

pub use errors::{AppError, ErrorCode, ErrorResponse};

pub use extractors::ValidatedJson;
