//! Translation Domain
//!
//! Languages catalog and text translation behind a small HTTP surface.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints + OpenAPI fragment
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Validation, catalog
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Translator  │  ← Translation backend (trait + stub implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Request/response DTOs (serde, utoipa, ts-rs)
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_translation::{handlers, EchoTranslator, TranslationService};
//!
//! let service = TranslationService::new(EchoTranslator::new());
//! let router = axum::Router::new().nest("/translation", handlers::router(service));
//! ```

pub mod catalog;
pub mod error;
pub mod handlers;
pub mod models;
pub mod service;
pub mod translator;

// Re-export commonly used types
pub use error::{TranslationError, TranslationResult};
pub use handlers::ApiDoc;
pub use models::{Language, LanguagesResponse, TranslateRequest, TranslateResponse};
pub use service::TranslationService;
pub use translator::{EchoTranslator, Translator};
