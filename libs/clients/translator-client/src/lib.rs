//! Typed client for the translator API.
//!
//! Request and response types are the server's own models, so a change to
//! the API surface is a compile error here rather than a runtime surprise.
//!
//! ```rust,no_run
//! # async fn run() -> translator_client::ClientResult<()> {
//! use translator_client::{ClientConfig, TranslatorClient};
//! use domain_translation::TranslateRequest;
//!
//! let client = TranslatorClient::new(&ClientConfig::default())?;
//! let languages = client.languages().await?;
//! let result = client
//!     .translate(&TranslateRequest::new("Hello world", "en", "es"))
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod client;
pub mod config;
pub mod error;

pub use cache::{QueryCache, QueryKey};
pub use client::{LANGUAGES_PATH, TRANSLATE_PATH, TranslatorClient};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
