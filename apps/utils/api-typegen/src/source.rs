//! Where the OpenAPI document comes from.

use core_config::env_or_default;
use serde_json::Value;
use std::path::PathBuf;

use crate::error::{TypegenError, TypegenResult};

/// Path the API serves its document on.
pub const OPENAPI_JSON_PATH: &str = "/api-json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Url(String),
    File(PathBuf),
}

impl Source {
    pub async fn load(&self) -> TypegenResult<Value> {
        match self {
            Source::Url(url) => fetch(url).await,
            Source::File(path) => {
                let raw = tokio::fs::read_to_string(path)
                    .await
                    .map_err(|source| TypegenError::Read {
                        path: path.clone(),
                        source,
                    })?;
                Ok(serde_json::from_str(&raw)?)
            }
        }
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::Url(url) => write!(f, "{}", url),
            Source::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Discovery URL built from `API_HOST` (scheme included, default
/// `http://localhost`) and `API_PORT` (default `3000`).
pub fn default_url() -> String {
    let host = env_or_default("API_HOST", "http://localhost");
    let port = env_or_default("API_PORT", "3000");
    format!("{}:{}{}", host.trim_end_matches('/'), port, OPENAPI_JSON_PATH)
}

async fn fetch(url: &str) -> TypegenResult<Value> {
    let fetch_err = |source| TypegenError::Fetch {
        url: url.to_string(),
        source,
    };

    let response = reqwest::get(url).await.map_err(fetch_err)?;
    let status = response.status();
    if !status.is_success() {
        return Err(TypegenError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    response.json().await.map_err(fetch_err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_url() {
        temp_env::with_vars_unset(["API_HOST", "API_PORT"], || {
            assert_eq!(default_url(), "http://localhost:3000/api-json");
        });
    }

    #[test]
    fn test_default_url_from_env() {
        temp_env::with_vars(
            [("API_HOST", Some("http://localhost")), ("API_PORT", Some("3000"))],
            || {
                assert_eq!(default_url(), "http://localhost:3000/api-json");
            },
        );

        temp_env::with_vars(
            [("API_HOST", Some("https://api.internal/")), ("API_PORT", Some("8443"))],
            || {
                assert_eq!(default_url(), "https://api.internal:8443/api-json");
            },
        );
    }

    #[tokio::test]
    async fn test_missing_file() {
        let source = Source::File(PathBuf::from("/nonexistent/openapi.json"));
        let err = source.load().await.unwrap_err();
        assert!(matches!(err, TypegenError::Read { .. }));
    }

    #[tokio::test]
    async fn test_unreachable_url() {
        let source = Source::Url("http://127.0.0.1:1/api-json".to_string());
        let err = source.load().await.unwrap_err();
        assert!(matches!(err, TypegenError::Fetch { .. }));
    }
}
