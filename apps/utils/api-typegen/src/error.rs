use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TypegenError {
    #[error("Failed to fetch OpenAPI document from {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("OpenAPI endpoint {url} answered with status {status}")]
    Status { url: String, status: u16 },

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("OpenAPI document is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid OpenAPI document: {0}")]
    InvalidDocument(String),
}

pub type TypegenResult<T> = Result<T, TypegenError>;
