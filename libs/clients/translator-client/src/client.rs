use domain_translation::{LanguagesResponse, TranslateRequest, TranslateResponse};
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::cache::{QueryCache, QueryKey};
use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};

pub const LANGUAGES_PATH: &str = "/translation/languages";
pub const TRANSLATE_PATH: &str = "/translation/translate";

/// Typed client for the translator API.
///
/// Queries (`GET`) go through a [`QueryCache`]; mutations (`POST`) always hit
/// the server. Clones share the HTTP connection pool and the cache.
#[derive(Debug, Clone)]
pub struct TranslatorClient {
    http: Client,
    base_url: Url,
    languages: QueryCache<LanguagesResponse>,
}

impl TranslatorClient {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let base_url =
            Url::parse(&config.base_url).map_err(|e| ClientError::InvalidBaseUrl {
                url: config.base_url.clone(),
                details: e.to_string(),
            })?;

        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidBaseUrl {
                url: config.base_url.clone(),
                details: "URL cannot be used as a base".to_string(),
            });
        }

        let http = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            http,
            base_url,
            languages: QueryCache::new(config.stale_time),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Supported languages, served from cache while fresh.
    #[instrument(skip(self))]
    pub async fn languages(&self) -> ClientResult<LanguagesResponse> {
        let key = QueryKey::get(LANGUAGES_PATH);
        if let Some(cached) = self.languages.get_fresh(&key).await {
            debug!(query = %key, "Serving cached query");
            return Ok(cached);
        }

        let response = self.http.get(self.url(LANGUAGES_PATH)).send().await?;
        let languages: LanguagesResponse = decode(response).await?;

        self.languages.insert(key, languages.clone()).await;
        Ok(languages)
    }

    /// Drop the cached languages and fetch them again.
    pub async fn refresh_languages(&self) -> ClientResult<LanguagesResponse> {
        self.languages
            .invalidate(&QueryKey::get(LANGUAGES_PATH))
            .await;
        self.languages().await
    }

    #[instrument(
        skip(self, request),
        fields(source = %request.source_language, target = %request.target_language)
    )]
    pub async fn translate(&self, request: &TranslateRequest) -> ClientResult<TranslateResponse> {
        let response = self
            .http
            .post(self.url(TRANSLATE_PATH))
            .json(request)
            .send()
            .await?;

        decode(response).await
    }

    /// Joins `path` onto the base URL, keeping any base path prefix.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.as_str().trim_end_matches('/'), path)
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json::<T>().await?);
    }

    let bytes = response.bytes().await?;
    let body = serde_json::from_slice::<axum_helpers::ErrorResponse>(&bytes).ok();
    let message = match &body {
        Some(err) => err.message.clone(),
        None => String::from_utf8_lossy(&bytes).into_owned(),
    };

    Err(ClientError::Api {
        status: status.as_u16(),
        message,
        body,
    })
}
