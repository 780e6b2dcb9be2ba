use serde::{Deserialize, Serialize};
use ts_rs::TS;
use utoipa::ToSchema;
use validator::Validate;

/// Text to translate between two language codes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct TranslateRequest {
    /// Source text
    #[schema(example = "Hello world")]
    pub text: String,
    /// Language code of `text`
    #[validate(length(min = 1, message = "source language is required"))]
    #[schema(example = "en")]
    pub source_language: String,
    /// Language code to translate into
    #[validate(length(min = 1, message = "target language is required"))]
    #[schema(example = "es")]
    pub target_language: String,
}

impl TranslateRequest {
    pub fn new(
        text: impl Into<String>,
        source_language: impl Into<String>,
        target_language: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            source_language: source_language.into(),
            target_language: target_language.into(),
        }
    }
}

/// Result of a translation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct TranslateResponse {
    #[schema(example = "Hola mundo")]
    pub translated_text: String,
    #[schema(example = "en")]
    pub source_language: String,
    #[schema(example = "es")]
    pub target_language: String,
    /// Translator confidence in `[0, 1]`, when the translator reports one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = 0.95)]
    #[ts(optional)]
    pub confidence: Option<f64>,
}

/// A supported language
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema, TS)]
#[ts(export)]
pub struct Language {
    #[schema(example = "en")]
    pub code: String,
    #[schema(example = "English")]
    pub name: String,
}

impl Language {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }
}

/// Supported languages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema, TS)]
#[ts(export)]
pub struct LanguagesResponse {
    pub languages: Vec<Language>,
}
