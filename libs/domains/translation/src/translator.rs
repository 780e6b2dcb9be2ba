use async_trait::async_trait;

use crate::error::TranslationResult;
use crate::models::{TranslateRequest, TranslateResponse};

/// Something that can turn a [`TranslateRequest`] into a [`TranslateResponse`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(&self, request: &TranslateRequest) -> TranslationResult<TranslateResponse>;
}

/// Stand-in translator: prefixes the text and reports a fixed confidence.
#[derive(Debug, Default, Clone, Copy)]
pub struct EchoTranslator;

impl EchoTranslator {
    pub const PREFIX: &'static str = "[Translated] ";
    pub const CONFIDENCE: f64 = 0.95;

    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Translator for EchoTranslator {
    async fn translate(&self, request: &TranslateRequest) -> TranslationResult<TranslateResponse> {
        Ok(TranslateResponse {
            translated_text: format!("{}{}", Self::PREFIX, request.text),
            source_language: request.source_language.clone(),
            target_language: request.target_language.clone(),
            confidence: Some(Self::CONFIDENCE),
        })
    }
}
