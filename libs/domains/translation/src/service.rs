use std::sync::Arc;
use tracing::debug;
use validator::Validate;

use crate::catalog;
use crate::error::{TranslationError, TranslationResult};
use crate::models::{LanguagesResponse, TranslateRequest, TranslateResponse};
use crate::translator::Translator;

/// Service layer for translation
pub struct TranslationService<T: Translator> {
    translator: Arc<T>,
}

impl<T: Translator> Clone for TranslationService<T> {
    fn clone(&self) -> Self {
        Self {
            translator: Arc::clone(&self.translator),
        }
    }
}

impl<T: Translator> TranslationService<T> {
    pub fn new(translator: T) -> Self {
        Self {
            translator: Arc::new(translator),
        }
    }

    /// The fixed list of supported languages
    pub fn languages(&self) -> LanguagesResponse {
        LanguagesResponse {
            languages: catalog::supported_languages(),
        }
    }

    /// Translate text; codes are echoed back untouched
    pub async fn translate(&self, input: TranslateRequest) -> TranslationResult<TranslateResponse> {
        input
            .validate()
            .map_err(|e| TranslationError::Validation(e.to_string()))?;

        debug!(
            source = %input.source_language,
            target = %input.target_language,
            chars = input.text.chars().count(),
            "Translating text"
        );

        self.translator.translate(&input).await
    }
}
