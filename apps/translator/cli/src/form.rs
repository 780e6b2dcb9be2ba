//! Input handling for the translate command.

use color_eyre::Result;
use domain_translation::{Language, TranslateRequest, TranslateResponse};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("Nothing to translate: text is empty")]
    EmptyText,

    #[error("Need at least two supported languages to pick defaults, server offered {0}")]
    NotEnoughLanguages(usize),
}

/// Rejects text that is empty once trimmed.
pub fn validate_text(text: &str) -> Result<(), FormError> {
    if text.trim().is_empty() {
        return Err(FormError::EmptyText);
    }
    Ok(())
}

/// Like [`build_request`], but only calls `fetch_languages` once the text is
/// accepted and a default language is actually needed.
pub async fn prepare_request<F, Fut>(
    text: &str,
    from: Option<String>,
    to: Option<String>,
    fetch_languages: F,
) -> Result<TranslateRequest>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<Vec<Language>>>,
{
    validate_text(text)?;

    let languages = if from.is_none() || to.is_none() {
        fetch_languages().await?
    } else {
        Vec::new()
    };

    Ok(build_request(text, from, to, &languages)?)
}

/// Build a request, defaulting the source to the first supported language and
/// the target to the second when they are not given.
pub fn build_request(
    text: &str,
    from: Option<String>,
    to: Option<String>,
    languages: &[Language],
) -> Result<TranslateRequest, FormError> {
    validate_text(text)?;

    let (from, to) = match (from, to) {
        (Some(from), Some(to)) => (from, to),
        (from, to) => {
            if languages.len() < 2 {
                return Err(FormError::NotEnoughLanguages(languages.len()));
            }
            (
                from.unwrap_or_else(|| languages[0].code.clone()),
                to.unwrap_or_else(|| languages[1].code.clone()),
            )
        }
    };

    Ok(TranslateRequest::new(text, from, to))
}

pub fn format_confidence(response: &TranslateResponse) -> String {
    match response.confidence {
        Some(confidence) => format!("{:.2}", confidence),
        None => "N/A".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use color_eyre::eyre::eyre;
    use std::sync::atomic::{AtomicBool, Ordering};

    fn catalog() -> Vec<Language> {
        vec![
            Language::new("en", "English"),
            Language::new("es", "Spanish"),
            Language::new("fr", "French"),
        ]
    }

    #[test]
    fn test_defaults_to_first_two_languages() {
        let request = build_request("Hello", None, None, &catalog()).unwrap();
        assert_eq!(request, TranslateRequest::new("Hello", "en", "es"));
    }

    #[test]
    fn test_explicit_codes_win() {
        let request =
            build_request("Hello", Some("fr".into()), None, &catalog()).unwrap();
        assert_eq!(request.source_language, "fr");
        assert_eq!(request.target_language, "es");

        let request = build_request("Hello", Some("de".into()), Some("ja".into()), &[]).unwrap();
        assert_eq!(request.target_language, "ja");
    }

    #[test]
    fn test_whitespace_text_is_rejected() {
        assert_eq!(
            build_request("  \n", None, None, &catalog()),
            Err(FormError::EmptyText)
        );
    }

    #[tokio::test]
    async fn test_blank_text_rejected_before_languages_are_fetched() {
        let fetched = AtomicBool::new(false);

        let err = prepare_request("   ", None, None, || async {
            fetched.store(true, Ordering::SeqCst);
            Err(eyre!("connection refused"))
        })
        .await
        .unwrap_err();

        assert_eq!(err.downcast_ref::<FormError>(), Some(&FormError::EmptyText));
        assert!(!fetched.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_languages_fetched_only_for_defaults() {
        let request = prepare_request("Hello", Some("de".into()), Some("ja".into()), || async {
            Err(eyre!("should not be called"))
        })
        .await
        .unwrap();
        assert_eq!(request, TranslateRequest::new("Hello", "de", "ja"));

        let request = prepare_request("Hello", None, Some("fr".into()), || async { Ok(catalog()) })
            .await
            .unwrap();
        assert_eq!(request, TranslateRequest::new("Hello", "en", "fr"));
    }

    #[tokio::test]
    async fn test_fetch_failure_is_reported() {
        let err = prepare_request("Hello", None, None, || async {
            Err(eyre!("connection refused"))
        })
        .await
        .unwrap_err();
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn test_defaults_need_two_languages() {
        let one = vec![Language::new("en", "English")];
        assert_eq!(
            build_request("Hello", None, None, &one),
            Err(FormError::NotEnoughLanguages(1))
        );
    }

    #[test]
    fn test_format_confidence() {
        let mut response = TranslateResponse {
            translated_text: "x".into(),
            source_language: "en".into(),
            target_language: "es".into(),
            confidence: Some(0.95),
        };
        assert_eq!(format_confidence(&response), "0.95");

        response.confidence = None;
        assert_eq!(format_confidence(&response), "N/A");
    }
}
