//! Fixed catalog of supported languages.

use crate::models::Language;

const SUPPORTED: [(&str, &str); 6] = [
    ("en", "English"),
    ("es", "Spanish"),
    ("fr", "French"),
    ("de", "German"),
    ("zh", "Chinese"),
    ("ja", "Japanese"),
];

/// All supported languages, always in catalog order.
pub fn supported_languages() -> Vec<Language> {
    SUPPORTED
        .iter()
        .map(|(code, name)| Language::new(*code, *name))
        .collect()
}

/// Look up a supported language by its exact code.
pub fn find(code: &str) -> Option<Language> {
    SUPPORTED
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(c, name)| Language::new(*c, *name))
}
