//! Translation dictionary loading.
//!
//! Dictionaries are JSON documents of nested string keys, served next to the
//! site as `{base_url}/{code}.json`. The loader performs one GET per call;
//! session caching lives in the [`Translator`](crate::i18n::Translator).

use crate::i18n::Language;
use serde_json::Value;
use thiserror::Error;
use tracing::info;

/// Failure to obtain a language's dictionary.
#[derive(Debug, Error)]
pub enum TranslationError {
    #[error("unsupported language code: '{0}'")]
    Unsupported(String),

    #[error("failed to fetch dictionary for '{code}'")]
    Fetch {
        code: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("dictionary request for '{code}' returned {status}")]
    Status {
        code: String,
        status: reqwest::StatusCode,
    },

    #[error("dictionary for '{code}' is not valid JSON")]
    Parse {
        code: String,
        #[source]
        source: serde_json::Error,
    },
}

/// HTTP loader for translation dictionaries.
pub struct DictionaryLoader {
    http: reqwest::Client,
    base_url: String,
}

impl DictionaryLoader {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// URL of the dictionary document for a language.
    pub fn dictionary_url(&self, language: Language) -> String {
        format!(
            "{}/{}.json",
            self.base_url.trim_end_matches('/'),
            language.code()
        )
    }

    /// Fetch and parse one language's dictionary.
    pub async fn fetch(&self, language: Language) -> Result<Value, TranslationError> {
        let code = language.code();
        let url = self.dictionary_url(language);
        info!("Fetching translation dictionary from {}", url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|source| TranslationError::Fetch {
                code: code.to_string(),
                source,
            })?;

        if !response.status().is_success() {
            return Err(TranslationError::Status {
                code: code.to_string(),
                status: response.status(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|source| TranslationError::Fetch {
                code: code.to_string(),
                source,
            })?;

        serde_json::from_str(&body).map_err(|source| TranslationError::Parse {
            code: code.to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dictionary_url_joins_code() {
        let loader = DictionaryLoader::new("https://example.com/translations");
        assert_eq!(
            loader.dictionary_url(Language::FRENCH),
            "https://example.com/translations/fr.json"
        );
    }

    #[test]
    fn test_dictionary_url_tolerates_trailing_slash() {
        let loader = DictionaryLoader::new("https://example.com/translations/");
        assert_eq!(
            loader.dictionary_url(Language::ENGLISH),
            "https://example.com/translations/en.json"
        );
    }

    #[test]
    fn test_error_display_names_the_code() {
        let err = TranslationError::Unsupported("ja".to_string());
        assert!(err.to_string().contains("'ja'"));
    }
}
