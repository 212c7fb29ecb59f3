//! Translator service: owns the active language and the dictionary cache.
//!
//! One instance lives for the page session. Consumers (the contact form)
//! hold a shared reference and only read through [`Translator::translate`];
//! all mutation of language state happens here.

use crate::i18n::{
    detect_language, DictionaryLoader, Language, TranslationError, TranslationMetrics,
};
use crate::prefs::{PreferenceStore, LANGUAGE_STORAGE_KEY};
use crate::view::PageView;
use serde_json::Value;
use std::collections::HashMap;
use tracing::{info, warn};

/// Walk a dot-separated key path down a dictionary tree.
///
/// Returns `None` when any segment is missing or the leaf is not a string.
pub fn resolve<'a>(dict: &'a Value, key_path: &str) -> Option<&'a str> {
    let mut current = dict;
    for segment in key_path.split('.') {
        current = current.get(segment)?;
    }
    current.as_str()
}

pub struct Translator {
    active: Language,
    /// Session cache: language code -> loaded dictionary.
    dictionaries: HashMap<&'static str, Value>,
    loader: DictionaryLoader,
    store: Box<dyn PreferenceStore>,
}

impl Translator {
    /// Initialize for a page session: detect the language from the stored
    /// preference and the reported locale, then load its dictionary.
    ///
    /// A load failure falls back to the default language; if even the
    /// default dictionary cannot be loaded, the translator starts with an
    /// empty one and every lookup shows its literal key.
    pub async fn init(
        loader: DictionaryLoader,
        store: Box<dyn PreferenceStore>,
        locale_hint: Option<&str>,
    ) -> Self {
        let stored = store.get(LANGUAGE_STORAGE_KEY);
        let detected = detect_language(stored.as_deref(), locale_hint);

        let mut translator = Self {
            active: Language::default_language(),
            dictionaries: HashMap::new(),
            loader,
            store,
        };

        if let Err(e) = translator.activate(detected).await {
            let default = Language::default_language();
            warn!(
                "Failed to load dictionary for '{}': {}; falling back to '{}'",
                detected.code(),
                e,
                default.code()
            );

            if let Err(e) = translator.activate(default).await {
                warn!(
                    "Failed to load default dictionary: {}; translations will show literal keys",
                    e
                );
                translator
                    .dictionaries
                    .insert(default.code(), Value::Object(serde_json::Map::new()));
                translator.active = default;
            }
        }

        info!("Active language: {}", translator.active.code());
        translator
    }

    /// Construct with an already-loaded dictionary, skipping the fetch.
    pub fn preloaded(
        loader: DictionaryLoader,
        store: Box<dyn PreferenceStore>,
        language: Language,
        dictionary: Value,
    ) -> Self {
        let mut dictionaries = HashMap::new();
        dictionaries.insert(language.code(), dictionary);
        Self {
            active: language,
            dictionaries,
            loader,
            store,
        }
    }

    /// The currently active language. Always a supported one.
    pub fn active(&self) -> Language {
        self.active
    }

    async fn ensure_loaded(&mut self, language: Language) -> Result<(), TranslationError> {
        let metrics = TranslationMetrics::global();

        if self.dictionaries.contains_key(language.code()) {
            metrics.record_cache_hit();
            return Ok(());
        }
        metrics.record_cache_miss();

        metrics.record_fetch();
        match self.loader.fetch(language).await {
            Ok(dictionary) => {
                self.dictionaries.insert(language.code(), dictionary);
                Ok(())
            }
            Err(e) => {
                metrics.record_fetch_failure();
                Err(e)
            }
        }
    }

    async fn activate(&mut self, language: Language) -> Result<(), TranslationError> {
        self.ensure_loaded(language).await?;
        self.active = language;
        Ok(())
    }

    /// Switch to an explicitly selected language.
    ///
    /// Unsupported codes are rejected with a warning and leave the active
    /// language, the preference, and the cache untouched. For supported
    /// codes the choice is persisted, then the dictionary is loaded (or
    /// taken from the cache) and made active.
    pub async fn switch(&mut self, code: &str) -> Result<(), TranslationError> {
        let language = match Language::from_code(code) {
            Ok(language) => language,
            Err(_) => {
                warn!("Ignoring switch to unsupported language '{}'", code);
                return Err(TranslationError::Unsupported(code.to_string()));
            }
        };

        // Persist before the fetch, matching the selector's original ordering.
        self.store.set(LANGUAGE_STORAGE_KEY, language.code());
        self.activate(language).await?;
        info!("Switched language to '{}'", language.code());
        Ok(())
    }

    /// Look up a key in the active dictionary.
    ///
    /// Unresolved keys return the key string itself, so a missing
    /// translation is visible on the page instead of silently blank.
    pub fn translate(&self, key: &str) -> String {
        match self.active_dictionary().and_then(|dict| resolve(dict, key)) {
            Some(value) => value.to_string(),
            None => {
                warn!(
                    "Missing translation for key '{}' in '{}'",
                    key,
                    self.active.code()
                );
                TranslationMetrics::global().record_missing_key();
                key.to_string()
            }
        }
    }

    /// Apply the active dictionary to every tagged element of the page.
    ///
    /// Input-like nodes receive the translation as their placeholder, other
    /// nodes as their text content. Also sets the document language, the
    /// selector state, and the page title when `meta.title` resolves.
    pub fn apply<P: PageView>(&self, page: &mut P) {
        for node in page.tagged_nodes() {
            let translated = self.translate(&node.key);
            if node.accepts_placeholder {
                page.set_placeholder(node.id, &translated);
            } else {
                page.set_text(node.id, &translated);
            }
        }

        page.set_document_lang(self.active.code());
        page.set_selector_value(self.active.code());

        if let Some(title) = self.active_dictionary().and_then(|d| resolve(d, "meta.title")) {
            page.set_title(title);
        }
    }

    fn active_dictionary(&self) -> Option<&Value> {
        self.dictionaries.get(self.active.code())
    }
}
