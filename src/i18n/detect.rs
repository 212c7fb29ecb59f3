//! Language detection.
//!
//! Pure and synchronous: a stored preference wins, then the visitor's
//! reported locale, then the fixed default. No network access.

use crate::i18n::Language;

/// Resolve the active language.
///
/// Order: (1) `stored` if it names a supported code, (2) the primary
/// subtag of `locale_hint` if supported, (3) the fixed default.
pub fn detect_language(stored: Option<&str>, locale_hint: Option<&str>) -> Language {
    if let Some(code) = stored {
        if let Ok(language) = Language::from_code(code) {
            return language;
        }
    }

    if let Some(locale) = locale_hint {
        if let Ok(language) = Language::from_code(&primary_subtag(locale)) {
            return language;
        }
    }

    Language::default_language()
}

/// Reduce a locale identifier to its primary subtag, lowercased
/// ("de-DE" -> "de", "en_US.UTF-8" -> "en").
pub fn primary_subtag(locale: &str) -> String {
    locale
        .split(['-', '_', '.'])
        .next()
        .unwrap_or("")
        .to_lowercase()
}
