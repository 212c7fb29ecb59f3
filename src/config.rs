use std::time::Duration;

/// Placeholder left in unconfigured deployments for the EmailJS service id.
pub const SERVICE_ID_PLACEHOLDER: &str = "YOUR_SERVICE_ID";

/// Placeholder for the EmailJS template id.
pub const TEMPLATE_ID_PLACEHOLDER: &str = "YOUR_TEMPLATE_ID";

/// Placeholder for the EmailJS public key.
pub const PUBLIC_KEY_PLACEHOLDER: &str = "YOUR_PUBLIC_KEY";

/// How long success/error banners stay visible before auto-hiding.
pub const BANNER_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone)]
pub struct Config {
    // EmailJS
    pub emailjs_service_id: String,
    pub emailjs_template_id: String,
    pub emailjs_public_key: String,

    /// Fixed recipient for contact form submissions.
    pub contact_recipient: String,

    // Translations
    /// Base URL the per-language dictionaries are served from
    /// (`{base}/{code}.json`).
    pub translations_base_url: String,

    /// Path of the file holding the persisted language preference.
    pub language_file: String,

    /// Reported visitor locale (e.g. "de-DE"), if any. Stands in for the
    /// browser's navigator locale.
    pub locale: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            // EmailJS - identifiers keep their placeholders until the
            // deployment sets them, which the form treats as "not configured"
            emailjs_service_id: std::env::var("EMAILJS_SERVICE_ID")
                .unwrap_or_else(|_| SERVICE_ID_PLACEHOLDER.to_string()),
            emailjs_template_id: std::env::var("EMAILJS_TEMPLATE_ID")
                .unwrap_or_else(|_| TEMPLATE_ID_PLACEHOLDER.to_string()),
            emailjs_public_key: std::env::var("EMAILJS_PUBLIC_KEY")
                .unwrap_or_else(|_| PUBLIC_KEY_PLACEHOLDER.to_string()),

            contact_recipient: std::env::var("CONTACT_RECIPIENT")
                .unwrap_or_else(|_| "contact@example.com".to_string()),

            // Translations
            translations_base_url: std::env::var("TRANSLATIONS_BASE_URL")
                .unwrap_or_else(|_| "http://127.0.0.1:8080/translations".to_string()),
            language_file: std::env::var("LANGUAGE_FILE")
                .unwrap_or_else(|_| ".site_language.json".to_string()),
            locale: std::env::var("SITE_LOCALE").ok(),
        }
    }

    /// Whether all three EmailJS identifiers have been set to real values.
    ///
    /// Submissions are refused with a configuration-error banner while any
    /// identifier still carries its placeholder.
    pub fn email_configured(&self) -> bool {
        !self.emailjs_service_id.is_empty()
            && !self.emailjs_template_id.is_empty()
            && !self.emailjs_public_key.is_empty()
            && self.emailjs_service_id != SERVICE_ID_PLACEHOLDER
            && self.emailjs_template_id != TEMPLATE_ID_PLACEHOLDER
            && self.emailjs_public_key != PUBLIC_KEY_PLACEHOLDER
    }
}
