//! Contact form submission orchestrator.
//!
//! Each submission runs one cycle: clear stale errors, read and trim the
//! fields, validate, check the email configuration, send, report. The
//! submit control is disabled while the send is in flight, so a form
//! instance never has two outstanding sends. There are no retries and no
//! timeout; the cycle waits on the email client's own resolution.

use crate::config::{Config, BANNER_TIMEOUT};
use crate::i18n::Translator;
use crate::mailer::{EmailClient, TemplateParams};
use crate::validate::{validate_field, validate_form, Field, FormInput};
use crate::view::{Banner, FormView};
use std::time::Duration;
use tracing::{info, warn};

/// Dictionary key for the localized success banner.
pub const SUCCESS_MESSAGE_KEY: &str = "contact.success_message";

/// Dictionary key for the localized error banner.
pub const ERROR_MESSAGE_KEY: &str = "contact.error_message";

/// Success banner text when no translator is attached.
pub const SUCCESS_FALLBACK: &str = "Your message has been sent. Thank you!";

/// Error banner text when no translator is attached.
pub const ERROR_FALLBACK: &str = "Something went wrong. Please try again later.";

/// Banner shown when the email service identifiers are still placeholders.
pub const NOT_CONFIGURED_MESSAGE: &str =
    "The contact form is not configured yet. Please try again later.";

/// Loading indicator text.
pub const SENDING_MESSAGE: &str = "Sending...";

/// How one submission cycle ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// At least one field failed validation; nothing was sent.
    Invalid,
    /// The email service identifiers are incomplete; nothing was sent.
    NotConfigured,
    /// The message was delivered.
    Sent,
    /// The email client reported a failure.
    SendFailed,
}

pub struct ContactForm<C: EmailClient> {
    config: Config,
    client: C,
    banner_timeout: Duration,
    auto_reset: bool,
}

impl<C: EmailClient> ContactForm<C> {
    pub fn new(config: Config, client: C) -> Self {
        Self {
            config,
            client,
            banner_timeout: BANNER_TIMEOUT,
            auto_reset: true,
        }
    }

    /// Override the banner auto-hide delay. Tests shorten it.
    pub fn with_banner_timeout(mut self, timeout: Duration) -> Self {
        self.banner_timeout = timeout;
        self
    }

    /// Keep field contents after a successful send.
    pub fn without_auto_reset(mut self) -> Self {
        self.auto_reset = false;
        self
    }

    /// Read the four fields from the view. An input absent from the markup
    /// reads as the empty string and is left to the validators.
    fn collect_input<V: FormView>(view: &V) -> FormInput {
        FormInput {
            name: view.field_value(Field::Name).unwrap_or_default(),
            email: view.field_value(Field::Email).unwrap_or_default(),
            subject: view.field_value(Field::Subject).unwrap_or_default(),
            message: view.field_value(Field::Message).unwrap_or_default(),
        }
        .trimmed()
    }

    /// Run one submission cycle against the view.
    ///
    /// When a translator handle is given, the success/error banners use its
    /// `contact.*` strings; otherwise fixed English text is shown.
    pub async fn handle_submit<V: FormView>(
        &self,
        view: &mut V,
        translator: Option<&Translator>,
    ) -> SubmitOutcome {
        view.clear_field_errors();

        let input = Self::collect_input(view);
        let result = validate_form(&input);
        if !result.is_valid() {
            for (field, message) in &result.errors {
                view.show_field_error(*field, message);
            }
            return SubmitOutcome::Invalid;
        }

        if !self.config.email_configured() {
            warn!("Contact form submitted but the email service is not configured");
            view.show_banner(Banner::ConfigError, NOT_CONFIGURED_MESSAGE);
            return SubmitOutcome::NotConfigured;
        }

        view.show_banner(Banner::Loading, SENDING_MESSAGE);
        view.set_submit_enabled(false);

        let params = TemplateParams {
            from_name: input.name,
            from_email: input.email,
            subject: input.subject,
            message: input.message,
            to_email: self.config.contact_recipient.clone(),
        };

        let sent = self
            .client
            .send(
                &self.config.emailjs_service_id,
                &self.config.emailjs_template_id,
                &params,
            )
            .await;

        view.hide_banner(Banner::Loading);
        view.set_submit_enabled(true);

        match sent {
            Ok(()) => {
                info!("Contact message delivered to {}", params.to_email);
                let text = localized(translator, SUCCESS_MESSAGE_KEY, SUCCESS_FALLBACK);
                view.show_banner(Banner::Success, &text);

                if self.auto_reset {
                    view.reset_fields();
                    view.clear_field_errors();
                }

                tokio::time::sleep(self.banner_timeout).await;
                view.hide_banner(Banner::Success);
                SubmitOutcome::Sent
            }
            Err(e) => {
                warn!("Failed to deliver contact message: {:#}", e);
                let text = localized(translator, ERROR_MESSAGE_KEY, ERROR_FALLBACK);
                view.show_banner(Banner::Error, &text);

                tokio::time::sleep(self.banner_timeout).await;
                view.hide_banner(Banner::Error);
                SubmitOutcome::SendFailed
            }
        }
    }

    /// Live validation for a field losing focus: re-run its single rule and
    /// show or clear the inline error. Independent of the submit flow.
    pub fn handle_blur<V: FormView>(&self, view: &mut V, field: Field) {
        let raw = view.field_value(field).unwrap_or_default();
        match validate_field(field, &raw) {
            Some(message) => view.show_field_error(field, &message),
            None => view.clear_field_error(field),
        }
    }
}

fn localized(translator: Option<&Translator>, key: &str, fallback: &str) -> String {
    match translator {
        Some(translator) => translator.translate(key),
        None => fallback.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SERVICE_ID_PLACEHOLDER;
    use crate::i18n::{DictionaryLoader, Language};
    use crate::prefs::MemoryStore;
    use crate::view::InMemoryForm;
    use anyhow::Result;
    use async_trait::async_trait;
    use serde_json::json;
    use serial_test::serial;
    use std::sync::{Arc, Mutex};

    /// Records every send; optionally fails each one.
    #[derive(Clone, Default)]
    struct MockEmailClient {
        calls: Arc<Mutex<Vec<(String, String, TemplateParams)>>>,
        fail: bool,
    }

    impl MockEmailClient {
        fn failing() -> Self {
            Self {
                fail: true,
                ..Self::default()
            }
        }

        fn calls(&self) -> Vec<(String, String, TemplateParams)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl EmailClient for MockEmailClient {
        async fn send(
            &self,
            service_id: &str,
            template_id: &str,
            params: &TemplateParams,
        ) -> Result<()> {
            self.calls.lock().unwrap().push((
                service_id.to_string(),
                template_id.to_string(),
                params.clone(),
            ));
            if self.fail {
                anyhow::bail!("EmailJS API error (500 Internal Server Error): simulated");
            }
            Ok(())
        }
    }

    fn configured() -> Config {
        Config {
            emailjs_service_id: "service_abc123".to_string(),
            emailjs_template_id: "template_xyz789".to_string(),
            emailjs_public_key: "pk_live_456".to_string(),
            contact_recipient: "contact@example.com".to_string(),
            translations_base_url: "http://127.0.0.1:1/translations".to_string(),
            language_file: ".site_language.json".to_string(),
            locale: None,
        }
    }

    fn form_with(config: Config, client: MockEmailClient) -> ContactForm<MockEmailClient> {
        ContactForm::new(config, client).with_banner_timeout(Duration::ZERO)
    }

    fn filled_view() -> InMemoryForm {
        let mut view = InMemoryForm::new();
        view.set_field(Field::Name, "  Jane Doe  ");
        view.set_field(Field::Email, " jane@example.com ");
        view.set_field(Field::Subject, "Partnership");
        view.set_field(Field::Message, "I would like to talk about a partnership.");
        view
    }

    // ==================== Happy Path Tests ====================

    #[tokio::test]
    async fn test_valid_submission_sends_exactly_once_with_trimmed_fields() {
        let client = MockEmailClient::default();
        let form = form_with(configured(), client.clone());
        let mut view = filled_view();

        let outcome = form.handle_submit(&mut view, None).await;

        assert_eq!(outcome, SubmitOutcome::Sent);
        let calls = client.calls();
        assert_eq!(calls.len(), 1);

        let (service_id, template_id, params) = &calls[0];
        assert_eq!(service_id, "service_abc123");
        assert_eq!(template_id, "template_xyz789");
        assert_eq!(params.from_name, "Jane Doe");
        assert_eq!(params.from_email, "jane@example.com");
        assert_eq!(params.subject, "Partnership");
        assert_eq!(params.to_email, "contact@example.com");
    }

    #[tokio::test]
    async fn test_success_shows_banner_then_auto_hides() {
        let client = MockEmailClient::default();
        let form = form_with(configured(), client);
        let mut view = filled_view();

        form.handle_submit(&mut view, None).await;

        assert!(view
            .banner_log
            .contains(&(Banner::Success, SUCCESS_FALLBACK.to_string())));
        // timeout elapsed inside handle_submit
        assert!(!view.banner_visible(Banner::Success));
        assert!(!view.banner_visible(Banner::Loading));
        assert!(view.submit_enabled);
    }

    #[tokio::test]
    async fn test_success_resets_fields_and_clears_errors() {
        let client = MockEmailClient::default();
        let form = form_with(configured(), client);
        let mut view = filled_view();
        view.show_field_error(Field::Name, "stale error");

        form.handle_submit(&mut view, None).await;

        assert_eq!(view.field_value(Field::Name), Some(String::new()));
        assert_eq!(view.field_value(Field::Message), Some(String::new()));
        assert!(view.field_errors.is_empty());
    }

    #[tokio::test]
    async fn test_without_auto_reset_preserves_fields() {
        let client = MockEmailClient::default();
        let form = ContactForm::new(configured(), client)
            .with_banner_timeout(Duration::ZERO)
            .without_auto_reset();
        let mut view = filled_view();

        form.handle_submit(&mut view, None).await;

        assert_eq!(
            view.field_value(Field::Email),
            Some(" jane@example.com ".to_string())
        );
    }

    // ==================== Validation Failure Tests ====================

    #[tokio::test]
    async fn test_invalid_submission_shows_inline_errors_and_sends_nothing() {
        let client = MockEmailClient::default();
        let form = form_with(configured(), client.clone());
        let mut view = filled_view();
        view.set_field(Field::Email, "a@b");
        view.set_field(Field::Message, "short");

        let outcome = form.handle_submit(&mut view, None).await;

        assert_eq!(outcome, SubmitOutcome::Invalid);
        assert!(client.calls().is_empty());
        assert_eq!(view.field_errors.len(), 2);
        assert!(view.field_errors.contains_key(&Field::Email));
        assert!(view.field_errors.contains_key(&Field::Message));
        assert!(view.banner_log.is_empty());
    }

    #[tokio::test]
    async fn test_submission_clears_stale_errors_before_validating() {
        let client = MockEmailClient::default();
        let form = form_with(configured(), client);
        let mut view = filled_view();
        view.set_field(Field::Name, "Jo");
        view.show_field_error(Field::Email, "stale error");

        form.handle_submit(&mut view, None).await;

        // only the name failed this cycle
        assert_eq!(view.field_errors.len(), 1);
        assert!(view.field_errors.contains_key(&Field::Name));
    }

    #[tokio::test]
    async fn test_missing_field_reads_as_empty_and_fails_validation() {
        let client = MockEmailClient::default();
        let form = form_with(configured(), client.clone());
        let mut view = filled_view();
        view.remove_field(Field::Message);

        let outcome = form.handle_submit(&mut view, None).await;

        assert_eq!(outcome, SubmitOutcome::Invalid);
        assert!(view.field_errors.contains_key(&Field::Message));
        assert!(client.calls().is_empty());
    }

    // ==================== Configuration Tests ====================

    #[tokio::test]
    async fn test_unconfigured_client_never_sends() {
        let mut config = configured();
        config.emailjs_service_id = SERVICE_ID_PLACEHOLDER.to_string();
        let client = MockEmailClient::default();
        let form = form_with(config, client.clone());
        let mut view = filled_view();

        let outcome = form.handle_submit(&mut view, None).await;

        assert_eq!(outcome, SubmitOutcome::NotConfigured);
        assert!(client.calls().is_empty());
        // the configuration banner stays up; only success/error auto-hide
        assert_eq!(
            view.banner_text(Banner::ConfigError),
            Some(NOT_CONFIGURED_MESSAGE)
        );
    }

    // ==================== Send Failure Tests ====================

    #[tokio::test]
    async fn test_send_failure_shows_error_banner_and_preserves_fields() {
        let client = MockEmailClient::failing();
        let form = form_with(configured(), client);
        let mut view = filled_view();

        let outcome = form.handle_submit(&mut view, None).await;

        assert_eq!(outcome, SubmitOutcome::SendFailed);
        assert!(view
            .banner_log
            .contains(&(Banner::Error, ERROR_FALLBACK.to_string())));
        assert_eq!(
            view.field_value(Field::Name),
            Some("  Jane Doe  ".to_string())
        );
        assert!(view.submit_enabled);
    }

    // ==================== Localization Tests ====================

    fn translator_with_contact_strings() -> Translator {
        Translator::preloaded(
            DictionaryLoader::new("http://127.0.0.1:1/translations"),
            Box::new(MemoryStore::new()),
            Language::FRENCH,
            json!({
                "contact": {
                    "success_message": "Votre message a bien été envoyé. Merci !",
                    "error_message": "Une erreur est survenue. Veuillez réessayer."
                }
            }),
        )
    }

    #[tokio::test]
    #[serial]
    async fn test_success_banner_is_localized_when_translator_present() {
        let client = MockEmailClient::default();
        let form = form_with(configured(), client);
        let mut view = filled_view();
        let translator = translator_with_contact_strings();

        form.handle_submit(&mut view, Some(&translator)).await;

        assert!(view.banner_log.iter().any(|(banner, text)| {
            *banner == Banner::Success && text == "Votre message a bien été envoyé. Merci !"
        }));
    }

    #[tokio::test]
    #[serial]
    async fn test_error_banner_falls_back_to_literal_key_when_untranslated() {
        let client = MockEmailClient::failing();
        let form = form_with(configured(), client);
        let mut view = filled_view();
        let translator = Translator::preloaded(
            DictionaryLoader::new("http://127.0.0.1:1/translations"),
            Box::new(MemoryStore::new()),
            Language::ENGLISH,
            json!({}),
        );

        form.handle_submit(&mut view, Some(&translator)).await;

        // unresolved keys surface literally rather than silently blank
        assert!(view
            .banner_log
            .contains(&(Banner::Error, ERROR_MESSAGE_KEY.to_string())));
    }

    // ==================== Blur Validation Tests ====================

    #[test]
    fn test_blur_shows_error_for_invalid_field() {
        let form = ContactForm::new(configured(), MockEmailClient::default());
        let mut view = InMemoryForm::new();
        view.set_field(Field::Email, "a@b");

        form.handle_blur(&mut view, Field::Email);

        assert!(view.field_errors.contains_key(&Field::Email));
    }

    #[test]
    fn test_blur_clears_error_once_field_becomes_valid() {
        let form = ContactForm::new(configured(), MockEmailClient::default());
        let mut view = InMemoryForm::new();
        view.set_field(Field::Email, "a@b");
        form.handle_blur(&mut view, Field::Email);

        view.set_field(Field::Email, "a@b.co");
        form.handle_blur(&mut view, Field::Email);

        assert!(view.field_errors.is_empty());
    }

    #[test]
    fn test_blur_on_missing_field_validates_empty() {
        let form = ContactForm::new(configured(), MockEmailClient::default());
        let mut view = InMemoryForm::new();
        view.remove_field(Field::Name);

        form.handle_blur(&mut view, Field::Name);

        assert!(view.field_errors.contains_key(&Field::Name));
    }

    // ==================== Constant Tests ====================

    #[test]
    fn test_default_banner_timeout_is_five_seconds() {
        assert_eq!(BANNER_TIMEOUT, Duration::from_secs(5));
    }
}
