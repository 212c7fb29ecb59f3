//! Browser-glue utilities for a static marketing site, as a library:
//! a contact form handler (validate four fields, forward to a
//! transactional-email API, report via banners) and an i18n helper
//! (detect the visitor's language, fetch its dictionary, rewrite tagged
//! page text).
//!
//! Decision logic is pure and DOM-free; rendering goes through the view
//! traits in [`view`], so everything can run and be tested headless.

pub mod config;
pub mod contact;
pub mod i18n;
pub mod mailer;
pub mod prefs;
pub mod validate;
pub mod view;

pub use config::Config;
pub use contact::{ContactForm, SubmitOutcome};
pub use i18n::{DictionaryLoader, Language, Translator};
pub use mailer::{EmailClient, EmailJsClient, TemplateParams};
