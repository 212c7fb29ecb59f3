//! Contact form field validation.
//!
//! All validators are pure: they take the raw field value and return either
//! `None` (valid) or a human-readable error message. Rendering the message
//! next to the field is the view's job, see `crate::contact`.
//!
//! Error text is intentionally fixed English and independent of the i18n
//! module; the form's status banners are the only localized strings.

use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// Minimum trimmed length for the sender name.
pub const NAME_MIN_CHARS: usize = 4;

/// Minimum trimmed length for the subject line.
pub const SUBJECT_MIN_CHARS: usize = 4;

/// Minimum trimmed length for the message body.
pub const MESSAGE_MIN_CHARS: usize = 10;

static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();

/// Simple two-part email shape: local@domain.tld. Not RFC 5322; the
/// transactional-email service does its own verification on delivery.
fn email_regex() -> &'static Regex {
    EMAIL_REGEX.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid regex"))
}

/// The four contact form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    /// All fields in form order.
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    /// The field's name as it appears in markup (`name` attribute).
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }
}

/// One submission's worth of field values.
///
/// Built from the view at submit time and dropped when the cycle completes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl FormInput {
    /// Copy with every field whitespace-trimmed.
    pub fn trimmed(&self) -> FormInput {
        FormInput {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            subject: self.subject.trim().to_string(),
            message: self.message.trim().to_string(),
        }
    }

    /// The value of a single field.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }
}

/// Outcome of whole-form validation: one message per failing field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    pub errors: BTreeMap<Field, String>,
}

impl ValidationResult {
    /// Valid iff no field produced an error.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// The error message for a field, if it failed.
    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }
}

fn trimmed_len(raw: &str) -> usize {
    raw.trim().chars().count()
}

/// Validate the sender name (at least 4 characters after trimming).
pub fn validate_name(raw: &str) -> Option<String> {
    if trimmed_len(raw) < NAME_MIN_CHARS {
        Some(format!(
            "Name must be at least {} characters long",
            NAME_MIN_CHARS
        ))
    } else {
        None
    }
}

/// Validate the sender email address (local@domain.tld shape).
pub fn validate_email(raw: &str) -> Option<String> {
    if email_regex().is_match(raw.trim()) {
        None
    } else {
        Some("Please enter a valid email address".to_string())
    }
}

/// Validate the subject line (at least 4 characters after trimming).
pub fn validate_subject(raw: &str) -> Option<String> {
    if trimmed_len(raw) < SUBJECT_MIN_CHARS {
        Some(format!(
            "Subject must be at least {} characters long",
            SUBJECT_MIN_CHARS
        ))
    } else {
        None
    }
}

/// Validate the message body (at least 10 characters after trimming).
pub fn validate_message(raw: &str) -> Option<String> {
    if trimmed_len(raw) < MESSAGE_MIN_CHARS {
        Some(format!(
            "Message must be at least {} characters long",
            MESSAGE_MIN_CHARS
        ))
    } else {
        None
    }
}

/// Run the single-field rule for `field` against a raw value.
///
/// Used by the blur handler for live validation.
pub fn validate_field(field: Field, raw: &str) -> Option<String> {
    match field {
        Field::Name => validate_name(raw),
        Field::Email => validate_email(raw),
        Field::Subject => validate_subject(raw),
        Field::Message => validate_message(raw),
    }
}

/// Run all four field rules and collect the failures.
///
/// The result is invalid iff at least one field fails, and the error map
/// contains exactly the failing fields.
pub fn validate_form(input: &FormInput) -> ValidationResult {
    let mut result = ValidationResult::default();

    for field in Field::ALL {
        if let Some(message) = validate_field(field, input.get(field)) {
            result.errors.insert(field, message);
        }
    }

    result
}
