use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::ContactForm;

/// `local@domain.tld` where no part contains whitespace or a second `@`.
static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// One rule violation on a submitted form.
///
/// The `Display` text is what the user sees; keep it in sync with the form
/// labels on the contact page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Name is required")]
    NameRequired,
    #[error("Email is required")]
    EmailRequired,
    #[error("Please enter a valid email address")]
    EmailFormat,
    #[error("Please select a subject")]
    SubjectRequired,
    #[error("Message is required")]
    MessageRequired,
    #[error("Message must be at least 10 characters long")]
    MessageTooShort,
}

/// Checks every field of `form` and collects all violations in field order:
/// name, email, subject, message.
///
/// Each rule is evaluated independently; a failing name never hides a bad
/// email. An empty result means the form is valid. The email shape check
/// runs on the raw value, so surrounding whitespace fails it.
pub fn validate(form: &ContactForm) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if form.name.trim().is_empty() {
        errors.push(FieldError::NameRequired);
    }

    if form.email.trim().is_empty() {
        errors.push(FieldError::EmailRequired);
    } else if !EMAIL_SHAPE.is_match(&form.email) {
        errors.push(FieldError::EmailFormat);
    }

    // The subject comes from a select control, so no trimming.
    if form.subject.is_empty() {
        errors.push(FieldError::SubjectRequired);
    }

    let message = form.message.trim();
    if message.is_empty() {
        errors.push(FieldError::MessageRequired);
    } else if message.chars().count() < 10 {
        errors.push(FieldError::MessageTooShort);
    }

    errors
}
