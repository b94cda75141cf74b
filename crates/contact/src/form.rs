use serde::Deserialize;

/// A single contact form submission, captured once at submit time.
///
/// Values arrive exactly as the user typed them; trimming and shape checks
/// happen in [`crate::validate`], never here.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}
