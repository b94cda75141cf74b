mod client;
mod coordinator;
mod error;
mod form;
mod mailto;
mod outcome;
mod subject;
mod validate;

pub use client::FormsClient;
pub use coordinator::Coordinator;
pub use error::ContactError;
pub use form::ContactForm;
pub use mailto::mailto_fallback;
pub use outcome::{FailureReason, SubmissionOutcome};
pub use subject::Subject;
pub use validate::{FieldError, validate};

pub type Result<T> = std::result::Result<T, ContactError>;
