use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::Response,
};
use strum::VariantArray;

use crate::error::AppError;
use crate::routes::AppState;
use crate::template::Template;
use beamcast_contact::{ContactForm, FailureReason, Subject, SubmissionOutcome, mailto_fallback};

pub struct SubjectOption {
    pub label: String,
    pub selected: bool,
}

/// Dismissible message block rendered above the form. Auto-dismiss is the
/// page script's concern; the server only decides what it says.
pub struct ErrorNotice {
    pub message: String,
    pub details: Vec<String>,
    pub fallback_href: Option<String>,
}

#[derive(askama::Template)]
#[template(path = "contact.html")]
pub struct ContactTemplate {
    pub form: ContactForm,
    pub subjects: Vec<SubjectOption>,
    pub success: Option<String>,
    pub error: Option<ErrorNotice>,
    pub support_email: String,
}

impl ContactTemplate {
    fn new(state: &AppState, form: ContactForm) -> Self {
        let subjects = Subject::VARIANTS
            .iter()
            .map(|subject| SubjectOption {
                label: subject.to_string(),
                selected: subject.to_string() == form.subject,
            })
            .collect();

        Self {
            form,
            subjects,
            success: None,
            error: None,
            support_email: state.config.forms.support_email.clone(),
        }
    }
}

pub async fn page(template: Template, State(state): State<AppState>) -> Response {
    template.render(ContactTemplate::new(&state, ContactForm::default()))
}

pub async fn action(
    template: Template,
    State(state): State<AppState>,
    Form(form): Form<ContactForm>,
) -> Result<Response, AppError> {
    let outcome = state.contact.submit(&form).await?;

    let response = match outcome {
        SubmissionOutcome::Success => {
            tracing::info!(subject = %form.subject, "contact form forwarded");

            // Reset the form: the page comes back empty.
            let mut page = ContactTemplate::new(&state, ContactForm::default());
            page.success =
                Some("Thanks for reaching out! We'll get back to you within two business days.".to_owned());
            template.render(page)
        }
        SubmissionOutcome::Rejected(errors) => {
            let mut page = ContactTemplate::new(&state, form);
            page.error = Some(ErrorNotice {
                message: "Please fix the following and resubmit:".to_owned(),
                details: errors.iter().map(ToString::to_string).collect(),
                fallback_href: None,
            });
            template.render_with_status(StatusCode::UNPROCESSABLE_ENTITY, page)
        }
        SubmissionOutcome::Failure(reason) => {
            let message = match reason {
                FailureReason::Network => {
                    "Unable to send your message: a network error occurred. Please check your \
                     connection and try again."
                }
                FailureReason::Server(status) => {
                    tracing::warn!(status, "form backend returned an error");
                    "Unable to send your message: the form service rejected it. This is usually \
                     temporary."
                }
                FailureReason::Unknown => {
                    "Unable to send your message: an unexpected error occurred."
                }
            };

            let fallback_href = mailto_fallback(&form, &state.config.forms.support_email);

            let mut page = ContactTemplate::new(&state, form);
            page.error = Some(ErrorNotice {
                message: message.to_owned(),
                details: Vec::new(),
                fallback_href: Some(fallback_href),
            });
            template.render_with_status(StatusCode::BAD_GATEWAY, page)
        }
    };

    Ok(response)
}
