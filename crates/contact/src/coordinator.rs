use std::sync::atomic::{AtomicBool, Ordering};

use crate::{ContactError, ContactForm, FailureReason, FormsClient, SubmissionOutcome, validate};

/// Runs one full submit cycle: validation, the single forward, and
/// classification of whatever came back.
///
/// At most one submission is in flight at a time; the flag guarding that is
/// the only state shared between cycles and is released on every exit path,
/// including panics, via [`InFlightGuard`].
pub struct Coordinator {
    client: FormsClient,
    in_flight: AtomicBool,
}

impl Coordinator {
    pub fn new(client: FormsClient) -> Self {
        Self {
            client,
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Submits `form`. Validation failures come back as
    /// [`SubmissionOutcome::Rejected`] without touching the network; a
    /// concurrent attempt while another is in flight fails with
    /// [`ContactError::InFlight`]. No automatic retry on failure.
    pub async fn submit(&self, form: &ContactForm) -> crate::Result<SubmissionOutcome> {
        let errors = validate(form);
        if !errors.is_empty() {
            return Ok(SubmissionOutcome::Rejected(errors));
        }

        let _guard = self.acquire()?;

        let outcome = match self.client.post(form).await {
            Ok(response) if response.status().is_success() => {
                tracing::debug!(status = response.status().as_u16(), "form forwarded");
                SubmissionOutcome::Success
            }
            Ok(response) => {
                let status = response.status().as_u16();
                tracing::warn!(status, "form backend rejected submission");
                SubmissionOutcome::Failure(FailureReason::Server(status))
            }
            Err(err) => {
                tracing::warn!(error = %err, "form submission did not complete");
                SubmissionOutcome::Failure(classify(&err))
            }
        };

        Ok(outcome)
    }

    fn acquire(&self) -> crate::Result<InFlightGuard<'_>> {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| ContactError::InFlight)?;

        Ok(InFlightGuard(&self.in_flight))
    }
}

struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

fn classify(err: &reqwest::Error) -> FailureReason {
    if err.is_connect() || err.is_timeout() || err.is_request() {
        FailureReason::Network
    } else {
        FailureReason::Unknown
    }
}
