use crate::FieldError;

/// Why a forwarded submission did not succeed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureReason {
    /// The transport never completed: connection refused, DNS failure,
    /// or the bounded timeout elapsed.
    Network,
    /// The backend answered with a non-success status.
    Server(u16),
    /// The call failed in a way we could not classify.
    Unknown,
}

/// Result of one submit cycle. Consumed immediately by the page layer;
/// nothing is retained between cycles.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    /// Validation failed; no network call was made.
    Rejected(Vec<FieldError>),
    /// The backend accepted the submission.
    Success,
    /// The backend rejected it or was unreachable.
    Failure(FailureReason),
}
