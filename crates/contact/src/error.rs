use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContactError {
    /// A submission is already being forwarded; the new attempt was not
    /// started. The caller may simply ask the user to wait.
    #[error("a submission is already in flight")]
    InFlight,

    #[error("invalid forms endpoint `{url}`: {source}")]
    Endpoint {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("failed to build forms HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}
