use std::time::Duration;

use url::Url;

use crate::{ContactError, ContactForm};

/// Thin wrapper around the form-backend endpoint.
///
/// The backend speaks the static-host form protocol: one urlencoded POST to
/// the site root, with a constant `form-name` key identifying the form.
#[derive(Debug, Clone)]
pub struct FormsClient {
    http: reqwest::Client,
    endpoint: Url,
    form_name: String,
}

impl FormsClient {
    /// Builds a client for `endpoint` with a bounded request timeout.
    ///
    /// The reference behavior had no timeout at all and could hang a
    /// submission forever; a bound here is the only deviation.
    pub fn new(
        endpoint: &str,
        form_name: impl Into<String>,
        timeout: Duration,
    ) -> crate::Result<Self> {
        let endpoint = Url::parse(endpoint).map_err(|source| ContactError::Endpoint {
            url: endpoint.to_owned(),
            source,
        })?;

        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            endpoint,
            form_name: form_name.into(),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Issues the single POST for one submission cycle. Key order matches
    /// the backend contract: `form-name`, then the field values.
    pub(crate) async fn post(
        &self,
        form: &ContactForm,
    ) -> std::result::Result<reqwest::Response, reqwest::Error> {
        self.http
            .post(self.endpoint.clone())
            .form(&[
                ("form-name", self.form_name.as_str()),
                ("name", &form.name),
                ("email", &form.email),
                ("subject", &form.subject),
                ("message", &form.message),
            ])
            .send()
            .await
    }
}
