use std::time::Duration;

use hans_core::Submission;
use reqwest::header::CONTENT_TYPE;

use crate::{encode_submission, SubmitError, FORM_CONTENT_TYPE};

#[derive(Debug, Clone)]
pub struct SubmitSettings {
    /// Panel server root; submissions always go to its `/` path.
    pub endpoint: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for SubmitSettings {
    fn default() -> Self {
        Self {
            endpoint: "http://127.0.0.1:80/".to_string(),
            connect_timeout: Duration::from_secs(5),
            request_timeout: Duration::from_secs(10),
        }
    }
}

#[async_trait::async_trait]
pub trait Submitter: Send + Sync {
    /// Posts one submission. Returns the response status for logging only.
    async fn submit(&self, submission: &Submission) -> Result<u16, SubmitError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestSubmitter {
    client: reqwest::Client,
    target: reqwest::Url,
}

impl ReqwestSubmitter {
    pub fn new(settings: &SubmitSettings) -> Result<Self, SubmitError> {
        let target = root_target(&settings.endpoint)?;
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| SubmitError::Network(err.to_string()))?;
        Ok(Self { client, target })
    }

    pub fn target(&self) -> &reqwest::Url {
        &self.target
    }
}

#[async_trait::async_trait]
impl Submitter for ReqwestSubmitter {
    async fn submit(&self, submission: &Submission) -> Result<u16, SubmitError> {
        let response = self
            .client
            .post(self.target.clone())
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(encode_submission(submission))
            .send()
            .await
            .map_err(map_reqwest_error)?;
        // The body is never read; the panel does not consume replies.
        Ok(response.status().as_u16())
    }
}

/// Resolve the endpoint to its root path, dropping any query or fragment.
fn root_target(endpoint: &str) -> Result<reqwest::Url, SubmitError> {
    let mut url = reqwest::Url::parse(endpoint)
        .map_err(|err| SubmitError::InvalidEndpoint(err.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(SubmitError::InvalidEndpoint(format!(
            "unsupported scheme {}",
            url.scheme()
        )));
    }
    url.set_path("/");
    url.set_query(None);
    url.set_fragment(None);
    Ok(url)
}

fn map_reqwest_error(err: reqwest::Error) -> SubmitError {
    if err.is_timeout() {
        return SubmitError::Timeout(err.to_string());
    }
    SubmitError::Network(err.to_string())
}
