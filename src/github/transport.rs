use crate::error::{Error, Result};
use std::time::Duration;

const USER_AGENT: &str = "ask-codex-cli";
const ACCEPT: &str = "application/vnd.github+json";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// A fully built POST request, ready to be put on the wire
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedRequest {
    pub url: String,
    /// Value of the `Authorization` header
    pub authorization: String,
    /// JSON request body
    pub body: String,
}

/// Status and body of an HTTP response
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// Sends prepared requests to the issue tracker
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// Send `request` and return the response whatever its status
    async fn send(&self, request: &PreparedRequest) -> Result<RawResponse>;
}

/// [`Transport`] backed by a `reqwest` client
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|source| Error::Transport {
                url: String::new(),
                source,
            })?;
        Ok(ReqwestTransport { client })
    }
}

impl Transport for ReqwestTransport {
    async fn send(&self, request: &PreparedRequest) -> Result<RawResponse> {
        let transport_error = |source| Error::Transport {
            url: request.url.clone(),
            source,
        };

        let response = self
            .client
            .post(&request.url)
            .header("Authorization", &request.authorization)
            .header("Accept", ACCEPT)
            .header("User-Agent", USER_AGENT)
            .header("Content-Type", "application/json")
            .body(request.body.clone())
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(transport_error)?;
        Ok(RawResponse { status, body })
    }
}
