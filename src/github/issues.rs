use crate::config::Config;
use crate::error::Result;
use crate::github::transport::{PreparedRequest, RawResponse, Transport};
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// Label attached to every issue this tool creates.
pub const ASK_CODEX_LABEL: &str = "ask-codex";

/// Body of the GitHub "create an issue" request.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct IssueRequest {
    pub title: String,
    pub body: String,
    pub labels: Vec<String>,
}

impl IssueRequest {
    pub fn new(title: &str, body: &str) -> Self {
        IssueRequest {
            title: title.to_string(),
            body: body.to_string(),
            labels: vec![ASK_CODEX_LABEL.to_string()],
        }
    }
}

/// Outcome of an issue creation call, reported whatever the status.
#[derive(Debug, Clone, PartialEq)]
pub struct IssueResult {
    pub status: u16,
    /// Web URL of the created issue, absent on error payloads
    pub url: Option<String>,
}

impl IssueResult {
    /// Interprets a raw response.
    ///
    /// The body must be JSON, but need not be an object: the URL is taken from
    /// a string `html_url` field when there is one and is `None` otherwise.
    pub fn from_response(response: &RawResponse) -> Result<Self> {
        let payload: Value = serde_json::from_str(&response.body)?;
        let url = payload
            .get("html_url")
            .and_then(Value::as_str)
            .map(str::to_string);

        Ok(IssueResult {
            status: response.status,
            url,
        })
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

impl fmt::Display for IssueResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.url {
            Some(url) => write!(f, "Status: {} {}", self.status, url),
            None => write!(f, "Status: {} None", self.status),
        }
    }
}

/// Value of the `Authorization` header for a personal access token.
pub fn authorization_header(token: &str) -> String {
    format!("token {token}")
}

/// Creates issues in the configured repository.
pub struct IssueCreator<'a, T> {
    config: &'a Config,
    transport: T,
}

impl<'a, T: Transport> IssueCreator<'a, T> {
    pub fn new(config: &'a Config, transport: T) -> Self {
        IssueCreator { config, transport }
    }

    /// Builds the request that [`create_issue`](Self::create_issue) sends.
    pub fn prepare(&self, title: &str, body: &str) -> Result<PreparedRequest> {
        let request = IssueRequest::new(title, body);
        Ok(PreparedRequest {
            url: self.config.issues_url(),
            authorization: authorization_header(&self.config.token),
            body: serde_json::to_string(&request)?,
        })
    }

    /// Sends exactly one create request for `title` and `body`.
    ///
    /// No retry is attempted. A non-2xx status is returned in the result, not
    /// as an error.
    pub async fn create_issue(&self, title: &str, body: &str) -> Result<IssueResult> {
        let request = self.prepare(title, body)?;
        tracing::debug!(url = %request.url, "creating issue");

        let response = self.transport.send(&request).await?;
        tracing::debug!(status = response.status, "received response");

        IssueResult::from_response(&response)
    }
}
