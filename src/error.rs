use thiserror::Error as ThisError;

/// Failures that stop an issue from being created.
///
/// A non-success HTTP status is not an error; it is reported as-is.
#[derive(Debug, ThisError)]
pub enum Error {
    /// The access token environment variable is unset or empty
    #[error("environment variable `{var}` must be set to a GitHub access token")]
    Configuration { var: &'static str },

    /// A flag was given as the last argument with nothing after it
    #[error("missing value for `{flag}`")]
    MissingFlagValue { flag: &'static str },

    /// The request could not be completed (DNS, connect, TLS, timeout)
    #[error("request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The response body was not JSON
    #[error("failed to parse response body as JSON")]
    ResponseParse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
