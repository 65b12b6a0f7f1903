use crate::error::{Error, Result};
use std::fmt;

/// Environment variable holding the GitHub personal access token.
pub const TOKEN_ENV_VAR: &str = "CLAUDE_PAT";
/// Base URL of the GitHub REST API.
pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";
/// Repository owner issues are filed against, fixed at build time.
pub const DEFAULT_OWNER: &str = env!("ASK_CODEX_OWNER");
/// Repository name issues are filed against, fixed at build time.
pub const DEFAULT_REPO: &str = env!("ASK_CODEX_REPO");

/// The repository that receives new issues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub owner: String,
    pub repo: String,
}

impl Target {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Target {
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    /// Returns the "create an issue" endpoint for this repository.
    pub fn issues_url(&self, api_base_url: &str) -> String {
        format!(
            "{}/repos/{}/{}/issues",
            api_base_url.trim_end_matches('/'),
            self.owner,
            self.repo
        )
    }
}

impl Default for Target {
    fn default() -> Self {
        Target::new(DEFAULT_OWNER, DEFAULT_REPO)
    }
}

/// Everything needed to talk to the issue tracker, resolved once at startup.
#[derive(Clone)]
pub struct Config {
    pub token: String,
    pub target: Target,
    pub api_base_url: String,
}

impl Config {
    /// Loads the configuration from the process environment.
    ///
    /// Fails with [`Error::Configuration`] if the token variable is unset or empty.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads the configuration using `lookup` to resolve environment variables.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = lookup(TOKEN_ENV_VAR)
            .filter(|token| !token.is_empty())
            .ok_or(Error::Configuration { var: TOKEN_ENV_VAR })?;

        Ok(Config {
            token,
            target: Target::default(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        })
    }

    pub fn with_api_base_url(mut self, api_base_url: impl Into<String>) -> Self {
        self.api_base_url = api_base_url.into();
        self
    }

    pub fn with_target(mut self, target: Target) -> Self {
        self.target = target;
        self
    }

    pub fn issues_url(&self) -> String {
        self.target.issues_url(&self.api_base_url)
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("token", &"<redacted>")
            .field("target", &self.target)
            .field("api_base_url", &self.api_base_url)
            .finish()
    }
}
