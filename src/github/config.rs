use crate::{Error, Result};
use std::env;
use std::time::Duration;

const DEFAULT_API_BASE_URL: &str = "https://api.github.com";

/// GitHub API client configuration
#[derive(Debug, Clone)]
pub struct GitHubConfig {
    /// Base URL of the REST API (overridable for GitHub Enterprise or tests)
    pub api_base_url: String,

    /// Per-request timeout in seconds. Requests are never retried.
    pub timeout_secs: u64,

    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl GitHubConfig {
    /// Create a new GitHubConfig from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; unset or blank values keep the defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();
        let value = |key: &str| lookup(key).filter(|s| !s.trim().is_empty());

        let timeout_secs = match value("GITHUB_TIMEOUT_SECONDS") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| Error::Config("Invalid GITHUB_TIMEOUT_SECONDS value".to_string()))?,
            None => defaults.timeout_secs,
        };

        Ok(Self {
            api_base_url: value("GITHUB_API_URL").unwrap_or(defaults.api_base_url),
            timeout_secs,
            user_agent: defaults.user_agent,
        })
    }

    /// Configuration pointing at an arbitrary API base URL
    pub fn with_base_url(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            ..Self::default()
        }
    }

    /// Get the base API URL without a trailing slash
    pub fn api_base_url(&self) -> &str {
        self.api_base_url.trim_end_matches('/')
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout_secs: 30,
            user_agent: format!("GitGrade/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}
