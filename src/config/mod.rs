use crate::error::{Error, Result};
use crate::github::GitHubConfig;

#[derive(Debug, Clone)]
pub struct Settings {
    pub server: ServerConfig,
    pub github: GitHubConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Per-client quota for the analysis routes (burst is twice this)
    pub api_rate_limit: u64,
    pub max_request_body_size: usize,
}

impl Settings {
    /// Load settings from environment variables
    pub fn from_env() -> Result<Self> {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse()
            .map_err(|_| Error::Config("Invalid PORT value".to_string()))?;

        let api_rate_limit = std::env::var("API_RATE_LIMIT")
            .unwrap_or_else(|_| "2".to_string())
            .parse()
            .map_err(|_| Error::Config("Invalid API_RATE_LIMIT value".to_string()))?;

        let max_request_body_size = std::env::var("MAX_REQUEST_BODY_SIZE")
            .unwrap_or_else(|_| "65536".to_string())
            .parse()
            .map_err(|_| Error::Config("Invalid MAX_REQUEST_BODY_SIZE value".to_string()))?;

        Ok(Settings {
            server: ServerConfig {
                host,
                port,
                api_rate_limit,
                max_request_body_size,
            },
            github: GitHubConfig::from_env()?,
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(Error::Config("Port must be non-zero".to_string()));
        }

        if self.server.api_rate_limit == 0 {
            return Err(Error::Config("API rate limit must be non-zero".to_string()));
        }

        if self.github.timeout_secs == 0 {
            return Err(Error::Config(
                "GitHub request timeout must be non-zero".to_string(),
            ));
        }

        url::Url::parse(self.github.api_base_url()).map_err(|e| {
            Error::Config(format!(
                "Invalid GITHUB_API_URL '{}': {e}",
                self.github.api_base_url
            ))
        })?;

        Ok(())
    }
}
