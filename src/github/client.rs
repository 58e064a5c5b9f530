use crate::github::{
    config::GitHubConfig,
    models::{CommitData, ContentEntry, LanguageMap},
};
use crate::{Error, Result};
use reqwest::{header, Client, StatusCode};
use tracing::{debug, error, warn};

/// GitHub API client
#[derive(Clone)]
pub struct GitHubClient {
    client: Client,
    config: GitHubConfig,
}

impl GitHubClient {
    /// Create a new GitHub client
    pub fn new(config: GitHubConfig) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_str(&config.user_agent)
                .map_err(|e| Error::Internal(format!("Invalid user agent: {e}")))?,
        );
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/vnd.github.v3+json"),
        );

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout())
            .build()
            .map_err(|e| Error::Internal(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &GitHubConfig {
        &self.config
    }

    async fn send(&self, path: &str) -> Result<reqwest::Response> {
        let url = format!("{}{}", self.config.api_base_url(), path);
        debug!("GitHub API request: GET {}", url);

        self.client
            .get(&url)
            .send()
            .await
            .map_err(transport_error)
    }

    /// Read the whole response body; a dropped connection or timeout is an error
    async fn read_body(response: reqwest::Response) -> Result<Vec<u8>> {
        response
            .bytes()
            .await
            .map(|body| body.to_vec())
            .map_err(transport_error)
    }

    /// Make a GET request to GitHub API, failing on any non-2xx status
    async fn get<T>(&self, path: &str) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = self.send(path).await?;
        let status = response.status();

        if !status.is_success() {
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read error response".to_string());
            error!("GitHub API error: {} - {}", status, error_body);

            return Err(Error::UpstreamUnavailable(describe_failure(
                status,
                upstream_message(&error_body),
            )));
        }

        let body = Self::read_body(response).await?;
        serde_json::from_slice::<T>(&body).map_err(|e| {
            error!("Failed to parse GitHub API response: {}", e);
            Error::UpstreamUnavailable("unexpected response from GitHub API".to_string())
        })
    }

    /// Top-level contents listing of the default branch
    pub async fn get_contents(&self, owner: &str, repo: &str) -> Result<Vec<ContentEntry>> {
        let path = format!("/repos/{owner}/{repo}/contents");
        self.get(&path).await
    }

    /// First page of the commit list.
    ///
    /// Only a transport failure (including one while reading the body) is an
    /// error here. Any complete answer, whatever its status, is classified by
    /// its payload shape.
    pub async fn get_commits(&self, owner: &str, repo: &str) -> Result<CommitData> {
        let path = format!("/repos/{owner}/{repo}/commits");
        let response = self.send(&path).await?;
        let status = response.status();

        let body = Self::read_body(response).await?;
        let data = match serde_json::from_slice::<serde_json::Value>(&body) {
            Ok(payload) => CommitData::from_payload(&payload),
            Err(e) => {
                debug!("Commit payload was not JSON: {}", e);
                CommitData::Degraded(None)
            }
        };

        if let CommitData::Degraded(message) = &data {
            warn!(
                "Commit list for {}/{} unavailable ({}): {}; counting 0 commits",
                owner,
                repo,
                status,
                message.as_deref().unwrap_or("non-list payload")
            );
        }

        Ok(data)
    }

    /// Language breakdown, in the order GitHub reports it
    pub async fn get_languages(&self, owner: &str, repo: &str) -> Result<LanguageMap> {
        let path = format!("/repos/{owner}/{repo}/languages");
        self.get(&path).await
    }
}

fn transport_error(e: reqwest::Error) -> Error {
    error!("GitHub API request failed: {}", e);
    if e.is_timeout() {
        Error::UpstreamUnavailable("GitHub API request timed out".to_string())
    } else {
        Error::UpstreamUnavailable("GitHub API is unreachable".to_string())
    }
}

/// `message` field of a GitHub error body, if any
fn upstream_message(body: &str) -> Option<String> {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()?
        .get("message")?
        .as_str()
        .map(str::to_string)
}

fn describe_failure(status: StatusCode, message: Option<String>) -> String {
    match (status, message) {
        // The bare "Not Found" says nothing the generic text does not
        (StatusCode::NOT_FOUND, Some(msg)) if msg != "Not Found" => msg,
        (StatusCode::NOT_FOUND, _) => "repository not found".to_string(),
        (_, Some(msg)) => msg,
        (StatusCode::FORBIDDEN | StatusCode::TOO_MANY_REQUESTS, None) => {
            "GitHub API rate limit exceeded".to_string()
        }
        (StatusCode::UNAUTHORIZED, None) => "GitHub authentication failed".to_string(),
        (_, None) => format!("GitHub API error: {status}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_failure_prefers_upstream_message() {
        assert_eq!(
            describe_failure(
                StatusCode::NOT_FOUND,
                upstream_message(r#"{"message": "This repository is empty."}"#)
            ),
            "This repository is empty."
        );
        assert_eq!(
            describe_failure(StatusCode::NOT_FOUND, upstream_message(r#"{"message": "Not Found"}"#)),
            "repository not found"
        );
        assert_eq!(
            describe_failure(StatusCode::FORBIDDEN, upstream_message("<html>")),
            "GitHub API rate limit exceeded"
        );
        assert_eq!(
            describe_failure(StatusCode::BAD_GATEWAY, None),
            "GitHub API error: 502 Bad Gateway"
        );
    }

    #[test]
    fn test_client_creation() {
        let client = GitHubClient::new(GitHubConfig::default());
        assert!(client.is_ok());
    }

    #[tokio::test]
    async fn test_unreachable_host_is_upstream_unavailable() {
        // Port 9 (discard) on localhost is not expected to accept connections
        let client = GitHubClient::new(GitHubConfig::with_base_url("http://127.0.0.1:9")).unwrap();
        let result = client.get_contents("acme", "widgets").await;
        assert!(matches!(result, Err(Error::UpstreamUnavailable(_))));
    }
}
