use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Malformed repository reference: {0}")]
    MalformedReference(String),

    #[error("Analysis unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Stable, machine-readable label for the error kind
    pub fn kind(&self) -> &'static str {
        match self {
            Error::MalformedReference(_) => "malformed_reference",
            Error::UpstreamUnavailable(_) => "upstream_unavailable",
            Error::Template(_) => "template",
            Error::Io(_) => "io",
            Error::Config(_) => "config",
            Error::Internal(_) => "internal",
        }
    }

    /// HTTP status a caller should see for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::MalformedReference(_) => StatusCode::BAD_REQUEST,
            Error::UpstreamUnavailable(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message suitable for showing to an end user
    pub fn user_message(&self) -> String {
        match self {
            Error::MalformedReference(msg) => format!("Invalid repository URL: {msg}"),
            Error::UpstreamUnavailable(msg) => format!("Could not analyze repository: {msg}"),
            _ => "Internal server error".to_string(),
        }
    }

    /// Get a sanitized error message safe for logging
    /// Filters out potentially sensitive information
    pub fn log_safe(&self) -> String {
        match self {
            Error::Internal(msg) => {
                let lower = msg.to_lowercase();
                if lower.contains("password") || lower.contains("secret") || lower.contains("token")
                {
                    "Internal error (details redacted)".to_string()
                } else {
                    format!("Internal error: {msg}")
                }
            }

            Error::MalformedReference(msg) => format!("Malformed repository reference: {msg}"),
            Error::UpstreamUnavailable(msg) => format!("Upstream unavailable: {msg}"),
            Error::Template(_) => "Template render failed".to_string(),
            Error::Io(_) => "File system operation failed".to_string(),
            Error::Config(msg) => format!("Configuration error: {msg}"),
        }
    }
}

// Implement IntoResponse for API error handling
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("Request error: {}", self.log_safe());
        } else {
            tracing::warn!("Request rejected: {}", self.log_safe());
        }

        let body = Json(json!({
            "error": self.user_message(),
            "kind": self.kind(),
        }));

        (status, body).into_response()
    }
}
