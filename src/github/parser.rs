use crate::{Error, Result};
use serde::Serialize;
use std::fmt;

/// Parsed GitHub repository information
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepositoryInfo {
    pub owner: String,
    pub repo: String,
}

impl fmt::Display for RepositoryInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

/// Parse a GitHub repository URL
/// Accepts formats:
/// - https://github.com/owner/repo
/// - https://github.com/owner/repo/tree/main (extra segments ignored)
/// - https://github.com/owner/repo.git
/// - github.com/owner/repo
/// - owner/repo
pub fn parse_repository_url(url: &str) -> Result<RepositoryInfo> {
    let url = url.trim();

    // Drop query string and fragment
    let url = url.split(['?', '#']).next().unwrap_or_default();

    // Remove protocol and github.com if present; scheme and host are case-insensitive
    let url = strip_prefix_ignore_case(url, "https://")
        .or_else(|| strip_prefix_ignore_case(url, "http://"))
        .unwrap_or(url);
    let url = strip_prefix_ignore_case(url, "www.github.com/")
        .or_else(|| strip_prefix_ignore_case(url, "github.com/"))
        .unwrap_or(url);

    // Now we should have owner/repo or owner/repo/something
    let parts: Vec<&str> = url.split('/').collect();

    if parts.len() < 2 {
        return Err(Error::MalformedReference(
            "expected a GitHub URL of the form https://github.com/owner/repo".to_string(),
        ));
    }

    let owner = parts[0].trim();
    let repo = parts[1].trim().trim_end_matches(".git");

    if owner.is_empty() || repo.is_empty() {
        return Err(Error::MalformedReference(
            "repository owner and name cannot be empty".to_string(),
        ));
    }

    if [owner, repo].iter().any(|segment| *segment == "." || *segment == "..") {
        return Err(Error::MalformedReference(
            "repository owner and name cannot be '.' or '..'".to_string(),
        ));
    }

    // GitHub logins never contain dots, so this is some other host
    if owner.contains('.') || owner.contains(':') {
        return Err(Error::MalformedReference(format!(
            "'{owner}' is not a GitHub repository host"
        )));
    }

    Ok(RepositoryInfo {
        owner: owner.to_string(),
        repo: repo.to_string(),
    })
}

fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let head = s.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix)
        .then(|| &s[prefix.len()..])
}
