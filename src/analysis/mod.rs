// Repository analysis: fetch, extract features, score, build a roadmap

pub mod features;
pub mod roadmap;
pub mod scoring;

pub use features::RepositoryFeatures;
pub use roadmap::roadmap;
pub use scoring::{score, Score, Tier};

use crate::error::Result;
use crate::github::{parse_repository_url, GitHubClient, GitHubConfig, RepositoryInfo};
use serde::Serialize;
use tracing::{debug, info};

/// Everything produced by one analysis
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub repository: RepositoryInfo,
    pub features: RepositoryFeatures,
    pub score: u32,
    pub tier: Tier,
    pub summary: String,
    pub roadmap: Vec<String>,
}

impl AnalysisReport {
    /// Score and plan an already extracted feature record
    pub fn build(repository: RepositoryInfo, features: RepositoryFeatures) -> Self {
        let Score { value, tier } = score(&features);
        let roadmap = roadmap(&features);

        Self {
            repository,
            features,
            score: value,
            tier,
            summary: tier.summary().to_string(),
            roadmap,
        }
    }
}

/// Runs the analysis pipeline against the GitHub API
#[derive(Clone)]
pub struct Analyzer {
    client: GitHubClient,
}

impl Analyzer {
    pub fn new(config: GitHubConfig) -> Result<Self> {
        Ok(Self {
            client: GitHubClient::new(config)?,
        })
    }

    pub fn with_client(client: GitHubClient) -> Self {
        Self { client }
    }

    /// Parse a repository URL and extract its features
    pub async fn extract(&self, reference: &str) -> Result<RepositoryFeatures> {
        let repository = parse_repository_url(reference)?;
        self.extract_repository(&repository).await
    }

    /// Fetch contents, commits and languages, one after another
    pub async fn extract_repository(&self, repository: &RepositoryInfo) -> Result<RepositoryFeatures> {
        let RepositoryInfo { owner, repo } = repository;
        debug!("Extracting features for {}", repository);

        let contents = self.client.get_contents(owner, repo).await?;
        let commits = self.client.get_commits(owner, repo).await?;
        let languages = self.client.get_languages(owner, repo).await?;

        Ok(RepositoryFeatures::from_listings(
            &contents, &commits, &languages,
        ))
    }

    /// Full pipeline: parse, extract, score and plan
    pub async fn analyze(&self, reference: &str) -> Result<AnalysisReport> {
        let repository = parse_repository_url(reference)?;
        let features = self.extract_repository(&repository).await?;
        let report = AnalysisReport::build(repository, features);

        info!(
            "Analyzed {}: score {} ({})",
            report.repository, report.score, report.tier
        );

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_report_build() {
        let features = RepositoryFeatures {
            has_readme: true,
            has_tests: false,
            has_src_folder: true,
            commit_count: 25,
            languages: vec!["Go".to_string(), "Python".to_string()],
        };
        let repository = RepositoryInfo {
            owner: "acme".to_string(),
            repo: "widgets".to_string(),
        };

        let report = AnalysisReport::build(repository, features);
        assert_eq!(report.score, 50);
        assert_eq!(report.tier, Tier::Intermediate);
        assert_eq!(
            report.roadmap,
            vec![roadmap::WRITE_TESTS, roadmap::ADD_CI]
        );
    }

    #[tokio::test]
    async fn test_malformed_reference_rejected() {
        let analyzer = Analyzer::new(GitHubConfig::with_base_url("http://127.0.0.1:9")).unwrap();
        let result = analyzer.analyze("https://github.com/only-owner").await;
        assert!(matches!(result, Err(Error::MalformedReference(_))));
    }
}
