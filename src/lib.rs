pub mod config;
pub mod error;

// GitHub API access
pub mod github;

// Feature extraction, scoring and roadmap
pub mod analysis;

// HTTP surface
pub mod api;
pub mod web;

pub mod cli;

// Re-exports
pub use analysis::{AnalysisReport, Analyzer, RepositoryFeatures, Score, Tier};
pub use config::Settings;
pub use error::{Error, Result};
