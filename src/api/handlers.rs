use axum::{
    extract::{Query, State},
    Json,
};
use tracing::debug;

use crate::{
    analysis::{AnalysisReport, Analyzer},
    api::models::*,
    config::Settings,
    Error, Result,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub analyzer: Analyzer,
    pub settings: Settings,
}

/// Pull the repository reference out of the query, rejecting a missing one
pub(crate) fn require_repo(params: AnalyzeParams) -> Result<String> {
    params.repo.ok_or_else(|| {
        Error::MalformedReference("a repository URL is required (?repo=...)".to_string())
    })
}

/// GET /api/analyze - Analyze a repository and return the report as JSON
pub async fn analyze_repository(
    State(state): State<AppState>,
    Query(params): Query<AnalyzeParams>,
) -> Result<Json<AnalysisReport>> {
    debug!("Analyze request: {:?}", params);

    let reference = require_repo(params)?;
    let report = state.analyzer.analyze(&reference).await?;

    Ok(Json(report))
}

/// GET /health - Health check endpoint
pub async fn health_check() -> Result<Json<HealthResponse>> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
    }))
}
