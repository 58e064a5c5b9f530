use askama::Template;
use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse, Response},
};

use crate::{
    analysis::AnalysisReport,
    api::handlers::{require_repo, AppState},
    api::models::AnalyzeParams,
    error::Error,
    Result,
};

/// Input form template
#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    repo: String,
}

/// Analysis result template
#[derive(Template)]
#[template(path = "result.html")]
struct ResultTemplate {
    repository: String,
    score: u32,
    tier: String,
    summary: String,
    has_readme: bool,
    has_tests: bool,
    has_src_folder: bool,
    commit_count: usize,
    languages: String,
    roadmap: Vec<String>,
}

impl From<AnalysisReport> for ResultTemplate {
    fn from(report: AnalysisReport) -> Self {
        Self {
            repository: report.repository.to_string(),
            score: report.score,
            tier: report.tier.to_string(),
            summary: report.summary,
            has_readme: report.features.has_readme,
            has_tests: report.features.has_tests,
            has_src_folder: report.features.has_src_folder,
            commit_count: report.features.commit_count,
            languages: report.features.languages.join(", "),
            roadmap: report.roadmap,
        }
    }
}

/// Analysis failure template
#[derive(Template)]
#[template(path = "error.html")]
struct ErrorTemplate {
    message: String,
}

/// GET / - Input form
pub async fn index(Query(params): Query<AnalyzeParams>) -> Result<impl IntoResponse> {
    let template = IndexTemplate {
        repo: params.repo.unwrap_or_default(),
    };
    Ok(Html(template.render()?))
}

/// GET /analyze - Analyze a repository and render the result page
pub async fn analyze_page(
    State(state): State<AppState>,
    Query(params): Query<AnalyzeParams>,
) -> Result<Response> {
    let outcome = match require_repo(params) {
        Ok(reference) => state.analyzer.analyze(&reference).await,
        Err(e) => Err(e),
    };

    match outcome {
        Ok(report) => {
            let template = ResultTemplate::from(report);
            Ok(Html(template.render()?).into_response())
        }
        Err(e @ (Error::MalformedReference(_) | Error::UpstreamUnavailable(_))) => {
            tracing::warn!("Analysis failed: {}", e.log_safe());
            let template = ErrorTemplate {
                message: e.user_message(),
            };
            Ok((e.status_code(), Html(template.render()?)).into_response())
        }
        Err(e) => Err(e),
    }
}
