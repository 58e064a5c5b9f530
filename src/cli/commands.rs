use crate::analysis::{AnalysisReport, Analyzer};
use crate::github::GitHubConfig;
use crate::{Error, Result};
use std::fmt::Write;

/// Analyze one repository and print the report to stdout.
///
/// Failures are returned, not printed; the caller reports them once with
/// [`format_error`].
pub async fn analyze(config: GitHubConfig, reference: &str, json: bool) -> Result<()> {
    let analyzer = Analyzer::new(config)?;
    let report = analyzer.analyze(reference).await?;

    if json {
        let body = serde_json::to_string_pretty(&report)
            .map_err(|e| Error::Internal(format!("Failed to serialize report: {e}")))?;
        println!("{body}");
    } else {
        print!("{}", format_report(&report));
    }
    Ok(())
}

/// One-line console rendering of a failed command
pub fn format_error(error: &Error) -> String {
    let message = match error {
        Error::MalformedReference(_) | Error::UpstreamUnavailable(_) => error.user_message(),
        other => other.to_string(),
    };
    format!("\x1b[31m\u{2717}\x1b[0m {message}")
}

fn check_mark(present: bool) -> &'static str {
    if present {
        "\x1b[32m\u{2713}\x1b[0m"
    } else {
        "\x1b[31m\u{2717}\x1b[0m"
    }
}

/// Human-readable rendering of a report
pub fn format_report(report: &AnalysisReport) -> String {
    let features = &report.features;
    let mut out = String::new();

    // Writing into a String cannot fail
    let _ = writeln!(out, "Repository: {}", report.repository);
    let _ = writeln!(out, "Score: {}/100 ({})", report.score, report.tier);
    let _ = writeln!(out, "Summary: {}", report.summary);
    let _ = writeln!(out);
    let _ = writeln!(out, "  {} README", check_mark(features.has_readme));
    let _ = writeln!(out, "  {} Test folder", check_mark(features.has_tests));
    let _ = writeln!(out, "  {} src folder", check_mark(features.has_src_folder));
    let _ = writeln!(out, "  Commits: {}", features.commit_count);
    if features.languages.is_empty() {
        let _ = writeln!(out, "  Languages: none detected");
    } else {
        let _ = writeln!(out, "  Languages: {}", features.languages.join(", "));
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "Roadmap:");
    for (i, step) in report.roadmap.iter().enumerate() {
        let _ = writeln!(out, "  {}. {}", i + 1, step);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::RepositoryFeatures;
    use crate::github::RepositoryInfo;

    #[test]
    fn test_format_error_uses_user_message() {
        let text = format_error(&Error::UpstreamUnavailable("repository not found".to_string()));
        assert!(text.ends_with("Could not analyze repository: repository not found"));
        assert!(!text.contains("UpstreamUnavailable"));
    }

    #[test]
    fn test_format_report() {
        let report = AnalysisReport::build(
            RepositoryInfo {
                owner: "acme".to_string(),
                repo: "widgets".to_string(),
            },
            RepositoryFeatures {
                has_readme: false,
                has_tests: false,
                has_src_folder: false,
                commit_count: 2,
                languages: vec![],
            },
        );

        let text = format_report(&report);
        assert!(text.contains("Repository: acme/widgets"));
        assert!(text.contains("Score: 0/100 (Beginner)"));
        assert!(text.contains("Languages: none detected"));
        assert!(text.contains("  1. Add a README with project overview and setup instructions"));
        assert!(text.contains("  5. Add CI/CD using GitHub Actions"));
    }
}
