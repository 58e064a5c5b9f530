use crate::analysis::features::RepositoryFeatures;

pub const ADD_README: &str = "Add a README with project overview and setup instructions";
pub const WRITE_TESTS: &str = "Write unit tests for core features";
pub const ORGANIZE_SRC: &str = "Organize code into a src folder";
pub const COMMIT_REGULARLY: &str = "Commit code regularly with meaningful messages";
pub const ADD_CI: &str = "Add CI/CD using GitHub Actions";

/// Below this many commits the history is considered sparse
const REGULAR_COMMIT_COUNT: usize = 10;

/// Ordered improvement suggestions: one per unmet condition, then CI/CD
pub fn roadmap(features: &RepositoryFeatures) -> Vec<String> {
    let checks = [
        (!features.has_readme, ADD_README),
        (!features.has_tests, WRITE_TESTS),
        (!features.has_src_folder, ORGANIZE_SRC),
        (features.commit_count < REGULAR_COMMIT_COUNT, COMMIT_REGULARLY),
    ];

    checks
        .into_iter()
        .filter(|(unmet, _)| *unmet)
        .map(|(_, step)| step)
        .chain(std::iter::once(ADD_CI))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn features(readme: bool, tests: bool, src: bool, commits: usize) -> RepositoryFeatures {
        RepositoryFeatures {
            has_readme: readme,
            has_tests: tests,
            has_src_folder: src,
            commit_count: commits,
            languages: vec![],
        }
    }

    #[test]
    fn test_example_repository_roadmap() {
        let steps = roadmap(&features(true, false, true, 25));
        assert_eq!(steps, vec![WRITE_TESTS, ADD_CI]);
    }

    #[test]
    fn test_everything_missing_keeps_order() {
        let steps = roadmap(&features(false, false, false, 0));
        assert_eq!(
            steps,
            vec![ADD_README, WRITE_TESTS, ORGANIZE_SRC, COMMIT_REGULARLY, ADD_CI]
        );
    }

    #[test]
    fn test_nothing_missing_only_ci() {
        let steps = roadmap(&features(true, true, true, 10));
        assert_eq!(steps, vec![ADD_CI]);
    }

    #[test]
    fn test_commit_threshold() {
        assert!(roadmap(&features(true, true, true, 9)).contains(&COMMIT_REGULARLY.to_string()));
        assert!(!roadmap(&features(true, true, true, 10)).contains(&COMMIT_REGULARLY.to_string()));
    }

    #[test]
    fn test_length_and_last_element() {
        for mask in 0..8u8 {
            for commits in [0, 9, 10, 50] {
                let f = features(mask & 1 != 0, mask & 2 != 0, mask & 4 != 0, commits);
                let unmet = [!f.has_readme, !f.has_tests, !f.has_src_folder, commits < 10]
                    .iter()
                    .filter(|u| **u)
                    .count();
                let steps = roadmap(&f);
                assert_eq!(steps.len(), unmet + 1);
                assert_eq!(steps.last().map(String::as_str), Some(ADD_CI));
            }
        }
    }
}
