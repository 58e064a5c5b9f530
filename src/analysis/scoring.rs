use crate::analysis::features::RepositoryFeatures;
use serde::Serialize;
use std::fmt;

const README_POINTS: u32 = 15;
const TESTS_POINTS: u32 = 15;
const SRC_POINTS: u32 = 10;
const MANY_COMMITS_POINTS: u32 = 15;
const SOME_COMMITS_POINTS: u32 = 10;
const POINTS_PER_LANGUAGE: u32 = 5;
const MAX_LANGUAGE_POINTS: u32 = 15;

/// Highest score the weights above can produce
pub const MAX_SCORE: u32 =
    README_POINTS + TESTS_POINTS + SRC_POINTS + MANY_COMMITS_POINTS + MAX_LANGUAGE_POINTS;

/// Qualitative label derived from the numeric score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Tier {
    Beginner,
    Intermediate,
    Advanced,
}

impl Tier {
    pub const INTERMEDIATE_THRESHOLD: u32 = 50;
    /// Above `MAX_SCORE`, so `score` never yields `Advanced`.
    pub const ADVANCED_THRESHOLD: u32 = 80;

    pub fn from_score(score: u32) -> Self {
        if score >= Self::ADVANCED_THRESHOLD {
            Tier::Advanced
        } else if score >= Self::INTERMEDIATE_THRESHOLD {
            Tier::Intermediate
        } else {
            Tier::Beginner
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Beginner => "Beginner",
            Tier::Intermediate => "Intermediate",
            Tier::Advanced => "Advanced",
        }
    }

    /// One-line verdict shown next to the score
    pub fn summary(&self) -> &'static str {
        match self {
            Tier::Beginner => "Early-stage project: basic structure and documentation are missing.",
            Tier::Intermediate => "Clean structure but missing some best practices.",
            Tier::Advanced => "Well-structured project following most best practices.",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Numeric score plus tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Score {
    pub value: u32,
    pub tier: Tier,
}

fn commit_points(commit_count: usize) -> u32 {
    if commit_count > 20 {
        MANY_COMMITS_POINTS
    } else if commit_count > 5 {
        SOME_COMMITS_POINTS
    } else {
        0
    }
}

fn language_points(language_count: usize) -> u32 {
    let count = u32::try_from(language_count).unwrap_or(u32::MAX);
    count.saturating_mul(POINTS_PER_LANGUAGE).min(MAX_LANGUAGE_POINTS)
}

/// Weighted sum of the feature signals
pub fn score(features: &RepositoryFeatures) -> Score {
    let mut value = 0;
    if features.has_readme {
        value += README_POINTS;
    }
    if features.has_tests {
        value += TESTS_POINTS;
    }
    if features.has_src_folder {
        value += SRC_POINTS;
    }
    value += commit_points(features.commit_count);
    value += language_points(features.languages.len());

    Score {
        value,
        tier: Tier::from_score(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn features(
        has_readme: bool,
        has_tests: bool,
        has_src_folder: bool,
        commit_count: usize,
        language_count: usize,
    ) -> RepositoryFeatures {
        RepositoryFeatures {
            has_readme,
            has_tests,
            has_src_folder,
            commit_count,
            languages: (0..language_count).map(|i| format!("Lang{i}")).collect(),
        }
    }

    #[test]
    fn test_example_repository_scores_fifty() {
        let result = score(&features(true, false, true, 25, 2));
        assert_eq!(result.value, 50);
        assert_eq!(result.tier, Tier::Intermediate);
    }

    #[test]
    fn test_empty_repository_scores_zero() {
        let result = score(&features(false, false, false, 0, 0));
        assert_eq!(result.value, 0);
        assert_eq!(result.tier, Tier::Beginner);
    }

    #[test]
    fn test_commit_bands() {
        assert_eq!(commit_points(0), 0);
        assert_eq!(commit_points(5), 0);
        assert_eq!(commit_points(6), 10);
        assert_eq!(commit_points(20), 10);
        assert_eq!(commit_points(21), 15);
        assert_eq!(commit_points(100), 15);
    }

    #[test]
    fn test_language_points_capped() {
        assert_eq!(language_points(0), 0);
        assert_eq!(language_points(1), 5);
        assert_eq!(language_points(3), 15);
        assert_eq!(language_points(12), 15);
    }

    #[test]
    fn test_score_bounded_and_never_advanced() {
        let mut highest = 0;
        for mask in 0..8u8 {
            for commits in [0, 5, 6, 10, 20, 21, 30] {
                for langs in 0..6 {
                    let f = features(mask & 1 != 0, mask & 2 != 0, mask & 4 != 0, commits, langs);
                    let result = score(&f);
                    assert!(result.value <= MAX_SCORE);
                    assert!(result.value < Tier::ADVANCED_THRESHOLD);
                    assert_ne!(result.tier, Tier::Advanced);
                    highest = highest.max(result.value);
                }
            }
        }
        assert_eq!(highest, 70);
        assert_eq!(MAX_SCORE, 70);
    }

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(Tier::from_score(0), Tier::Beginner);
        assert_eq!(Tier::from_score(49), Tier::Beginner);
        assert_eq!(Tier::from_score(50), Tier::Intermediate);
        assert_eq!(Tier::from_score(79), Tier::Intermediate);
        assert_eq!(Tier::from_score(80), Tier::Advanced);
        assert_eq!(Tier::from_score(100), Tier::Advanced);
    }

    #[test]
    fn test_tier_is_monotonic() {
        let mut previous = Tier::from_score(0);
        for value in 1..=100 {
            let tier = Tier::from_score(value);
            assert!(tier >= previous);
            previous = tier;
        }
    }
}
