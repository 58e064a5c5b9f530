use crate::github::models::{CommitData, ContentEntry, LanguageMap};
use serde::Serialize;

/// Fixed-shape summary of a repository, built once per analysis
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepositoryFeatures {
    pub has_readme: bool,
    pub has_tests: bool,
    pub has_src_folder: bool,
    pub commit_count: usize,
    /// Distinct language names in the order GitHub reported them
    pub languages: Vec<String>,
}

impl RepositoryFeatures {
    /// Reduce the three raw datasets to a feature record
    pub fn from_listings(
        contents: &[ContentEntry],
        commits: &CommitData,
        languages: &LanguageMap,
    ) -> Self {
        let (dirs, files): (Vec<&ContentEntry>, Vec<&ContentEntry>) = contents
            .iter()
            .filter(|entry| entry.is_dir() || entry.is_file())
            .partition(|entry| entry.is_dir());

        let has_readme = files
            .iter()
            .any(|f| f.name.to_lowercase().contains("readme"));
        let has_tests = dirs.iter().any(|d| d.name.to_lowercase().contains("test"));
        let has_src_folder = dirs.iter().any(|d| d.name == "src");

        let mut names: Vec<String> = Vec::with_capacity(languages.len());
        for name in languages.keys() {
            if !names.contains(name) {
                names.push(name.clone());
            }
        }

        Self {
            has_readme,
            has_tests,
            has_src_folder,
            commit_count: commits.count(),
            languages: names,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::models::EntryType;

    fn entry(name: &str, entry_type: EntryType) -> ContentEntry {
        ContentEntry {
            name: name.to_string(),
            entry_type,
        }
    }

    fn languages(json: &str) -> LanguageMap {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_readme_src_and_languages() {
        let contents = vec![
            entry("README.md", EntryType::File),
            entry("src", EntryType::Dir),
        ];
        let features = RepositoryFeatures::from_listings(
            &contents,
            &CommitData::Listed(25),
            &languages(r#"{"Go": 100, "Python": 50}"#),
        );

        assert!(features.has_readme);
        assert!(features.has_src_folder);
        assert!(!features.has_tests);
        assert_eq!(features.commit_count, 25);
        assert_eq!(features.languages, vec!["Go", "Python"]);
    }

    #[test]
    fn test_readme_must_be_a_file() {
        let contents = vec![entry("readme-assets", EntryType::Dir)];
        let features =
            RepositoryFeatures::from_listings(&contents, &CommitData::Listed(0), &LanguageMap::new());
        assert!(!features.has_readme);
    }

    #[test]
    fn test_tests_must_be_a_directory() {
        let contents = vec![entry("test_main.py", EntryType::File)];
        let features =
            RepositoryFeatures::from_listings(&contents, &CommitData::Listed(0), &LanguageMap::new());
        assert!(!features.has_tests);

        let contents = vec![entry("IntegrationTests", EntryType::Dir)];
        let features =
            RepositoryFeatures::from_listings(&contents, &CommitData::Listed(0), &LanguageMap::new());
        assert!(features.has_tests);
    }

    #[test]
    fn test_src_is_exact_match() {
        for name in ["Src", "source", "src2"] {
            let contents = vec![entry(name, EntryType::Dir)];
            let features = RepositoryFeatures::from_listings(
                &contents,
                &CommitData::Listed(0),
                &LanguageMap::new(),
            );
            assert!(!features.has_src_folder, "{name} should not count as src");
        }
    }

    #[test]
    fn test_symlinks_and_submodules_ignored() {
        let contents = vec![
            entry("README", EntryType::Symlink),
            entry("src", EntryType::Submodule),
            entry("tests", EntryType::Other),
        ];
        let features =
            RepositoryFeatures::from_listings(&contents, &CommitData::Listed(3), &LanguageMap::new());
        assert!(!features.has_readme);
        assert!(!features.has_src_folder);
        assert!(!features.has_tests);
    }

    #[test]
    fn test_degraded_commits_count_zero() {
        let features = RepositoryFeatures::from_listings(
            &[],
            &CommitData::Degraded(Some("Git Repository is empty.".to_string())),
            &LanguageMap::new(),
        );
        assert_eq!(features.commit_count, 0);
        assert!(features.languages.is_empty());
    }
}
