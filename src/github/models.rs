use serde::{Deserialize, Serialize};

/// Kind of an entry in a contents listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    File,
    Dir,
    Symlink,
    Submodule,
    #[serde(other)]
    Other,
}

/// Entry of the top-level contents listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub entry_type: EntryType,
}

impl ContentEntry {
    pub fn is_dir(&self) -> bool {
        self.entry_type == EntryType::Dir
    }

    pub fn is_file(&self) -> bool {
        self.entry_type == EntryType::File
    }
}

/// Outcome of reading the commit list.
///
/// The commits endpoint answers with an error object instead of an array
/// for empty repositories and some failures. That payload is kept as
/// `Degraded` and counts as zero commits rather than failing the analysis.
#[derive(Debug, Clone, PartialEq)]
pub enum CommitData {
    /// Number of commits on the first page
    Listed(usize),
    /// Payload was not a list; carries the upstream message when there is one
    Degraded(Option<String>),
}

impl CommitData {
    /// Classify a raw commits payload
    pub fn from_payload(payload: &serde_json::Value) -> Self {
        match payload {
            serde_json::Value::Array(items) => CommitData::Listed(items.len()),
            other => CommitData::Degraded(
                other
                    .get("message")
                    .and_then(|m| m.as_str())
                    .map(str::to_string),
            ),
        }
    }

    pub fn count(&self) -> usize {
        match self {
            CommitData::Listed(n) => *n,
            CommitData::Degraded(_) => 0,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, CommitData::Degraded(_))
    }
}

/// Language breakdown: language name to bytes of code, in upstream order
pub type LanguageMap = serde_json::Map<String, serde_json::Value>;
