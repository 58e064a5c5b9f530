use serde::{Deserialize, Deserializer, Serialize};

/// Deserialize optional string, treating empty strings as None
pub fn deserialize_optional_string<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    match opt.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => Ok(Some(s.to_string())),
    }
}

/// Analysis request parameters
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalyzeParams {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub repo: Option<String>,
}

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
}
