use super::review::lenient_text;
use serde::{Deserialize, Serialize};

/// Health snapshot reported by the review service, one entry per dependency.
///
/// Each value is `"ok"` when healthy and an error description otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatusReport {
    #[serde(default, deserialize_with = "lenient_text")]
    pub backend: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub database: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub llm: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub scraper: String,
}

impl StatusReport {
    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }
}
