use crate::error::{ReviewError, Result};
use serde::Serialize;

/// Submission payload for a new analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalyzeRequest {
    pub url: String,
}

impl AnalyzeRequest {
    pub fn new(url: &str) -> Result<Self> {
        let url = url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ReviewError::InvalidUrl(format!(
                "{url}: URL must start with http:// or https://"
            )));
        }
        Ok(Self {
            url: url.to_string(),
        })
    }
}
