use crate::error::ReviewError;
use chrono::format::{Item, StrftimeItems};
use serde::Deserialize;

pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
pub const DEFAULT_HISTORY_LIMIT: usize = 5;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReviewConfig {
    pub display: Option<DisplayConfig>,
    pub history: Option<HistoryConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    pub timestamp_format: Option<String>,
    pub top_fix_limit: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HistoryConfig {
    pub limit: Option<usize>,
}

impl ReviewConfig {
    pub fn timestamp_format(&self) -> &str {
        self.display
            .as_ref()
            .and_then(|display| display.timestamp_format.as_deref())
            .unwrap_or(DEFAULT_TIMESTAMP_FORMAT)
    }

    pub fn top_fix_limit(&self) -> Option<usize> {
        self.display
            .as_ref()
            .and_then(|display| display.top_fix_limit)
    }

    pub fn history_limit(&self) -> usize {
        self.history
            .as_ref()
            .and_then(|history| history.limit)
            .unwrap_or(DEFAULT_HISTORY_LIMIT)
    }

    pub fn validate(&self) -> Result<(), ReviewError> {
        if self.top_fix_limit() == Some(0) {
            return Err(ReviewError::ConfigParse(
                "display.top_fix_limit must be at least 1".to_string(),
            ));
        }
        if self.history_limit() == 0 {
            return Err(ReviewError::ConfigParse(
                "history.limit must be at least 1".to_string(),
            ));
        }
        let format = self.timestamp_format();
        if format.trim().is_empty()
            || StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
        {
            return Err(ReviewError::ConfigParse(format!(
                "display.timestamp_format is not a valid strftime pattern: {format:?}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(toml_str: &str) -> ReviewConfig {
        toml::from_str(toml_str).expect("config should parse")
    }

    #[test]
    fn defaults_apply_when_sections_missing() {
        let cfg = parse("");
        assert_eq!(cfg.timestamp_format(), DEFAULT_TIMESTAMP_FORMAT);
        assert_eq!(cfg.top_fix_limit(), None);
        assert_eq!(cfg.history_limit(), DEFAULT_HISTORY_LIMIT);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn explicit_values_override_defaults() {
        let cfg = parse(
            r#"
[display]
timestamp_format = "%d/%m/%Y"
top_fix_limit = 3

[history]
limit = 10
"#,
        );
        assert_eq!(cfg.timestamp_format(), "%d/%m/%Y");
        assert_eq!(cfg.top_fix_limit(), Some(3));
        assert_eq!(cfg.history_limit(), 10);
    }

    #[test]
    fn validate_rejects_zero_limits() {
        let cfg = parse("[display]\ntop_fix_limit = 0\n");
        assert!(matches!(cfg.validate(), Err(ReviewError::ConfigParse(_))));

        let cfg = parse("[history]\nlimit = 0\n");
        assert!(matches!(cfg.validate(), Err(ReviewError::ConfigParse(_))));
    }

    #[test]
    fn validate_rejects_broken_timestamp_format() {
        let cfg = parse("[display]\ntimestamp_format = \"%Y %\"\n");
        assert!(matches!(cfg.validate(), Err(ReviewError::ConfigParse(_))));
    }
}
