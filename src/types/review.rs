use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;

pub type ReviewId = i64;

/// Issue category as delivered by the review service.
///
/// Variant order is the fixed display order; `Unclassified` collects every
/// label outside the known set and always sorts last.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Clarity,
    Layout,
    Navigation,
    Accessibility,
    Trust,
    #[default]
    Unclassified,
}

impl Category {
    pub const KNOWN: [Category; 5] = [
        Category::Clarity,
        Category::Layout,
        Category::Navigation,
        Category::Accessibility,
        Category::Trust,
    ];

    pub const DISPLAY_ORDER: [Category; 6] = [
        Category::Clarity,
        Category::Layout,
        Category::Navigation,
        Category::Accessibility,
        Category::Trust,
        Category::Unclassified,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Clarity => "Clarity",
            Category::Layout => "Layout",
            Category::Navigation => "Navigation",
            Category::Accessibility => "Accessibility",
            Category::Trust => "Trust",
            Category::Unclassified => "Unclassified",
        }
    }

    /// Known labels match case-insensitively; anything else is `Unclassified`.
    pub fn from_label(raw: &str) -> Self {
        let raw = raw.trim();
        Self::KNOWN
            .into_iter()
            .find(|category| category.label().eq_ignore_ascii_case(raw))
            .unwrap_or(Category::Unclassified)
    }

    /// Strict lookup used for user-supplied labels, where a typo is an error.
    pub fn parse_label(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::DISPLAY_ORDER
            .into_iter()
            .find(|category| category.label().eq_ignore_ascii_case(raw))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Option::<Value>::deserialize(deserializer)?;
        let category = value
            .as_ref()
            .and_then(Value::as_str)
            .map(Category::from_label)
            .unwrap_or_default();
        if category == Category::Unclassified {
            tracing::debug!(raw = ?value, "unrecognized issue category");
        }
        Ok(category)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Severity {
    High,
    Medium,
    Low,
    #[default]
    Unknown,
}

impl Severity {
    pub fn label(self) -> &'static str {
        match self {
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
            Severity::Unknown => "Unknown",
        }
    }

    /// Emphasis weight: High > Medium > Low > Unknown.
    pub fn rank(self) -> u8 {
        match self {
            Severity::High => 3,
            Severity::Medium => 2,
            Severity::Low => 1,
            Severity::Unknown => 0,
        }
    }

    pub fn badge(self) -> &'static str {
        match self {
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
            Severity::Unknown => "neutral",
        }
    }

    pub fn from_label(raw: &str) -> Self {
        let raw = raw.trim();
        [Severity::High, Severity::Medium, Severity::Low]
            .into_iter()
            .find(|severity| severity.label().eq_ignore_ascii_case(raw))
            .unwrap_or(Severity::Unknown)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Severity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Option::<Value>::deserialize(deserializer)?;
        let severity = value
            .as_ref()
            .and_then(Value::as_str)
            .map(Severity::from_label)
            .unwrap_or_default();
        if severity == Severity::Unknown {
            tracing::debug!(raw = ?value, "unrecognized issue severity");
        }
        Ok(severity)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Issue {
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: String,
    #[serde(default)]
    pub category: Category,
    #[serde(default)]
    pub severity: Severity,
    #[serde(default, deserialize_with = "lenient_text")]
    pub why: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub proof: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub suggested_fix: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TopFix {
    #[serde(default, deserialize_with = "lenient_text")]
    pub issue_title: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub before: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub after: String,
}

/// One analysis report, immutable once received.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReviewRecord {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: ReviewId,
    #[serde(default, deserialize_with = "lenient_text")]
    pub url: String,
    #[serde(default, deserialize_with = "lenient_score")]
    pub score: f64,
    #[serde(default, deserialize_with = "lenient_list")]
    pub issues: Vec<Issue>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub top_fixes: Vec<TopFix>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub created_at: String,
}

impl ReviewRecord {
    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }

    pub fn summary(&self) -> HistoryItem {
        HistoryItem {
            id: self.id,
            url: self.url.clone(),
            score: self.score,
            created_at: self.created_at.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryItem {
    pub id: ReviewId,
    pub url: String,
    pub score: f64,
    pub created_at: String,
}

pub(crate) fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(text)) => text,
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    })
}

/// Accepts integral numbers and numeric strings; anything else becomes 0.
fn lenient_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<ReviewId, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    let id = match &value {
        Some(Value::Number(number)) => number.as_i64(),
        Some(Value::String(text)) => text.trim().parse::<ReviewId>().ok(),
        _ => None,
    };
    Ok(id.unwrap_or_else(|| {
        tracing::debug!(raw = ?value, "review id missing or malformed");
        0
    }))
}

fn lenient_score<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    let score = match value {
        Some(Value::Number(number)) => number.as_f64().unwrap_or(0.0),
        Some(Value::String(text)) => text.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    };
    Ok(if score.is_finite() { score } else { 0.0 })
}

fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let Some(Value::Array(items)) = value else {
        return Ok(Vec::new());
    };
    Ok(items
        .into_iter()
        .filter_map(|item| match serde_json::from_value(item) {
            Ok(parsed) => Some(parsed),
            Err(error) => {
                tracing::warn!(%error, "dropping malformed list entry");
                None
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_well_formed_review() {
        let record = ReviewRecord::from_json(
            r#"{
                "id": 7,
                "url": "https://example.com",
                "score": 72.5,
                "issues": [{
                    "title": "Vague hero copy",
                    "category": "Clarity",
                    "severity": "High",
                    "why": "Visitors cannot tell what the product does.",
                    "proof": "<h1>Welcome</h1>",
                    "suggested_fix": "State the value proposition."
                }],
                "top_fixes": [{"issue_title": "Vague hero copy", "before": "Welcome", "after": "Ship faster"}],
                "created_at": "2025-03-01T10:00:00Z"
            }"#,
        )
        .expect("record should parse");

        assert_eq!(record.id, 7);
        assert_eq!(record.issues[0].category, Category::Clarity);
        assert_eq!(record.issues[0].severity, Severity::High);
        assert_eq!(record.top_fixes[0].after, "Ship faster");
    }

    #[test]
    fn unknown_labels_degrade_to_fallback_variants() {
        let issue: Issue = serde_json::from_str(
            r#"{"title": "t", "category": "Performance", "severity": "Critical"}"#,
        )
        .expect("issue should parse");
        assert_eq!(issue.category, Category::Unclassified);
        assert_eq!(issue.severity, Severity::Unknown);
        assert_eq!(issue.why, "");
    }

    #[test]
    fn non_string_and_null_labels_do_not_fail() {
        let issue: Issue =
            serde_json::from_str(r#"{"title": null, "category": 3, "severity": null}"#)
                .expect("issue should parse");
        assert_eq!(issue.title, "");
        assert_eq!(issue.category, Category::Unclassified);
        assert_eq!(issue.severity, Severity::Unknown);
    }

    #[test]
    fn labels_match_case_insensitively() {
        assert_eq!(Category::from_label(" layout "), Category::Layout);
        assert_eq!(Severity::from_label("medium"), Severity::Medium);
        assert_eq!(Category::parse_label("bogus"), None);
        assert_eq!(
            Category::parse_label("unclassified"),
            Some(Category::Unclassified)
        );
    }

    #[test]
    fn missing_lists_and_bad_score_default() {
        let record = ReviewRecord::from_json(r#"{"id": 1, "score": "n/a", "issues": null}"#)
            .expect("record should parse");
        assert_eq!(record.score, 0.0);
        assert!(record.issues.is_empty());
        assert!(record.top_fixes.is_empty());
    }

    #[test]
    fn id_accepts_numeric_strings_and_defaults_when_absent() {
        let record = ReviewRecord::from_json(r#"{"id": " 42 ", "url": "https://a.example"}"#)
            .expect("string id should parse");
        assert_eq!(record.id, 42);

        let record = ReviewRecord::from_json(r#"{"url": "https://a.example", "score": 50}"#)
            .expect("record without id should parse");
        assert_eq!(record.id, 0);
        assert_eq!(record.url, "https://a.example");

        let record = ReviewRecord::from_json(r#"{"id": "abc"}"#).expect("bad id should parse");
        assert_eq!(record.id, 0);
    }

    #[test]
    fn malformed_list_entries_are_dropped() {
        let record = ReviewRecord::from_json(
            r#"{"id": 1, "issues": [{"title": "ok"}, "garbage", 12]}"#,
        )
        .expect("record should parse");
        assert_eq!(record.issues.len(), 1);
        assert_eq!(record.issues[0].title, "ok");
    }

    #[test]
    fn severity_rank_orders_emphasis() {
        assert!(Severity::High.rank() > Severity::Medium.rank());
        assert!(Severity::Medium.rank() > Severity::Low.rank());
        assert!(Severity::Low.rank() > Severity::Unknown.rank());
        assert_eq!(Severity::Unknown.badge(), "neutral");
    }
}
