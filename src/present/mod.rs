pub mod expansion;
pub mod grouping;
pub mod score;
pub mod session;
pub mod status;

use crate::types::config::{ReviewConfig, DEFAULT_TIMESTAMP_FORMAT};
use crate::types::review::{Category, ReviewId, ReviewRecord, Severity};
use chrono::{DateTime, NaiveDateTime};
use expansion::{ExpansionKey, ExpansionStore};
use grouping::group_issues;
use score::ClassifiedScore;
use serde::Serialize;
use std::fmt::Write;

#[derive(Debug, Clone, Copy)]
pub struct ViewOptions<'a> {
    pub timestamp_format: &'a str,
    pub top_fix_limit: Option<usize>,
}

impl Default for ViewOptions<'_> {
    fn default() -> Self {
        Self {
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT,
            top_fix_limit: None,
        }
    }
}

impl<'a> ViewOptions<'a> {
    pub fn from_config(config: &'a ReviewConfig) -> Self {
        Self {
            timestamp_format: config.timestamp_format(),
            top_fix_limit: config.top_fix_limit(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ResultsView<'a> {
    pub header: HeaderView<'a>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub top_fixes: Vec<TopFixCard<'a>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sections: Vec<CategorySection<'a>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HeaderView<'a> {
    pub id: ReviewId,
    pub url: &'a str,
    pub created_at: String,
    pub score: ClassifiedScore,
    pub ring: RingView,
}

/// Score ring geometry for a ring of radius `RING_RADIUS`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RingView {
    pub color: &'static str,
    pub filled: f64,
    pub circumference: f64,
}

pub const RING_RADIUS: f64 = 40.0;

#[derive(Debug, Clone, Serialize)]
pub struct TopFixCard<'a> {
    pub rank: usize,
    pub issue_title: &'a str,
    pub before: &'a str,
    pub after: &'a str,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategorySection<'a> {
    pub category: Category,
    pub count: usize,
    pub count_label: String,
    pub rows: Vec<IssueRow<'a>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct IssueRow<'a> {
    pub key: ExpansionKey,
    pub severity: Severity,
    pub badge: &'static str,
    pub emphasis: u8,
    pub title: &'a str,
    pub expanded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<IssueDetail<'a>>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct IssueDetail<'a> {
    pub why: &'a str,
    pub proof: &'a str,
    pub suggested_fix: &'a str,
}

/// Derives the renderable view of `record`. Reads `expansion` only.
pub fn build_view<'a>(
    record: &'a ReviewRecord,
    expansion: &ExpansionStore,
    options: ViewOptions<'_>,
) -> ResultsView<'a> {
    let classified = score::classify(record.score);
    let (filled, circumference) = classified.ring_dash(RING_RADIUS);
    let header = HeaderView {
        id: record.id,
        url: &record.url,
        created_at: format_timestamp(&record.created_at, options.timestamp_format),
        score: classified,
        ring: RingView {
            color: classified.tier.color(),
            filled,
            circumference,
        },
    };

    let limit = options.top_fix_limit.unwrap_or(usize::MAX);
    let top_fixes = record
        .top_fixes
        .iter()
        .take(limit)
        .enumerate()
        .map(|(idx, fix)| TopFixCard {
            rank: idx + 1,
            issue_title: &fix.issue_title,
            before: &fix.before,
            after: &fix.after,
        })
        .collect();

    let sections = group_issues(&record.issues)
        .into_iter()
        .filter(|bucket| !bucket.is_empty())
        .map(|bucket| {
            let rows = bucket
                .issues
                .iter()
                .enumerate()
                .map(|(idx, &issue)| {
                    let key = ExpansionKey::new(bucket.category, idx);
                    let expanded = expansion.is_expanded(key);
                    IssueRow {
                        key,
                        severity: issue.severity,
                        badge: issue.severity.badge(),
                        emphasis: issue.severity.rank(),
                        title: &issue.title,
                        expanded,
                        detail: expanded.then_some(IssueDetail {
                            why: &issue.why,
                            proof: &issue.proof,
                            suggested_fix: &issue.suggested_fix,
                        }),
                    }
                })
                .collect::<Vec<_>>();
            CategorySection {
                category: bucket.category,
                count: rows.len(),
                count_label: count_label(rows.len()),
                rows,
            }
        })
        .collect();

    ResultsView {
        header,
        top_fixes,
        sections,
    }
}

pub fn count_label(count: usize) -> String {
    if count == 1 {
        "1 issue".to_string()
    } else {
        format!("{count} issues")
    }
}

/// Formats an upstream timestamp, echoing the raw text when it cannot be read.
pub fn format_timestamp(raw: &str, format: &str) -> String {
    let raw = raw.trim();
    let mut out = String::new();
    let written = if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        write!(out, "{}", parsed.format(format))
    } else if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        write!(out, "{} UTC", parsed.format(format))
    } else {
        return raw.to_string();
    };
    match written {
        Ok(()) => out,
        Err(_) => raw.to_string(),
    }
}
