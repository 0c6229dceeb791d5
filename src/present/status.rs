use crate::types::status::StatusReport;
use serde::Serialize;

const OK: &str = "ok";

#[derive(Debug, Clone, Serialize)]
pub struct StatusCheck<'a> {
    pub key: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub operational: bool,
    pub display: &'a str,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusView<'a> {
    pub operational: bool,
    pub checks: Vec<StatusCheck<'a>>,
}

/// Maps each dependency to its display row; only an exact `ok` counts as healthy.
pub fn build_status_view(report: &StatusReport) -> StatusView<'_> {
    let rows: [(&'static str, &'static str, &'static str, &str); 4] = [
        ("backend", "Backend API", "FastAPI server health", &report.backend),
        ("database", "Database", "SQLite connection", &report.database),
        ("llm", "LLM (OpenAI)", "API key & connectivity", &report.llm),
        ("scraper", "Scraper", "Playwright Chromium", &report.scraper),
    ];
    let checks: Vec<_> = rows
        .into_iter()
        .map(|(key, label, description, raw)| {
            let raw = raw.trim();
            let operational = raw == OK;
            StatusCheck {
                key,
                label,
                description,
                operational,
                display: match raw {
                    OK => "Operational",
                    "" => "unknown",
                    other => other,
                },
            }
        })
        .collect();
    StatusView {
        operational: checks.iter().all(|check| check.operational),
        checks,
    }
}
