use crate::present::status::StatusView;
use crate::present::{format_timestamp, score, ResultsView};
use crate::types::review::HistoryItem;

pub fn to_markdown(view: &ResultsView<'_>) -> String {
    let header = &view.header;
    let mut output = String::new();
    output.push_str("# UX Review\n\n");
    output.push_str(&format!("URL: {}\n", header.url));
    output.push_str(&format!("Reviewed: {}\n", header.created_at));
    output.push_str(&format!(
        "UX score: {}/100 ({})\n\n",
        header.score.rounded,
        header.score.tier.token()
    ));

    if !view.top_fixes.is_empty() {
        output.push_str("## Top Priority Fixes\n\n");
        for card in &view.top_fixes {
            output.push_str(&format!("### Fix #{}: {}\n\n", card.rank, card.issue_title));
            output.push_str(&format!("- before: {}\n", card.before));
            output.push_str(&format!("- after: {}\n\n", card.after));
        }
    }

    if view.sections.is_empty() {
        return output;
    }

    output.push_str("## All Issues\n\n");
    for section in &view.sections {
        output.push_str(&format!(
            "### {} ({})\n\n",
            section.category, section.count_label
        ));
        for row in &section.rows {
            let marker = if row.expanded { "[-]" } else { "[+]" };
            output.push_str(&format!(
                "- {} [{}] {} `{}`\n",
                marker, row.severity, row.title, row.key
            ));
            if let Some(detail) = &row.detail {
                output.push_str(&format!("  - Why it's a problem: {}\n", detail.why));
                output.push_str(&format!("  - Evidence: `{}`\n", detail.proof));
                output.push_str(&format!("  - Suggested fix: {}\n", detail.suggested_fix));
            }
        }
        output.push('\n');
    }

    output
}

pub fn history_to_markdown(items: &[HistoryItem], timestamp_format: &str) -> String {
    let mut output = String::new();
    output.push_str("# Review History\n\n");
    if items.is_empty() {
        output.push_str("- none\n");
        return output;
    }
    for item in items {
        let classified = score::classify(item.score);
        output.push_str(&format!(
            "- #{} {} | {}/100 ({}) | {}\n",
            item.id,
            item.url,
            classified.rounded,
            classified.tier.token(),
            format_timestamp(&item.created_at, timestamp_format)
        ));
    }
    output
}

pub fn status_to_markdown(view: &StatusView<'_>) -> String {
    let mut output = String::new();
    output.push_str("# System Status\n\n");
    for check in &view.checks {
        let dot = if check.operational { "ok" } else { "down" };
        output.push_str(&format!(
            "- [{}] {}: {} ({})\n",
            dot, check.label, check.display, check.description
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::present::expansion::{ExpansionKey, ExpansionStore};
    use crate::present::{build_view, ViewOptions};
    use crate::types::review::{Category, Issue, ReviewRecord, Severity, TopFix};

    fn record() -> ReviewRecord {
        ReviewRecord {
            id: 1,
            url: "https://shop.example".to_string(),
            score: 38.6,
            issues: vec![
                Issue {
                    title: "No contact details".to_string(),
                    category: Category::Trust,
                    severity: Severity::High,
                    why: "Buyers hesitate.".to_string(),
                    proof: "<footer></footer>".to_string(),
                    suggested_fix: "Add an address and phone number.".to_string(),
                },
                Issue {
                    title: "Odd widget".to_string(),
                    category: Category::Unclassified,
                    severity: Severity::Unknown,
                    ..Issue::default()
                },
            ],
            top_fixes: vec![TopFix {
                issue_title: "No contact details".to_string(),
                before: "Empty footer".to_string(),
                after: "Footer with contact block".to_string(),
            }],
            created_at: "2025-02-10T08:30:00Z".to_string(),
        }
    }

    #[test]
    fn markdown_report_contains_sections() {
        let record = record();
        let rendered = to_markdown(&build_view(&record, &ExpansionStore::new(), ViewOptions::default()));
        assert!(rendered.contains("# UX Review"));
        assert!(rendered.contains("UX score: 39/100 (bad)"));
        assert!(rendered.contains("### Fix #1: No contact details"));
        assert!(rendered.contains("### Trust (1 issue)"));
        assert!(rendered.contains("[+] [High] No contact details `Trust-0`"));
        assert!(!rendered.contains("Why it's a problem"));
    }

    #[test]
    fn unclassified_section_renders_last() {
        let record = record();
        let rendered = to_markdown(&build_view(&record, &ExpansionStore::new(), ViewOptions::default()));
        let trust = rendered.find("### Trust").expect("trust section should render");
        let fallback = rendered
            .find("### Unclassified")
            .expect("fallback section should render");
        assert!(trust < fallback);
        assert!(rendered.contains("[Unknown] Odd widget"));
    }

    #[test]
    fn expanded_rows_show_detail() {
        let record = record();
        let mut store = ExpansionStore::new();
        store.toggle(ExpansionKey::new(Category::Trust, 0));
        let rendered = to_markdown(&build_view(&record, &store, ViewOptions::default()));
        assert!(rendered.contains("[-] [High] No contact details"));
        assert!(rendered.contains("Why it's a problem: Buyers hesitate."));
        assert!(rendered.contains("Evidence: `<footer></footer>`"));
    }

    #[test]
    fn empty_report_omits_fix_and_issue_sections() {
        let record = ReviewRecord {
            id: 2,
            score: 90.0,
            ..ReviewRecord::default()
        };
        let rendered = to_markdown(&build_view(&record, &ExpansionStore::new(), ViewOptions::default()));
        assert!(rendered.contains("UX score: 90/100 (good)"));
        assert!(!rendered.contains("Top Priority Fixes"));
        assert!(!rendered.contains("All Issues"));
        assert!(!rendered.contains("- none"));
    }

    #[test]
    fn status_lists_labelled_checks() {
        let report = crate::types::status::StatusReport {
            backend: "ok".to_string(),
            database: "ok".to_string(),
            llm: "error: timeout".to_string(),
            scraper: "ok".to_string(),
        };
        let view = crate::present::status::build_status_view(&report);
        let rendered = status_to_markdown(&view);
        assert!(rendered.contains("# System Status"));
        assert!(rendered.contains("- [ok] Backend API: Operational"));
        assert!(rendered.contains("- [down] LLM (OpenAI): error: timeout"));
        assert!(rendered.contains("- [ok] Scraper: Operational (Playwright Chromium)"));
    }

    #[test]
    fn history_lists_scores_with_tiers() {
        let items = vec![HistoryItem {
            id: 3,
            url: "https://a.example".to_string(),
            score: 70.0,
            created_at: "2025-02-10T08:30:00Z".to_string(),
        }];
        let rendered = history_to_markdown(&items, "%Y-%m-%d");
        assert!(rendered.contains("- #3 https://a.example | 70/100 (good) | 2025-02-10"));
        assert!(history_to_markdown(&[], "%Y").contains("- none"));
    }
}
