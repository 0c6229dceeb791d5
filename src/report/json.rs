use crate::present::status::StatusView;
use crate::present::ResultsView;
use crate::types::review::HistoryItem;

pub fn to_json(view: &ResultsView<'_>) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(view)
}

pub fn history_to_json(items: &[HistoryItem]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(items)
}

pub fn status_to_json(view: &StatusView<'_>) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(view)
}
