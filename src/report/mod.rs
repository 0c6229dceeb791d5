pub mod json;
pub mod md;

use crate::error::ReviewError;
use crate::present::status::StatusView;
use crate::present::ResultsView;
use crate::types::review::HistoryItem;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

pub fn render(view: &ResultsView<'_>, format: OutputFormat) -> Result<String, ReviewError> {
    match format {
        OutputFormat::Json => json::to_json(view).map_err(ReviewError::Json),
        OutputFormat::Md => Ok(md::to_markdown(view)),
    }
}

pub fn render_history(
    items: &[HistoryItem],
    format: OutputFormat,
    timestamp_format: &str,
) -> Result<String, ReviewError> {
    match format {
        OutputFormat::Json => json::history_to_json(items).map_err(ReviewError::Json),
        OutputFormat::Md => Ok(md::history_to_markdown(items, timestamp_format)),
    }
}

pub fn render_status(view: &StatusView<'_>, format: OutputFormat) -> Result<String, ReviewError> {
    match format {
        OutputFormat::Json => json::status_to_json(view).map_err(ReviewError::Json),
        OutputFormat::Md => Ok(md::status_to_markdown(view)),
    }
}
