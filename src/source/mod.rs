pub mod directory;
pub mod request;

use crate::error::Result;
use crate::types::review::{HistoryItem, ReviewId, ReviewRecord};

/// Supplier of review reports for the presentation layer.
pub trait ReviewSource {
    fn fetch_review(&self, id: ReviewId) -> Result<ReviewRecord>;

    /// Newest reviews first.
    fn fetch_history(&self) -> Result<Vec<HistoryItem>>;
}
