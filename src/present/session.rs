use super::expansion::{ExpansionKey, ExpansionStore};
use super::grouping::group_issues;
use super::{build_view, ResultsView, ViewOptions};
use crate::types::review::ReviewRecord;

/// The record on display together with its per-row disclosure state.
#[derive(Debug, Clone)]
pub struct ReviewSession {
    record: ReviewRecord,
    expansion: ExpansionStore,
}

impl ReviewSession {
    pub fn new(record: ReviewRecord) -> Self {
        tracing::debug!(review_id = record.id, "opening review");
        Self {
            record,
            expansion: ExpansionStore::new(),
        }
    }

    /// Replaces the displayed record. Disclosure state never carries over.
    pub fn load(&mut self, record: ReviewRecord) {
        tracing::debug!(
            previous = self.record.id,
            review_id = record.id,
            expanded = self.expansion.len(),
            "loading review"
        );
        self.record = record;
        self.expansion.reset();
    }

    pub fn record(&self) -> &ReviewRecord {
        &self.record
    }

    pub fn expansion(&self) -> &ExpansionStore {
        &self.expansion
    }

    /// Every row key of the current record, in display order.
    pub fn row_keys(&self) -> Vec<ExpansionKey> {
        group_issues(&self.record.issues)
            .into_iter()
            .flat_map(|bucket| {
                (0..bucket.len()).map(move |idx| ExpansionKey::new(bucket.category, idx))
            })
            .collect()
    }

    pub fn toggle(&mut self, key: ExpansionKey) -> bool {
        if !self.row_keys().contains(&key) {
            tracing::warn!(%key, review_id = self.record.id, "toggled key addresses no issue row");
        }
        let expanded = self.expansion.toggle(key);
        tracing::debug!(%key, expanded, "toggled issue row");
        expanded
    }

    pub fn expand_all(&mut self) {
        for key in self.row_keys() {
            self.expansion.expand(key);
        }
    }

    pub fn view(&self, options: ViewOptions<'_>) -> ResultsView<'_> {
        build_view(&self.record, &self.expansion, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::review::{Category, Issue};

    fn record(id: i64, categories: &[Category]) -> ReviewRecord {
        ReviewRecord {
            id,
            url: format!("https://example.com/{id}"),
            score: 55.0,
            issues: categories
                .iter()
                .map(|category| Issue {
                    title: format!("{category} issue"),
                    category: *category,
                    ..Issue::default()
                })
                .collect(),
            ..ReviewRecord::default()
        }
    }

    #[test]
    fn toggle_twice_returns_to_collapsed() {
        let mut session = ReviewSession::new(record(1, &[Category::Layout, Category::Trust]));
        let key = ExpansionKey::new(Category::Layout, 0);

        session.toggle(key);
        assert!(session.view(ViewOptions::default()).sections[0].rows[0].expanded);
        session.toggle(key);
        assert!(!session.expansion().is_expanded(key));
    }

    #[test]
    fn loading_a_new_record_clears_expansion() {
        let mut session = ReviewSession::new(record(1, &[Category::Layout, Category::Layout]));
        session.expand_all();
        assert_eq!(session.expansion().len(), 2);

        session.load(record(2, &[Category::Layout]));
        assert!(session.expansion().is_empty());
        assert_eq!(session.record().id, 2);
        let view = session.view(ViewOptions::default());
        assert!(view.sections[0].rows.iter().all(|row| !row.expanded));
    }

    #[test]
    fn reloading_the_same_record_also_starts_collapsed() {
        let mut session = ReviewSession::new(record(4, &[Category::Clarity]));
        session.toggle(ExpansionKey::new(Category::Clarity, 0));
        session.load(record(4, &[Category::Clarity]));
        assert!(session.expansion().is_empty());
    }

    #[test]
    fn row_keys_follow_display_order() {
        let session = ReviewSession::new(record(
            1,
            &[Category::Trust, Category::Unclassified, Category::Clarity, Category::Trust],
        ));
        let keys: Vec<_> = session.row_keys().iter().map(ToString::to_string).collect();
        assert_eq!(keys, ["Clarity-0", "Trust-0", "Trust-1", "Unclassified-0"]);
    }

    #[test]
    fn toggling_an_absent_row_does_not_touch_derived_data() {
        let mut session = ReviewSession::new(record(1, &[Category::Layout]));
        let before = session.record().clone();
        assert!(session.toggle(ExpansionKey::new(Category::Navigation, 5)));
        assert_eq!(session.record(), &before);
        let view = session.view(ViewOptions::default());
        assert_eq!(view.sections.len(), 1);
    }
}
