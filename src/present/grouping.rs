use crate::types::review::{Category, Issue};

/// Issues of one category, borrowed from the record in arrival order.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryBucket<'a> {
    pub category: Category,
    pub issues: Vec<&'a Issue>,
}

impl CategoryBucket<'_> {
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }
}

/// Partitions `issues` into one bucket per category in display order.
///
/// Every category is present, empty or not, and `Unclassified` comes last.
pub fn group_issues(issues: &[Issue]) -> Vec<CategoryBucket<'_>> {
    Category::DISPLAY_ORDER
        .into_iter()
        .map(|category| CategoryBucket {
            category,
            issues: issues
                .iter()
                .filter(|issue| issue.category == category)
                .collect(),
        })
        .collect()
}
