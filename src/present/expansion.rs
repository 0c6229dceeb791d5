use crate::error::ReviewError;
use crate::types::review::Category;
use serde::{Serialize, Serializer};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Addresses one issue row: its category and position within that category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExpansionKey {
    pub category: Category,
    pub index: usize,
}

impl ExpansionKey {
    pub fn new(category: Category, index: usize) -> Self {
        Self { category, index }
    }
}

impl fmt::Display for ExpansionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.category, self.index)
    }
}

impl Serialize for ExpansionKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl FromStr for ExpansionKey {
    type Err = ReviewError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let invalid = || ReviewError::InvalidExpansionKey(raw.to_string());
        let (label, index) = raw.rsplit_once('-').ok_or_else(invalid)?;
        let category = Category::parse_label(label).ok_or_else(invalid)?;
        let index = index.trim().parse::<usize>().map_err(|_| invalid())?;
        Ok(Self::new(category, index))
    }
}

/// Rows currently expanded for one displayed record. Absence means collapsed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionStore {
    expanded: BTreeSet<ExpansionKey>,
}

impl ExpansionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips the row and returns whether it is now expanded.
    pub fn toggle(&mut self, key: ExpansionKey) -> bool {
        if self.expanded.remove(&key) {
            false
        } else {
            self.expanded.insert(key);
            true
        }
    }

    pub fn is_expanded(&self, key: ExpansionKey) -> bool {
        self.expanded.contains(&key)
    }

    pub fn expand(&mut self, key: ExpansionKey) {
        self.expanded.insert(key);
    }

    pub fn reset(&mut self) {
        self.expanded.clear();
    }

    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }
}
