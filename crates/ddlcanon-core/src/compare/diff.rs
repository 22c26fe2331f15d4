//! Diff report data structures
//!
//! These types represent the per-category symmetric differences between
//! two classifications. They exist only when the classifications are
//! unequal.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::classify::StatementCategory;

/// Set differences for a single category.
///
/// Both sides are deduplicated; an entry with two empty sets means the
/// category's statement sets match even though the classifications as a
/// whole do not.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDiff {
    /// Statements present in the old dump but not the new one.
    pub only_in_old: BTreeSet<String>,
    /// Statements present in the new dump but not the old one.
    pub only_in_new: BTreeSet<String>,
}

impl CategoryDiff {
    /// Returns true if the statement sets match in both directions.
    pub fn is_empty(&self) -> bool {
        self.only_in_old.is_empty() && self.only_in_new.is_empty()
    }

    /// Number of statements that appear on only one side.
    pub fn difference_count(&self) -> usize {
        self.only_in_old.len() + self.only_in_new.len()
    }
}

/// The complete diff between two classifications.
///
/// Holds one entry per category, covering all ten categories in
/// canonical order, including the ones with no set differences.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DdlDiff {
    /// One entry per category, in canonical order.
    pub categories: Vec<(StatementCategory, CategoryDiff)>,
}

impl DdlDiff {
    /// Creates a new empty diff.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if no category has a set difference.
    pub fn is_empty(&self) -> bool {
        self.categories.iter().all(|(_, entry)| entry.is_empty())
    }

    /// Total number of one-sided statements across all categories.
    pub fn difference_count(&self) -> usize {
        self.categories
            .iter()
            .map(|(_, entry)| entry.difference_count())
            .sum()
    }

    /// The entry recorded for `category`, if any.
    pub fn get(&self, category: StatementCategory) -> Option<&CategoryDiff> {
        self.categories
            .iter()
            .find(|(recorded, _)| *recorded == category)
            .map(|(_, entry)| entry)
    }
}
