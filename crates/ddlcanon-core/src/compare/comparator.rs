//! Classification comparator

use std::collections::BTreeSet;

use crate::classify::{Classification, StatementCategory};

use super::diff::{CategoryDiff, DdlDiff};

/// Outcome of comparing two classifications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComparisonResult {
    /// Every category holds the same statements, ignoring order.
    Equivalent,
    /// At least one category differs; the report covers all categories.
    Different(DdlDiff),
}

impl ComparisonResult {
    /// Returns true for [`ComparisonResult::Equivalent`].
    pub fn is_equivalent(&self) -> bool {
        matches!(self, ComparisonResult::Equivalent)
    }
}

/// Compares two classifications.
///
/// Equivalence treats each category's statements as a multiset:
/// duplicates count, order does not. The report carried by `Different`
/// is set-based, so a statement present on both sides with differing
/// multiplicity makes the classifications unequal without producing a
/// set-difference entry. That asymmetry is a known limitation of the
/// comparison.
pub fn compare(old: &Classification, new: &Classification) -> ComparisonResult {
    let equivalent = StatementCategory::ALL.iter().all(|&category| {
        multiset_equal(old.statements(category), new.statements(category))
    });
    if equivalent {
        return ComparisonResult::Equivalent;
    }

    let mut diff = DdlDiff::new();
    for category in StatementCategory::ALL {
        let old_set: BTreeSet<&str> = old
            .statements(category)
            .iter()
            .map(String::as_str)
            .collect();
        let new_set: BTreeSet<&str> = new
            .statements(category)
            .iter()
            .map(String::as_str)
            .collect();

        let entry = CategoryDiff {
            only_in_old: old_set
                .difference(&new_set)
                .map(|statement| statement.to_string())
                .collect(),
            only_in_new: new_set
                .difference(&old_set)
                .map(|statement| statement.to_string())
                .collect(),
        };
        diff.categories.push((category, entry));
    }

    ComparisonResult::Different(diff)
}

fn multiset_equal(a: &[String], b: &[String]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut a_sorted: Vec<&String> = a.iter().collect();
    let mut b_sorted: Vec<&String> = b.iter().collect();
    a_sorted.sort_unstable();
    b_sorted.sort_unstable();
    a_sorted == b_sorted
}
