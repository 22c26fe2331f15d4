//! Keyword-prefix classifier

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::category::StatementCategory;
use crate::split::{self, SplitError};

/// Ordered prefix-dispatch table; the first matching prefix wins.
///
/// Prefixes are matched verbatim and case-sensitively against the start
/// of each statement, in this order. `CREATE UNIQUE INDEX` has its own
/// row because it does not share a prefix with `CREATE INDEX`.
const CLASSIFICATION_RULES: &[(&str, StatementCategory)] = &[
    ("ALTER", StatementCategory::Alter),
    ("COMMENT", StatementCategory::Comment),
    ("CREATE EXTENSION", StatementCategory::CreateExtension),
    ("CREATE SEQUENCE", StatementCategory::CreateSequence),
    ("CREATE SCHEMA", StatementCategory::CreateSchema),
    ("CREATE TABLE", StatementCategory::CreateTable),
    ("CREATE TYPE", StatementCategory::CreateType),
    ("CREATE INDEX", StatementCategory::CreateIndex),
    ("CREATE UNIQUE INDEX", StatementCategory::CreateIndex),
    ("SELECT", StatementCategory::Select),
    ("SET", StatementCategory::Sets),
];

/// Receives statements that match no classification rule.
///
/// Injected into [`classify`] so the library never depends on a global
/// logger; callers decide where diagnostics go.
pub trait UnclassifiedReporter {
    fn unclassified(&self, statement: &str);
}

/// Discards unclassified statements.
impl UnclassifiedReporter for () {
    fn unclassified(&self, _statement: &str) {}
}

/// The per-file result of bucketing statements into categories.
///
/// Every category key is always present, with an empty sequence where
/// nothing matched. Sequences keep duplicates and first-appearance
/// order. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    statements: BTreeMap<StatementCategory, Vec<String>>,
}

impl Classification {
    fn empty() -> Self {
        let statements = StatementCategory::ALL
            .iter()
            .map(|category| (*category, Vec::new()))
            .collect();
        Self { statements }
    }

    /// The statements recorded for `category`, in source order.
    ///
    /// [`classify`] always populates every key; a key absent from a
    /// hand-deserialized value reads as empty.
    pub fn statements(&self, category: StatementCategory) -> &[String] {
        self.statements
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Total number of classified statements across all categories.
    pub fn statement_count(&self) -> usize {
        self.statements.values().map(Vec::len).sum()
    }
}

/// Splits `ddl` into statements and buckets each one by its leading
/// keyword.
///
/// Statements matching no rule are handed to `reporter` and dropped
/// from the classification; this is accepted lossy behavior, not a
/// failure. Only a tokenizer failure is an error.
pub fn classify(
    ddl: &str,
    reporter: &dyn UnclassifiedReporter,
) -> Result<Classification, SplitError> {
    let mut classification = Classification::empty();

    for statement in split::split_statements(ddl)? {
        let rule = CLASSIFICATION_RULES
            .iter()
            .find(|(prefix, _)| statement.starts_with(prefix));
        match rule {
            Some((_, category)) => {
                classification
                    .statements
                    .entry(*category)
                    .or_default()
                    .push(statement);
            }
            None => reporter.unclassified(&statement),
        }
    }

    Ok(classification)
}
