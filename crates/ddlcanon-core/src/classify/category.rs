//! Statement category definitions

use std::fmt;

use serde::{Deserialize, Serialize};

/// The fixed set of statement kinds that participate in comparison.
///
/// Declaration order is the canonical reporting order; the derived `Ord`
/// follows it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum StatementCategory {
    Alter,
    Comment,
    CreateExtension,
    CreateIndex,
    CreateSchema,
    CreateSequence,
    CreateTable,
    CreateType,
    Select,
    Sets,
}

impl StatementCategory {
    /// Every category, in canonical order.
    pub const ALL: [StatementCategory; 10] = [
        StatementCategory::Alter,
        StatementCategory::Comment,
        StatementCategory::CreateExtension,
        StatementCategory::CreateIndex,
        StatementCategory::CreateSchema,
        StatementCategory::CreateSequence,
        StatementCategory::CreateTable,
        StatementCategory::CreateType,
        StatementCategory::Select,
        StatementCategory::Sets,
    ];

    /// The snake_case label used in log output and reports.
    pub fn label(&self) -> &'static str {
        match self {
            StatementCategory::Alter => "alter",
            StatementCategory::Comment => "comment",
            StatementCategory::CreateExtension => "create_extension",
            StatementCategory::CreateIndex => "create_index",
            StatementCategory::CreateSchema => "create_schema",
            StatementCategory::CreateSequence => "create_sequence",
            StatementCategory::CreateTable => "create_table",
            StatementCategory::CreateType => "create_type",
            StatementCategory::Select => "select",
            StatementCategory::Sets => "sets",
        }
    }
}

impl fmt::Display for StatementCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
