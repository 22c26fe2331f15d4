//! SQL statement splitting
//!
//! Splits raw DDL text into individual top-level statements using the
//! `sqlparser` tokenizer, so semicolons inside string literals and
//! comments never act as statement separators.

use sqlparser::dialect::PostgreSqlDialect;
use sqlparser::tokenizer::{Token, Tokenizer, TokenizerError};
use thiserror::Error;

/// Error splitting DDL text into statements.
#[derive(Debug, Error)]
pub enum SplitError {
    /// The input could not be tokenized as SQL.
    #[error("failed to tokenize DDL text: {0}")]
    Tokenize(#[from] TokenizerError),
}

/// Splits `sql` into its top-level statements.
///
/// Leading whitespace and comments are stripped from each statement so
/// every returned string starts with its own keyword; the terminating
/// semicolon is kept. Text after the last semicolon is returned as a
/// final statement if it contains anything besides whitespace and
/// comments.
pub fn split_statements(sql: &str) -> Result<Vec<String>, SplitError> {
    let dialect = PostgreSqlDialect {};
    let tokens = Tokenizer::new(&dialect, sql).tokenize()?;

    let mut statements = Vec::new();
    let mut current = String::new();
    for token in tokens {
        match token {
            Token::SemiColon => {
                if !current.is_empty() {
                    current.push(';');
                    statements.push(std::mem::take(&mut current));
                }
            }
            // A statement only begins at its first non-whitespace token.
            Token::Whitespace(_) if current.is_empty() => {}
            other => current.push_str(&other.to_string()),
        }
    }

    let trailing = current.trim_end();
    if !trailing.is_empty() {
        statements.push(trailing.to_string());
    }

    Ok(statements)
}
