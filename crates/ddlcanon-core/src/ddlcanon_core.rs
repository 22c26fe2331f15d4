//! ddlcanon core - DDL statement classification and comparison
//!
//! This crate provides the library half of ddlcanon:
//! - Splitting raw DDL text into individual statements
//! - Classifying statements into fixed categories by leading keyword
//! - Comparing two classifications and reporting per-category differences

pub mod classify;
pub mod compare;
pub mod split;

pub use classify::*;
pub use compare::*;
pub use split::*;
