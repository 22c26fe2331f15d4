//! Statement classification module
//!
//! Buckets DDL statements into a fixed set of categories by leading
//! keyword.

mod category;
mod classifier;


pub use category::*;
pub use classifier::*;
