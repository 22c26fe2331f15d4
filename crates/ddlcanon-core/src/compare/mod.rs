//! Classification comparison module
//!
//! Decides whether two classifications describe the same schema and
//! reports per-category differences when they do not.

mod comparator;
mod diff;


pub use comparator::*;
pub use diff::*;
