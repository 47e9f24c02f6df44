//! Record module - Shallow diff, comparison and merge of records.
//!
//! A record is a single level of attribute name to value. Nested values are
//! compared structurally but never merged field by field.

mod comparison;
mod updates;

pub use comparison::*;
pub use updates::*;
