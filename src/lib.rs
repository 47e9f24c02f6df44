//! # Tagged Value Diff
//!
//! Structural equality, flattening, diff and merge for the tagged attribute
//! values of a document-oriented key-value store.
//!
//! All operations are pure: they borrow their inputs and return new values.
//!
//! ## Modules
//!
//! - [`entity`] - Partition/sort key types and the `Entity` trait for table items
//! - [`value`] - The tagged value type, its constructors, wire codec and structural equality
//! - [`fieldpath`] - Flattening of nested values into `a.b[0]` style paths
//! - [`record`] - Update detection, comparison and merging of records

pub mod entity;
pub mod fieldpath;
pub mod record;
pub mod value;

pub use entity::{extract_key, strip_key, CompositeKey, Entity, SimpleKey, TableKey};
pub use fieldpath::{flatten, flatten_record, Flattened, PathElement};
pub use record::{compare_records, find_updates, merge, Comparison};
pub use value::{structural_equals, CodecError, Kind, NumericPrimitive, Record, TaggedValue};
