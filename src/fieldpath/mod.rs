//! Fieldpath module - Flattening of nested values into path-keyed leaves.
//!
//! Paths use `.` between map keys and `[i]` for list positions, for example
//! `ListThing[0].Blip[1]`.

mod flatten;
mod path;

#[cfg(test)]
mod flatten_test;

pub use flatten::*;
pub use path::*;
