//! Entity module - Primary keys of the items stored in a table.
//!
//! Key attributes identify an item and are never updated in place, so this
//! module also separates them from the rest of a record.

mod key;

pub use key::*;
