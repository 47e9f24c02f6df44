//! Value module - In-memory representation of store attribute values.
//!
//! This module provides the tagged value type, its constructors, its wire
//! codec and structural equality.

mod base64;
mod equals;
mod make;
mod value;

pub use equals::*;
pub use make::*;
pub use value::*;
