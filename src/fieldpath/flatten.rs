//! Flattening of nested values into path-keyed leaves.

use super::PathElement;
use crate::value::{Record, TaggedValue};
use std::collections::BTreeMap;
use tracing::trace;

/// Flattened maps a dotted/indexed path to the leaf value found there.
pub type Flattened = BTreeMap<String, TaggedValue>;

/// Builds a flat map of the leaves of `value`, keyed by their path below `base`.
///
/// - Map entries are keyed `base.key`, or just `key` when `base` is empty.
/// - List items are keyed `base[i]`, including `[i]` for an empty base.
/// - Every other kind is a leaf and yields `{ base: value }`.
///
/// Empty lists and maps have no leaves and contribute nothing.
///
/// Paths are not escaped, so distinct leaves can share a path: a map key
/// `"a.b"` and a key `b` nested under `a` both flatten to `a.b`. On such a
/// collision the leaf visited last wins; map keys are visited in sorted order.
pub fn flatten(value: &TaggedValue, base: &str) -> Flattened {
    let mut result = Flattened::new();
    flatten_into(value, base, &mut result);
    trace!(base, leaves = result.len(), "flattened value");
    result
}

fn flatten_into(value: &TaggedValue, path: &str, out: &mut Flattened) {
    match value {
        TaggedValue::Map(fields) => {
            for (key, child) in fields {
                let child_path = PathElement::field_name(key.as_str()).child_of(path);
                flatten_into(child, &child_path, out);
            }
        }
        TaggedValue::List(items) => {
            for (i, child) in items.iter().enumerate() {
                let child_path = PathElement::index(i).child_of(path);
                flatten_into(child, &child_path, out);
            }
        }
        leaf => {
            out.insert(path.to_string(), leaf.clone());
        }
    }
}

/// Flattens every attribute of a record, using the attribute name as base path.
pub fn flatten_record(record: &Record) -> Flattened {
    let mut result = Flattened::new();
    for (name, value) in record {
        flatten_into(value, name, &mut result);
    }
    result
}
