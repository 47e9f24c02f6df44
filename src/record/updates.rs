//! Shallow update detection and merging of records.

use crate::value::{structural_equals, Record};
use tracing::debug;

/// Returns the values from `src` which would update values in `dest`.
///
/// Only keys present in both records are considered; a key is kept when the two
/// values are not structurally equal. Keys found on one side only are ignored.
pub fn find_updates(src: &Record, dest: &Record) -> Record {
    let updates: Record = src
        .iter()
        .filter(|(key, value)| match dest.get(*key) {
            Some(current) => !structural_equals(value, current),
            None => false,
        })
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    debug!(
        src_keys = src.len(),
        dest_keys = dest.len(),
        updated = updates.len(),
        "found record updates"
    );
    updates
}

/// Returns the union of both records. On a shared key the value from `src` wins.
///
/// Values are replaced whole: two maps under the same key are not merged field
/// by field.
pub fn merge(src: &Record, dest: &Record) -> Record {
    let mut result = dest.clone();
    for (key, value) in src {
        result.insert(key.clone(), value.clone());
    }

    debug!(
        src_keys = src.len(),
        dest_keys = dest.len(),
        merged = result.len(),
        "merged records"
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::TaggedValue;
    use pretty_assertions::assert_eq;

    fn record(entries: &[(&str, TaggedValue)]) -> Record {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    fn n(v: i32) -> TaggedValue {
        TaggedValue::number(v)
    }

    #[test]
    fn test_find_updates_ignores_one_sided_keys() {
        let src = record(&[("a", n(1)), ("b", n(2))]);
        let dest = record(&[("a", n(1))]);
        assert_eq!(find_updates(&src, &dest), Record::new());

        let src = record(&[("a", n(1))]);
        let dest = record(&[("a", n(1)), ("c", n(3))]);
        assert_eq!(find_updates(&src, &dest), Record::new());
    }

    #[test]
    fn test_find_updates_detects_change() {
        let src = record(&[("a", n(2))]);
        let dest = record(&[("a", n(1))]);
        assert_eq!(find_updates(&src, &dest), record(&[("a", n(2))]));
    }

    #[test]
    fn test_find_updates_kind_change() {
        let src = record(&[("a", TaggedValue::string("1")), ("b", n(5))]);
        let dest = record(&[("a", n(1)), ("b", n(5))]);
        assert_eq!(
            find_updates(&src, &dest),
            record(&[("a", TaggedValue::string("1"))])
        );
    }

    #[test]
    fn test_find_updates_nested() {
        let inner = |flag: bool| TaggedValue::map([("flag", TaggedValue::bool(flag))]);
        let src = record(&[("same", inner(true)), ("changed", inner(false))]);
        let dest = record(&[("same", inner(true)), ("changed", inner(true))]);
        assert_eq!(
            find_updates(&src, &dest),
            record(&[("changed", inner(false))])
        );
    }

    #[test]
    fn test_merge_precedence() {
        let src = record(&[("a", n(1))]);
        let dest = record(&[("a", n(2)), ("b", n(3))]);
        assert_eq!(merge(&src, &dest), record(&[("a", n(1)), ("b", n(3))]));
    }

    #[test]
    fn test_merge_replaces_maps_whole() {
        let src = record(&[("m", TaggedValue::map([("x", n(1))]))]);
        let dest = record(&[("m", TaggedValue::map([("y", n(2))]))]);
        assert_eq!(merge(&src, &dest), src);
    }

    #[test]
    fn test_merge_idempotent() {
        let m = record(&[("a", n(1)), ("b", TaggedValue::string_set(["x", "y"]))]);
        assert_eq!(merge(&m, &m), m);
        assert_eq!(merge(&m, &Record::new()), m);
        assert_eq!(merge(&Record::new(), &m), m);
    }
}
