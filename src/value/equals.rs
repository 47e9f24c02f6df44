//! Structural equality over tagged value trees.

use super::TaggedValue;

/// Compares the contents of two values and returns true if they are equal.
///
/// Values of different kinds are never equal, even when their text matches
/// (`N "1"` vs `S "1"`). Lists and maps recurse into their children. Sets are
/// compared position by position, so `SS ["a", "b"]` and `SS ["b", "a"]` differ.
pub fn structural_equals(lhs: &TaggedValue, rhs: &TaggedValue) -> bool {
    match (lhs, rhs) {
        (TaggedValue::Bool(a), TaggedValue::Bool(b)) => a == b,
        (TaggedValue::Null(a), TaggedValue::Null(b)) => a == b,
        (TaggedValue::Number(a), TaggedValue::Number(b)) => a == b,
        (TaggedValue::String(a), TaggedValue::String(b)) => a == b,
        (TaggedValue::Bytes(a), TaggedValue::Bytes(b)) => a == b,
        (TaggedValue::ByteSet(a), TaggedValue::ByteSet(b)) => positional_equals(a, b),
        (TaggedValue::NumberSet(a), TaggedValue::NumberSet(b)) => positional_equals(a, b),
        (TaggedValue::StringSet(a), TaggedValue::StringSet(b)) => positional_equals(a, b),
        (TaggedValue::List(a), TaggedValue::List(b)) => {
            if a.len() != b.len() {
                return false;
            }
            a.iter().zip(b).all(|(x, y)| structural_equals(x, y))
        }
        (TaggedValue::Map(a), TaggedValue::Map(b)) => {
            if a.len() != b.len() {
                return false;
            }
            a.iter().all(|(key, x)| match b.get(key) {
                Some(y) => structural_equals(x, y),
                None => false,
            })
        }
        _ => false,
    }
}

fn positional_equals<T: PartialEq>(a: &[T], b: &[T]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x == y)
}
