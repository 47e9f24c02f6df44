//! Constructors for each value variant.
//!
//! Every constructor is total: payloads are stored verbatim and numbers are
//! formatted with their `Display` text, never parsed or validated.

use super::TaggedValue;
use std::collections::BTreeMap;

mod sealed {
    pub trait Sealed {}
}

/// NumericPrimitive is implemented by the built-in integer and float types.
pub trait NumericPrimitive: sealed::Sealed + Copy {
    /// Decimal text of the number as stored in a Number payload.
    fn to_decimal(self) -> String;
}

macro_rules! numeric_primitive {
    ($($t:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $t {}

            impl NumericPrimitive for $t {
                fn to_decimal(self) -> String {
                    self.to_string()
                }
            }

            impl From<$t> for TaggedValue {
                fn from(v: $t) -> Self {
                    TaggedValue::number(v)
                }
            }
        )*
    };
}

numeric_primitive!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);

impl TaggedValue {
    pub fn bool(v: bool) -> Self {
        TaggedValue::Bool(v)
    }

    pub fn bytes(v: impl Into<Vec<u8>>) -> Self {
        TaggedValue::Bytes(v.into())
    }

    pub fn byte_set<I, B>(items: I) -> Self
    where
        I: IntoIterator<Item = B>,
        B: Into<Vec<u8>>,
    {
        TaggedValue::ByteSet(items.into_iter().map(Into::into).collect())
    }

    /// Creates a Number from any numeric primitive.
    pub fn number<T: NumericPrimitive>(v: T) -> Self {
        TaggedValue::Number(v.to_decimal())
    }

    pub fn number_set<T: NumericPrimitive>(items: impl IntoIterator<Item = T>) -> Self {
        TaggedValue::NumberSet(items.into_iter().map(NumericPrimitive::to_decimal).collect())
    }

    pub fn string(v: impl Into<String>) -> Self {
        TaggedValue::String(v.into())
    }

    pub fn string_set<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        TaggedValue::StringSet(items.into_iter().map(Into::into).collect())
    }

    pub fn list(items: impl IntoIterator<Item = TaggedValue>) -> Self {
        TaggedValue::List(items.into_iter().collect())
    }

    /// Creates a Map. A repeated key keeps the last value.
    pub fn map<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, TaggedValue)>,
        K: Into<String>,
    {
        TaggedValue::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v))
                .collect::<BTreeMap<_, _>>(),
        )
    }

    /// Creates the present-but-null marker.
    pub fn null() -> Self {
        TaggedValue::Null(true)
    }
}

impl From<bool> for TaggedValue {
    fn from(v: bool) -> Self {
        TaggedValue::Bool(v)
    }
}

impl From<&str> for TaggedValue {
    fn from(v: &str) -> Self {
        TaggedValue::String(v.to_string())
    }
}

impl From<String> for TaggedValue {
    fn from(v: String) -> Self {
        TaggedValue::String(v)
    }
}

impl From<Vec<TaggedValue>> for TaggedValue {
    fn from(v: Vec<TaggedValue>) -> Self {
        TaggedValue::List(v)
    }
}

impl From<BTreeMap<String, TaggedValue>> for TaggedValue {
    fn from(v: BTreeMap<String, TaggedValue>) -> Self {
        TaggedValue::Map(v)
    }
}
