//! Core tagged value type and its wire codec.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

use super::base64;

/// TaggedValue is a single attribute value as carried on the store's wire format.
///
/// The serde representation is the externally tagged wire form, e.g.
/// `{"S": "text"}`, `{"N": "12.5"}` or `{"M": {"a": {"BOOL": true}}}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum TaggedValue {
    #[serde(rename = "BOOL")]
    Bool(bool),
    #[serde(rename = "B", with = "base64::bytes")]
    Bytes(Vec<u8>),
    #[serde(rename = "BS", with = "base64::byte_set")]
    ByteSet(Vec<Vec<u8>>),
    #[serde(rename = "L")]
    List(Vec<TaggedValue>),
    #[serde(rename = "M")]
    Map(BTreeMap<String, TaggedValue>),
    #[serde(rename = "NULL")]
    Null(bool),
    #[serde(rename = "N")]
    Number(String),
    #[serde(rename = "NS")]
    NumberSet(Vec<String>),
    #[serde(rename = "S")]
    String(String),
    #[serde(rename = "SS")]
    StringSet(Vec<String>),
}

/// Record is a flat item: attribute name to value.
pub type Record = BTreeMap<String, TaggedValue>;

/// Kind is the payload-free discriminant of a [`TaggedValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Kind {
    Bool,
    Bytes,
    ByteSet,
    List,
    Map,
    Null,
    Number,
    NumberSet,
    String,
    StringSet,
}

impl Kind {
    /// The wire tag for this kind.
    pub fn tag(self) -> &'static str {
        match self {
            Kind::Bool => "BOOL",
            Kind::Bytes => "B",
            Kind::ByteSet => "BS",
            Kind::List => "L",
            Kind::Map => "M",
            Kind::Null => "NULL",
            Kind::Number => "N",
            Kind::NumberSet => "NS",
            Kind::String => "S",
            Kind::StringSet => "SS",
        }
    }

    /// Returns true for every kind that flattening treats as a leaf.
    pub fn is_scalar(self) -> bool {
        !matches!(self, Kind::List | Kind::Map)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl TaggedValue {
    pub fn kind(&self) -> Kind {
        match self {
            TaggedValue::Bool(_) => Kind::Bool,
            TaggedValue::Bytes(_) => Kind::Bytes,
            TaggedValue::ByteSet(_) => Kind::ByteSet,
            TaggedValue::List(_) => Kind::List,
            TaggedValue::Map(_) => Kind::Map,
            TaggedValue::Null(_) => Kind::Null,
            TaggedValue::Number(_) => Kind::Number,
            TaggedValue::NumberSet(_) => Kind::NumberSet,
            TaggedValue::String(_) => Kind::String,
            TaggedValue::StringSet(_) => Kind::StringSet,
        }
    }

    pub fn is_scalar(&self) -> bool {
        self.kind().is_scalar()
    }

    pub fn is_list(&self) -> bool {
        matches!(self, TaggedValue::List(_))
    }

    pub fn is_map(&self) -> bool {
        matches!(self, TaggedValue::Map(_))
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            TaggedValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            TaggedValue::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// Returns the decimal text of a Number.
    pub fn as_number(&self) -> Option<&str> {
        match self {
            TaggedValue::Number(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            TaggedValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[TaggedValue]> {
        match self {
            TaggedValue::List(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&BTreeMap<String, TaggedValue>> {
        match self {
            TaggedValue::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Number of direct children for containers and sets, `None` for plain scalars.
    pub fn child_count(&self) -> Option<usize> {
        match self {
            TaggedValue::ByteSet(s) => Some(s.len()),
            TaggedValue::NumberSet(s) | TaggedValue::StringSet(s) => Some(s.len()),
            TaggedValue::List(l) => Some(l.len()),
            TaggedValue::Map(m) => Some(m.len()),
            _ => None,
        }
    }
}

impl PartialEq for TaggedValue {
    fn eq(&self, other: &Self) -> bool {
        super::structural_equals(self, other)
    }
}

impl Eq for TaggedValue {}

impl fmt::Display for TaggedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match serde_json::to_string(self) {
            Ok(json) => f.write_str(&json),
            Err(_) => write!(f, "{{{}: ?}}", self.kind()),
        }
    }
}

/// CodecError reports a malformed wire document.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("invalid JSON attribute value: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid YAML attribute value: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Parse a value from its JSON wire form.
pub fn from_json(json: &str) -> Result<TaggedValue, CodecError> {
    Ok(serde_json::from_str(json)?)
}

/// Serialize a value to its JSON wire form.
pub fn to_json(value: &TaggedValue) -> Result<String, CodecError> {
    Ok(serde_json::to_string(value)?)
}

/// Serialize a value to indented JSON wire form.
pub fn to_json_pretty(value: &TaggedValue) -> Result<String, CodecError> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Parse a record (item) from its JSON wire form.
pub fn record_from_json(json: &str) -> Result<Record, CodecError> {
    Ok(serde_json::from_str(json)?)
}

/// Serialize a record to its JSON wire form.
pub fn record_to_json(record: &Record) -> Result<String, CodecError> {
    Ok(serde_json::to_string(record)?)
}

/// Serialize a record to indented JSON wire form.
pub fn record_to_json_pretty(record: &Record) -> Result<String, CodecError> {
    Ok(serde_json::to_string_pretty(record)?)
}

// YAML is read through a JSON tree so the single-key map form (`S: text`) is
// accepted instead of serde_yaml's `!S text` enum tags.

/// Parse a value from YAML with the same shape as the JSON wire form.
pub fn from_yaml(yaml: &str) -> Result<TaggedValue, CodecError> {
    let tree: serde_json::Value = serde_yaml::from_str(yaml)?;
    Ok(serde_json::from_value(tree)?)
}

/// Parse a record from YAML with the same shape as the JSON wire form.
pub fn record_from_yaml(yaml: &str) -> Result<Record, CodecError> {
    let tree: serde_json::Value = serde_yaml::from_str(yaml)?;
    Ok(serde_json::from_value(tree)?)
}
