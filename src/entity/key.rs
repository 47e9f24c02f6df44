//! Primary key types for table entities.

use crate::value::{Record, TaggedValue};

/// KeyValue is a named key attribute and its native value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyValue<T> {
    pub name: String,
    pub value: T,
}

impl<T> KeyValue<T> {
    pub fn new(name: impl Into<String>, value: T) -> Self {
        KeyValue {
            name: name.into(),
            value,
        }
    }
}

/// PartitionKey is the hash key attribute of a table.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PartitionKey<T>(pub KeyValue<T>);

/// SortKey is the range key attribute of a table.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SortKey<T>(pub KeyValue<T>);

/// SimpleKey is a primary key made of a partition key alone.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SimpleKey<T> {
    pub partition: PartitionKey<T>,
}

/// CompositeKey is a primary key made of a partition key and a sort key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CompositeKey<T, S> {
    pub partition: PartitionKey<T>,
    pub sort: SortKey<S>,
}

impl<T> SimpleKey<T> {
    pub fn new(name: impl Into<String>, value: T) -> Self {
        SimpleKey {
            partition: PartitionKey(KeyValue::new(name, value)),
        }
    }
}

impl<T, S> CompositeKey<T, S> {
    pub fn new(
        partition_name: impl Into<String>,
        partition_value: T,
        sort_name: impl Into<String>,
        sort_value: S,
    ) -> Self {
        CompositeKey {
            partition: PartitionKey(KeyValue::new(partition_name, partition_value)),
            sort: SortKey(KeyValue::new(sort_name, sort_value)),
        }
    }
}

/// TableKey is implemented by the primary key shapes a table can have.
pub trait TableKey {
    /// Names of the key attributes, partition key first.
    fn attribute_names(&self) -> Vec<&str>;

    /// The key as a record of its attributes.
    fn to_record(&self) -> Record;
}

impl<T> TableKey for SimpleKey<T>
where
    T: Clone + Into<TaggedValue>,
{
    fn attribute_names(&self) -> Vec<&str> {
        vec![self.partition.0.name.as_str()]
    }

    fn to_record(&self) -> Record {
        let pk = &self.partition.0;
        Record::from([(pk.name.clone(), pk.value.clone().into())])
    }
}

impl<T, S> TableKey for CompositeKey<T, S>
where
    T: Clone + Into<TaggedValue>,
    S: Clone + Into<TaggedValue>,
{
    fn attribute_names(&self) -> Vec<&str> {
        vec![self.partition.0.name.as_str(), self.sort.0.name.as_str()]
    }

    fn to_record(&self) -> Record {
        let (pk, sk) = (&self.partition.0, &self.sort.0);
        Record::from([
            (pk.name.clone(), pk.value.clone().into()),
            (sk.name.clone(), sk.value.clone().into()),
        ])
    }
}

/// Entity is a native item stored in a named table under a primary key.
pub trait Entity {
    type Key: TableKey;

    fn key(&self) -> Self::Key;

    fn table_name(&self) -> &str;

    /// The entity's primary key as a record.
    fn key_record(&self) -> Record {
        self.key().to_record()
    }
}

/// Returns the key attributes of `record`. Attributes missing from the record are skipped.
pub fn extract_key(record: &Record, key: &impl TableKey) -> Record {
    key.attribute_names()
        .into_iter()
        .filter_map(|name| record.get_key_value(name))
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect()
}

/// Returns `record` without its key attributes.
///
/// Key attributes cannot be changed in place, so callers strip them before
/// [`find_updates`](crate::record::find_updates) or [`merge`](crate::record::merge).
pub fn strip_key(record: &Record, key: &impl TableKey) -> Record {
    let names = key.attribute_names();
    record
        .iter()
        .filter(|(name, _)| !names.contains(&name.as_str()))
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect()
}
