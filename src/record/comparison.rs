//! Comparison result types.

use crate::value::{structural_equals, Record};
use std::collections::BTreeSet;
use std::fmt;
use tracing::debug;

/// Comparison holds the result of comparing two records key by key.
///
/// No key will appear in more than one of the three sets.
/// If all of the sets are empty, then the records must have been equal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Comparison {
    /// Keys that were in `src` but not in `dest`.
    pub added: BTreeSet<String>,
    /// Keys that were in `dest` but not in `src`.
    pub removed: BTreeSet<String>,
    /// Keys that were in both but had different values.
    pub modified: BTreeSet<String>,
}

impl Comparison {
    /// Creates a new empty Comparison.
    pub fn new() -> Self {
        Comparison::default()
    }

    /// Returns true if there are no changes.
    pub fn is_same(&self) -> bool {
        self.removed.is_empty() && self.modified.is_empty() && self.added.is_empty()
    }

    /// Excludes the given keys from the comparison result.
    pub fn exclude_keys<'a>(&mut self, keys: impl IntoIterator<Item = &'a str>) {
        for key in keys {
            self.added.remove(key);
            self.removed.remove(key);
            self.modified.remove(key);
        }
    }

    /// Returns true if any keys were removed.
    pub fn has_removed(&self) -> bool {
        !self.removed.is_empty()
    }

    /// Returns true if any keys were modified.
    pub fn has_modified(&self) -> bool {
        !self.modified.is_empty()
    }

    /// Returns true if any keys were added.
    pub fn has_added(&self) -> bool {
        !self.added.is_empty()
    }
}

/// Classifies every key of `src` and `dest` as added, removed, modified or unchanged.
///
/// `src` is the newer snapshot. The modified set holds exactly the keys that
/// [`find_updates`](super::find_updates) returns. Passing two flattened values
/// compares them leaf by leaf.
pub fn compare_records(src: &Record, dest: &Record) -> Comparison {
    let mut comparison = Comparison::new();

    for (key, value) in src {
        match dest.get(key) {
            None => {
                comparison.added.insert(key.clone());
            }
            Some(current) if !structural_equals(value, current) => {
                comparison.modified.insert(key.clone());
            }
            Some(_) => {}
        }
    }
    for key in dest.keys() {
        if !src.contains_key(key) {
            comparison.removed.insert(key.clone());
        }
    }

    debug!(
        added = comparison.added.len(),
        removed = comparison.removed.len(),
        modified = comparison.modified.len(),
        "compared records"
    );
    comparison
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sections = [
            ("Modified Fields", &self.modified),
            ("Added Fields", &self.added),
            ("Removed Fields", &self.removed),
        ];

        let mut first = true;
        for (title, keys) in sections {
            if keys.is_empty() {
                continue;
            }
            if !first {
                writeln!(f)?;
            }
            first = false;
            write!(f, "- {}:", title)?;
            for key in keys {
                write!(f, "\n  {}", key)?;
            }
        }

        Ok(())
    }
}
