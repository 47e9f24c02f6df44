//! Path elements used to build flattened keys.

use std::fmt;

/// PathElement represents one level of navigation into a container.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PathElement {
    /// Key of a map entry.
    FieldName(String),
    /// Position in a list.
    Index(usize),
}

impl PathElement {
    /// Creates a new field name path element.
    pub fn field_name(name: impl Into<String>) -> Self {
        PathElement::FieldName(name.into())
    }

    /// Creates a new index path element.
    pub fn index(i: usize) -> Self {
        PathElement::Index(i)
    }

    /// Appends this element to `base`.
    ///
    /// A field name is joined with a `.` unless `base` is empty; an index is
    /// always appended as `[i]`, so an empty base yields `[0]`.
    pub fn child_of(&self, base: &str) -> String {
        match self {
            PathElement::FieldName(name) if base.is_empty() => name.clone(),
            _ => format!("{}{}", base, self),
        }
    }
}

impl fmt::Display for PathElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathElement::FieldName(name) => write!(f, ".{}", name),
            PathElement::Index(i) => write!(f, "[{}]", i),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_name_child() {
        let pe = PathElement::field_name("Foo");
        assert_eq!(pe.child_of(""), "Foo");
        assert_eq!(pe.child_of("SubStruct"), "SubStruct.Foo");
        assert_eq!(pe.child_of("ListThing[0]"), "ListThing[0].Foo");
    }

    #[test]
    fn test_index_child() {
        let pe = PathElement::index(3);
        assert_eq!(pe.child_of(""), "[3]");
        assert_eq!(pe.child_of("Blip"), "Blip[3]");
        assert_eq!(pe.child_of("a[1]"), "a[1][3]");
    }

    #[test]
    fn test_path_element_display() {
        assert_eq!(PathElement::field_name("a").to_string(), ".a");
        assert_eq!(PathElement::index(0).to_string(), "[0]");
    }
}
