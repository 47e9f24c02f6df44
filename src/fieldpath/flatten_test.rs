//! Tests for flattening nested values.

#[cfg(test)]
mod tests {
    use crate::fieldpath::{flatten, flatten_record, Flattened};
    use crate::value::{Record, TaggedValue};
    use pretty_assertions::assert_eq;

    struct FlattenTestCase {
        name: &'static str,
        base: &'static str,
        content: TaggedValue,
        expected: Vec<(&'static str, TaggedValue)>,
    }

    fn expected_map(entries: Vec<(&'static str, TaggedValue)>) -> Flattened {
        entries.into_iter().map(|(k, v)| (k.to_string(), v)).collect()
    }

    fn run_flatten_test_case(tc: FlattenTestCase) {
        assert_eq!(
            flatten(&tc.content, tc.base),
            expected_map(tc.expected),
            "flatten mismatch for {}",
            tc.name
        );
    }

    fn complex_struct() -> TaggedValue {
        TaggedValue::map([
            ("Name", TaggedValue::string("jonathan")),
            ("IntVal", TaggedValue::number(6512)),
            (
                "SubStruct",
                TaggedValue::map([
                    ("Foo", TaggedValue::string("absolutely")),
                    ("Bar", TaggedValue::bool(true)),
                ]),
            ),
            (
                "ListThing",
                TaggedValue::list([TaggedValue::map([
                    (
                        "Blip",
                        TaggedValue::list([
                            TaggedValue::number(51.2),
                            TaggedValue::number(512.94123),
                        ]),
                    ),
                    ("Davey", TaggedValue::number(15u8)),
                ])]),
            ),
        ])
    }

    #[test]
    fn test_flatten_complex_struct() {
        run_flatten_test_case(FlattenTestCase {
            name: "complex struct",
            base: "",
            content: complex_struct(),
            expected: vec![
                ("Name", TaggedValue::string("jonathan")),
                ("IntVal", TaggedValue::Number("6512".into())),
                ("SubStruct.Foo", TaggedValue::string("absolutely")),
                ("SubStruct.Bar", TaggedValue::Bool(true)),
                ("ListThing[0].Blip[0]", TaggedValue::Number("51.2".into())),
                ("ListThing[0].Blip[1]", TaggedValue::Number("512.94123".into())),
                ("ListThing[0].Davey", TaggedValue::Number("15".into())),
            ],
        });
    }

    #[test]
    fn test_flatten_with_base_path() {
        run_flatten_test_case(FlattenTestCase {
            name: "nested under base",
            base: "root",
            content: TaggedValue::map([
                ("a", TaggedValue::number(1)),
                ("b", TaggedValue::list([TaggedValue::string("x")])),
            ]),
            expected: vec![
                ("root.a", TaggedValue::number(1)),
                ("root.b[0]", TaggedValue::string("x")),
            ],
        });
    }

    #[test]
    fn test_flatten_scalars() {
        run_flatten_test_case(FlattenTestCase {
            name: "string leaf",
            base: "",
            content: TaggedValue::string("x"),
            expected: vec![("", TaggedValue::string("x"))],
        });
        run_flatten_test_case(FlattenTestCase {
            name: "null leaf with base",
            base: "gone",
            content: TaggedValue::null(),
            expected: vec![("gone", TaggedValue::Null(true))],
        });
    }

    #[test]
    fn test_flatten_sets_are_leaves() {
        run_flatten_test_case(FlattenTestCase {
            name: "sets",
            base: "",
            content: TaggedValue::map([
                ("tags", TaggedValue::string_set(["a", "b"])),
                ("scores", TaggedValue::number_set([1, 2])),
                ("blobs", TaggedValue::byte_set([vec![1u8]])),
            ]),
            expected: vec![
                ("tags", TaggedValue::string_set(["a", "b"])),
                ("scores", TaggedValue::number_set([1, 2])),
                ("blobs", TaggedValue::byte_set([vec![1u8]])),
            ],
        });
    }

    #[test]
    fn test_flatten_top_level_list() {
        run_flatten_test_case(FlattenTestCase {
            name: "list at root",
            base: "",
            content: TaggedValue::list([
                TaggedValue::bool(false),
                TaggedValue::list([TaggedValue::number(7)]),
                TaggedValue::map([("k", TaggedValue::string("v"))]),
            ]),
            expected: vec![
                ("[0]", TaggedValue::bool(false)),
                ("[1][0]", TaggedValue::number(7)),
                ("[2].k", TaggedValue::string("v")),
            ],
        });
    }

    #[test]
    fn test_flatten_empty_containers() {
        run_flatten_test_case(FlattenTestCase {
            name: "empty containers",
            base: "",
            content: TaggedValue::map([
                ("none", TaggedValue::List(vec![])),
                ("nothing", TaggedValue::Map(Default::default())),
                ("kept", TaggedValue::bool(true)),
            ]),
            expected: vec![("kept", TaggedValue::bool(true))],
        });
    }

    #[test]
    fn test_flatten_record() {
        let mut record = Record::new();
        record.insert("id".into(), TaggedValue::string("abc"));
        record.insert(
            "meta".into(),
            TaggedValue::map([("count", TaggedValue::number(3))]),
        );

        assert_eq!(
            flatten_record(&record),
            expected_map(vec![
                ("id", TaggedValue::string("abc")),
                ("meta.count", TaggedValue::number(3)),
            ])
        );
    }

    #[test]
    fn test_flatten_path_collision_keeps_last_visited() {
        // "a" sorts before "a.b", so the literal dotted key is visited last.
        run_flatten_test_case(FlattenTestCase {
            name: "colliding paths",
            base: "",
            content: TaggedValue::map([
                ("a.b", TaggedValue::number(1)),
                ("a", TaggedValue::map([("b", TaggedValue::number(2))])),
            ]),
            expected: vec![("a.b", TaggedValue::number(1))],
        });
    }
}
