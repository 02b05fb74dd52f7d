//! Integration tests for recursive key rewriting
//!
//! Tests cover:
//! - snake_case to camelCase over mappings, lists, tuples and nesting
//! - camelCase to snake_case over the same shapes
//! - Integer keys, tagged containers and round-trip compatibility

use keycase::{to_camel_case, to_snake_case, Key, Opaque, Value};
use serde_json::json;

fn map<const N: usize>(entries: [(&str, Value); N]) -> Value {
    Value::map(entries)
}

fn int(i: i64) -> Value {
    Value::Int(i)
}

fn s(text: &str) -> Value {
    Value::from(text)
}

/// Stand-in for a framework serializer attached to response containers
#[derive(Debug)]
struct Serializer {
    name: &'static str,
}

#[cfg(test)]
mod under_to_camel_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_under_to_camel_dict() {
        let input = map([("title_display", int(1))]);
        let result = to_camel_case(&input);

        assert_eq!(result, map([("titleDisplay", int(1))]));
        assert_eq!(input, map([("title_display", int(1))]), "input must be left alone");
    }

    #[test]
    fn test_under_to_camel_list() {
        let input = Value::List(vec![map([("title_display", int(1))])]);
        let result = to_camel_case(&input);

        assert_eq!(result, Value::List(vec![map([("titleDisplay", int(1))])]));
        assert!(matches!(result, Value::List(_)));
    }

    #[test]
    fn test_under_to_camel_tuple() {
        let input = Value::tuple([map([("title_display", int(1))])]);
        let result = to_camel_case(&input);

        assert_eq!(result, Value::tuple([map([("titleDisplay", int(1))])]));
        assert!(matches!(&result, Value::Tuple(items) if items.len() == 1));
    }

    #[test]
    fn test_under_to_camel_nested() {
        let input = map([
            ("title_display", int(1)),
            ("a_list", Value::List(vec![int(1), s("two_three"), map([("three_four", int(5))])])),
            ("a_tuple", Value::tuple([s("one_two"), int(3)])),
        ]);
        let output = map([
            ("titleDisplay", int(1)),
            ("aList", Value::List(vec![int(1), s("two_three"), map([("threeFour", int(5))])])),
            ("aTuple", Value::tuple([s("one_two"), int(3)])),
        ]);

        assert_eq!(to_camel_case(&input), output);
    }

    #[test]
    fn test_tuples() {
        let input = map([("multiple_values", Value::tuple([int(1), int(2)]))]);
        let output = map([("multipleValues", Value::tuple([int(1), int(2)]))]);
        assert_eq!(to_camel_case(&input), output);
    }

    #[test]
    fn test_integer_key() {
        let input = Value::map([(Key::Int(1), int(1))]);
        let result = to_camel_case(&input);

        assert_eq!(result, map([("1", int(1))]));
        assert!(result.as_entries().unwrap().contains_key(&Key::from("1")));
        assert!(!result.as_entries().unwrap().contains_key(&Key::Int(1)));
    }

    #[test]
    fn test_under_to_camel_tagged_dict() {
        let tag = Opaque::new(Serializer { name: "UserSerializer" });
        let input = Value::tagged_map(
            tag.clone(),
            [(Key::from("title_display"), int(1))].into_iter().collect(),
        );
        let result = to_camel_case(&input);

        assert_eq!(result, map([("titleDisplay", int(1))]));
        assert!(matches!(result, Value::TaggedMap { .. }));
        assert!(result.tag().unwrap().same_as(&tag));
        assert_eq!(
            result.tag().unwrap().downcast_ref::<Serializer>().unwrap().name,
            "UserSerializer"
        );
    }

    #[test]
    fn test_top_level_keys_are_lower_camel() {
        let input = Value::from(json!({
            "first_name": 1,
            "last_name_of_user": 2,
            "x": 3,
            "already_camel_ok": 4
        }));
        let result = to_camel_case(&input);
        let entries = result.as_entries().unwrap();

        assert_eq!(entries.len(), 4);
        for key in entries.keys() {
            let text = key.as_text();
            assert!(!text.contains('_'), "{} still has an underscore", text);
            assert!(text.chars().next().unwrap().is_ascii_lowercase());
        }
    }
}

#[cfg(test)]
mod camel_to_under_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_camel_to_under_dict() {
        let input = map([("titleDisplay", int(1))]);
        assert_eq!(to_snake_case(&input), map([("title_display", int(1))]));
    }

    #[test]
    fn test_camel_to_under_list() {
        let input = Value::List(vec![map([("titleDisplay", int(1))])]);
        assert_eq!(
            to_snake_case(&input),
            Value::List(vec![map([("title_display", int(1))])])
        );
    }

    #[test]
    fn test_camel_to_under_tuple() {
        let input = Value::tuple([map([("titleDisplay", int(1))])]);
        let result = to_snake_case(&input);
        assert_eq!(result, Value::tuple([map([("title_display", int(1))])]));
    }

    #[test]
    fn test_camel_to_under_nested() {
        let input = map([
            ("titleDisplay", int(1)),
            ("aList", Value::List(vec![int(1), s("two_three"), map([("threeFour", int(5))])])),
            ("aTuple", Value::tuple([s("one_two"), int(3)])),
        ]);
        let output = map([
            ("title_display", int(1)),
            ("a_list", Value::List(vec![int(1), s("two_three"), map([("three_four", int(5))])])),
            ("a_tuple", Value::tuple([s("one_two"), int(3)])),
        ]);
        assert_eq!(to_snake_case(&input), output);
    }

    #[test]
    fn test_integer_key() {
        let input = Value::List(vec![Value::map([(Key::Int(1), int(1))])]);
        assert_eq!(
            to_snake_case(&input),
            Value::List(vec![map([("1", int(1))])])
        );
    }

    #[test]
    fn test_acronyms_and_hyphens() {
        let input = Value::from(json!({"IOError": 1, "content-type": 2, "HTTPServer": 3}));
        assert_eq!(
            to_snake_case(&input).to_json().unwrap(),
            json!({"io_error": 1, "content_type": 2, "http_server": 3})
        );
    }
}

#[cfg(test)]
mod compatibility_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_compatibility() {
        let input = map([
            ("title_display", int(1)),
            ("a_list", Value::List(vec![int(1), s("two_three"), map([("three_four", int(5))])])),
            ("a_tuple", Value::tuple([s("one_two"), int(3)])),
        ]);
        assert_eq!(to_snake_case(&to_camel_case(&input)), input);
    }

    #[test]
    fn test_acronym_does_not_round_trip() {
        let input = map([("IOError", int(1))]);
        let round_trip = to_camel_case(&to_snake_case(&input));
        assert_eq!(round_trip, map([("ioError", int(1))]));
        assert_ne!(round_trip, input);
    }

    #[test]
    fn test_tag_identity_through_nested_tagged_sequences() {
        let outer_tag = Opaque::new(Serializer { name: "ListSerializer" });
        let inner_tag = Opaque::new(Serializer { name: "ItemSerializer" });
        let item = Value::tagged_map(
            inner_tag.clone(),
            [(Key::from("item_name"), s("widget"))].into_iter().collect(),
        );
        let input = Value::tagged_list(outer_tag.clone(), vec![item.clone(), item]);

        let result = to_camel_case(&input);

        assert!(result.tag().unwrap().same_as(&outer_tag));
        let items = result.as_items().unwrap();
        assert_eq!(items.len(), 2);
        for item in items {
            assert!(item.tag().unwrap().same_as(&inner_tag));
            assert_eq!(item.get("itemName"), Some(&s("widget")));
        }
    }

    #[test]
    fn test_children_of_tagged_containers_are_untagged() {
        let tag = Opaque::new(());
        let input = Value::tagged_list(tag, vec![map([("a_b", int(1))])]);
        let result = to_camel_case(&input);

        let child = &result.as_items().unwrap()[0];
        assert!(child.tag().is_none());
        assert!(matches!(child, Value::Map(_)));
    }

    #[test]
    fn test_input_is_not_mutated() {
        let input = Value::from(json!({
            "outer_key": [{"inner_key": [1, {"deep_key": null}]}]
        }));
        let snapshot = input.to_json().unwrap();

        let _ = to_camel_case(&input);
        let _ = to_snake_case(&input);

        assert_eq!(input.to_json().unwrap(), snapshot);
    }

    #[test]
    fn test_opaque_scalars_are_shared() {
        let handle = Opaque::new(vec![1, 2, 3]);
        let input = map([("raw_blob", Value::Opaque(handle.clone()))]);
        let result = to_camel_case(&input);

        assert!(matches!(result.get("rawBlob"), Some(Value::Opaque(o)) if o.same_as(&handle)));
    }

    #[test]
    fn test_deep_mixed_nesting() {
        let mut value = int(0);
        for depth in 0..200 {
            value = if depth % 2 == 0 {
                map([("next_level", value)])
            } else {
                Value::tuple([value])
            };
        }

        let camel = to_camel_case(&value);
        assert_eq!(to_snake_case(&camel), value);
    }
}
