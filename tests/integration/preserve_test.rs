//! Integration tests for key preservation
//!
//! A preserved mapping keeps its own keys through a rewrite while every
//! container nested inside it is rewritten normally.

use assert_matches::assert_matches;
use keycase::{
    mark_keys_preserved, mark_pointer_preserved, to_camel_case, to_snake_case, ConversionErrorKind,
    Entries, Key, Opaque, RewriteConfig, RewriteEngine, Value,
};
use pretty_assertions::assert_eq;
use serde_json::json;

fn entries<const N: usize>(pairs: [(&str, Value); N]) -> Entries {
    pairs.into_iter().map(|(k, v)| (Key::from(k), v)).collect()
}

#[test]
fn test_preserved_keys_nested_rewritten() {
    let protected = mark_keys_preserved(Value::from(json!({
        "title_display": 1,
        "nested": {"test_field": 1}
    })))
    .unwrap();
    let input = Value::map([("an_int", Value::Int(42)), ("protected", protected)]);

    let result = to_camel_case(&input);

    assert_eq!(
        result.to_json().unwrap(),
        json!({
            "anInt": 42,
            "protected": {"title_display": 1, "nested": {"testField": 1}}
        })
    );
    let protected = result.get("protected").unwrap();
    assert_matches!(protected, Value::Preserved(_));
    assert_matches!(protected.get("nested"), Some(Value::Map(_)));
}

#[test]
fn test_preserved_keys_under_snake() {
    let protected = mark_keys_preserved(Value::from(json!({
        "keepThis": {"renameThis": 1}
    })))
    .unwrap();
    let input = Value::map([("outerKey", protected)]);

    assert_eq!(
        to_snake_case(&input).to_json().unwrap(),
        json!({"outer_key": {"keepThis": {"rename_this": 1}}})
    );
}

#[test]
fn test_preserved_root() {
    let input = mark_keys_preserved(Value::from(json!({"snake_key": [{"inner_key": 1}]}))).unwrap();
    let result = to_camel_case(&input);

    assert_eq!(
        result.to_json().unwrap(),
        json!({"snake_key": [{"innerKey": 1}]})
    );
    assert!(result.is_keys_preserved());
}

#[test]
fn test_marking_preserved_returns_same_variant() {
    let once = mark_keys_preserved(Value::from(json!({"a_b": 1}))).unwrap();
    let twice = mark_keys_preserved(once).unwrap();
    assert_matches!(twice, Value::Preserved(_));
}

#[test]
fn test_tagged_flag_preserves_keys_and_tag() {
    let tag = Opaque::new("serializer");
    let marked = mark_keys_preserved(Value::tagged_map(
        tag.clone(),
        entries([("title_display", Value::Int(1)), ("child_map", Value::from(json!({"x_y": 2})))]),
    ))
    .unwrap();

    let result = to_camel_case(&marked);

    assert_matches!(
        &result,
        Value::TaggedMap { map, preserve_keys: true } if map.tag.same_as(&tag)
    );
    assert_eq!(
        result.to_json().unwrap(),
        json!({"title_display": 1, "child_map": {"xY": 2}})
    );
}

#[test]
fn test_unmarked_tagged_mapping_is_renamed() {
    let tag = Opaque::new("serializer");
    let input = Value::tagged_map(tag, entries([("title_display", Value::Int(1))]));
    let result = to_camel_case(&input);

    assert!(!result.is_keys_preserved());
    assert_eq!(result.to_json().unwrap(), json!({"titleDisplay": 1}));
}

#[test]
fn test_preserved_integer_keys_become_strings() {
    let input = mark_keys_preserved(Value::map([(Key::Int(10), Value::from("ten"))])).unwrap();
    let result = to_snake_case(&input);

    let keys: Vec<&Key> = result.as_entries().unwrap().keys().collect();
    assert_eq!(keys, vec![&Key::from("10")]);
}

#[test]
fn test_mark_non_mapping_fails() {
    for value in [
        Value::List(vec![]),
        Value::tuple([]),
        Value::tagged_list(Opaque::new(()), vec![]),
        Value::from("text"),
        Value::Null,
    ] {
        let err = mark_keys_preserved(value).unwrap_err();
        assert_matches!(err.kind(), Some(ConversionErrorKind::NotAMapping { .. }));
    }
}

#[test]
fn test_pointer_marks_inside_sequences() {
    let mut value = Value::from(json!({
        "rows": [{"row_id": 1, "cells": {"cell_a": 1}}, {"row_id": 2}]
    }));
    mark_pointer_preserved(&mut value, "/rows/0").unwrap();

    assert_eq!(
        to_camel_case(&value).to_json().unwrap(),
        json!({"rows": [{"row_id": 1, "cells": {"cellA": 1}}, {"rowId": 2}]})
    );
}

#[test]
fn test_engine_preserve_pointers() {
    let config = RewriteConfig::api_response()
        .with_preserved("/meta/labels")
        .with_preserved("/items/1");
    let engine = RewriteEngine::new(config).unwrap();

    let output = engine
        .rewrite_json(&json!({
            "meta": {"labels": {"team_name": "core"}, "page_size": 10},
            "items": [{"item_id": 1}, {"item_id": 2}]
        }))
        .unwrap();

    assert_eq!(
        output.content,
        r#"{"meta":{"labels":{"team_name":"core"},"pageSize":10},"items":[{"itemId":1},{"item_id":2}]}"#
    );
    assert_eq!(output.stats.preserved_mappings, 2);
}
