//! Unit tests for the deep diff.

use rstest::rstest;
use serde_json::json;

use super::*;

fn cmap(value: serde_json::Value) -> ConfigMap {
    match value.into() {
        ConfigValue::Map(map) => map,
        other => panic!("fixture must be a map, got {}", other.type_name()),
    }
}

#[rstest]
fn returns_an_empty_map_when_nothing_differs() {
    let a = cmap(json!({"value_3": 14, "hello": "world", "value_1": 29}));
    let b = cmap(json!({"value_1": 29, "hello": "world", "value_3": 14}));
    assert!(diff_deep(&a, &b).is_empty());
}

#[rstest]
fn returns_an_empty_map_when_nothing_differs_deeply() {
    let a = cmap(json!({
        "value_3": 14,
        "value_4": [1, "hello", 2],
        "deepObj": {"a": 22, "b": {"c": 45, "a": 44}}
    }));
    let b = cmap(json!({
        "value_4": [1, "hello", 2],
        "value_3": 14,
        "deepObj": {"a": 22, "b": {"a": 44, "c": 45}}
    }));
    assert!(diff_deep(&a, &b).is_empty());
}

#[rstest]
fn diff_with_itself_is_empty() {
    let a = cmap(json!({"nested": {"x": [1, 2]}, "leaf": true}));
    assert!(diff_deep(&a, &a).is_empty());
}

#[rstest]
fn returns_just_the_changed_values() {
    let a = cmap(json!({
        "value_3": 14,
        "hello": "wurld",
        "value_1": 29,
        "deepObj": {"a": 22, "b": {"c": 45, "a": 44}}
    }));
    let b = cmap(json!({
        "value_1": 29,
        "hello": "world",
        "value_3": 14,
        "deepObj": {"a": 22, "b": {"a": 44, "c": 45}}
    }));
    let diff = diff_deep(&a, &b);
    assert_eq!(diff.len(), 1);
    assert_eq!(diff.get("hello"), Some(&ConfigValue::from("world")));
}

#[rstest]
fn nested_differences_mirror_the_original_paths() {
    let a = cmap(json!({
        "value_3": 14,
        "hello": "wurld",
        "value_4": [1, "hello", 2],
        "deepObj": {"a": 22, "b": {"c": 45, "a": 44}}
    }));
    let b = cmap(json!({
        "hello": "wurld",
        "value_3": 14,
        "value_4": [1, "goodbye", 2],
        "deepObj": {"a": 22, "b": {"a": 45, "c": 44}}
    }));
    let diff = diff_deep(&a, &b);
    assert_eq!(diff.len(), 2);

    let deep = diff.get("deepObj").and_then(ConfigValue::as_map);
    let inner = deep
        .and_then(|map| map.get("b"))
        .and_then(ConfigValue::as_map);
    assert_eq!(deep.map(ConfigMap::len), Some(1));
    assert_eq!(inner.map(ConfigMap::len), Some(2));
    assert_eq!(
        inner.and_then(|map| map.get("a")),
        Some(&ConfigValue::Integer(45)),
    );
    assert_eq!(
        inner.and_then(|map| map.get("c")),
        Some(&ConfigValue::Integer(44)),
    );
    // Sequences are compared as whole units and included verbatim.
    assert_eq!(
        diff.get("value_4"),
        Some(&ConfigValue::from(json!([1, "goodbye", 2]))),
    );
}

#[rstest]
fn keys_only_in_b_are_additions() {
    let a = cmap(json!({"keep": 1}));
    let b = cmap(json!({"keep": 1, "added": {"x": true}}));
    let diff = diff_deep(&a, &b);
    assert_eq!(diff.len(), 1);
    assert_eq!(diff.get("added"), Some(&ConfigValue::from(json!({"x": true}))));
}

#[rstest]
fn keys_only_in_a_are_ignored() {
    let a = cmap(json!({"keep": 1, "dropped": 2}));
    let b = cmap(json!({"keep": 1}));
    assert!(diff_deep(&a, &b).is_empty());
}

#[rstest]
fn type_changes_take_the_value_from_b() {
    let a = cmap(json!({"elem": {"sub": 1}}));
    let b = cmap(json!({"elem": "scalar"}));
    let diff = diff_deep(&a, &b);
    assert_eq!(diff.get("elem"), Some(&ConfigValue::from("scalar")));
}
