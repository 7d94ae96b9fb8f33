//! Unit tests for path-based reads and writes.

use rstest::{fixture, rstest};
use serde_json::json;

use super::*;

fn cmap(value: serde_json::Value) -> ConfigMap {
    match value.into() {
        ConfigValue::Map(map) => map,
        other => panic!("fixture must be a map, got {}", other.type_name()),
    }
}

#[fixture]
fn topic() -> ConfigMap {
    cmap(json!({
        "TestModule": {"parm1": "value1"},
        "Customers": {
            "dbHost": "base",
            "dbName": "from_default_js",
            "oauth": {"key": "a_api_key", "secret": "an_api_secret"}
        },
        "EnvOverride": {"parm_number_1": "from_default_js", "parm2": 22}
    }))
}

#[rstest]
fn ignores_null_values(mut topic: ConfigMap) {
    set_path(&mut topic, &["Customers", "oauth", "secret"], ConfigValue::Null);
    assert_eq!(
        get_path(&topic, &["Customers", "oauth", "secret"]),
        Some(&ConfigValue::from("an_api_secret")),
    );
}

#[rstest]
fn ignores_an_empty_path(mut topic: ConfigMap) {
    let before = topic.clone();
    set_path(&mut topic, &[] as &[&str], ConfigValue::from("NEW_VALUE"));
    assert_eq!(topic, before);
}

#[rstest]
fn creates_top_level_keys(mut topic: ConfigMap) {
    set_path(&mut topic, &["NewKey"], ConfigValue::from("NEW_VALUE"));
    assert_eq!(topic.get("NewKey"), Some(&ConfigValue::from("NEW_VALUE")));
}

#[rstest]
fn creates_sub_keys(mut topic: ConfigMap) {
    set_path(&mut topic, &["TestModule", "oauth"], ConfigValue::from("NEW_VALUE"));
    assert_eq!(
        get_path(&topic, &["TestModule", "oauth"]),
        Some(&ConfigValue::from("NEW_VALUE")),
    );
}

#[rstest]
fn creates_missing_parents(mut topic: ConfigMap) {
    set_path(
        &mut topic,
        &["EnvOverride", "oauth", "secret"],
        ConfigValue::from("NEW_VALUE"),
    );
    assert_eq!(
        get_path(&topic, &["EnvOverride", "oauth", "secret"]),
        Some(&ConfigValue::from("NEW_VALUE")),
    );
    // Siblings of the new parent survive.
    assert_eq!(
        get_path(&topic, &["EnvOverride", "parm2"]),
        Some(&ConfigValue::Integer(22)),
    );
}

#[rstest]
fn overwrites_existing_values_including_maps(mut topic: ConfigMap) {
    set_path(&mut topic, &["Customers"], ConfigValue::from("NEW_VALUE"));
    assert_eq!(topic.get("Customers"), Some(&ConfigValue::from("NEW_VALUE")));
}

#[rstest]
fn replaces_a_non_map_intermediate(mut topic: ConfigMap) {
    set_path(
        &mut topic,
        &["Customers", "dbHost", "nested"],
        ConfigValue::from("NEW_VALUE"),
    );
    assert_eq!(
        get_path(&topic, &["Customers", "dbHost", "nested"]),
        Some(&ConfigValue::from("NEW_VALUE")),
    );
}

#[rstest]
fn get_path_resolves_deep_values(topic: ConfigMap) {
    assert_eq!(
        get_path(&topic, &["Customers", "oauth", "key"]),
        Some(&ConfigValue::from("a_api_key")),
    );
    assert_eq!(get_path(&topic, &["Customers", "missing"]), None);
    assert_eq!(get_path(&topic, &["Customers", "dbHost", "deeper"]), None);
    assert_eq!(get_path(&topic, &[] as &[&str]), None);
}
