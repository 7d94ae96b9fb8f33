//! Deep merge of configuration fragments.
//!
//! Maps merge key by key, recursing into nested maps so untouched sibling
//! keys survive. Every other kind — sequences, leaves and the null
//! sentinel — is atomic: the source value is deep-cloned and overwrites the
//! target wholesale. Arrays are never merged element-wise.

use crate::value::ConfigValue;

/// Overlay `source` onto `target`, updating `target` in place.
///
/// Behaviour:
/// - When merging a map into a non-map target, the target is reset to an
///   empty map first.
/// - Maps merge recursively (keys are added or overwritten, nested maps
///   are overlaid).
/// - Sequences, leaves and nulls replace the target wholesale.
///
/// The merge is deterministic and idempotent: overlaying the same source
/// twice yields the same result as overlaying it once.
///
/// # Examples
///
/// ```
/// use strata_config::{merge_value, ConfigValue};
///
/// let mut target: ConfigValue =
///     serde_json::json!({"a": 1, "b": {"x": 1}}).into();
/// let source: ConfigValue =
///     serde_json::json!({"b": {"y": 2}, "c": 3}).into();
/// merge_value(&mut target, &source);
///
/// let expected: ConfigValue =
///     serde_json::json!({"a": 1, "b": {"x": 1, "y": 2}, "c": 3}).into();
/// assert_eq!(target, expected);
/// ```
pub fn merge_value(target: &mut ConfigValue, source: &ConfigValue) {
    match source {
        ConfigValue::Map(entries) => {
            if !target.is_map() {
                *target = ConfigValue::map();
            }
            let Some(target_map) = target.as_map_mut() else {
                return;
            };
            for (key, value) in entries {
                match target_map.get_mut(key) {
                    Some(existing) => merge_value(existing, value),
                    None => {
                        target_map.insert(key.clone(), value.clone());
                    }
                }
            }
        }
        _ => *target = source.clone(),
    }
}

/// Fold `sources` left to right into an empty map seed.
///
/// Later sources take precedence over earlier ones for any overlapping
/// leaf; this is the `merge({}, s1, ..., sn)` pattern the loader uses to
/// build a final configuration.
///
/// # Examples
///
/// ```
/// use strata_config::{merge_layers, ConfigValue};
///
/// let base: ConfigValue =
///     serde_json::json!({"Customers": {"dbHost": "base", "dbName": "d1"}}).into();
/// let overlay: ConfigValue =
///     serde_json::json!({"Customers": {"dbName": "d2", "dbPort": 5984}}).into();
///
/// let merged = merge_layers([&base, &overlay]);
/// let expected: ConfigValue = serde_json::json!({
///     "Customers": {"dbHost": "base", "dbName": "d2", "dbPort": 5984}
/// })
/// .into();
/// assert_eq!(merged, expected);
/// ```
#[must_use]
pub fn merge_layers<'a>(sources: impl IntoIterator<Item = &'a ConfigValue>) -> ConfigValue {
    let mut target = ConfigValue::map();
    for source in sources {
        merge_value(&mut target, source);
    }
    target
}
