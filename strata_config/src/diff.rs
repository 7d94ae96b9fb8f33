//! Minimal change-set computation between two configuration maps.

use crate::value::{ConfigMap, ConfigValue};

/// Compute the keys in `b` that differ from, or are absent in, `a`.
///
/// The diff is asymmetric: keys present only in `a` are ignored. Where both
/// sides hold maps the diff recurses, yielding a nested partial map that
/// contains only the changed leaves; sequences are compared as whole units
/// and included verbatim from `b` when unequal. The result is empty iff
/// the two maps are deep-equal.
///
/// # Examples
///
/// ```
/// use strata_config::{diff_deep, ConfigValue};
///
/// let a: ConfigValue = serde_json::json!({"hello": "wurld", "v": 14}).into();
/// let b: ConfigValue = serde_json::json!({"hello": "world", "v": 14}).into();
///
/// let diff = diff_deep(
///     a.as_map().unwrap(),
///     b.as_map().unwrap(),
/// );
/// assert_eq!(diff.len(), 1);
/// assert_eq!(diff["hello"], ConfigValue::from("world"));
/// ```
#[must_use]
pub fn diff_deep(a: &ConfigMap, b: &ConfigMap) -> ConfigMap {
    let mut changes = ConfigMap::new();
    for (key, after) in b {
        match a.get(key) {
            Some(before) if before == after => {}
            Some(ConfigValue::Map(before)) => {
                if let ConfigValue::Map(after_map) = after {
                    changes.insert(key.clone(), ConfigValue::Map(diff_deep(before, after_map)));
                } else {
                    changes.insert(key.clone(), after.clone());
                }
            }
            _ => {
                changes.insert(key.clone(), after.clone());
            }
        }
    }
    changes
}

#[cfg(test)]
mod tests;
