//! Reverse lookup from leaf values to the paths that produced them.

use std::collections::BTreeMap;

use indexmap::IndexMap;

use crate::error::{StrataError, StrataResult};
use crate::path::set_path;
use crate::value::{ConfigMap, ConfigValue};

/// Reverse index from a string leaf value to its key path.
pub type InversionIndex = IndexMap<String, Vec<String>>;

/// Build a reverse index mapping every string leaf to its key path.
///
/// Only string leaves and nested maps are invertible: the leaf value
/// becomes an index key, so sequences, booleans, numbers, timestamps,
/// callables and nulls are all rejected wherever they appear in the tree.
/// When two paths carry the same leaf value, the later path (in traversal
/// order) wins.
///
/// # Errors
///
/// Returns [`StrataError::NotInvertible`] naming the dotted path and kind
/// of the first non-invertible value encountered.
///
/// # Examples
///
/// ```
/// use strata_config::{invert_deep, ConfigValue};
///
/// let config: ConfigValue = serde_json::json!({
///     "Customers": {"dbHost": "base"}
/// })
/// .into();
/// let index = invert_deep(config.as_map().unwrap())?;
/// assert_eq!(index["base"], vec!["Customers", "dbHost"]);
/// # Ok::<_, strata_config::StrataError>(())
/// ```
pub fn invert_deep(map: &ConfigMap) -> StrataResult<InversionIndex> {
    let mut index = InversionIndex::new();
    invert_into(map, &mut Vec::new(), &mut index)?;
    Ok(index)
}

fn invert_into(
    map: &ConfigMap,
    trail: &mut Vec<String>,
    index: &mut InversionIndex,
) -> StrataResult<()> {
    for (key, value) in map {
        trail.push(key.clone());
        match value {
            ConfigValue::String(leaf) => {
                index.insert(leaf.clone(), trail.clone());
            }
            ConfigValue::Map(nested) => invert_into(nested, trail, index)?,
            other => {
                return Err(StrataError::NotInvertible {
                    path: trail.join("."),
                    kind: other.type_name(),
                });
            }
        }
        trail.pop();
    }
    Ok(())
}

/// Substitute named variables into the paths of a template map.
///
/// The template is a configuration-shaped map whose string leaves name
/// external variables. Each variable present in `vars` contributes its
/// value at the path that named it; absent variables are skipped. An empty
/// variable table yields an empty map. This is the name-to-path mechanism
/// behind environment-variable overrides.
///
/// # Errors
///
/// Returns [`StrataError::NotInvertible`] when the template holds a value
/// that cannot name a variable (anything but a string leaf or nested map).
pub fn substitute_deep(
    template: &ConfigMap,
    vars: &BTreeMap<String, String>,
) -> StrataResult<ConfigMap> {
    let index = invert_deep(template)?;
    let mut substituted = ConfigMap::new();
    for (name, path) in &index {
        if let Some(value) = vars.get(name) {
            set_path(&mut substituted, path, ConfigValue::from(value.as_str()));
        }
    }
    Ok(substituted)
}
