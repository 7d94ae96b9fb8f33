//! Reading and writing values at dotted key paths.

use crate::value::{ConfigMap, ConfigValue};

/// Set `value` at `path` inside `root`, creating intermediate maps.
///
/// Missing segments are created as empty maps on the way down, and the
/// final segment is overwritten unconditionally, including replacing a
/// previously nested map with a scalar. Two cases are deliberate no-ops:
/// a `Null` value (null overrides must never clobber configured values)
/// and an empty path. A non-map value sitting on an intermediate segment
/// is replaced by a fresh map so the write always lands.
///
/// # Examples
///
/// ```
/// use strata_config::{set_path, ConfigMap, ConfigValue};
///
/// let mut root = ConfigMap::new();
/// set_path(&mut root, &["db", "host"], ConfigValue::from("localhost"));
/// assert_eq!(
///     root["db"].get("host"),
///     Some(&ConfigValue::from("localhost")),
/// );
///
/// set_path(&mut root, &["db", "host"], ConfigValue::Null);
/// assert_eq!(
///     root["db"].get("host"),
///     Some(&ConfigValue::from("localhost")),
/// );
/// ```
pub fn set_path(root: &mut ConfigMap, path: &[impl AsRef<str>], value: ConfigValue) {
    if value.is_null() {
        return;
    }
    let Some((last, intermediate)) = path.split_last() else {
        return;
    };
    let mut cursor = root;
    for segment in intermediate {
        let slot = cursor
            .entry(segment.as_ref().to_owned())
            .or_insert_with(ConfigValue::map);
        if !slot.is_map() {
            *slot = ConfigValue::map();
        }
        let Some(next) = slot.as_map_mut() else {
            return;
        };
        cursor = next;
    }
    cursor.insert(last.as_ref().to_owned(), value);
}

/// Borrow the value at `path` inside `root`, if every segment resolves.
///
/// Returns `None` for an empty path, a missing segment, or a non-map
/// value encountered before the final segment.
#[must_use]
pub fn get_path<'a>(root: &'a ConfigMap, path: &[impl AsRef<str>]) -> Option<&'a ConfigValue> {
    let (first, rest) = path.split_first()?;
    let mut current = root.get(first.as_ref())?;
    for segment in rest {
        current = current.get(segment.as_ref())?;
    }
    Some(current)
}

#[cfg(test)]
mod tests;
