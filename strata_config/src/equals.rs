//! Deep structural equality.
//!
//! Structural comparison of two configuration trees lives on
//! `ConfigValue`'s `PartialEq` impl; [`equals_deep`] adds the operand-level
//! contract the loader relies on: absent and null operands never compare
//! equal to anything, and identical references short-circuit before any
//! recursion.

use crate::value::{ConfigValue, Kind, classify};

/// Compare two possibly-absent configuration values structurally.
///
/// Rules:
/// - If either operand is absent or the null sentinel, the result is
///   `false` — including `null` against `null`. The guard applies to the
///   operands only; nulls nested inside two maps compare equal as values.
/// - Identical references compare equal without recursion.
/// - Maps are equal when they hold the same keys (in any order) mapped to
///   equal values; sequences when they are pairwise equal in order.
/// - Leaves use strict value equality: `NaN` never equals `NaN`, and
///   callables compare by reference identity.
///
/// # Examples
///
/// ```
/// use strata_config::{equals_deep, ConfigValue};
///
/// let a: ConfigValue = serde_json::json!({"hello": "world", "v": 14}).into();
/// let b: ConfigValue = serde_json::json!({"v": 14, "hello": "world"}).into();
/// assert!(equals_deep(&a, &b));
/// assert!(!equals_deep(&a, None));
/// assert!(!equals_deep(&ConfigValue::Null, &ConfigValue::Null));
/// ```
pub fn equals_deep<'a>(
    a: impl Into<Option<&'a ConfigValue>>,
    b: impl Into<Option<&'a ConfigValue>>,
) -> bool {
    let (Some(left), Some(right)) = (a.into(), b.into()) else {
        return false;
    };
    if matches!(classify(left), Kind::Null) || matches!(classify(right), Kind::Null) {
        return false;
    }
    if std::ptr::eq(left, right) {
        return true;
    }
    left == right
}
