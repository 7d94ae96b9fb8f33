//! The structured value type shared by every engine operation.
//!
//! Configuration fragments arrive from collaborators as already-decoded
//! [`ConfigValue`] trees. Maps are insertion-ordered, sequences and leaves
//! are atomic during merging, and [`classify`] assigns every value (present
//! or absent) exactly one [`Kind`].

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;

mod de;

/// Insertion-ordered keyed container used for the `Map` variant.
pub type ConfigMap = IndexMap<String, ConfigValue>;

/// An opaque, shared, zero-argument function stored as a configuration leaf.
///
/// Callables are atomic from the engine's perspective: cloning copies the
/// shared reference rather than the function, and equality is identity of
/// that reference.
#[derive(Clone)]
pub struct Callable(Arc<dyn Fn() -> ConfigValue + Send + Sync + 'static>);

impl Callable {
    /// Wrap a function as a configuration leaf.
    pub fn new(f: impl Fn() -> ConfigValue + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    /// Invoke the wrapped function.
    #[must_use]
    pub fn call(&self) -> ConfigValue {
        (self.0)()
    }
}

impl PartialEq for Callable {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Callable(..)")
    }
}

/// A decoded configuration value.
///
/// Cloning is deep: the copy shares no mutable substructure with the
/// original ([`Callable`] leaves share their underlying function by
/// reference, which is the intended copy semantics for opaque leaves).
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigValue {
    /// The explicit null sentinel.
    Null,
    /// A boolean leaf.
    Bool(bool),
    /// A signed integer leaf.
    Integer(i64),
    /// A floating-point leaf. `NaN` never compares equal to itself.
    Float(f64),
    /// A string leaf.
    String(String),
    /// A timestamp leaf.
    DateTime(DateTime<Utc>),
    /// An opaque function leaf, compared and copied by reference.
    Callable(Callable),
    /// An ordered list, treated as a whole unit during merge and diff.
    Sequence(Vec<ConfigValue>),
    /// An insertion-ordered keyed container, merged key by key.
    Map(ConfigMap),
}

/// Classification of a possibly-absent value.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Kind {
    /// No value is present at all.
    Undefined,
    /// The explicit null sentinel.
    Null,
    /// An atomic value: boolean, number, string, timestamp or callable.
    Leaf,
    /// An ordered list.
    Sequence,
    /// A keyed container.
    Map,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Undefined => "undefined",
            Self::Null => "null",
            Self::Leaf => "leaf",
            Self::Sequence => "sequence",
            Self::Map => "map",
        })
    }
}

/// Classify a value, treating an absent value as [`Kind::Undefined`].
///
/// The classification is total: every input maps to exactly one [`Kind`].
///
/// # Examples
///
/// ```
/// use strata_config::{classify, ConfigValue, Kind};
///
/// assert_eq!(classify(None), Kind::Undefined);
/// assert_eq!(classify(&ConfigValue::Null), Kind::Null);
/// assert_eq!(classify(&ConfigValue::from("text")), Kind::Leaf);
/// ```
pub fn classify<'a>(value: impl Into<Option<&'a ConfigValue>>) -> Kind {
    value.into().map_or(Kind::Undefined, ConfigValue::kind)
}

impl ConfigValue {
    /// Create an empty map value.
    #[must_use]
    pub fn map() -> Self {
        Self::Map(ConfigMap::new())
    }

    /// Returns the [`Kind`] of this value.
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Self::Null => Kind::Null,
            Self::Sequence(_) => Kind::Sequence,
            Self::Map(_) => Kind::Map,
            Self::Bool(_)
            | Self::Integer(_)
            | Self::Float(_)
            | Self::String(_)
            | Self::DateTime(_)
            | Self::Callable(_) => Kind::Leaf,
        }
    }

    /// Human-readable name of the concrete variant, used in diagnostics.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::DateTime(_) => "datetime",
            Self::Callable(_) => "callable",
            Self::Sequence(_) => "sequence",
            Self::Map(_) => "map",
        }
    }

    /// Returns `true` when this value is a map.
    #[must_use]
    pub const fn is_map(&self) -> bool {
        matches!(self, Self::Map(_))
    }

    /// Returns `true` when this value is the null sentinel.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Borrow the underlying map, if this value is one.
    #[must_use]
    pub const fn as_map(&self) -> Option<&ConfigMap> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Mutably borrow the underlying map, if this value is one.
    #[must_use]
    pub const fn as_map_mut(&mut self) -> Option<&mut ConfigMap> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Borrow the underlying sequence, if this value is one.
    #[must_use]
    pub fn as_sequence(&self) -> Option<&[Self]> {
        match self {
            Self::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Borrow the underlying string, if this value is one.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the boolean value, if this leaf is one.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(flag) => Some(*flag),
            _ => None,
        }
    }

    /// Returns the integer value, if this leaf is one.
    #[must_use]
    pub const fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(number) => Some(*number),
            _ => None,
        }
    }

    /// Look up a key on a map value. Returns `None` for non-map values.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Self> {
        self.as_map().and_then(|map| map.get(key))
    }
}

impl Default for ConfigValue {
    fn default() -> Self {
        Self::map()
    }
}

impl From<bool> for ConfigValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for ConfigValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for ConfigValue {
    fn from(value: i32) -> Self {
        Self::Integer(value.into())
    }
}

impl From<f64> for ConfigValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<DateTime<Utc>> for ConfigValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::DateTime(value)
    }
}

impl From<Callable> for ConfigValue {
    fn from(value: Callable) -> Self {
        Self::Callable(value)
    }
}

impl From<Vec<ConfigValue>> for ConfigValue {
    fn from(items: Vec<ConfigValue>) -> Self {
        Self::Sequence(items)
    }
}

impl From<ConfigMap> for ConfigValue {
    fn from(map: ConfigMap) -> Self {
        Self::Map(map)
    }
}

impl From<serde_json::Value> for ConfigValue {
    /// Convert a decoded JSON tree, preserving object key order.
    ///
    /// JSON numbers that fit `i64` become [`ConfigValue::Integer`]; all
    /// other numbers become [`ConfigValue::Float`].
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(flag) => Self::Bool(flag),
            serde_json::Value::Number(number) => number
                .as_i64()
                .map_or_else(|| Self::Float(number.as_f64().unwrap_or(f64::NAN)), Self::Integer),
            serde_json::Value::String(text) => Self::String(text),
            serde_json::Value::Array(items) => {
                Self::Sequence(items.into_iter().map(Self::from).collect())
            }
            serde_json::Value::Object(entries) => Self::Map(
                entries
                    .into_iter()
                    .map(|(key, entry)| (key, Self::from(entry)))
                    .collect(),
            ),
        }
    }
}
