//! Layered configuration resolution for Rust.
//!
//! `strata_config` merges configuration fragments from multiple sources —
//! base defaults, environment and instance overlays, runtime overlays,
//! environment-variable and command-line overrides — under a strict
//! precedence order into one authoritative [`MergedConfig`], and provides
//! the deep-structural utilities (clone, merge, diff, equality, inversion,
//! path setting) that make the merge correct, inspectable and reversible.
//!
//! File-format decoding is out of scope: collaborators hand the loader
//! already-decoded [`ConfigValue`] trees (any serde deserialiser can
//! produce one). The engine is synchronous and performs no I/O.
//!
//! # Example
//!
//! ```
//! use strata_config::{ConfigValue, Loader};
//!
//! let defaults: ConfigValue = serde_json::json!({
//!     "Customers": {"dbHost": "base", "dbName": "d1"}
//! })
//! .into();
//! let staging: ConfigValue = serde_json::json!({
//!     "Customers": {"dbName": "d2", "dbPort": 5984}
//! })
//! .into();
//!
//! let mut loader = Loader::new();
//! loader.push_defaults(defaults);
//! loader.push_environment_overlay(staging);
//! loader.push_cli_override(["Customers", "dbHost"], "cli-host");
//! let config = loader.resolve();
//!
//! assert_eq!(
//!     config.get(&["Customers", "dbHost"]),
//!     Some(&ConfigValue::from("cli-host")),
//! );
//! assert_eq!(
//!     config.get(&["Customers", "dbPort"]),
//!     Some(&ConfigValue::from(5984)),
//! );
//! ```

mod diff;
mod equals;
mod error;
mod invert;
mod loader;
mod merge;
mod path;
mod value;

pub use diff::diff_deep;
pub use equals::equals_deep;
pub use error::{StrataError, StrataResult};
pub use invert::{InversionIndex, invert_deep, substitute_deep};
pub use loader::{Loader, MergedConfig, PathOverride, SourceLayer, SourceProvenance};
pub use merge::{merge_layers, merge_value};
pub use path::{get_path, set_path};
pub use value::{Callable, ConfigMap, ConfigValue, Kind, classify};
