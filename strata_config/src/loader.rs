//! Precedence-ordered assembly of configuration sources.
//!
//! The [`Loader`] collects already-decoded fragments, one per source, and
//! folds them through the deep merge in a single fixed precedence order.
//! Environment-variable and command-line overrides sit above every file
//! layer and are applied through the path setter rather than the merge,
//! because they are typed scalars targeting specific known paths instead
//! of whole structured fragments.
//!
//! All inputs arrive as explicit parameters; the engine never reads
//! process environment or arguments itself.

use crate::error::StrataResult;
use crate::invert::{InversionIndex, invert_deep};
use crate::merge::merge_layers;
use crate::path::{get_path, set_path};
use crate::value::{ConfigMap, ConfigValue};
use crate::diff::diff_deep;

/// Provenance of a configuration source, lowest precedence first.
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
#[non_exhaustive]
pub enum SourceProvenance {
    /// Compiled-in base defaults.
    Defaults,
    /// Overlay named after the deployment environment.
    EnvironmentOverlay,
    /// Machine-local overlay.
    LocalOverlay,
    /// Runtime-generated overlay.
    RuntimeOverlay,
    /// Per-instance overlay for multi-process deployments.
    InstanceOverlay,
    /// Machine-local per-instance overlay.
    LocalInstanceOverlay,
}

impl SourceProvenance {
    /// Short name used in log events.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Defaults => "defaults",
            Self::EnvironmentOverlay => "environment-overlay",
            Self::LocalOverlay => "local-overlay",
            Self::RuntimeOverlay => "runtime-overlay",
            Self::InstanceOverlay => "instance-overlay",
            Self::LocalInstanceOverlay => "local-instance-overlay",
        }
    }
}

/// One configuration source: a provenance, an optional label (for example
/// the file stem it was decoded from) and the decoded fragment.
#[derive(Clone, Debug)]
pub struct SourceLayer {
    provenance: SourceProvenance,
    label: Option<String>,
    value: ConfigValue,
}

impl SourceLayer {
    /// Construct a layer from a provenance and a decoded fragment.
    #[must_use]
    pub const fn new(provenance: SourceProvenance, value: ConfigValue) -> Self {
        Self {
            provenance,
            label: None,
            value,
        }
    }

    /// Attach a human-readable label naming where the fragment came from.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Returns the provenance of this layer.
    #[must_use]
    pub const fn provenance(&self) -> SourceProvenance {
        self.provenance
    }

    /// Returns the label, if one was attached.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Borrow the decoded fragment.
    #[must_use]
    pub const fn value(&self) -> &ConfigValue {
        &self.value
    }
}

/// A typed override targeting one deep path, applied via the path setter.
#[derive(Clone, Debug)]
pub struct PathOverride {
    path: Vec<String>,
    value: ConfigValue,
}

impl PathOverride {
    /// Construct an override for the given path segments.
    pub fn new(
        path: impl IntoIterator<Item = impl Into<String>>,
        value: impl Into<ConfigValue>,
    ) -> Self {
        Self {
            path: path.into_iter().map(Into::into).collect(),
            value: value.into(),
        }
    }
}

/// Builder that assembles configuration sources and resolves them into a
/// [`MergedConfig`].
///
/// Layers may be pushed in any order; [`Loader::resolve`] stably sorts
/// them by provenance rank so the fixed total order always holds.
///
/// # Examples
///
/// ```
/// use strata_config::{ConfigValue, Loader};
///
/// let defaults: ConfigValue =
///     serde_json::json!({"Customers": {"dbHost": "base", "dbName": "d1"}}).into();
/// let overlay: ConfigValue =
///     serde_json::json!({"Customers": {"dbName": "d2", "dbPort": 5984}}).into();
///
/// let mut loader = Loader::new();
/// loader.push_defaults(defaults);
/// loader.push_environment_overlay(overlay);
/// let config = loader.resolve();
///
/// assert_eq!(
///     config.get(&["Customers", "dbName"]),
///     Some(&ConfigValue::from("d2")),
/// );
/// assert_eq!(
///     config.get(&["Customers", "dbHost"]),
///     Some(&ConfigValue::from("base")),
/// );
/// ```
#[derive(Debug, Default)]
pub struct Loader {
    layers: Vec<SourceLayer>,
    env_overrides: Vec<PathOverride>,
    cli_overrides: Vec<PathOverride>,
}

impl Loader {
    /// Create an empty loader.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            layers: Vec::new(),
            env_overrides: Vec::new(),
            cli_overrides: Vec::new(),
        }
    }

    /// Push an arbitrary layer.
    pub fn push_layer(&mut self, layer: SourceLayer) {
        self.layers.push(layer);
    }

    /// Push the compiled-in defaults fragment.
    pub fn push_defaults(&mut self, value: ConfigValue) {
        self.push_layer(SourceLayer::new(SourceProvenance::Defaults, value));
    }

    /// Push the environment-named overlay.
    pub fn push_environment_overlay(&mut self, value: ConfigValue) {
        self.push_layer(SourceLayer::new(SourceProvenance::EnvironmentOverlay, value));
    }

    /// Push the machine-local overlay.
    pub fn push_local_overlay(&mut self, value: ConfigValue) {
        self.push_layer(SourceLayer::new(SourceProvenance::LocalOverlay, value));
    }

    /// Push the runtime-generated overlay.
    pub fn push_runtime_overlay(&mut self, value: ConfigValue) {
        self.push_layer(SourceLayer::new(SourceProvenance::RuntimeOverlay, value));
    }

    /// Push the per-instance overlay.
    pub fn push_instance_overlay(&mut self, value: ConfigValue) {
        self.push_layer(SourceLayer::new(SourceProvenance::InstanceOverlay, value));
    }

    /// Push the machine-local per-instance overlay.
    pub fn push_local_instance_overlay(&mut self, value: ConfigValue) {
        self.push_layer(SourceLayer::new(
            SourceProvenance::LocalInstanceOverlay,
            value,
        ));
    }

    /// Queue an environment-variable override for one deep path.
    pub fn push_env_override(
        &mut self,
        path: impl IntoIterator<Item = impl Into<String>>,
        value: impl Into<ConfigValue>,
    ) {
        self.env_overrides.push(PathOverride::new(path, value));
    }

    /// Queue a command-line override for one deep path. Command-line
    /// overrides carry the highest precedence of all sources.
    pub fn push_cli_override(
        &mut self,
        path: impl IntoIterator<Item = impl Into<String>>,
        value: impl Into<ConfigValue>,
    ) {
        self.cli_overrides.push(PathOverride::new(path, value));
    }

    /// Fold all sources into the final configuration.
    ///
    /// Layers are stably sorted by provenance rank and merged left to
    /// right into an empty seed; the environment override phase is then
    /// applied path by path, followed by the command-line phase.
    #[must_use]
    pub fn resolve(self) -> MergedConfig {
        let Self {
            mut layers,
            env_overrides,
            cli_overrides,
        } = self;
        layers.sort_by_key(SourceLayer::provenance);
        for layer in &layers {
            tracing::debug!(
                provenance = layer.provenance().as_str(),
                label = layer.label(),
                "merging configuration layer"
            );
        }
        let merged = merge_layers(layers.iter().map(SourceLayer::value));
        let mut root = match merged {
            ConfigValue::Map(map) => map,
            _ => ConfigMap::new(),
        };
        for phase in [env_overrides, cli_overrides] {
            for PathOverride { path, value } in phase {
                tracing::debug!(path = %path.join("."), "applying override");
                set_path(&mut root, &path, value);
            }
        }
        MergedConfig { root }
    }
}

/// The authoritative configuration produced by [`Loader::resolve`].
///
/// The handle owns the merged tree and exposes the structural utilities
/// as methods; the data itself stays plain. Treat it as immutable after
/// construction — deliberate mutation goes through [`MergedConfig::set`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MergedConfig {
    root: ConfigMap,
}

impl MergedConfig {
    /// Wrap an existing map as a configuration handle.
    #[must_use]
    pub const fn from_root(root: ConfigMap) -> Self {
        Self { root }
    }

    /// Borrow the merged tree.
    #[must_use]
    pub const fn root(&self) -> &ConfigMap {
        &self.root
    }

    /// Consume the handle, returning the merged tree.
    #[must_use]
    pub fn into_root(self) -> ConfigMap {
        self.root
    }

    /// Borrow the value at a deep path, if present.
    #[must_use]
    pub fn get(&self, path: &[impl AsRef<str>]) -> Option<&ConfigValue> {
        get_path(&self.root, path)
    }

    /// Produce an independent deep copy of the merged tree.
    #[must_use]
    pub fn snapshot(&self) -> ConfigMap {
        self.root.clone()
    }

    /// Compute what differs in `other` relative to this configuration.
    #[must_use]
    pub fn diff(&self, other: &Self) -> ConfigMap {
        diff_deep(&self.root, &other.root)
    }

    /// Build a reverse index from string leaves to their key paths.
    ///
    /// The index is an independent structure; mutating it never affects
    /// this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`crate::StrataError::NotInvertible`] when the tree holds a
    /// value that cannot serve as an index key.
    pub fn invert(&self) -> StrataResult<InversionIndex> {
        invert_deep(&self.root)
    }

    /// Explicitly set a value at a deep path, creating intermediate maps.
    /// A `Null` value leaves the configuration untouched.
    pub fn set(&mut self, path: &[impl AsRef<str>], value: ConfigValue) {
        set_path(&mut self.root, path, value);
    }
}
