//! Error types produced by the structural engine.
//!
//! The taxonomy is deliberately narrow: every structural operation except
//! inversion is total over its documented input domain, so the only
//! caller-visible failure is a value that cannot serve as a reverse-index
//! key.

use thiserror::Error;

/// Errors that can occur while operating on configuration values.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StrataError {
    /// A value that cannot become a reverse-index key was encountered
    /// during inversion. Only string leaves and nested maps are
    /// invertible.
    #[error("cannot invert {kind} value at '{path}': reverse-index keys must be strings")]
    NotInvertible {
        /// Dotted path to the offending value.
        path: String,
        /// Variant name of the offending value.
        kind: &'static str,
    },
}

/// Convenience alias for results produced by this crate.
pub type StrataResult<T> = std::result::Result<T, StrataError>;
