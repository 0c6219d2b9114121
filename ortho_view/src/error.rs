//! Error types produced while projecting values.

use std::fmt;

use thiserror::Error;

/// Result alias used throughout the crate.
pub type ProjectResult<T> = Result<T, ProjectError>;

/// Errors that can occur while projecting a value.
///
/// Projection is fail-fast: the first error met during the depth-first walk
/// aborts the whole call and no partial output is returned.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProjectError {
    /// A map key could not be rendered as an object key.
    ///
    /// Keys must be strings, text-capable values or integers.
    #[error("unable to project map key {value} of kind {kind}; expected a string, text or integer key")]
    UnsupportedKey {
        /// Structural kind of the offending key.
        kind: KeyKind,
        /// Rendering of the offending key for diagnostics.
        value: String,
    },

    /// A pass-through value failed to encode through its serde implementation.
    #[error("failed to encode pass-through value: {0}")]
    Encode(#[from] serde_json::Error),

    /// Failure reported by a self-projecting value.
    #[error(transparent)]
    Custom(Box<dyn std::error::Error + Send + Sync>),
}

impl ProjectError {
    /// Builds an [`ProjectError::UnsupportedKey`] for `value`.
    #[must_use]
    pub fn unsupported_key(kind: KeyKind, value: impl Into<String>) -> Self {
        Self::UnsupportedKey {
            kind,
            value: value.into(),
        }
    }

    /// Wraps an arbitrary error raised by a self-projecting value.
    ///
    /// # Examples
    ///
    /// ```
    /// use ortho_view::ProjectError;
    ///
    /// let err = ProjectError::custom("ledger is sealed");
    /// assert_eq!(err.to_string(), "ledger is sealed");
    /// ```
    #[must_use]
    pub fn custom<E>(error: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Self::Custom(error.into())
    }
}

/// Structural kind of a map key that cannot become an object key.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum KeyKind {
    /// `bool` keys.
    Bool,
    /// `f32`/`f64` keys.
    Float,
    /// The unit type.
    Unit,
    /// Records without a text form.
    Struct,
}

impl fmt::Display for KeyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::Bool => "bool",
            Self::Float => "float",
            Self::Unit => "unit",
            Self::Struct => "struct",
        })
    }
}
