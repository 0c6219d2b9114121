//! Capability traits describing how a value takes part in projection.
//!
//! Every projectable value reports a [`Shape`]. Normalisation consults the
//! capabilities in a fixed order:
//!
//! 1. [`Shape::Null`] short-circuits to `null`;
//! 2. [`Projectable::as_custom`] hands the value its own projection;
//! 3. [`Shape::Encoded`] passes the value through its serde implementation;
//! 4. the remaining shapes are walked structurally.

use serde_json::Value;

use crate::{Context, ProjectResult, Record};

/// Structural view of a value, after one level of reference indirection.
pub enum Shape<'a> {
    /// An absent reference or container (`None`).
    Null,
    /// A primitive already in its output form.
    Scalar(Value),
    /// A value whose serde representation must be kept verbatim.
    Encoded(&'a dyn erased_serde::Serialize),
    /// A record whose fields are projected individually.
    Record(&'a dyn Record),
    /// An ordered sequence of projectable elements.
    Sequence(Box<dyn Iterator<Item = &'a dyn Projectable> + 'a>),
    /// Key/value entries of an associative container.
    Map(Box<dyn Iterator<Item = (&'a dyn ProjectKey, &'a dyn Projectable)> + 'a>),
}

impl Shape<'_> {
    /// Short name of the shape used in diagnostics.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Scalar(_) => "scalar",
            Self::Encoded(_) => "encoded",
            Self::Record(_) => "record",
            Self::Sequence(_) => "sequence",
            Self::Map(_) => "map",
        }
    }
}

/// A value that can be projected into a [`serde_json::Value`].
///
/// Implement this through `#[derive(Projectable)]` for records. The crate
/// provides implementations for primitives, strings, references, smart
/// pointers, `Option` and the standard collections.
pub trait Projectable {
    /// Returns the structural view of the value.
    fn shape(&self) -> Shape<'_>;

    /// Returns `true` when the value is empty for its type.
    ///
    /// Empty means zero numbers, empty strings, `false`, `None`, zero-length
    /// containers, and records whose projectable fields are all empty.
    fn is_empty_value(&self) -> bool;

    /// Returns the self-projection capability, if the value has one.
    ///
    /// When present it is preferred over the structural walk wherever the
    /// value is normalised as a field, element or map value.
    fn as_custom(&self) -> Option<&dyn ProjectSelf> {
        None
    }
}

/// Self-projection: a value that builds its own projected form.
///
/// # Examples
///
/// ```
/// use ortho_view::{Context, ProjectResult, ProjectSelf, Projectable, project, Options};
/// use serde_json::{Value, json};
///
/// #[derive(Projectable)]
/// #[view(custom)]
/// struct Money {
///     #[view(skip)]
///     cents: i64,
/// }
///
/// impl ProjectSelf for Money {
///     fn project_self(&self, _ctx: &mut Context<'_>) -> ProjectResult<Value> {
///         Ok(json!(format!("{}.{:02}", self.cents / 100, self.cents % 100)))
///     }
/// }
///
/// #[derive(Projectable)]
/// struct Invoice {
///     total: Money,
/// }
///
/// let projected = project(&Options::default(), &Invoice { total: Money { cents: 1234 } })?;
/// assert_eq!(projected, json!({"total": "12.34"}));
/// # Ok::<_, ortho_view::ProjectError>(())
/// ```
pub trait ProjectSelf {
    /// Projects `self` using the active call context.
    ///
    /// Implementations may call [`Context::project`] on `self` to reuse the
    /// structural field walk; the root walk never consults this capability,
    /// so doing so does not recurse back here.
    ///
    /// # Errors
    ///
    /// Any error returned here is propagated unchanged to the caller of the
    /// enclosing projection.
    fn project_self(&self, ctx: &mut Context<'_>) -> ProjectResult<Value>;
}

/// A map key that can be rendered as an object key.
///
/// Strings are used directly, text-capable keys use their text form and
/// integers are formatted in base 10. Other keys fail with
/// [`crate::ProjectError::UnsupportedKey`].
pub trait ProjectKey {
    /// Renders the key as an object key.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ProjectError::UnsupportedKey`] when the key has no
    /// string form.
    fn project_key(&self) -> ProjectResult<String>;
}
