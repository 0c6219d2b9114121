//! Convenience entry points for handing projections to an encoder.

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::{Options, ProjectResult, Projectable, project};

/// Projects `value` for the comma-separated `groups` and optionally wraps the
/// result under `root`.
///
/// `groups` is split on commas without trimming. When `root` is empty the
/// projection is returned as is; otherwise it becomes the single entry of an
/// object keyed by `root`.
///
/// # Examples
///
/// ```
/// use ortho_view::{Projectable, to_encodable};
/// use serde_json::json;
///
/// #[derive(Projectable)]
/// struct User {
///     #[view(groups = "admin")]
///     role: String,
///     name: String,
/// }
///
/// let user = User { role: "owner".into(), name: "ada".into() };
/// let wrapped = to_encodable(&user, "user", "admin,api")?;
/// assert_eq!(wrapped, json!({"user": {"role": "owner", "name": "ada"}}));
/// # Ok::<_, ortho_view::ProjectError>(())
/// ```
///
/// # Errors
///
/// Propagates any error raised by [`project`].
pub fn to_encodable<T>(value: &T, root: &str, groups: &str) -> ProjectResult<Value>
where
    T: Projectable + ?Sized,
{
    let projected = project(&Options::from_csv(groups), value)?;
    if root.is_empty() {
        return Ok(projected);
    }
    let mut wrapper = Map::new();
    wrapper.insert(root.to_owned(), projected);
    Ok(Value::Object(wrapper))
}

/// Serialises a value through its projection.
///
/// `View` lets any serde serializer consume a projection directly, without
/// materialising it first at the call site. Projection errors surface as the
/// serializer's custom error.
///
/// # Examples
///
/// ```
/// use ortho_view::{Options, Projectable, View};
///
/// #[derive(Projectable)]
/// struct Secretive {
///     #[view(groups = "unsafe")]
///     secret: String,
///     #[view(groups = "safe")]
///     public: u32,
/// }
///
/// let value = Secretive { secret: "s".into(), public: 1 };
/// let options = Options::new(["safe"]);
/// let json = serde_json::to_string(&View::new(&options, &value))?;
/// assert_eq!(json, r#"{"public":1}"#);
/// # Ok::<_, serde_json::Error>(())
/// ```
#[derive(Debug)]
pub struct View<'a, T: ?Sized> {
    options: &'a Options,
    value: &'a T,
}

impl<'a, T> View<'a, T>
where
    T: Projectable + ?Sized,
{
    /// Pairs `value` with the options used to project it.
    #[must_use]
    pub const fn new(options: &'a Options, value: &'a T) -> Self {
        Self { options, value }
    }

    /// Projects the wrapped value.
    ///
    /// # Errors
    ///
    /// Propagates any error raised by [`project`].
    pub fn project(&self) -> ProjectResult<Value> {
        project(self.options, self.value)
    }
}

impl<T> Serialize for View<'_, T>
where
    T: Projectable + ?Sized,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.project()
            .map_err(serde::ser::Error::custom)?
            .serialize(serializer)
    }
}
