//! Recursive field selection and value normalisation.

use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::{Context, Options, ProjectKey, ProjectResult, Projectable, Record, Shape};

/// Projects `value` into a [`serde_json::Value`] using the active groups in
/// `options`.
///
/// Records become objects holding their visible fields; other values are
/// normalised directly. A `None` root yields `null`.
///
/// # Examples
///
/// ```
/// use ortho_view::{Options, Projectable, project};
/// use serde_json::json;
///
/// #[derive(Projectable)]
/// struct Account {
///     #[view(groups = "admin")]
///     balance: u64,
///     name: String,
/// }
///
/// let account = Account { balance: 10, name: "ada".into() };
/// let projected = project(&Options::new(["user"]), &account)?;
/// assert_eq!(projected, json!({"name": "ada"}));
/// # Ok::<_, ortho_view::ProjectError>(())
/// ```
///
/// # Errors
///
/// Returns [`crate::ProjectError::UnsupportedKey`] when a map key has no
/// string form, [`crate::ProjectError::Encode`] when a pass-through value
/// fails to encode, and any error raised by a self-projecting value.
pub fn project<T>(options: &Options, value: &T) -> ProjectResult<Value>
where
    T: Projectable + ?Sized,
{
    let mut ctx = Context::new(options);
    debug!(groups = ?ctx.groups(), "projecting value");
    ctx.project(value)
}

impl Context<'_> {
    /// Projects `value` within this call.
    ///
    /// A record is walked field by field without consulting its own
    /// self-projection capability; anything else is normalised.
    ///
    /// # Errors
    ///
    /// See [`project`].
    pub fn project<T>(&mut self, value: &T) -> ProjectResult<Value>
    where
        T: Projectable + ?Sized,
    {
        match value.shape() {
            Shape::Record(record) => self.project_record(record),
            shape => {
                trace!(shape = shape.kind(), "normalising non-record value");
                self.normalize_shape(value, shape)
            }
        }
    }

    /// Normalises a field, element or map value.
    ///
    /// # Errors
    ///
    /// See [`project`].
    pub fn normalize<T>(&mut self, value: &T) -> ProjectResult<Value>
    where
        T: Projectable + ?Sized,
    {
        let shape = value.shape();
        self.normalize_shape(value, shape)
    }

    fn normalize_shape<T>(&mut self, value: &T, shape: Shape<'_>) -> ProjectResult<Value>
    where
        T: Projectable + ?Sized,
    {
        if matches!(shape, Shape::Null) {
            return Ok(Value::Null);
        }
        if let Some(custom) = value.as_custom() {
            return custom.project_self(self);
        }
        match shape {
            Shape::Null => Ok(Value::Null),
            Shape::Scalar(scalar) => Ok(scalar),
            Shape::Encoded(encoded) => Ok(serde_json::to_value(encoded)?),
            Shape::Record(record) => self.project_record(record),
            Shape::Sequence(items) => self.project_sequence(items),
            Shape::Map(entries) => self.project_map(entries),
        }
    }

    fn project_record(&mut self, record: &dyn Record) -> ProjectResult<Value> {
        let mut dest = Map::new();
        for (index, descriptor) in record.descriptors().iter().enumerate() {
            let name = descriptor.external_name();
            if descriptor.is_skipped() {
                trace!(field = descriptor.ident(), "field excluded");
                continue;
            }
            let Some(value) = record.field_at(index) else {
                trace!(field = descriptor.ident(), "field not exposed");
                continue;
            };
            if descriptor.omits_empty() && value.is_empty_value() {
                trace!(field = name, "empty field omitted");
                continue;
            }

            let shape = value.shape();
            if descriptor.is_composable() {
                if let Shape::Record(child) = shape {
                    let groups = descriptor.declared_groups();
                    if !groups.is_empty() {
                        self.inherit(child.descriptors(), groups);
                    }
                    trace!(field = descriptor.ident(), "flattening composed field");
                    if let Value::Object(entries) = self.normalize(value)? {
                        dest.extend(entries);
                    }
                    continue;
                }
            }

            if !self.is_visible(descriptor) {
                trace!(field = name, "field outside active groups");
                continue;
            }
            let projected = self.normalize_shape(value, shape)?;
            dest.insert(name.to_owned(), projected);
        }
        Ok(Value::Object(dest))
    }

    fn project_sequence<'a>(
        &mut self,
        items: Box<dyn Iterator<Item = &'a dyn Projectable> + 'a>,
    ) -> ProjectResult<Value> {
        items
            .map(|item| self.normalize(item))
            .collect::<ProjectResult<Vec<_>>>()
            .map(Value::Array)
    }

    fn project_map<'a>(
        &mut self,
        entries: Box<dyn Iterator<Item = (&'a dyn ProjectKey, &'a dyn Projectable)> + 'a>,
    ) -> ProjectResult<Value> {
        let mut dest = Map::new();
        for (key, value) in entries {
            let projected = self.normalize(value)?;
            dest.insert(key.project_key()?, projected);
        }
        Ok(Value::Object(dest))
    }
}
