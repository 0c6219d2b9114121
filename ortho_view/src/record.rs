//! Static field metadata and the record view consumed by the projector.

/// Static description of one declared field of a record type.
///
/// Descriptors are normally emitted by `#[derive(Projectable)]` as a `const`
/// table. Hand-written [`Record`] implementations build them with the `const`
/// builder methods:
///
/// ```
/// use ortho_view::FieldDescriptor;
///
/// const EMAIL: FieldDescriptor = FieldDescriptor::new("email")
///     .rename("emailAddress")
///     .groups(&["private"])
///     .omit_empty();
///
/// assert_eq!(EMAIL.external_name(), "emailAddress");
/// assert_eq!(EMAIL.declared_groups(), ["private"]);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub struct FieldDescriptor {
    ident: &'static str,
    rename: Option<&'static str>,
    skip: bool,
    omit_empty: bool,
    groups: &'static [&'static str],
    flatten: bool,
}

impl FieldDescriptor {
    /// Describes a field declared as `ident` with default behaviour.
    #[must_use]
    pub const fn new(ident: &'static str) -> Self {
        Self {
            ident,
            rename: None,
            skip: false,
            omit_empty: false,
            groups: &[],
            flatten: false,
        }
    }

    /// Sets the external name used as the output key.
    #[must_use]
    pub const fn rename(mut self, name: &'static str) -> Self {
        self.rename = Some(name);
        self
    }

    /// Excludes the field from every projection.
    #[must_use]
    pub const fn skip(mut self) -> Self {
        self.skip = true;
        self
    }

    /// Omits the field whenever its value is empty.
    #[must_use]
    pub const fn omit_empty(mut self) -> Self {
        self.omit_empty = true;
        self
    }

    /// Restricts the field to the given groups.
    #[must_use]
    pub const fn groups(mut self, groups: &'static [&'static str]) -> Self {
        self.groups = groups;
        self
    }

    /// Marks the field for flattening into its parent.
    #[must_use]
    pub const fn flatten(mut self) -> Self {
        self.flatten = true;
        self
    }

    /// Declared field name.
    #[must_use]
    pub const fn ident(&self) -> &'static str {
        self.ident
    }

    /// Output key: the explicit rename, or the declared name.
    #[must_use]
    pub const fn external_name(&self) -> &'static str {
        match self.rename {
            Some(name) => name,
            None => self.ident,
        }
    }

    /// Returns `true` when the field carries an explicit rename.
    #[must_use]
    pub const fn is_renamed(&self) -> bool {
        self.rename.is_some()
    }

    /// Returns `true` when the field is excluded.
    #[must_use]
    pub const fn is_skipped(&self) -> bool {
        self.skip
    }

    /// Returns `true` when empty values are omitted.
    #[must_use]
    pub const fn omits_empty(&self) -> bool {
        self.omit_empty
    }

    /// Groups declared on the field itself.
    #[must_use]
    pub const fn declared_groups(&self) -> &'static [&'static str] {
        self.groups
    }

    /// Returns `true` when the field may be composed into its parent.
    ///
    /// Only unnamed flattened fields compose; the projector further requires
    /// the resolved value to be a record.
    #[must_use]
    pub const fn is_composable(&self) -> bool {
        self.flatten && !self.is_renamed()
    }
}

/// Structural view of a record (a struct with named fields).
///
/// The projector walks [`Record::descriptors`] in declaration order and fetches
/// each value through [`Record::field_at`] using the descriptor's index.
pub trait Record {
    /// Field descriptors in declaration order.
    fn descriptors(&self) -> &'static [FieldDescriptor];

    /// Returns the value of the field at `index`.
    ///
    /// Returns `None` for out-of-range indices and for fields the record does
    /// not expose; the projector skips such fields regardless of their tags.
    fn field_at(&self, index: usize) -> Option<&dyn crate::Projectable>;
}
