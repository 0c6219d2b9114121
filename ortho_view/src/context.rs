//! Call-scoped projection state.

use std::collections::HashMap;

use crate::{FieldDescriptor, Options};

/// State threaded through one top-level projection.
///
/// Besides the caller's [`Options`], the context records the groups a
/// flattened parent passes down to its untagged children. The record is keyed
/// by the children's declared names and stays in force for the remainder of
/// the call, including nested records reached later in the walk. A fresh
/// context is built by every call to [`crate::project`], so nothing leaks
/// between independent calls.
#[derive(Debug)]
pub struct Context<'o> {
    options: &'o Options,
    inherited: HashMap<&'static str, &'static [&'static str]>,
}

impl<'o> Context<'o> {
    /// Creates an empty context for `options`.
    #[must_use]
    pub fn new(options: &'o Options) -> Self {
        Self {
            options,
            inherited: HashMap::new(),
        }
    }

    /// Options supplied by the caller.
    #[must_use]
    pub const fn options(&self) -> &'o Options {
        self.options
    }

    /// Active groups for this call.
    #[must_use]
    pub fn groups(&self) -> &'o [String] {
        self.options.groups()
    }

    /// Records `groups` as inherited by every field in `children`.
    pub(crate) fn inherit(
        &mut self,
        children: &'static [FieldDescriptor],
        groups: &'static [&'static str],
    ) {
        for child in children {
            self.inherited.insert(child.ident(), groups);
        }
    }

    /// Groups governing `descriptor`: its own when declared, otherwise any
    /// inherited from a flattened parent.
    pub(crate) fn effective_groups(&self, descriptor: &FieldDescriptor) -> &'static [&'static str] {
        let declared = descriptor.declared_groups();
        if !declared.is_empty() {
            return declared;
        }
        self.inherited
            .get(descriptor.ident())
            .copied()
            .unwrap_or_default()
    }

    /// Applies the visibility rule to `descriptor`.
    pub(crate) fn is_visible(&self, descriptor: &FieldDescriptor) -> bool {
        let groups = self.effective_groups(descriptor);
        groups.is_empty() || self.options.intersects(groups)
    }
}
