//! Procedural macros for `ortho_view`.
//!
//! The `Projectable` derive records each named field of a
//! struct in a static descriptor table and exposes the fields by index, which
//! is all the projector needs to apply group visibility at runtime.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod derive;

/// Derive macro for `ortho_view::Projectable`.
///
/// Field attributes, written as `#[view(...)]`:
///
/// - `groups = "a, b"` limits the field to callers holding one of the groups.
/// - `rename = "name"` sets the output key.
/// - `skip` removes the field from every projection.
/// - `omit_empty` drops the field when its value is empty.
/// - `flatten` merges a nested record into the parent. An unrenamed
///   flattened field also passes its groups down to untagged child fields.
///
/// Struct attributes:
///
/// - `rename_all = "camelCase"` (and the other serde casing rules).
/// - `custom` defers to the type's `ProjectSelf` implementation.
/// - `passthrough` encodes the type through its `serde::Serialize` impl.
/// - `display_key` lets the type act as a map key via `Display`.
/// - `crate = "path"` names the `ortho_view` crate when it is re-exported or
///   renamed.
///
/// Without a matching view attribute, `#[serde(rename)]`, `#[serde(rename_all)]`,
/// `#[serde(skip)]`, `#[serde(skip_serializing)]` and `#[serde(flatten)]` are
/// honoured.
#[proc_macro_derive(Projectable, attributes(view))]
pub fn derive_projectable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive::expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
