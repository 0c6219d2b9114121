//! Attribute parsing for the `Projectable` derive macro.
//!
//! `#[view(...)]` keys take precedence. Where a struct already derives serde
//! traits, the matching `#[serde(...)]` keys supply defaults so projections
//! use the same names as the plain serialisation.

use syn::meta::ParseNestedMeta;
use syn::{Attribute, LitStr, Token, parenthesized};

mod input;
mod literals;
mod serde_attrs;
#[cfg(test)]
mod tests;

pub(crate) use input::{ParsedField, ProjectableInput, parse_input};
use literals::{flag, lit_str};
pub(crate) use serde_attrs::RenameRule;
use serde_attrs::{serde_field_flags, serde_field_rename, serde_rename_all};

/// Struct-level attributes recognised by `#[derive(Projectable)]`.
#[derive(Default, Clone)]
pub(crate) struct StructAttrs {
    pub rename_all: Option<RenameRule>,
    /// The type implements `ProjectSelf` and replaces its own projection.
    pub custom: bool,
    /// The type is handed to `serde_json` as is.
    pub passthrough: bool,
    /// Map keys of this type use its `Display` output.
    pub display_key: bool,
    /// Overrides the generated crate path for dependency aliasing.
    pub crate_path: Option<syn::Path>,
}

/// Field-level attributes recognised by `#[derive(Projectable)]`.
///
/// - `groups` lists the comma-separated groups that may see the field.
/// - `rename` replaces the output key and makes a flattened field nest.
/// - `skip` hides the field from every projection.
/// - `omit_empty` drops the field when its value is empty.
/// - `flatten` splices a nested record's entries into the parent.
#[derive(Default, Clone)]
pub(crate) struct FieldAttrs {
    pub groups: Vec<String>,
    pub rename: Option<String>,
    pub skip: bool,
    pub omit_empty: bool,
    pub flatten: bool,
}

/// Iterate all `#[view(...)]` attributes once and apply a callback.
fn parse_view<F>(attrs: &[Attribute], mut f: F) -> syn::Result<()>
where
    F: FnMut(&ParseNestedMeta) -> syn::Result<()>,
{
    for attr in attrs.iter().filter(|a| a.path().is_ident("view")) {
        attr.parse_nested_meta(|meta| f(&meta))?;
    }
    Ok(())
}

/// Consumes an unrecognised key-value or list without recording it.
fn discard_unknown(meta: &ParseNestedMeta) -> syn::Result<()> {
    if meta.input.peek(Token![=]) {
        meta.value()?.parse::<syn::Expr>()?;
    } else if meta.input.peek(syn::token::Paren) {
        let content;
        parenthesized!(content in meta.input);
        content.parse::<proc_macro2::TokenStream>()?;
    }
    Ok(())
}

fn unknown_key(meta: &ParseNestedMeta) -> syn::Error {
    let key = meta
        .path
        .get_ident()
        .map_or_else(|| "<path>".to_owned(), ToString::to_string);
    meta.error(format!("unknown view attribute `{key}`"))
}

/// Splits a `groups = "a, b"` value into trimmed names.
///
/// Empty segments are rejected; `groups = ""` is accepted and declares no
/// groups at all.
fn parse_groups(value: &LitStr) -> syn::Result<Vec<String>> {
    let raw = value.value();
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    raw.split(',')
        .map(str::trim)
        .map(|group| {
            if group.is_empty() {
                Err(syn::Error::new(value.span(), "groups must not contain empty names"))
            } else {
                Ok(group.to_owned())
            }
        })
        .collect()
}

/// Extracts `#[view(...)]` metadata applied to a struct.
///
/// Recognised keys are `rename_all`, `custom`, `passthrough`, `display_key`
/// and `crate`. Unknown keys are rejected so a misspelt group tag cannot
/// silently widen a projection.
pub(crate) fn parse_struct_attrs(attrs: &[Attribute]) -> syn::Result<StructAttrs> {
    let mut out = StructAttrs::default();
    parse_view(attrs, |meta| {
        match meta.path.get_ident().map(ToString::to_string).as_deref() {
            Some("rename_all") => {
                let value = lit_str(meta, "rename_all")?;
                out.rename_all = Some(RenameRule::parse(&value)?);
            }
            Some("custom") => out.custom = flag(meta, "custom")?,
            Some("passthrough") => out.passthrough = flag(meta, "passthrough")?,
            Some("display_key") => out.display_key = flag(meta, "display_key")?,
            Some("crate") => {
                let s = lit_str(meta, "crate")?;
                let path: syn::Path =
                    syn::parse_str(&s.value()).map_err(|e| syn::Error::new(s.span(), e))?;
                out.crate_path = Some(path);
            }
            _ => return Err(unknown_key(meta)),
        }
        Ok(())
    })?;
    if out.rename_all.is_none() {
        out.rename_all = serde_rename_all(attrs)?;
    }
    Ok(out)
}

/// Parses field-level `#[view(...)]` attributes, falling back to serde.
///
/// Recognised keys are `groups`, `rename`, `skip`, `omit_empty` and
/// `flatten`. A serde `rename`, `skip`, `skip_serializing` or `flatten`
/// applies only when the view attributes leave that property unset.
pub(crate) fn parse_field_attrs(field: &syn::Field) -> syn::Result<FieldAttrs> {
    let mut out = FieldAttrs::default();
    let mut skip = None;
    let mut flatten = None;
    parse_view(&field.attrs, |meta| {
        match meta.path.get_ident().map(ToString::to_string).as_deref() {
            Some("groups") => {
                let value = lit_str(meta, "groups")?;
                out.groups = parse_groups(&value)?;
            }
            Some("rename") => out.rename = Some(lit_str(meta, "rename")?.value()),
            Some("skip") => skip = Some(flag(meta, "skip")?),
            Some("omit_empty") => out.omit_empty = flag(meta, "omit_empty")?,
            Some("flatten") => flatten = Some(flag(meta, "flatten")?),
            _ => return Err(unknown_key(meta)),
        }
        Ok(())
    })?;

    let serde_flags = serde_field_flags(&field.attrs)?;
    out.skip = skip.unwrap_or(serde_flags.skip);
    out.flatten = flatten.unwrap_or(serde_flags.flatten);
    if out.rename.is_none() {
        out.rename = serde_field_rename(&field.attrs)?;
    }
    Ok(out)
}
