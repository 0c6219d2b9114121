//! Input parsing for the `Projectable` derive macro.
//!
//! This module gathers the struct identifier, fields, and attribute metadata
//! in one pass so macro expansion can fail fast with useful errors.

use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Fields, Generics};

use super::{FieldAttrs, StructAttrs, parse_field_attrs, parse_struct_attrs};

/// A named field together with its parsed attributes.
pub(crate) struct ParsedField {
    pub ident: syn::Ident,
    /// Field name with any raw identifier prefix removed.
    pub name: String,
    pub attrs: FieldAttrs,
}

/// Everything the generator needs to know about the derive input.
pub(crate) struct ProjectableInput {
    pub ident: syn::Ident,
    pub generics: Generics,
    pub attrs: StructAttrs,
    pub fields: Vec<ParsedField>,
}

/// Gathers information from the user-provided struct.
///
/// Structs with named fields and unit structs are accepted; tuple structs,
/// enums and unions are rejected because their members have no names to
/// project under.
pub(crate) fn parse_input(input: &DeriveInput) -> syn::Result<ProjectableInput> {
    let attrs = parse_struct_attrs(&input.attrs)?;
    if attrs.custom && attrs.passthrough {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "`custom` and `passthrough` cannot be combined",
        ));
    }

    let named = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => named.named.iter().collect::<Vec<_>>(),
            Fields::Unit => Vec::new(),
            Fields::Unnamed(_) => {
                return Err(syn::Error::new_spanned(
                    data.struct_token,
                    "Projectable requires named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "Projectable can only be derived for structs",
            ));
        }
    };

    let mut fields = Vec::with_capacity(named.len());
    for field in named {
        let Some(ident) = field.ident.clone() else {
            return Err(syn::Error::new_spanned(field, "Projectable requires named fields"));
        };
        fields.push(ParsedField {
            name: ident.unraw().to_string(),
            attrs: parse_field_attrs(field)?,
            ident,
        });
    }

    Ok(ProjectableInput {
        ident: input.ident.clone(),
        generics: input.generics.clone(),
        attrs,
        fields,
    })
}
