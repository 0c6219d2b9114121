//! Token generation for `#[derive(Projectable)]`.
//!
//! A derived struct gets three impls: `Record` (a static descriptor table
//! plus indexed field access), `Projectable` and `ProjectKey`.

use proc_macro2::{Literal, TokenStream};
use quote::quote;
use syn::{Generics, parse_quote};

use super::crate_path;
use super::parse::{ParsedField, ProjectableInput, StructAttrs};

/// Expand the parsed input into the trait implementations.
pub(crate) fn expand(input: &ProjectableInput) -> TokenStream {
    let krate = crate_path::resolve(input.attrs.crate_path.as_ref());
    let generics = bounded_generics(input, &krate);
    let record = (!input.attrs.passthrough).then(|| record_impl(input, &generics, &krate));
    let projectable = projectable_impl(input, &generics, &krate);
    let key = key_impl(input, &generics, &krate);
    quote! {
        #record
        #projectable
        #key
    }
}

/// Adds the bounds every impl needs to the struct's own generics.
///
/// Record structs require each type parameter to be projectable.
/// Pass-through structs instead require the struct itself to serialise.
fn bounded_generics(input: &ProjectableInput, krate: &TokenStream) -> Generics {
    let mut generics = input.generics.clone();
    if input.attrs.passthrough {
        if generics.params.is_empty() {
            return generics;
        }
        let ident = &input.ident;
        let (_, ty_generics, _) = input.generics.split_for_impl();
        generics
            .make_where_clause()
            .predicates
            .push(parse_quote!(#ident #ty_generics: #krate::__private::Serialize));
        return generics;
    }
    let params: Vec<_> = generics.type_params().map(|param| param.ident.clone()).collect();
    let clause = generics.make_where_clause();
    for param in params {
        clause
            .predicates
            .push(parse_quote!(#param: #krate::Projectable));
    }
    generics
}

fn descriptor(field: &ParsedField, attrs: &StructAttrs, krate: &TokenStream) -> TokenStream {
    let name = &field.name;
    let field_attrs = &field.attrs;
    let mut tokens = quote! { #krate::FieldDescriptor::new(#name) };

    let external = field_attrs.rename.clone().or_else(|| {
        // A flattened field only keeps its composable status while unnamed.
        if field_attrs.flatten {
            return None;
        }
        attrs
            .rename_all
            .map(|rule| rule.apply(name))
            .filter(|renamed| renamed != name)
    });
    if let Some(external) = external {
        tokens.extend(quote! { .rename(#external) });
    }
    if field_attrs.skip {
        tokens.extend(quote! { .skip() });
    }
    if field_attrs.omit_empty {
        tokens.extend(quote! { .omit_empty() });
    }
    if !field_attrs.groups.is_empty() {
        let groups = &field_attrs.groups;
        tokens.extend(quote! { .groups(&[#(#groups),*]) });
    }
    if field_attrs.flatten {
        tokens.extend(quote! { .flatten() });
    }
    tokens
}

fn record_impl(input: &ProjectableInput, generics: &Generics, krate: &TokenStream) -> TokenStream {
    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
    let descriptors = input
        .fields
        .iter()
        .map(|field| descriptor(field, &input.attrs, krate));
    let arms = input
        .fields
        .iter()
        .enumerate()
        .filter(|(_, field)| !field.attrs.skip)
        .map(|(index, field)| {
            let index = Literal::usize_unsuffixed(index);
            let member = &field.ident;
            quote! { #index => ::core::option::Option::Some(&self.#member), }
        });

    quote! {
        impl #impl_generics #krate::Record for #ident #ty_generics #where_clause {
            fn descriptors(&self) -> &'static [#krate::FieldDescriptor] {
                const DESCRIPTORS: &[#krate::FieldDescriptor] = &[#(#descriptors),*];
                DESCRIPTORS
            }

            fn field_at(
                &self,
                index: usize,
            ) -> ::core::option::Option<&dyn #krate::Projectable> {
                match index {
                    #(#arms)*
                    _ => ::core::option::Option::None,
                }
            }
        }
    }
}

fn projectable_impl(
    input: &ProjectableInput,
    generics: &Generics,
    krate: &TokenStream,
) -> TokenStream {
    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let (shape, is_empty) = if input.attrs.passthrough {
        (quote! { #krate::Shape::Encoded(self) }, quote! { false })
    } else {
        let members = input
            .fields
            .iter()
            .filter(|field| !field.attrs.skip)
            .map(|field| &field.ident);
        (
            quote! { #krate::Shape::Record(self) },
            quote! { true #(&& #krate::Projectable::is_empty_value(&self.#members))* },
        )
    };
    let custom = input.attrs.custom.then(|| {
        quote! {
            fn as_custom(&self) -> ::core::option::Option<&dyn #krate::ProjectSelf> {
                ::core::option::Option::Some(self)
            }
        }
    });

    quote! {
        impl #impl_generics #krate::Projectable for #ident #ty_generics #where_clause {
            fn shape(&self) -> #krate::Shape<'_> {
                #shape
            }

            fn is_empty_value(&self) -> bool {
                #is_empty
            }

            #custom
        }
    }
}

fn key_impl(input: &ProjectableInput, generics: &Generics, krate: &TokenStream) -> TokenStream {
    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
    let body = if input.attrs.display_key {
        quote! { ::core::result::Result::Ok(::std::string::ToString::to_string(self)) }
    } else {
        quote! {
            ::core::result::Result::Err(#krate::ProjectError::unsupported_key(
                #krate::KeyKind::Struct,
                ::core::any::type_name::<Self>(),
            ))
        }
    };

    quote! {
        impl #impl_generics #krate::ProjectKey for #ident #ty_generics #where_clause {
            fn project_key(&self) -> #krate::ProjectResult<::std::string::String> {
                #body
            }
        }
    }
}
