//! Crate path resolution for dependency aliasing support.
//!
//! Converts the optional `#[view(crate = "...")]` attribute value into a
//! `TokenStream` that replaces the `ortho_view::` prefix in generated code.

use proc_macro2::TokenStream;
use quote::quote;

/// Resolve the crate path from the parsed struct attribute.
///
/// Defaults to `ortho_view` when no override is present.
///
/// ```rust,ignore
/// let path: syn::Path = syn::parse_str("my_alias").unwrap();
/// assert_eq!(resolve(Some(&path)).to_string(), "my_alias");
/// ```
pub(crate) fn resolve(crate_path: Option<&syn::Path>) -> TokenStream {
    crate_path.map_or_else(|| quote! { ortho_view }, |path| quote! { #path })
}
