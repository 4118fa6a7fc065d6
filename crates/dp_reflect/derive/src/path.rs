//! Paths of the `dp_reflect` items the generated code refers to.

use proc_macro2::TokenStream;
use quote::quote;

/// Get the correct access path to the `dp_reflect` crate.
///
/// 1. For crates that depend on `dp_reflect`, `::dp_reflect` is returned.
/// 2. For crates that depend on `dotpath`, `::dotpath::reflect` is returned.
/// 3. Otherwise `::dp_reflect` is returned, which may be incorrect.
///
/// Reading the manifest is not free, so the path is resolved once per
/// derive and passed around.
pub(crate) fn dp_reflect() -> syn::Path {
    dp_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("dp_reflect"))
}

#[inline(always)]
pub(crate) fn macro_exports_(dp_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #dp_reflect_path::__macro_exports
    }
}
