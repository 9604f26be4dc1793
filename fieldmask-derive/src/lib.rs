//! Derive macro for `fieldmask`.
//!
//! This crate generates the code behind `#[derive(MaskedForm)]`. It:
//! - reads `#[mask(Marker)]` field attributes
//! - emits a `fieldmask::MaskedForm` implementation that applies each marker's
//!   policy to its field and lists the bindings
//!
//! It does **not** define markers or policies. Those live in the main
//! `fieldmask` crate and are applied at runtime.

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::redundant_pub_crate
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::unwrap_used))]

#[allow(unused_extern_crates)]
extern crate proc_macro;

use proc_macro_crate::{FoundCrate, crate_name};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Result, parse_macro_input, spanned::Spanned};

mod derive_struct;
mod generics;
mod strategy;
mod types;
use derive_struct::derive_struct;
use generics::add_mask_target_predicates;
use strategy::reject_container_mask;

/// Derives `fieldmask::MaskedForm` for structs.
///
/// # Field Attributes
///
/// - **No annotation**: the field is left untouched.
///
/// - `#[mask(Marker)]`: applies `Marker::policy()` to the field through
///   `fieldmask::MaskTarget`. Works for `String`, `Option<String>`,
///   `Vec<String>`, `Box<String>` and generic fields whose type implements
///   `MaskTarget`. The marker can be any type implementing
///   `fieldmask::MaskMarker`, including custom ones.
///
/// Scalar fields (`u32`, `bool`, ...), more than one `#[mask]` per field,
/// `#[mask]` on the struct itself, enums and unions are rejected at compile
/// time.
///
/// # Example
///
/// ```ignore
/// use fieldmask::{DocumentNumber, MaskedForm, PostalCode};
///
/// #[derive(MaskedForm)]
/// struct Fornecedor {
///     nome: String,
///     #[mask(DocumentNumber)]
///     cnpj: String,
///     #[mask(PostalCode)]
///     cep: Option<String>,
/// }
/// ```
#[proc_macro_derive(MaskedForm, attributes(mask))]
pub fn derive_masked_form(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.into_compile_error().into(),
    }
}

/// Per-field output collected while walking a struct.
#[derive(Default)]
struct DeriveOutput {
    apply_body: Vec<TokenStream>,
    bindings: Vec<TokenStream>,
    masked_types: Vec<syn::Type>,
}

fn expand(input: DeriveInput) -> Result<TokenStream> {
    let DeriveInput {
        ident,
        generics,
        data,
        attrs,
        ..
    } = input;

    reject_container_mask(&attrs)?;

    let output = match data {
        Data::Struct(data) => derive_struct(data)?,
        Data::Enum(data) => {
            return Err(syn::Error::new(
                data.enum_token.span(),
                "`MaskedForm` can only be derived for structs",
            ));
        }
        Data::Union(data) => {
            return Err(syn::Error::new(
                data.union_token.span(),
                "`MaskedForm` can only be derived for structs",
            ));
        }
    };

    let crate_root = crate_root();
    let generics = add_mask_target_predicates(generics, &output.masked_types);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
    let DeriveOutput {
        apply_body,
        bindings,
        ..
    } = output;

    Ok(quote! {
        impl #impl_generics #crate_root::MaskedForm for #ident #ty_generics #where_clause {
            fn apply_masks(&mut self) {
                #(#apply_body)*
            }

            fn mask_bindings() -> ::std::vec::Vec<#crate_root::FieldMask> {
                ::std::vec![#(#bindings),*]
            }
        }
    })
}

/// Returns the token stream to reference the fieldmask crate root.
///
/// Handles crate renaming (e.g., `masks = { package = "fieldmask", ... }`).
fn crate_root() -> TokenStream {
    match crate_name("fieldmask") {
        Ok(FoundCrate::Itself) => quote! { crate },
        Ok(FoundCrate::Name(name)) => {
            let ident = format_ident!("{}", name);
            quote! { ::#ident }
        }
        Err(_) => quote! { ::fieldmask },
    }
}

fn crate_path(item: &str) -> TokenStream {
    let root = crate_root();
    let item = format_ident!("{}", item);
    quote! { #root::#item }
}

#[cfg(test)]
mod tests {
    use quote::quote;

    use super::expand;

    #[test]
    fn enums_are_rejected() {
        let input = syn::parse2(quote! {
            enum Choice { A, B }
        })
        .unwrap();
        let err = expand(input).unwrap_err();
        assert!(err.to_string().contains("only be derived for structs"));
    }

    #[test]
    fn container_attribute_is_rejected() {
        let input = syn::parse2(quote! {
            #[mask(PostalCode)]
            struct Endereco { cep: String }
        })
        .unwrap();
        assert!(expand(input).is_err());
    }

    #[test]
    fn expansion_implements_masked_form() {
        let input = syn::parse2(quote! {
            struct Endereco<T> {
                #[mask(PostalCode)]
                cep: T,
                logradouro: String,
            }
        })
        .unwrap();
        let rendered = expand(input).unwrap().to_string();
        assert!(rendered.contains("MaskedForm for Endereco < T >"));
        assert!(rendered.contains("where T :"));
        assert!(rendered.contains("MaskTarget"));
        assert!(rendered.contains("apply_mask"));
        assert!(!rendered.contains("logradouro"));
    }
}
