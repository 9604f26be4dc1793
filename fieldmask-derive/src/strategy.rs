//! Parsing of `#[mask(...)]` field attributes.
//!
//! This module maps attribute syntax to per-field decisions and produces
//! structured errors for invalid forms.

use proc_macro2::Span;
use syn::{Attribute, Meta, Result, spanned::Spanned};

/// What the derive does with a field.
///
/// | Attribute         | Strategy             | Behavior                       |
/// |-------------------|----------------------|--------------------------------|
/// | None              | `Untouched`          | Field is left as is            |
/// | `#[mask(Marker)]` | `Marker(marker_path)`| Apply the marker's policy      |
#[derive(Clone, Debug)]
pub(crate) enum Strategy {
    Untouched,
    /// The marker type (e.g., `DocumentNumber`, `my_forms::Percentage`)
    /// resolves to a policy via `MaskMarker`.
    Marker(syn::Path),
}

fn set_strategy(target: &mut Option<Strategy>, next: Strategy, span: Span) -> Result<()> {
    if target.is_some() {
        return Err(syn::Error::new(
            span,
            "multiple #[mask] attributes on the same field",
        ));
    }
    *target = Some(next);
    Ok(())
}

pub(crate) fn parse_field_strategy(attrs: &[Attribute]) -> Result<Strategy> {
    let mut strategy: Option<Strategy> = None;
    for attr in attrs {
        if !attr.path().is_ident("mask") {
            continue;
        }

        match &attr.meta {
            Meta::Path(_) => {
                return Err(syn::Error::new(
                    attr.span(),
                    "missing marker: use #[mask(Marker)] \
                     (e.g., #[mask(DocumentNumber)], #[mask(PostalCode)])",
                ));
            }
            Meta::List(list) => match syn::parse2::<syn::Path>(list.tokens.clone()) {
                Ok(path) => set_strategy(&mut strategy, Strategy::Marker(path), attr.span())?,
                Err(_) => {
                    return Err(syn::Error::new(
                        attr.span(),
                        "expected a marker type (e.g., #[mask(PhoneNumber)])",
                    ));
                }
            },
            Meta::NameValue(_) => {
                return Err(syn::Error::new(
                    attr.span(),
                    "expected #[mask(Marker)] syntax (e.g., #[mask(IntegerOnly)])",
                ));
            }
        }
    }

    Ok(strategy.unwrap_or(Strategy::Untouched))
}

/// Rejects `#[mask]` on the struct itself.
pub(crate) fn reject_container_mask(attrs: &[Attribute]) -> Result<()> {
    match attrs.iter().find(|attr| attr.path().is_ident("mask")) {
        Some(attr) => Err(syn::Error::new(
            attr.span(),
            "#[mask] goes on fields, not on the struct",
        )),
        None => Ok(()),
    }
}
