//! Struct-specific `MaskedForm` derivation.
//!
//! Generates the in-place mask calls and the binding list for each
//! `#[mask(Marker)]` field, and collects the masked field types that need
//! `MaskTarget` predicates.

use proc_macro2::Span;
use quote::{quote, quote_spanned};
use syn::{DataStruct, Fields, Member, Result, spanned::Spanned};

use crate::{
    DeriveOutput, crate_path,
    strategy::{Strategy, parse_field_strategy},
    types::is_scalar_type,
};

pub(crate) fn derive_struct(data: DataStruct) -> Result<DeriveOutput> {
    let mut output = DeriveOutput::default();
    let members: Vec<(Member, syn::Field)> = match data.fields {
        Fields::Named(fields) => fields
            .named
            .into_iter()
            .filter_map(|field| field.ident.clone().map(|ident| (Member::Named(ident), field)))
            .collect(),
        Fields::Unnamed(fields) => fields
            .unnamed
            .into_iter()
            .enumerate()
            .map(|(index, field)| (Member::Unnamed(index.into()), field))
            .collect(),
        Fields::Unit => Vec::new(),
    };

    for (member, field) in members {
        let Strategy::Marker(marker) = parse_field_strategy(&field.attrs)? else {
            continue;
        };
        let span = field.span();
        if is_scalar_type(&field.ty) {
            return Err(syn::Error::new(
                span,
                "#[mask] applies to string-like fields (String, Option<String>, Vec<String>, ...)",
            ));
        }
        push_masked_field(&mut output, &member, &marker, span);
        output.masked_types.push(field.ty);
    }
    Ok(output)
}

fn push_masked_field(output: &mut DeriveOutput, member: &Member, marker: &syn::Path, span: Span) {
    let target_path = crate_path("MaskTarget");
    let marker_path = crate_path("MaskMarker");
    let field_mask_path = crate_path("FieldMask");
    let field_name = member_name(member);

    output.apply_body.push(quote_spanned! { span =>
        #target_path::apply_mask(
            &mut self.#member,
            &<#marker as #marker_path>::policy(),
        );
    });
    output.bindings.push(quote! {
        #field_mask_path {
            field: #field_name,
            class: <#marker as #marker_path>::CLASS,
            policy: <#marker as #marker_path>::policy(),
        }
    });
}

fn member_name(member: &Member) -> String {
    match member {
        Member::Named(ident) => ident.to_string(),
        Member::Unnamed(index) => index.index.to_string(),
    }
}
