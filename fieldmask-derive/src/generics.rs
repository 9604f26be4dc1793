//! Generic type parameter handling for masked fields.
//!
//! A masked field whose type mentions a generic parameter (e.g. `Option<T>`)
//! gets a `where` predicate requiring that exact type to implement
//! `MaskTarget`. Fields with concrete types need no predicate, and generics
//! used only by untouched fields stay unbounded.

use syn::{Ident, parse_quote};

use crate::crate_path;

fn is_type_param(ident: &Ident, generics: &syn::Generics) -> bool {
    generics.type_params().any(|param| param.ident == *ident)
}

fn path_mentions(path: &syn::Path, generics: &syn::Generics) -> bool {
    path.segments.iter().any(|segment| {
        if is_type_param(&segment.ident, generics) {
            return true;
        }
        match &segment.arguments {
            syn::PathArguments::AngleBracketed(args) => args.args.iter().any(|arg| match arg {
                syn::GenericArgument::Type(inner) => mentions_generic(inner, generics),
                syn::GenericArgument::AssocType(assoc) => mentions_generic(&assoc.ty, generics),
                _ => false,
            }),
            syn::PathArguments::Parenthesized(args) => {
                args.inputs.iter().any(|input| mentions_generic(input, generics))
                    || matches!(&args.output, syn::ReturnType::Type(_, output) if mentions_generic(output, generics))
            }
            syn::PathArguments::None => false,
        }
    })
}

/// Whether `ty` refers to any of the type parameters in `generics`.
pub(crate) fn mentions_generic(ty: &syn::Type, generics: &syn::Generics) -> bool {
    match ty {
        syn::Type::Path(type_path) => {
            type_path
                .qself
                .as_ref()
                .is_some_and(|qself| mentions_generic(&qself.ty, generics))
                || path_mentions(&type_path.path, generics)
        }
        syn::Type::Reference(reference) => mentions_generic(&reference.elem, generics),
        syn::Type::Slice(slice) => mentions_generic(&slice.elem, generics),
        syn::Type::Array(array) => mentions_generic(&array.elem, generics),
        syn::Type::Paren(paren) => mentions_generic(&paren.elem, generics),
        syn::Type::Group(group) => mentions_generic(&group.elem, generics),
        syn::Type::Tuple(tuple) => tuple
            .elems
            .iter()
            .any(|elem| mentions_generic(elem, generics)),
        _ => false,
    }
}

/// Adds `#ty: MaskTarget` predicates for masked field types that mention generics.
pub(crate) fn add_mask_target_predicates(
    mut generics: syn::Generics,
    masked_types: &[syn::Type],
) -> syn::Generics {
    let target_path = crate_path("MaskTarget");
    let bounded: Vec<syn::Type> = masked_types
        .iter()
        .filter(|ty| mentions_generic(ty, &generics))
        .cloned()
        .collect();
    if bounded.is_empty() {
        return generics;
    }
    let where_clause = generics.make_where_clause();
    for ty in bounded {
        where_clause.predicates.push(parse_quote!(#ty: #target_path));
    }
    generics
}

#[cfg(test)]
mod tests {
    use quote::{ToTokens, quote};

    use super::*;

    fn generics(tokens: proc_macro2::TokenStream) -> syn::Generics {
        let input: syn::DeriveInput = syn::parse2(quote! { struct Dummy #tokens; }).unwrap();
        input.generics
    }

    #[test]
    fn detects_generic_inside_wrappers() {
        let g = generics(quote! { <T, U> });
        assert!(mentions_generic(&parse_quote!(T), &g));
        assert!(mentions_generic(&parse_quote!(Option<Vec<U>>), &g));
        assert!(mentions_generic(&parse_quote!(Box<[T]>), &g));
        assert!(!mentions_generic(&parse_quote!(String), &g));
        assert!(!mentions_generic(&parse_quote!(Option<String>), &g));
    }

    #[test]
    fn only_generic_field_types_get_predicates() {
        let g = generics(quote! { <T> });
        let types: Vec<syn::Type> = vec![parse_quote!(String), parse_quote!(Option<T>)];
        let bounded = add_mask_target_predicates(g, &types);
        let where_clause = bounded.where_clause.unwrap();
        assert_eq!(where_clause.predicates.len(), 1);
        let rendered = where_clause.to_token_stream().to_string();
        assert!(rendered.contains("Option < T >"));
        assert!(rendered.contains("MaskTarget"));
    }

    #[test]
    fn concrete_fields_leave_generics_alone() {
        let g = generics(quote! { <T> });
        let types: Vec<syn::Type> = vec![parse_quote!(String)];
        assert!(add_mask_target_predicates(g, &types).where_clause.is_none());
    }
}
