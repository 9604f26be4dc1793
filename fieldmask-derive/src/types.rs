//! Type utilities for the derive macro.

/// Checks if a type is a recognized scalar primitive.
///
/// Returns `true` for bare primitive type names like `i32`, `bool`, `f64`.
/// Masks rewrite text, so these cannot carry `#[mask]`. Qualified paths and
/// aliases are not recognized and fall through to the `MaskTarget` bound.
pub(crate) fn is_scalar_type(ty: &syn::Type) -> bool {
    let syn::Type::Path(path) = ty else {
        return false;
    };
    if path.qself.is_some() || path.path.leading_colon.is_some() || path.path.segments.len() != 1
    {
        return false;
    }
    let Some(segment) = path.path.segments.last() else {
        return false;
    };
    segment.arguments.is_empty()
        && matches!(
            segment.ident.to_string().as_str(),
            "i8" | "i16"
                | "i32"
                | "i64"
                | "i128"
                | "isize"
                | "u8"
                | "u16"
                | "u32"
                | "u64"
                | "u128"
                | "usize"
                | "f32"
                | "f64"
                | "bool"
                | "char"
        )
}
