//! Typed forms whose fields carry mask markers.
//!
//! `#[derive(MaskedForm)]` implements [`MaskedForm`] for a struct, applying
//! each `#[mask(Marker)]` field's policy through [`MaskTarget`]. This is the
//! server-side counterpart of mount-time binding: submitted values can be
//! normalized with the same rules the browser applied while typing.

use crate::policy::MaskPolicy;

/// A value a mask policy can be applied to in place.
pub trait MaskTarget {
    fn apply_mask(&mut self, policy: &MaskPolicy);
}

impl MaskTarget for String {
    fn apply_mask(&mut self, policy: &MaskPolicy) {
        if let Some(sanitized) = policy.rewrite(self) {
            *self = sanitized;
        }
    }
}

impl<T: MaskTarget> MaskTarget for Option<T> {
    fn apply_mask(&mut self, policy: &MaskPolicy) {
        if let Some(inner) = self {
            inner.apply_mask(policy);
        }
    }
}

impl<T: MaskTarget> MaskTarget for Vec<T> {
    fn apply_mask(&mut self, policy: &MaskPolicy) {
        for item in self {
            item.apply_mask(policy);
        }
    }
}

impl<T: MaskTarget + ?Sized> MaskTarget for Box<T> {
    fn apply_mask(&mut self, policy: &MaskPolicy) {
        (**self).apply_mask(policy);
    }
}

/// A field-to-marker binding declared on a form type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldMask {
    /// Field name, or its index for tuple structs.
    pub field: &'static str,
    /// Class name of the marker.
    pub class: &'static str,
    pub policy: MaskPolicy,
}

/// A form whose masked fields can be normalized in one call.
pub trait MaskedForm {
    /// Applies every declared mask to its field.
    fn apply_masks(&mut self);

    /// The declared bindings, in field order.
    fn mask_bindings() -> Vec<FieldMask>;

    /// Consumes the form and returns it with masks applied.
    #[must_use]
    fn masked(mut self) -> Self
    where
        Self: Sized,
    {
        self.apply_masks();
        self
    }
}
