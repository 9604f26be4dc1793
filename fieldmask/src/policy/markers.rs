//! Marker types naming the mask capability carried by an input.
//!
//! Each marker ties a CSS class found on form inputs to a [`MaskPolicy`].
//! The registry uses the class to find fields at mount time, and
//! `#[derive(MaskedForm)]` uses the marker type directly:
//!
//! ```rust
//! use fieldmask::{MaskMarker, MaskPolicy};
//!
//! #[derive(Clone, Copy)]
//! struct Percentage;
//!
//! impl MaskMarker for Percentage {
//!     const CLASS: &'static str = "js-percent";
//!
//!     fn policy() -> MaskPolicy {
//!         MaskPolicy::decimal_guarded(Some(2), false)
//!     }
//! }
//! ```

use super::mask::MaskPolicy;

// =============================================================================
// MaskMarker trait
// =============================================================================

/// Associates a marker type with its class name and mask policy.
pub trait MaskMarker {
    /// Class name that selects this marker on an input element.
    const CLASS: &'static str;

    /// Returns the policy for this marker type.
    fn policy() -> MaskPolicy;
}

// =============================================================================
// Marker types and their policies
// =============================================================================

/// Monetary amount with two decimal places (`js-decimal-2`).
///
/// No keystroke filtering, so both `,` and `.` can be typed on any keyboard.
#[derive(Clone, Copy)]
pub struct Decimal2;

impl MaskMarker for Decimal2 {
    const CLASS: &'static str = "js-decimal-2";

    fn policy() -> MaskPolicy {
        MaskPolicy::decimal_unguarded(Some(2))
    }
}

/// Signed quantity with six decimal places (`js-decimal-6`).
#[derive(Clone, Copy)]
pub struct Decimal6Signed;

impl MaskMarker for Decimal6Signed {
    const CLASS: &'static str = "js-decimal-6";

    fn policy() -> MaskPolicy {
        MaskPolicy::decimal_guarded(Some(6), true)
    }
}

/// Digits only (`js-int`).
#[derive(Clone, Copy)]
pub struct IntegerOnly;

impl MaskMarker for IntegerOnly {
    const CLASS: &'static str = "js-int";

    fn policy() -> MaskPolicy {
        MaskPolicy::integer_only()
    }
}

/// CPF or CNPJ (`js-doc`).
#[derive(Clone, Copy)]
pub struct DocumentNumber;

impl MaskMarker for DocumentNumber {
    const CLASS: &'static str = "js-doc";

    fn policy() -> MaskPolicy {
        MaskPolicy::document_number()
    }
}

/// Phone number with area code (`js-phone`).
#[derive(Clone, Copy)]
pub struct PhoneNumber;

impl MaskMarker for PhoneNumber {
    const CLASS: &'static str = "js-phone";

    fn policy() -> MaskPolicy {
        MaskPolicy::phone_number()
    }
}

/// CEP (`js-cep`).
#[derive(Clone, Copy)]
pub struct PostalCode;

impl MaskMarker for PostalCode {
    const CLASS: &'static str = "js-cep";

    fn policy() -> MaskPolicy {
        MaskPolicy::postal_code()
    }
}

// =============================================================================
// Tests
// =============================================================================
