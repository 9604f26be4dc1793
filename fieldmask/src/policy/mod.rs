//! Mask policies: marker types and text transformations.
//!
//! This module provides:
//!
//! - **Policies** (`mask`): The [`MaskPolicy`] enum, a pure string transform
//!   selected per field.
//!
//! - **Markers** (`markers`): Zero-sized types like `DocumentNumber` and
//!   `PostalCode` that tie an input class name to a policy, along with the
//!   [`MaskMarker`] trait.
//!
//! - **Patterns** (`pattern`): The progressive digit groupings behind the
//!   document, phone and postal code policies.
//!
//! # Example
//!
//! ```rust
//! use fieldmask::{MaskMarker, MaskPolicy, PhoneNumber};
//!
//! let policy = PhoneNumber::policy();
//! assert_eq!(policy.apply_to("1133334444"), "(11) 3333-4444");
//!
//! let custom = MaskPolicy::decimal_guarded(Some(3), true);
//! assert_eq!(custom.apply_to("-2.71828"), "-2,718");
//! ```

mod decimal;
pub mod markers;
pub mod mask;
pub mod pattern;

pub use markers::{
    Decimal2, Decimal6Signed, DocumentNumber, IntegerOnly, MaskMarker, PhoneNumber, PostalCode,
};
pub use mask::MaskPolicy;
pub use pattern::DigitPattern;
