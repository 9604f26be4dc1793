//! Input masks for form fields.
//!
//! This crate separates:
//! - **Policies**: how a field's text is rewritten (`MaskPolicy`).
//! - **Markers**: which class on an input selects a policy (e.g., `DocumentNumber`).
//!
//! Every policy is a pure, idempotent string transform recomputed from the
//! field's raw value on each edit. Guarded decimal fields also filter key
//! presses before they reach the field.
//!
//! What this crate does:
//! - sanitizes decimals and integers, and formats CPF/CNPJ, phone numbers and CEP
//! - binds fields to markers at mount time (`MaskRegistry`) or at compile
//!   time (`#[derive(MaskedForm)]`)
//! - models the secretaria dropdown keyed on an IBGE code (feature `lookup`)
//!
//! What it does not do:
//! - touch the DOM or perform network I/O
//! - validate check digits, numeric ranges or leading zeros
//!
//! ```rust
//! use fieldmask::{Element, InputOutcome, MaskRegistry};
//!
//! let registry = MaskRegistry::default();
//! let mut fields = registry.mount([Element::new("id_cep", "form-control js-cep")]);
//! assert_eq!(
//!     fields[0].on_input("01310100"),
//!     InputOutcome::Rewritten("01310-100".to_string())
//! );
//! ```

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
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::option_if_let_else
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

#[cfg(feature = "derive")]
pub use fieldmask_derive::MaskedForm;

#[allow(unused_extern_crates)]
extern crate self as fieldmask;

// Module declarations
#[cfg(feature = "json")]
mod config;
pub mod error;
mod field;
mod form;
pub mod keyguard;
#[cfg(feature = "lookup")]
pub mod lookup;
pub mod policy;
mod registry;

#[cfg(feature = "json")]
pub use config::RegistryConfig;
#[cfg(feature = "lookup")]
pub use error::LookupFailure;
pub use error::ConfigError;
pub use field::{InputOutcome, MaskedField};
pub use form::{FieldMask, MaskTarget, MaskedForm};
pub use keyguard::{Key, KeyDecision, KeystrokeGuard};
#[cfg(feature = "lookup")]
pub use lookup::{LookupRequest, LookupState, SecretariaLookup, SelectOption};
pub use policy::{
    Decimal2, Decimal6Signed, DigitPattern, DocumentNumber, IntegerOnly, MaskMarker, MaskPolicy,
    PhoneNumber, PostalCode,
};
pub use registry::{Element, MarkerRule, MaskRegistry};
