//! The mask policy applied to a single input field.
//!
//! [`MaskPolicy`] is a pure, stateless string transformation: every edit is
//! recomputed from the field's current raw text. All policies are total and
//! idempotent, so applying one to its own output is a no-op.

#[cfg(feature = "json")]
use serde::{Deserialize, Serialize};

use super::{
    decimal::{DecimalConfig, SignMode},
    pattern,
};
use crate::keyguard::KeystrokeGuard;

/// A mask strategy for a text input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "json",
    derive(Serialize, Deserialize),
    serde(tag = "kind", rename_all = "snake_case")
)]
pub enum MaskPolicy {
    /// Decimal number with keystroke filtering and an optional leading sign.
    DecimalGuarded {
        /// Maximum digits after the comma; `None` keeps them all.
        #[cfg_attr(feature = "json", serde(default))]
        max_decimals: Option<usize>,
        /// Whether a leading `-` is accepted.
        #[cfg_attr(feature = "json", serde(default))]
        allow_sign: bool,
    },
    /// Decimal number sanitized after the fact, with no keystroke filtering.
    ///
    /// `-` is not treated as a sign but is kept wherever it appears.
    DecimalUnguarded {
        /// Maximum digits after the comma; `None` keeps them all.
        #[cfg_attr(feature = "json", serde(default))]
        max_decimals: Option<usize>,
    },
    /// Digits only.
    IntegerOnly,
    /// CPF (up to 11 digits) or CNPJ (12 to 14 digits).
    DocumentNumber,
    /// Landline (10 digits) or mobile (11 digits) phone number with area code.
    PhoneNumber,
    /// Eight-digit CEP.
    PostalCode,
}

impl MaskPolicy {
    /// Constructs [`MaskPolicy::DecimalGuarded`].
    #[must_use]
    pub fn decimal_guarded(max_decimals: Option<usize>, allow_sign: bool) -> Self {
        Self::DecimalGuarded {
            max_decimals,
            allow_sign,
        }
    }

    /// Constructs [`MaskPolicy::DecimalUnguarded`].
    #[must_use]
    pub fn decimal_unguarded(max_decimals: Option<usize>) -> Self {
        Self::DecimalUnguarded { max_decimals }
    }

    #[must_use]
    pub fn integer_only() -> Self {
        Self::IntegerOnly
    }

    #[must_use]
    pub fn document_number() -> Self {
        Self::DocumentNumber
    }

    #[must_use]
    pub fn phone_number() -> Self {
        Self::PhoneNumber
    }

    #[must_use]
    pub fn postal_code() -> Self {
        Self::PostalCode
    }

    /// Applies the policy to `value`.
    ///
    /// This method is total (it does not return errors).
    ///
    /// # Example
    /// ```
    /// use fieldmask::MaskPolicy;
    ///
    /// assert_eq!(MaskPolicy::document_number().apply_to("12345678901"), "123.456.789-01");
    /// assert_eq!(MaskPolicy::decimal_unguarded(Some(2)).apply_to("3.14159"), "3,14");
    /// ```
    #[must_use]
    pub fn apply_to(&self, value: &str) -> String {
        match *self {
            MaskPolicy::DecimalGuarded {
                max_decimals,
                allow_sign,
            } => DecimalConfig {
                max_decimals,
                sign: if allow_sign {
                    SignMode::Leading
                } else {
                    SignMode::Rejected
                },
            }
            .apply_to(value),
            MaskPolicy::DecimalUnguarded { max_decimals } => DecimalConfig {
                max_decimals,
                sign: SignMode::Passthrough,
            }
            .apply_to(value),
            MaskPolicy::IntegerOnly => pattern::digits_only(value, usize::MAX),
            MaskPolicy::DocumentNumber => pattern::document_number(value),
            MaskPolicy::PhoneNumber => pattern::phone_number(value),
            MaskPolicy::PostalCode => pattern::postal_code(value),
        }
    }

    /// Returns the sanitized value only when it differs from `value`.
    ///
    /// Callers write the field back only on `Some`, which leaves the caret
    /// alone when the user typed something already valid.
    #[must_use]
    pub fn rewrite(&self, value: &str) -> Option<String> {
        let sanitized = self.apply_to(value);
        (sanitized != value).then_some(sanitized)
    }

    /// Returns the keystroke guard for policies that filter key presses.
    #[must_use]
    pub fn keystroke_guard(&self) -> Option<KeystrokeGuard> {
        match *self {
            MaskPolicy::DecimalGuarded { allow_sign, .. } => Some(KeystrokeGuard::new(allow_sign)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::MaskPolicy;

    #[test]
    fn integer_only_strips_separators_and_sign() {
        assert_eq!(MaskPolicy::integer_only().apply_to("12a3-4,5"), "12345");
        assert_eq!(MaskPolicy::integer_only().apply_to("  "), "");
    }

    #[test]
    fn integer_only_has_no_length_cap() {
        let long = "9".repeat(64);
        assert_eq!(MaskPolicy::integer_only().apply_to(&long), long);
    }

    #[test]
    fn guarded_without_sign_strips_minus() {
        let policy = MaskPolicy::decimal_guarded(Some(2), false);
        assert_eq!(policy.apply_to("-4,5"), "4,5");
    }

    #[test]
    fn unguarded_keeps_minus_anywhere() {
        let policy = MaskPolicy::decimal_unguarded(Some(2));
        assert_eq!(policy.apply_to("4-5"), "4-5");
    }

    #[test]
    fn rewrite_is_none_for_conforming_values() {
        let policy = MaskPolicy::postal_code();
        assert_eq!(policy.rewrite("12345-678"), None);
        assert_eq!(policy.rewrite("12345678"), Some("12345-678".to_string()));
    }

    #[test]
    fn only_guarded_decimal_has_keystroke_guard() {
        assert!(
            MaskPolicy::decimal_guarded(Some(6), true)
                .keystroke_guard()
                .is_some()
        );
        assert!(
            MaskPolicy::decimal_unguarded(Some(2))
                .keystroke_guard()
                .is_none()
        );
        assert!(MaskPolicy::phone_number().keystroke_guard().is_none());
    }

    #[cfg(feature = "json")]
    #[test]
    fn serializes_with_kind_tag() {
        let policy = MaskPolicy::decimal_guarded(Some(6), true);
        let json = serde_json::to_value(policy).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "kind": "decimal_guarded", "max_decimals": 6, "allow_sign": true })
        );

        let parsed: MaskPolicy = serde_json::from_str(r#"{ "kind": "postal_code" }"#).unwrap();
        assert_eq!(parsed, MaskPolicy::PostalCode);
    }

    #[cfg(feature = "json")]
    #[test]
    fn decimal_fields_default_when_omitted() {
        let parsed: MaskPolicy = serde_json::from_str(r#"{ "kind": "decimal_guarded" }"#).unwrap();
        assert_eq!(parsed, MaskPolicy::decimal_guarded(None, false));
    }
}
