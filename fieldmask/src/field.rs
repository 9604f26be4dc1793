//! A text input bound to one mask policy.

use tracing::trace;

use crate::{
    keyguard::{Key, KeyDecision},
    policy::MaskPolicy,
};

/// What an input event did to the field value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputOutcome {
    /// The raw value already conformed; the host leaves the field untouched.
    Unchanged,
    /// The host must write this value back into the field.
    Rewritten(String),
}

/// One input element and its mask.
///
/// Each field owns its value; nothing is shared between fields.
#[derive(Clone, Debug)]
pub struct MaskedField {
    id: String,
    policy: MaskPolicy,
    value: String,
}

impl MaskedField {
    /// Binds `policy` to the field identified by `id`, starting empty.
    pub fn new(id: impl Into<String>, policy: MaskPolicy) -> Self {
        Self {
            id: id.into(),
            policy,
            value: String::new(),
        }
    }

    /// Seeds the field with its server-rendered value.
    ///
    /// The initial value is kept as is; masking starts with the first edit.
    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn policy(&self) -> MaskPolicy {
        self.policy
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Filters a key press before the field sees it.
    ///
    /// Fields without a keystroke guard allow every key.
    pub fn on_keydown(&self, key: &Key, caret: usize) -> KeyDecision {
        let Some(guard) = self.policy.keystroke_guard() else {
            return KeyDecision::Allow;
        };
        let decision = guard.check(key, caret, &self.value);
        if decision.prevents_default() {
            trace!(field = %self.id, ?key, caret, "blocked key press");
        }
        decision
    }

    /// Handles an input event carrying the field's new raw text.
    pub fn on_input(&mut self, raw: impl Into<String>) -> InputOutcome {
        let raw = raw.into();
        match self.policy.rewrite(&raw) {
            None => {
                self.value = raw;
                InputOutcome::Unchanged
            }
            Some(sanitized) => {
                trace!(
                    field = %self.id,
                    raw_len = raw.len(),
                    sanitized_len = sanitized.len(),
                    "rewrote masked input"
                );
                self.value.clone_from(&sanitized);
                InputOutcome::Rewritten(sanitized)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{InputOutcome, MaskedField};
    use crate::{keyguard::Key, keyguard::KeyDecision, policy::MaskPolicy};

    #[test]
    fn conforming_input_is_not_rewritten() {
        let mut field = MaskedField::new("id_quantidade", MaskPolicy::integer_only());
        assert_eq!(field.on_input("42"), InputOutcome::Unchanged);
        assert_eq!(field.value(), "42");
    }

    #[test]
    fn nonconforming_input_is_rewritten_and_stored() {
        let mut field = MaskedField::new("id_cpf", MaskPolicy::document_number());
        assert_eq!(
            field.on_input("1234"),
            InputOutcome::Rewritten("123.4".to_string())
        );
        assert_eq!(field.value(), "123.4");
        assert_eq!(field.on_input("123.45"), InputOutcome::Unchanged);
    }

    #[test]
    fn initial_value_is_not_masked_until_edited() {
        let field = MaskedField::new("id_cep", MaskPolicy::postal_code()).with_value("12345678");
        assert_eq!(field.value(), "12345678");
    }

    #[test]
    fn guard_sees_current_value() {
        let mut field = MaskedField::new("id_saldo", MaskPolicy::decimal_guarded(Some(6), true));
        assert_eq!(field.on_keydown(&Key::Char('-'), 0), KeyDecision::Allow);
        field.on_input("-3");
        assert_eq!(field.on_keydown(&Key::Char('-'), 0), KeyDecision::Block);
        assert_eq!(field.on_keydown(&Key::Char('x'), 2), KeyDecision::Block);
    }

    #[test]
    fn unguarded_fields_allow_every_key() {
        let field = MaskedField::new("id_valor", MaskPolicy::decimal_unguarded(Some(2)));
        assert_eq!(field.on_keydown(&Key::Char('x'), 0), KeyDecision::Allow);
    }
}
