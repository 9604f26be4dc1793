//! Marker registration and mount-time binding.
//!
//! A [`MaskRegistry`] maps marker classes to policies. At page or component
//! mount the host lists its input elements once and the registry binds an
//! independent [`MaskedField`] to every element carrying a registered class.

#[cfg(feature = "json")]
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{
    error::ConfigError,
    field::MaskedField,
    policy::{
        Decimal2, Decimal6Signed, DocumentNumber, IntegerOnly, MaskMarker, MaskPolicy,
        PhoneNumber, PostalCode,
    },
};

/// One class-to-policy binding.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize), serde(deny_unknown_fields))]
pub struct MarkerRule {
    /// Class name looked up in an element's `class` attribute.
    pub class: String,
    pub policy: MaskPolicy,
}

/// An input element as seen at mount time.
#[derive(Clone, Copy, Debug)]
pub struct Element<'a> {
    /// Identifier the host uses to route events back to the field.
    pub id: &'a str,
    /// Raw, whitespace-separated `class` attribute.
    pub class_attr: &'a str,
    /// Current value rendered by the server.
    pub value: &'a str,
}

impl<'a> Element<'a> {
    pub fn new(id: &'a str, class_attr: &'a str) -> Self {
        Self {
            id,
            class_attr,
            value: "",
        }
    }

    #[must_use]
    pub fn with_value(mut self, value: &'a str) -> Self {
        self.value = value;
        self
    }
}

/// Ordered set of marker rules. The first matching rule wins.
#[derive(Clone, Debug)]
pub struct MaskRegistry {
    rules: Vec<MarkerRule>,
}

impl MaskRegistry {
    /// A registry with no markers.
    #[must_use]
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Builds a registry from rules, validating every class.
    pub fn from_rules<I>(rules: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = MarkerRule>,
    {
        let mut registry = Self::empty();
        for rule in rules {
            registry.register(rule.class, rule.policy)?;
        }
        Ok(registry)
    }

    /// Adds a rule after the existing ones.
    pub fn register(
        &mut self,
        class: impl Into<String>,
        policy: MaskPolicy,
    ) -> Result<&mut Self, ConfigError> {
        let class = class.into();
        if class.is_empty() {
            return Err(ConfigError::EmptyClass);
        }
        if class.chars().any(char::is_whitespace) {
            return Err(ConfigError::WhitespaceInClass(class));
        }
        if self.rules.iter().any(|rule| rule.class == class) {
            return Err(ConfigError::DuplicateClass(class));
        }
        debug!(class = %class, ?policy, "registered mask marker");
        self.rules.push(MarkerRule { class, policy });
        Ok(self)
    }

    /// Adds the rule described by marker type `M`.
    pub fn register_marker<M: MaskMarker>(&mut self) -> Result<&mut Self, ConfigError> {
        self.register(M::CLASS, M::policy())
    }

    pub fn rules(&self) -> &[MarkerRule] {
        &self.rules
    }

    /// Finds the policy for an element's class attribute.
    pub fn policy_for(&self, class_attr: &str) -> Option<MaskPolicy> {
        self.matching(class_attr).next().map(|rule| rule.policy)
    }

    fn matching<'r>(&'r self, class_attr: &'r str) -> impl Iterator<Item = &'r MarkerRule> + 'r {
        self.rules
            .iter()
            .filter(move |rule| class_attr.split_whitespace().any(|class| class == rule.class))
    }

    /// Binds a field to every element that carries a registered marker.
    ///
    /// Meant to run once per mount. Elements without a marker are skipped.
    pub fn mount<'e, I>(&self, elements: I) -> Vec<MaskedField>
    where
        I: IntoIterator<Item = Element<'e>>,
    {
        let mut fields = Vec::new();
        for element in elements {
            let mut matches = self.matching(element.class_attr);
            let Some(rule) = matches.next() else {
                continue;
            };
            let ignored = matches.count();
            if ignored > 0 {
                warn!(
                    element = element.id,
                    class = %rule.class,
                    ignored,
                    "element carries several mask markers; using the first registered"
                );
            }
            fields.push(MaskedField::new(element.id, rule.policy).with_value(element.value));
        }
        debug!(count = fields.len(), "mounted masked fields");
        fields
    }
}

impl Default for MaskRegistry {
    /// The built-in markers, in the order the stock templates attach them.
    fn default() -> Self {
        let rules = [
            (Decimal2::CLASS, Decimal2::policy()),
            (Decimal6Signed::CLASS, Decimal6Signed::policy()),
            (IntegerOnly::CLASS, IntegerOnly::policy()),
            (DocumentNumber::CLASS, DocumentNumber::policy()),
            (PhoneNumber::CLASS, PhoneNumber::policy()),
            (PostalCode::CLASS, PostalCode::policy()),
        ];
        Self {
            rules: rules
                .into_iter()
                .map(|(class, policy)| MarkerRule {
                    class: class.to_string(),
                    policy,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Element, MaskRegistry};
    use crate::{
        error::ConfigError,
        policy::{DocumentNumber, MaskMarker, MaskPolicy},
    };

    #[test]
    fn default_registry_knows_builtin_classes() {
        let registry = MaskRegistry::default();
        assert_eq!(registry.rules().len(), 6);
        assert_eq!(
            registry.policy_for("form-control js-cep"),
            Some(MaskPolicy::postal_code())
        );
        assert_eq!(registry.policy_for("form-control"), None);
    }

    #[test]
    fn class_match_is_exact_per_token() {
        let registry = MaskRegistry::default();
        assert_eq!(registry.policy_for("js-cep-extra"), None);
        assert_eq!(registry.policy_for("\tjs-int\n"), Some(MaskPolicy::integer_only()));
    }

    #[test]
    fn register_rejects_bad_classes() {
        let mut registry = MaskRegistry::empty();
        assert!(matches!(
            registry.register("", MaskPolicy::integer_only()),
            Err(ConfigError::EmptyClass)
        ));
        assert!(matches!(
            registry.register("a b", MaskPolicy::integer_only()),
            Err(ConfigError::WhitespaceInClass(_))
        ));
        registry.register_marker::<DocumentNumber>().unwrap();
        assert!(matches!(
            registry.register(DocumentNumber::CLASS, MaskPolicy::integer_only()),
            Err(ConfigError::DuplicateClass(class)) if class == "js-doc"
        ));
    }

    #[test]
    fn first_registered_rule_wins() {
        let registry = MaskRegistry::default();
        // js-int is registered before js-doc.
        assert_eq!(
            registry.policy_for("js-doc js-int"),
            Some(MaskPolicy::integer_only())
        );
    }

    #[test]
    fn mount_binds_only_marked_elements() {
        let registry = MaskRegistry::default();
        let fields = registry.mount([
            Element::new("id_nome", "form-control"),
            Element::new("id_cpf", "form-control js-doc").with_value("123"),
            Element::new("id_fone", "js-phone"),
        ]);
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].id(), "id_cpf");
        assert_eq!(fields[0].value(), "123");
        assert_eq!(fields[1].policy(), MaskPolicy::phone_number());
    }
}
