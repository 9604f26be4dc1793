//! JSON marker configuration.
//!
//! ```json
//! {
//!   "markers": [
//!     { "class": "js-decimal-2", "policy": { "kind": "decimal_unguarded", "max_decimals": 2 } },
//!     { "class": "js-doc", "policy": { "kind": "document_number" } }
//!   ]
//! }
//! ```

use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::{
    error::ConfigError,
    registry::{MarkerRule, MaskRegistry},
};

/// Serialized form of a [`MaskRegistry`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegistryConfig {
    #[serde(default)]
    pub markers: Vec<MarkerRule>,
}

impl RegistryConfig {
    /// Validates the rules and builds the registry.
    pub fn into_registry(self) -> Result<MaskRegistry, ConfigError> {
        MaskRegistry::from_rules(self.markers)
    }
}

impl From<&MaskRegistry> for RegistryConfig {
    fn from(registry: &MaskRegistry) -> Self {
        Self {
            markers: registry.rules().to_vec(),
        }
    }
}

impl MaskRegistry {
    /// Loads a registry from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str::<RegistryConfig>(json)?.into_registry()
    }

    /// Loads a registry from a JSON reader.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, ConfigError> {
        serde_json::from_reader::<_, RegistryConfig>(reader)?.into_registry()
    }
}
