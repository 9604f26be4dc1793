//! Errors for the fallible edges of the crate.
//!
//! Masking itself never fails. Errors only arise when loading marker
//! configuration and when a secretaria lookup reply cannot be used.

use thiserror::Error;

/// Rejected marker configuration.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[cfg(feature = "json")]
    #[error("invalid marker configuration: {0}")]
    Json(#[from] serde_json::Error),
    #[error("marker class must not be empty")]
    EmptyClass,
    #[error("marker class `{0}` must not contain whitespace")]
    WhitespaceInClass(String),
    #[error("marker class `{0}` is registered more than once")]
    DuplicateClass(String),
}

/// Why a secretaria lookup reply was not usable.
///
/// Every variant leads to the same error placeholder in the dropdown.
#[cfg(feature = "lookup")]
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LookupFailure {
    #[error("lookup endpoint answered with HTTP status {0}")]
    Status(u16),
    #[error("lookup request failed: {0}")]
    Transport(String),
    #[error("lookup reply is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
}
