//! Runtime configuration for the content registry.
//!
//! Collections are declared in code; the only runtime knob is how unknown
//! frontmatter fields are treated.

use folio_schema::{UnknownFieldPolicy, ValidationOptions};
use serde::{Deserialize, Serialize};

/// Environment variable selecting the unknown-field policy.
pub const UNKNOWN_FIELDS_ENV: &str = "FOLIO_UNKNOWN_FIELDS";

/// Configuration for the content registry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Options applied to every entry validation.
    pub validation: ValidationOptions,
}

impl ContentConfig {
    /// Configuration from the process environment.
    ///
    /// Variables:
    /// - `FOLIO_UNKNOWN_FIELDS` — `ignore` (default) or `reject`.
    pub fn from_environment() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Configuration from an arbitrary variable source.
    ///
    /// Unrecognized values fall back to the default policy with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let unknown_fields = match lookup(UNKNOWN_FIELDS_ENV) {
            None => UnknownFieldPolicy::default(),
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                tracing::warn!(var = UNKNOWN_FIELDS_ENV, error = %e, "ignoring invalid setting");
                UnknownFieldPolicy::default()
            }),
        };

        tracing::debug!(?unknown_fields, "content configuration loaded");
        Self {
            validation: ValidationOptions { unknown_fields },
        }
    }
}
