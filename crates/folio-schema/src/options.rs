//! # Validation Options
//!
//! Runtime knobs that apply on top of a schema's own declaration. They are
//! `serde`-deserializable with every field defaulted, so an embedding
//! application can load them from its own configuration.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// What to do with raw fields the schema does not declare.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownFieldPolicy {
    /// Drop them silently (forward-compatible records).
    #[default]
    Ignore,
    /// Report each one as an `UnknownField` issue.
    Reject,
}

impl FromStr for UnknownFieldPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ignore" => Ok(Self::Ignore),
            "reject" | "strict" => Ok(Self::Reject),
            other => Err(format!("unknown field policy {other:?}; expected 'ignore' or 'reject'")),
        }
    }
}

/// Options applied to every validation through a registry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationOptions {
    /// Unknown-field handling. A strict schema rejects unknown fields
    /// regardless of this setting.
    pub unknown_fields: UnknownFieldPolicy,
}

impl ValidationOptions {
    /// Options that reject unknown fields for every schema.
    pub fn strict() -> Self {
        Self {
            unknown_fields: UnknownFieldPolicy::Reject,
        }
    }
}
