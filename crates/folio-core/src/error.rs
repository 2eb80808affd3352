//! # Error Types
//!
//! Errors raised while building core values: collection names, timestamps,
//! and raw records converted from serde data models. Schema and validation
//! errors live in `folio-schema`.

use thiserror::Error;

/// Top-level error type for `folio-core`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FolioError {
    /// A collection name failed its construction rules.
    #[error("invalid collection name {name:?}: {reason}")]
    InvalidCollectionName {
        /// The rejected input.
        name: String,
        /// Which rule it broke.
        reason: &'static str,
    },

    /// Text did not match any recognized date/time format.
    #[error("unrecognized date/time {input:?}: {reason}")]
    InvalidTimestamp {
        /// The rejected input.
        input: String,
        /// Parser detail for the last attempted format.
        reason: String,
    },

    /// A raw record must be a mapping at the top level.
    #[error("raw record must be a mapping, got {shape}")]
    NotAMapping {
        /// Observed shape of the top-level value.
        shape: &'static str,
    },

    /// A value in the source data model has no raw counterpart.
    #[error("unsupported value: {0}")]
    UnsupportedValue(String),

    /// Source text could not be parsed.
    #[error("{format} parse error: {reason}")]
    Parse {
        /// Source format name ("yaml" or "json").
        format: &'static str,
        /// Parser message.
        reason: String,
    },
}
