//! # folio-content — Site Content Collections
//!
//! Declares the site's content collections and exposes the process-wide
//! schema registry that discovery and rendering collaborators validate
//! entries against.
//!
//! The registry is built once, on first use, from [`ContentConfig::from_environment`]
//! and is read-only afterwards. Lookups from any number of threads share it
//! without locking.
//!
//! ```
//! use folio_content::{collections::BlogPost, get_entry_as};
//! use folio_core::RawRecord;
//!
//! let raw = RawRecord::from_yaml_str(
//!     "title: Hello\ndescription: First post\ndate: 2024-01-15\ntags: [intro]\n",
//! )?;
//! let post: BlogPost = get_entry_as("blog", &raw)?;
//! assert_eq!(post.author, "Alex Chen");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Crate Policy
//!
//! - Startup failures are terminal: every lookup reports the same
//!   [`ContentError::Startup`] once declaration has failed.
//! - Entry failures carry the full issue list from `folio-schema`.

pub mod collections;
pub mod config;
pub mod error;

pub use config::ContentConfig;
pub use error::{ContentError, StartupError};

use std::sync::OnceLock;

use folio_core::RawRecord;
use folio_schema::{SchemaRegistry, ValidatedRecord};
use serde::de::DeserializeOwned;

static REGISTRY: OnceLock<Result<SchemaRegistry, ContentError>> = OnceLock::new();

/// Build a registry holding every built-in collection.
///
/// # Errors
///
/// `ContentError::Startup` if a collection cannot be declared.
pub fn build_registry(config: &ContentConfig) -> Result<SchemaRegistry, ContentError> {
    let mut registry = SchemaRegistry::with_options(config.validation.clone());
    collections::declare_all(&mut registry)?;
    Ok(registry)
}

/// The process-wide registry, built on first call.
pub fn registry() -> Result<&'static SchemaRegistry, ContentError> {
    REGISTRY
        .get_or_init(|| {
            let built = build_registry(&ContentConfig::from_environment());
            match &built {
                Ok(registry) => tracing::info!(
                    collections = registry.len(),
                    "content registry initialized"
                ),
                Err(e) => tracing::error!(error = %e, "content registry failed to initialize"),
            }
            built
        })
        .as_ref()
        .map_err(Clone::clone)
}

/// Validate a raw entry against the named collection.
///
/// # Errors
///
/// - `ContentError::Startup` if the registry could not be built.
/// - `ContentError::Registry` for an unknown collection or invalid entry.
pub fn get_entry(collection: &str, raw: &RawRecord) -> Result<ValidatedRecord, ContentError> {
    Ok(registry()?.validate(collection, raw)?)
}

/// Validate a raw entry and decode it into `T`.
///
/// # Errors
///
/// As [`get_entry`], plus `ContentError::Decode` if the validated record
/// does not fit `T`.
pub fn get_entry_as<T: DeserializeOwned>(
    collection: &str,
    raw: &RawRecord,
) -> Result<T, ContentError> {
    let record = get_entry(collection, raw)?;
    record.decode().map_err(|e| ContentError::decode(collection, e))
}
