//! Errors surfaced to discovery and rendering collaborators.

use std::sync::Arc;

use folio_core::FolioError;
use folio_schema::{RegistryError, SchemaDefinitionError, ValidationError};
use thiserror::Error;

/// Why the built-in collections could not be declared.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StartupError {
    /// A collection name was rejected.
    #[error("invalid collection name: {0}")]
    Name(#[from] FolioError),

    /// A collection schema was malformed.
    #[error("invalid collection schema: {0}")]
    Schema(#[from] SchemaDefinitionError),

    /// The registry refused a collection.
    #[error("collection registration failed: {0}")]
    Registration(#[source] RegistryError),
}

/// Failure looking up or decoding a content entry.
#[derive(Error, Debug, Clone)]
pub enum ContentError {
    /// The built-in collections could not be declared. The process should
    /// not continue.
    #[error("content collections failed to initialize: {0}")]
    Startup(#[from] StartupError),

    /// Unknown collection or invalid entry.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// The validated record did not fit the requested entry type.
    #[error("entry in collection '{collection}' could not be decoded: {source}")]
    Decode {
        /// Collection the entry belongs to.
        collection: String,
        /// Decoder error. Shared so the error stays cloneable.
        #[source]
        source: Arc<serde_json::Error>,
    },
}

impl ContentError {
    pub(crate) fn decode(collection: &str, source: serde_json::Error) -> Self {
        ContentError::Decode {
            collection: collection.to_string(),
            source: Arc::new(source),
        }
    }

    /// The validation issues, if the entry failed its schema.
    pub fn validation(&self) -> Option<&ValidationError> {
        match self {
            ContentError::Registry(err) => err.validation(),
            _ => None,
        }
    }

    /// Whether the failure is about the collection name rather than the entry.
    pub fn is_unknown_collection(&self) -> bool {
        matches!(self, ContentError::Registry(RegistryError::UnknownCollection(_)))
    }
}

impl From<FolioError> for ContentError {
    fn from(err: FolioError) -> Self {
        ContentError::Startup(err.into())
    }
}

impl From<SchemaDefinitionError> for ContentError {
    fn from(err: SchemaDefinitionError) -> Self {
        ContentError::Startup(err.into())
    }
}
