//! # Schema Registry
//!
//! Maps collection names to schema definitions. Populated during start-up
//! through `&mut self`; once shared (behind `&`, `Arc`, or a `OnceLock`) it can
//! only be read, so concurrent lookups need no locking.

use std::collections::BTreeMap;

use folio_core::{CollectionName, RawRecord};

use crate::definition::SchemaDefinition;
use crate::error::RegistryError;
use crate::options::ValidationOptions;
use crate::record::ValidatedRecord;
use crate::validate;

/// The authoritative set of named collection schemas.
#[derive(Debug, Default)]
pub struct SchemaRegistry {
    schemas: BTreeMap<CollectionName, SchemaDefinition>,
    options: ValidationOptions,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry that applies `options` to every validation.
    pub fn with_options(options: ValidationOptions) -> Self {
        Self {
            schemas: BTreeMap::new(),
            options,
        }
    }

    pub fn options(&self) -> &ValidationOptions {
        &self.options
    }

    /// Register a schema under a collection name.
    ///
    /// # Errors
    ///
    /// `DuplicateCollection` if the name is taken. The existing schema is
    /// left in place.
    pub fn register(&mut self, name: CollectionName, schema: SchemaDefinition) -> Result<(), RegistryError> {
        if self.schemas.contains_key(&name) {
            return Err(RegistryError::DuplicateCollection(name));
        }

        tracing::debug!(
            collection = %name,
            fields = schema.len(),
            strict = schema.is_strict(),
            "registered collection schema"
        );
        self.schemas.insert(name, schema);
        Ok(())
    }

    /// Look up a collection's schema.
    ///
    /// # Errors
    ///
    /// `UnknownCollection` if nothing is registered under `name`.
    pub fn resolve(&self, name: &str) -> Result<&SchemaDefinition, RegistryError> {
        self.schemas
            .get(name)
            .ok_or_else(|| RegistryError::UnknownCollection(name.to_string()))
    }

    /// Validate a raw record against a collection's schema.
    ///
    /// # Errors
    ///
    /// `UnknownCollection` if the collection is not registered;
    /// `Validation` carrying every issue if the record does not conform.
    pub fn validate(&self, name: &str, raw: &RawRecord) -> Result<ValidatedRecord, RegistryError> {
        let (collection, schema) = self
            .schemas
            .get_key_value(name)
            .ok_or_else(|| RegistryError::UnknownCollection(name.to_string()))?;

        validate::validate_with(schema, raw, &self.options).map_err(|source| RegistryError::Validation {
            collection: collection.clone(),
            source,
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.schemas.contains_key(name)
    }

    /// Registered collection names, sorted.
    pub fn collection_names(&self) -> impl Iterator<Item = &CollectionName> {
        self.schemas.keys()
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}
