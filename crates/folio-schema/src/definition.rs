//! # Schema Definitions
//!
//! A `SchemaDefinition` is the ordered set of field contracts for one
//! collection. Declaration order is validation order, and therefore the order
//! issues are reported in.
//!
//! Definitions are assembled with [`SchemaDefinition::builder`], which rejects
//! duplicate and empty field names, and are immutable afterwards.

use folio_core::RawRecord;

use crate::error::{SchemaDefinitionError, ValidationError};
use crate::field::FieldSpec;
use crate::options::ValidationOptions;
use crate::record::ValidatedRecord;
use crate::validate;

/// Ordered field contracts for one collection.
#[derive(Debug, Clone)]
pub struct SchemaDefinition {
    fields: Vec<(String, FieldSpec)>,
    strict: bool,
}

impl SchemaDefinition {
    pub fn builder() -> SchemaDefinitionBuilder {
        SchemaDefinitionBuilder::default()
    }

    /// Field contracts in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldSpec)> {
        self.fields.iter().map(|(name, spec)| (name.as_str(), spec))
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|(n, _)| n == name).map(|(_, spec)| spec)
    }

    pub fn contains_field(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Whether undeclared raw fields are reported instead of ignored.
    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Validate a raw record against this schema with default options.
    pub fn validate(&self, raw: &RawRecord) -> Result<ValidatedRecord, ValidationError> {
        validate::validate(self, raw)
    }

    /// Validate a raw record against this schema.
    pub fn validate_with(
        &self,
        raw: &RawRecord,
        options: &ValidationOptions,
    ) -> Result<ValidatedRecord, ValidationError> {
        validate::validate_with(self, raw, options)
    }
}

/// Builder for [`SchemaDefinition`].
#[derive(Debug, Default)]
pub struct SchemaDefinitionBuilder {
    fields: Vec<(String, FieldSpec)>,
    strict: bool,
}

impl SchemaDefinitionBuilder {
    /// Declare a field. Order of calls is validation order.
    pub fn field(mut self, name: impl Into<String>, spec: FieldSpec) -> Self {
        self.fields.push((name.into(), spec));
        self
    }

    /// Report undeclared raw fields as `UnknownField` issues.
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    /// Finish the definition.
    ///
    /// # Errors
    ///
    /// `DuplicateField` if a name is declared twice, `EmptyFieldName` if a
    /// name is empty.
    pub fn build(self) -> Result<SchemaDefinition, SchemaDefinitionError> {
        for (i, (name, _)) in self.fields.iter().enumerate() {
            if name.is_empty() {
                return Err(SchemaDefinitionError::EmptyFieldName);
            }
            if self.fields[..i].iter().any(|(earlier, _)| earlier == name) {
                return Err(SchemaDefinitionError::DuplicateField(name.clone()));
            }
        }
        Ok(SchemaDefinition {
            fields: self.fields,
            strict: self.strict,
        })
    }
}
