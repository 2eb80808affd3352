//! # Field Contracts
//!
//! A `FieldSpec` is one field's contract: its `FieldType` plus the
//! `required` flag and an optional `DefaultValue`.
//!
//! Fields are required unless marked otherwise:
//!
//! ```
//! use folio_schema::{FieldSpec, FieldType};
//!
//! let title = FieldSpec::string();
//! let tags = FieldSpec::sequence_of(FieldType::String);
//! let draft = FieldSpec::boolean().optional().with_default(false);
//! assert!(title.is_required());
//! assert!(!draft.is_required());
//! assert!(tags.default().is_none());
//! ```

use std::fmt;
use std::sync::Arc;

use folio_core::RawValue;
use serde::{Serialize, Serializer};

/// The declared type of a field.
///
/// `SequenceOf` nests, so `SequenceOf(SequenceOf(String))` is a list of lists
/// of text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldType {
    /// Textual value. No coercion.
    String,
    /// Literal boolean. No coercion from text or numbers.
    Boolean,
    /// Date/time. Accepts date/time values and text in a recognized format.
    DateTime,
    /// Ordered list whose elements each satisfy the inner type.
    SequenceOf(Box<FieldType>),
}

impl FieldType {
    /// `SequenceOf(inner)` without the explicit `Box`.
    pub fn sequence_of(inner: FieldType) -> Self {
        FieldType::SequenceOf(Box::new(inner))
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::String => f.write_str("string"),
            FieldType::Boolean => f.write_str("boolean"),
            FieldType::DateTime => f.write_str("datetime"),
            FieldType::SequenceOf(inner) => write!(f, "sequence<{inner}>"),
        }
    }
}

impl Serialize for FieldType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Source of a field's value when the raw record omits it.
///
/// Either a fixed value or a rule evaluated on each use. In both cases the
/// produced value is type-checked like any other raw value.
#[derive(Clone)]
pub enum DefaultValue {
    Value(RawValue),
    Rule(Arc<dyn Fn() -> RawValue + Send + Sync>),
}

impl DefaultValue {
    /// Produce the raw value to substitute.
    pub fn produce(&self) -> RawValue {
        match self {
            DefaultValue::Value(value) => value.clone(),
            DefaultValue::Rule(rule) => rule(),
        }
    }
}

impl fmt::Debug for DefaultValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefaultValue::Value(value) => f.debug_tuple("Value").field(value).finish(),
            DefaultValue::Rule(_) => f.write_str("Rule(<fn>)"),
        }
    }
}

/// One field's contract within a schema.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    field_type: FieldType,
    required: bool,
    default: Option<DefaultValue>,
}

impl FieldSpec {
    /// A required field of the given type, with no default.
    pub fn new(field_type: FieldType) -> Self {
        Self {
            field_type,
            required: true,
            default: None,
        }
    }

    pub fn string() -> Self {
        Self::new(FieldType::String)
    }

    pub fn boolean() -> Self {
        Self::new(FieldType::Boolean)
    }

    pub fn datetime() -> Self {
        Self::new(FieldType::DateTime)
    }

    pub fn sequence_of(inner: FieldType) -> Self {
        Self::new(FieldType::sequence_of(inner))
    }

    /// Allow the field to be absent.
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Use a fixed value when the field is absent.
    pub fn with_default(mut self, value: impl Into<RawValue>) -> Self {
        self.default = Some(DefaultValue::Value(value.into()));
        self
    }

    /// Use a value-producing rule when the field is absent.
    pub fn with_default_fn<F>(mut self, rule: F) -> Self
    where
        F: Fn() -> RawValue + Send + Sync + 'static,
    {
        self.default = Some(DefaultValue::Rule(Arc::new(rule)));
        self
    }

    pub fn field_type(&self) -> &FieldType {
        &self.field_type
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn default(&self) -> Option<&DefaultValue> {
        self.default.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_names() {
        assert_eq!(FieldType::String.to_string(), "string");
        assert_eq!(FieldType::Boolean.to_string(), "boolean");
        assert_eq!(FieldType::DateTime.to_string(), "datetime");
        assert_eq!(
            FieldType::sequence_of(FieldType::sequence_of(FieldType::String)).to_string(),
            "sequence<sequence<string>>"
        );
    }

    #[test]
    fn field_type_serializes_as_name() {
        let json = serde_json::to_string(&FieldType::sequence_of(FieldType::DateTime)).unwrap();
        assert_eq!(json, "\"sequence<datetime>\"");
    }

    #[test]
    fn fields_are_required_by_default() {
        let spec = FieldSpec::datetime();
        assert!(spec.is_required());
        assert!(spec.default().is_none());
        assert_eq!(spec.field_type(), &FieldType::DateTime);
    }

    #[test]
    fn default_value_is_produced() {
        let spec = FieldSpec::string().with_default("Alex Chen");
        let produced = spec.default().map(DefaultValue::produce);
        assert_eq!(produced, Some(RawValue::String("Alex Chen".into())));
        // A default does not by itself clear the required flag.
        assert!(spec.is_required());
    }

    #[test]
    fn default_rule_runs_each_time() {
        use std::sync::atomic::{AtomicI64, Ordering};

        let counter = Arc::new(AtomicI64::new(0));
        let c = Arc::clone(&counter);
        let spec = FieldSpec::string()
            .optional()
            .with_default_fn(move || RawValue::Integer(c.fetch_add(1, Ordering::SeqCst)));

        let default = spec.default().unwrap();
        assert_eq!(default.produce(), RawValue::Integer(0));
        assert_eq!(default.produce(), RawValue::Integer(1));
        assert_eq!(format!("{default:?}"), "Rule(<fn>)");
    }
}
