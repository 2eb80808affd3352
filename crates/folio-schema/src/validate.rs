//! # Validation Engine
//!
//! Enforces one `SchemaDefinition` against one `RawRecord`.
//!
//! ## Pipeline (per declared field, in declaration order)
//!
//! 1. **Presence.** An absent field takes its default if it has one. Absent,
//!    required and without default is `MissingRequiredField`. Absent and
//!    optional without default is left out of the result.
//! 2. **Type check / coercion.** The present or defaulted value is checked
//!    against the declared type. Defaults get no special treatment.
//!    The only coercion is date/time text to a date/time value.
//! 3. **Unknown fields** are ignored unless the schema is strict or the
//!    options reject them, in which case each one is an `UnknownField` issue
//!    reported after the declared fields, in sorted key order.
//!
//! Issues accumulate across fields and across sequence elements; nothing
//! short-circuits. Any issue means no record is returned.
//!
//! The engine is a pure function of its inputs: no I/O, no logging, no
//! shared state.

use std::borrow::Cow;
use std::collections::BTreeMap;

use folio_core::{RawRecord, RawValue, Timestamp, ValueShape};

use crate::definition::SchemaDefinition;
use crate::error::{FieldPath, Issue, ValidationError};
use crate::field::FieldType;
use crate::options::{UnknownFieldPolicy, ValidationOptions};
use crate::record::{ValidatedRecord, ValidatedValue};

/// Validate `raw` against `schema` with default options.
pub fn validate(schema: &SchemaDefinition, raw: &RawRecord) -> Result<ValidatedRecord, ValidationError> {
    validate_with(schema, raw, &ValidationOptions::default())
}

/// Validate `raw` against `schema`.
///
/// # Errors
///
/// Returns a `ValidationError` holding every issue found, in schema
/// declaration order, when any field fails.
pub fn validate_with(
    schema: &SchemaDefinition,
    raw: &RawRecord,
    options: &ValidationOptions,
) -> Result<ValidatedRecord, ValidationError> {
    let mut issues = Vec::new();
    let mut fields = BTreeMap::new();

    for (name, spec) in schema.fields() {
        let path = FieldPath::field(name);

        let value: Cow<'_, RawValue> = match (raw.get(name), spec.default()) {
            (Some(present), _) => Cow::Borrowed(present),
            (None, Some(default)) => Cow::Owned(default.produce()),
            (None, None) if spec.is_required() => {
                issues.push(Issue::missing_required(path));
                continue;
            }
            (None, None) => continue,
        };

        if let Some(validated) = check_value(&value, spec.field_type(), &path, &mut issues) {
            fields.insert(name.to_string(), validated);
        }
    }

    if schema.is_strict() || options.unknown_fields == UnknownFieldPolicy::Reject {
        issues.extend(
            raw.keys()
                .filter(|key| !schema.contains_field(key))
                .map(|key| Issue::unknown_field(FieldPath::field(key))),
        );
    }

    if issues.is_empty() {
        Ok(ValidatedRecord::new(fields))
    } else {
        Err(ValidationError::new(issues))
    }
}

/// Check one value against a type, recording issues at `path`.
///
/// Returns the validated value only if no issue was recorded for it or any
/// of its elements.
fn check_value(
    value: &RawValue,
    expected: &FieldType,
    path: &FieldPath,
    issues: &mut Vec<Issue>,
) -> Option<ValidatedValue> {
    match (expected, value) {
        (FieldType::String, RawValue::String(s)) => Some(ValidatedValue::String(s.clone())),
        (FieldType::Boolean, RawValue::Bool(b)) => Some(ValidatedValue::Boolean(*b)),
        (FieldType::DateTime, RawValue::DateTime(ts)) => Some(ValidatedValue::DateTime(*ts)),
        (FieldType::DateTime, RawValue::String(text)) => match Timestamp::parse_lenient(text) {
            Ok(ts) => Some(ValidatedValue::DateTime(ts)),
            Err(_) => {
                issues.push(
                    Issue::invalid_type(path.clone(), expected.clone(), ValueShape::String)
                        .with_detail(format!("unrecognized date/time {text:?}")),
                );
                None
            }
        },
        (FieldType::SequenceOf(inner), RawValue::Sequence(items)) => {
            let before = issues.len();
            let checked: Vec<ValidatedValue> = items
                .iter()
                .enumerate()
                .filter_map(|(i, item)| check_value(item, inner, &path.index(i), issues))
                .collect();
            (issues.len() == before).then_some(ValidatedValue::Sequence(checked))
        }
        (_, other) => {
            issues.push(Issue::invalid_type(path.clone(), expected.clone(), other.shape()));
            None
        }
    }
}
