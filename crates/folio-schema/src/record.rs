//! # Validated Records
//!
//! A `ValidatedRecord` can only be produced by the validation engine, so
//! holding one means every field contract of its schema was satisfied.
//! Absent optional fields without a default are simply not present.
//!
//! Records convert back to their raw form with [`ValidatedRecord::to_raw`];
//! validating that raw form again yields an identical record. They also
//! serialize to JSON and decode into caller-defined types via `serde`.

use std::collections::BTreeMap;

use folio_core::{RawRecord, RawValue, Timestamp};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// A type-correct field value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ValidatedValue {
    String(String),
    Boolean(bool),
    DateTime(Timestamp),
    Sequence(Vec<ValidatedValue>),
}

impl ValidatedValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ValidatedValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ValidatedValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_datetime(&self) -> Option<&Timestamp> {
        match self {
            ValidatedValue::DateTime(ts) => Some(ts),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[ValidatedValue]> {
        match self {
            ValidatedValue::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// The raw value this validated value corresponds to. Date/times stay
    /// date/time values, so no second coercion happens on re-validation.
    pub fn to_raw(&self) -> RawValue {
        match self {
            ValidatedValue::String(s) => RawValue::String(s.clone()),
            ValidatedValue::Boolean(b) => RawValue::Bool(*b),
            ValidatedValue::DateTime(ts) => RawValue::DateTime(*ts),
            ValidatedValue::Sequence(items) => {
                RawValue::Sequence(items.iter().map(ValidatedValue::to_raw).collect())
            }
        }
    }
}

/// A record that satisfied every field contract of its schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidatedRecord {
    fields: BTreeMap<String, ValidatedValue>,
}

impl ValidatedRecord {
    pub(crate) fn new(fields: BTreeMap<String, ValidatedValue>) -> Self {
        Self { fields }
    }

    pub fn get(&self, field: &str) -> Option<&ValidatedValue> {
        self.fields.get(field)
    }

    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(ValidatedValue::as_str)
    }

    pub fn get_bool(&self, field: &str) -> Option<bool> {
        self.get(field).and_then(ValidatedValue::as_bool)
    }

    pub fn get_datetime(&self, field: &str) -> Option<&Timestamp> {
        self.get(field).and_then(ValidatedValue::as_datetime)
    }

    pub fn get_sequence(&self, field: &str) -> Option<&[ValidatedValue]> {
        self.get(field).and_then(ValidatedValue::as_sequence)
    }

    /// Text elements of a sequence field. `None` if the field is absent, not
    /// a sequence, or holds non-text elements.
    pub fn get_strings(&self, field: &str) -> Option<Vec<&str>> {
        self.get_sequence(field)?
            .iter()
            .map(ValidatedValue::as_str)
            .collect()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Field names in sorted order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ValidatedValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The underlying raw form.
    pub fn to_raw(&self) -> RawRecord {
        self.fields
            .iter()
            .map(|(k, v)| (k.clone(), v.to_raw()))
            .collect()
    }

    /// JSON rendering. Date/times render as RFC 3339 strings.
    pub fn to_json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }

    /// Decode into a caller-defined type.
    ///
    /// Date/time fields can be received as [`Timestamp`] or
    /// `chrono::DateTime<Utc>`.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_value(self.to_json()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    fn sample() -> ValidatedRecord {
        let mut fields = BTreeMap::new();
        fields.insert("title".into(), ValidatedValue::String("Hello".into()));
        fields.insert("draft".into(), ValidatedValue::Boolean(false));
        fields.insert(
            "date".into(),
            ValidatedValue::DateTime(Timestamp::parse("2024-01-15T00:00:00Z").unwrap()),
        );
        fields.insert(
            "tags".into(),
            ValidatedValue::Sequence(vec![
                ValidatedValue::String("rust".into()),
                ValidatedValue::String("web".into()),
            ]),
        );
        ValidatedRecord::new(fields)
    }

    #[test]
    fn typed_accessors() {
        let record = sample();
        assert_eq!(record.get_str("title"), Some("Hello"));
        assert_eq!(record.get_bool("draft"), Some(false));
        assert_eq!(record.get_datetime("date").map(|d| d.to_string()).as_deref(), Some("2024-01-15T00:00:00Z"));
        assert_eq!(record.get_strings("tags"), Some(vec!["rust", "web"]));
        // Wrong accessor for the stored type.
        assert_eq!(record.get_bool("title"), None);
        assert_eq!(record.get_str("missing"), None);
    }

    #[test]
    fn to_raw_keeps_datetime_values() {
        let raw = sample().to_raw();
        assert!(matches!(raw.get("date"), Some(RawValue::DateTime(_))));
        assert_eq!(raw.len(), 4);
    }

    #[test]
    fn json_rendering() {
        let json = sample().to_json().unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "title": "Hello",
                "draft": false,
                "date": "2024-01-15T00:00:00Z",
                "tags": ["rust", "web"]
            })
        );
    }

    #[test]
    fn decode_into_struct() {
        #[derive(Deserialize)]
        struct Post {
            title: String,
            draft: bool,
            date: Timestamp,
            tags: Vec<String>,
        }

        let post: Post = sample().decode().unwrap();
        assert_eq!(post.title, "Hello");
        assert!(!post.draft);
        assert_eq!(post.date.to_string(), "2024-01-15T00:00:00Z");
        assert_eq!(post.tags, ["rust", "web"]);
    }
}
