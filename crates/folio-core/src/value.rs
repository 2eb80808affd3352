//! # Raw Values — The Untyped Frontmatter Model
//!
//! `RawValue` is what content discovery produces before any schema is
//! applied. It mirrors the data models of the frontmatter parsers in use
//! (YAML and JSON) plus a `DateTime` variant for parsers that already
//! recognize timestamps.
//!
//! ## Adapters
//!
//! `TryFrom<serde_json::Value>` and `TryFrom<serde_yaml::Value>` convert a
//! parsed document into a raw value tree. YAML tags are dropped (the inner
//! value is kept), and scalar mapping keys are stringified. A `RawRecord`
//! additionally requires the top level to be a mapping.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::error::FolioError;
use crate::temporal::Timestamp;

/// The observed runtime shape of a raw value, used in type-mismatch reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueShape {
    Null,
    Boolean,
    Integer,
    Float,
    String,
    DateTime,
    Sequence,
    Mapping,
}

impl ValueShape {
    /// Lowercase name used in messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueShape::Null => "null",
            ValueShape::Boolean => "boolean",
            ValueShape::Integer => "integer",
            ValueShape::Float => "float",
            ValueShape::String => "string",
            ValueShape::DateTime => "datetime",
            ValueShape::Sequence => "sequence",
            ValueShape::Mapping => "mapping",
        }
    }
}

impl fmt::Display for ValueShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An untyped frontmatter value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RawValue {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    DateTime(Timestamp),
    Sequence(Vec<RawValue>),
    Mapping(BTreeMap<String, RawValue>),
}

impl RawValue {
    /// The runtime shape of this value.
    pub fn shape(&self) -> ValueShape {
        match self {
            RawValue::Null => ValueShape::Null,
            RawValue::Bool(_) => ValueShape::Boolean,
            RawValue::Integer(_) => ValueShape::Integer,
            RawValue::Float(_) => ValueShape::Float,
            RawValue::String(_) => ValueShape::String,
            RawValue::DateTime(_) => ValueShape::DateTime,
            RawValue::Sequence(_) => ValueShape::Sequence,
            RawValue::Mapping(_) => ValueShape::Mapping,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            RawValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            RawValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[RawValue]> {
        match self {
            RawValue::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, RawValue::Null)
    }
}

impl From<bool> for RawValue {
    fn from(b: bool) -> Self {
        RawValue::Bool(b)
    }
}

impl From<i64> for RawValue {
    fn from(i: i64) -> Self {
        RawValue::Integer(i)
    }
}

impl From<f64> for RawValue {
    fn from(f: f64) -> Self {
        RawValue::Float(f)
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        RawValue::String(s.to_string())
    }
}

impl From<String> for RawValue {
    fn from(s: String) -> Self {
        RawValue::String(s)
    }
}

impl From<Timestamp> for RawValue {
    fn from(ts: Timestamp) -> Self {
        RawValue::DateTime(ts)
    }
}

impl<T: Into<RawValue>> From<Vec<T>> for RawValue {
    fn from(items: Vec<T>) -> Self {
        RawValue::Sequence(items.into_iter().map(Into::into).collect())
    }
}

impl TryFrom<serde_json::Value> for RawValue {
    type Error = FolioError;

    fn try_from(json: serde_json::Value) -> Result<Self, Self::Error> {
        use serde_json::Value;

        Ok(match json {
            Value::Null => RawValue::Null,
            Value::Bool(b) => RawValue::Bool(b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    RawValue::Integer(i)
                } else if let Some(f) = n.as_f64() {
                    RawValue::Float(f)
                } else {
                    return Err(FolioError::UnsupportedValue(format!("JSON number {n}")));
                }
            }
            Value::String(s) => RawValue::String(s),
            Value::Array(items) => RawValue::Sequence(
                items
                    .into_iter()
                    .map(RawValue::try_from)
                    .collect::<Result<_, _>>()?,
            ),
            Value::Object(map) => RawValue::Mapping(
                map.into_iter()
                    .map(|(k, v)| -> Result<(String, RawValue), FolioError> {
                        Ok((k, RawValue::try_from(v)?))
                    })
                    .collect::<Result<_, _>>()?,
            ),
        })
    }
}

impl TryFrom<serde_yaml::Value> for RawValue {
    type Error = FolioError;

    fn try_from(yaml: serde_yaml::Value) -> Result<Self, Self::Error> {
        use serde_yaml::Value;

        Ok(match yaml {
            Value::Null => RawValue::Null,
            Value::Bool(b) => RawValue::Bool(b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    RawValue::Integer(i)
                } else if let Some(f) = n.as_f64() {
                    RawValue::Float(f)
                } else {
                    return Err(FolioError::UnsupportedValue(format!("YAML number {n:?}")));
                }
            }
            Value::String(s) => RawValue::String(s),
            Value::Sequence(items) => RawValue::Sequence(
                items
                    .into_iter()
                    .map(RawValue::try_from)
                    .collect::<Result<_, _>>()?,
            ),
            Value::Mapping(map) => {
                let mut out = BTreeMap::new();
                for (k, v) in map {
                    out.insert(yaml_key(k)?, RawValue::try_from(v)?);
                }
                RawValue::Mapping(out)
            }
            // Tags carry no meaning for frontmatter; keep the inner value.
            Value::Tagged(tagged) => RawValue::try_from(tagged.value)?,
        })
    }
}

fn yaml_key(key: serde_yaml::Value) -> Result<String, FolioError> {
    use serde_yaml::Value;

    match key {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(FolioError::UnsupportedValue(format!(
            "YAML mapping key {other:?}"
        ))),
    }
}

/// An untyped field-name → value record: one document's frontmatter.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RawRecord(BTreeMap<String, RawValue>);

impl RawRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field, returning the previous value if any.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<RawValue>) -> Option<RawValue> {
        self.0.insert(field.into(), value.into())
    }

    /// Builder-style insert.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<RawValue>) -> Self {
        self.insert(field, value);
        self
    }

    pub fn get(&self, field: &str) -> Option<&RawValue> {
        self.0.get(field)
    }

    pub fn remove(&mut self, field: &str) -> Option<RawValue> {
        self.0.remove(field)
    }

    pub fn contains_key(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Field names in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RawValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Parse YAML frontmatter text into a record.
    pub fn from_yaml_str(text: &str) -> Result<Self, FolioError> {
        if text.trim().is_empty() {
            return Ok(Self::new());
        }
        let yaml: serde_yaml::Value = serde_yaml::from_str(text).map_err(|e| FolioError::Parse {
            format: "yaml",
            reason: e.to_string(),
        })?;
        // An empty frontmatter block parses as null.
        if yaml.is_null() {
            return Ok(Self::new());
        }
        Self::try_from(yaml)
    }

    /// Parse JSON text into a record.
    pub fn from_json_str(text: &str) -> Result<Self, FolioError> {
        let json: serde_json::Value = serde_json::from_str(text).map_err(|e| FolioError::Parse {
            format: "json",
            reason: e.to_string(),
        })?;
        Self::try_from(json)
    }
}

impl From<BTreeMap<String, RawValue>> for RawRecord {
    fn from(map: BTreeMap<String, RawValue>) -> Self {
        Self(map)
    }
}

impl From<RawRecord> for BTreeMap<String, RawValue> {
    fn from(record: RawRecord) -> Self {
        record.0
    }
}

impl<K: Into<String>, V: Into<RawValue>> FromIterator<(K, V)> for RawRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl IntoIterator for RawRecord {
    type Item = (String, RawValue);
    type IntoIter = std::collections::btree_map::IntoIter<String, RawValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl TryFrom<RawValue> for RawRecord {
    type Error = FolioError;

    fn try_from(value: RawValue) -> Result<Self, Self::Error> {
        match value {
            RawValue::Mapping(map) => Ok(Self(map)),
            other => Err(FolioError::NotAMapping {
                shape: other.shape().as_str(),
            }),
        }
    }
}

impl TryFrom<serde_json::Value> for RawRecord {
    type Error = FolioError;

    fn try_from(json: serde_json::Value) -> Result<Self, Self::Error> {
        RawValue::try_from(json).and_then(Self::try_from)
    }
}

impl TryFrom<serde_yaml::Value> for RawRecord {
    type Error = FolioError;

    fn try_from(yaml: serde_yaml::Value) -> Result<Self, Self::Error> {
        RawValue::try_from(yaml).and_then(Self::try_from)
    }
}
