//! # Errors and Issue Reports
//!
//! Validation never stops at the first problem. Every issue found in one pass
//! is collected into a [`ValidationError`], each addressed by a [`FieldPath`]
//! (`title`, `tags[2]`, `matrix[1][0]`) and classified by an [`IssueCode`].
//!
//! Registry-level failures (`DuplicateCollection`, `UnknownCollection`) and
//! schema construction failures are separate enums so callers can tell a
//! programming error from a bad document.

use std::fmt;

use folio_core::{CollectionName, ValueShape};
use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::field::FieldType;

/// One step in a field path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    Field(String),
    Index(usize),
}

/// Location of an issue inside a record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct FieldPath(Vec<PathSegment>);

impl FieldPath {
    /// Path to a top-level field.
    pub fn field(name: impl Into<String>) -> Self {
        Self(vec![PathSegment::Field(name.into())])
    }

    /// This path extended with a sequence index.
    pub fn index(&self, index: usize) -> Self {
        let mut segments = self.0.clone();
        segments.push(PathSegment::Index(index));
        Self(segments)
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }

    /// Name of the top-level field this path starts at.
    pub fn root_field(&self) -> Option<&str> {
        match self.0.first() {
            Some(PathSegment::Field(name)) => Some(name),
            _ => None,
        }
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.0.iter().enumerate() {
            match segment {
                PathSegment::Field(name) if i == 0 => f.write_str(name)?,
                PathSegment::Field(name) => write!(f, ".{name}")?,
                PathSegment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

impl PartialEq<str> for FieldPath {
    fn eq(&self, other: &str) -> bool {
        self.to_string() == other
    }
}

impl PartialEq<&str> for FieldPath {
    fn eq(&self, other: &&str) -> bool {
        self.to_string() == *other
    }
}

impl Serialize for FieldPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Reason code of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCode {
    /// A required field without a default is absent.
    MissingRequiredField,
    /// The value's shape does not match the declared type and cannot be coerced.
    InvalidType,
    /// The raw record carries a field the schema does not declare (strict mode).
    UnknownField,
}

impl IssueCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueCode::MissingRequiredField => "missing_required_field",
            IssueCode::InvalidType => "invalid_type",
            IssueCode::UnknownField => "unknown_field",
        }
    }
}

impl fmt::Display for IssueCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What went wrong at a path, with the data needed to explain it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", rename_all = "snake_case")]
pub enum IssueKind {
    MissingRequiredField,
    InvalidType {
        /// Declared type at this path.
        expected: FieldType,
        /// Observed shape of the raw value.
        actual: ValueShape,
    },
    UnknownField,
}

/// A single validation issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    path: FieldPath,
    #[serde(flatten)]
    kind: IssueKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<String>,
}

impl Issue {
    pub fn missing_required(path: FieldPath) -> Self {
        Self {
            path,
            kind: IssueKind::MissingRequiredField,
            detail: None,
        }
    }

    pub fn invalid_type(path: FieldPath, expected: FieldType, actual: ValueShape) -> Self {
        Self {
            path,
            kind: IssueKind::InvalidType { expected, actual },
            detail: None,
        }
    }

    pub fn unknown_field(path: FieldPath) -> Self {
        Self {
            path,
            kind: IssueKind::UnknownField,
            detail: None,
        }
    }

    /// Attach a human-readable detail, e.g. the parser message for an
    /// unrecognized date.
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn path(&self) -> &FieldPath {
        &self.path
    }

    pub fn kind(&self) -> &IssueKind {
        &self.kind
    }

    pub fn code(&self) -> IssueCode {
        match self.kind {
            IssueKind::MissingRequiredField => IssueCode::MissingRequiredField,
            IssueKind::InvalidType { .. } => IssueCode::InvalidType,
            IssueKind::UnknownField => IssueCode::UnknownField,
        }
    }

    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            IssueKind::MissingRequiredField => write!(f, "  {}: required field is missing", self.path)?,
            IssueKind::InvalidType { expected, actual } => {
                write!(f, "  {}: expected {expected}, got {actual}", self.path)?
            }
            IssueKind::UnknownField => write!(f, "  {}: field is not declared in the schema", self.path)?,
        }
        if let Some(detail) = &self.detail {
            write!(f, " ({detail})")?;
        }
        Ok(())
    }
}

/// Ordered list of issues, one per line when displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct IssueList(Vec<Issue>);

impl fmt::Display for IssueList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, issue) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{issue}")?;
        }
        Ok(())
    }
}

/// A record failed its schema. Carries every issue found, in schema order.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("frontmatter does not match schema ({} issue(s)):\n{issues}", .issues.0.len())]
pub struct ValidationError {
    issues: IssueList,
}

impl ValidationError {
    /// Wrap a non-empty issue list.
    pub(crate) fn new(issues: Vec<Issue>) -> Self {
        debug_assert!(!issues.is_empty());
        Self {
            issues: IssueList(issues),
        }
    }

    pub fn issues(&self) -> &[Issue] {
        &self.issues.0
    }

    pub fn into_issues(self) -> Vec<Issue> {
        self.issues.0
    }

    pub fn len(&self) -> usize {
        self.issues.0.len()
    }

    /// Always false: a `ValidationError` has at least one issue.
    pub fn is_empty(&self) -> bool {
        self.issues.0.is_empty()
    }

    /// Rendered paths of all issues, in order.
    pub fn paths(&self) -> Vec<String> {
        self.issues.0.iter().map(|i| i.path.to_string()).collect()
    }

    /// Issues reported at exactly `path`.
    pub fn issues_at<'a>(&'a self, path: &'a str) -> impl Iterator<Item = &'a Issue> + 'a {
        self.issues.0.iter().filter(move |i| i.path == path)
    }
}

/// Failure building a `SchemaDefinition`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaDefinitionError {
    /// Field names must be unique within a schema.
    #[error("field '{0}' is declared more than once")]
    DuplicateField(String),

    /// Field names must be non-empty.
    #[error("field names must not be empty")]
    EmptyFieldName,
}

/// Failure registering or looking up a collection.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// A schema is already registered under this name.
    #[error("collection '{0}' is already registered")]
    DuplicateCollection(CollectionName),

    /// No schema is registered under this name.
    #[error("unknown collection '{0}'")]
    UnknownCollection(String),

    /// The record failed the collection's schema.
    #[error("invalid entry in collection '{collection}': {source}")]
    Validation {
        /// Collection the record was validated against.
        collection: CollectionName,
        /// Every issue found.
        #[source]
        source: ValidationError,
    },
}

impl RegistryError {
    /// The validation issues, if this is a validation failure.
    pub fn validation(&self) -> Option<&ValidationError> {
        match self {
            RegistryError::Validation { source, .. } => Some(source),
            _ => None,
        }
    }
}
