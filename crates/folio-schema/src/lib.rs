//! # folio-schema — Schema Declarations & Validation Engine
//!
//! Declares typed contracts for collections of frontmatter records and
//! enforces them.
//!
//! ## Declaring
//!
//! ```
//! use folio_core::CollectionName;
//! use folio_schema::{FieldSpec, FieldType, SchemaDefinition, SchemaRegistry};
//!
//! let blog = SchemaDefinition::builder()
//!     .field("title", FieldSpec::string())
//!     .field("date", FieldSpec::datetime())
//!     .field("tags", FieldSpec::sequence_of(FieldType::String))
//!     .field("draft", FieldSpec::boolean().optional().with_default(false))
//!     .build()?;
//!
//! let mut registry = SchemaRegistry::new();
//! registry.register(CollectionName::new("blog")?, blog)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Validating
//!
//! [`validate()`] (or [`SchemaRegistry::validate`]) turns a `RawRecord` into a
//! [`ValidatedRecord`] or a [`ValidationError`] listing every issue with its
//! field path. See the [`validate`](mod@validate) module for the exact
//! pipeline.
//!
//! ## Crate Policy
//!
//! - Depends only on `folio-core` internally.
//! - The engine is pure: it never logs, retries, or swallows an issue.
//! - `ValidatedRecord` has no public constructor.

pub mod definition;
pub mod error;
pub mod field;
pub mod options;
pub mod record;
pub mod registry;
pub mod validate;

pub use definition::{SchemaDefinition, SchemaDefinitionBuilder};
pub use error::{
    FieldPath, Issue, IssueCode, IssueKind, PathSegment, RegistryError, SchemaDefinitionError,
    ValidationError,
};
pub use field::{DefaultValue, FieldSpec, FieldType};
pub use options::{UnknownFieldPolicy, ValidationOptions};
pub use record::{ValidatedRecord, ValidatedValue};
pub use registry::SchemaRegistry;
pub use validate::{validate, validate_with};
