//! # Declared Collections
//!
//! The site's content collections and their frontmatter contracts.
//!
//! ## `blog`
//!
//! | field         | type               | modifiers              |
//! |---------------|--------------------|------------------------|
//! | `title`       | string             | required               |
//! | `description` | string             | required               |
//! | `date`        | datetime           | required               |
//! | `author`      | string             | default `"Alex Chen"`  |
//! | `tags`        | sequence\<string\> | required               |
//! | `draft`       | boolean            | optional, default false |

use folio_core::{CollectionName, Timestamp};
use folio_schema::{FieldSpec, FieldType, SchemaDefinition, SchemaRegistry, ValidatedRecord};
use serde::{Deserialize, Serialize};

use crate::error::{ContentError, StartupError};

/// Name of the blog collection.
pub const BLOG: &str = "blog";

/// Author used when a post does not name one.
pub const DEFAULT_AUTHOR: &str = "Alex Chen";

/// Frontmatter contract for blog posts.
pub fn blog_schema() -> Result<SchemaDefinition, ContentError> {
    Ok(SchemaDefinition::builder()
        .field("title", FieldSpec::string())
        .field("description", FieldSpec::string())
        .field("date", FieldSpec::datetime())
        .field("author", FieldSpec::string().with_default(DEFAULT_AUTHOR))
        .field("tags", FieldSpec::sequence_of(FieldType::String))
        .field("draft", FieldSpec::boolean().optional().with_default(false))
        .build()?)
}

/// Register every built-in collection.
///
/// # Errors
///
/// `ContentError::Startup` if any collection cannot be declared.
pub fn declare_all(registry: &mut SchemaRegistry) -> Result<(), ContentError> {
    registry
        .register(CollectionName::new(BLOG)?, blog_schema()?)
        .map_err(|e| StartupError::Registration(e).into())
}

/// A validated blog post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    pub title: String,
    pub description: String,
    pub date: Timestamp,
    pub author: String,
    pub tags: Vec<String>,
    pub draft: bool,
}

impl BlogPost {
    /// Decode a record validated against [`blog_schema`].
    pub fn from_record(record: &ValidatedRecord) -> Result<Self, ContentError> {
        record.decode().map_err(|e| ContentError::decode(BLOG, e))
    }
}
