//! # folio-core — Foundational Types for Folio
//!
//! This crate defines the vocabulary shared by the schema engine and the
//! content layer. It depends on nothing internal.
//!
//! ## Key Types
//!
//! 1. **`RawValue` / `RawRecord`.** The untyped frontmatter model. Content
//!    discovery parses a document's metadata into a `RawRecord` (directly, or
//!    via the `serde_json` / `serde_yaml` adapters) and hands it to the engine.
//!
//! 2. **`Timestamp`.** A UTC date/time. Every accepted date representation
//!    normalizes to the same instant in UTC, so coercion is idempotent.
//!
//! 3. **`CollectionName`.** Validated newtype used as the registry key.
//!    No bare strings for collection identity inside the registry.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `folio-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod identity;
pub mod temporal;
pub mod value;

// Re-export primary types for ergonomic imports.
pub use error::FolioError;
pub use identity::CollectionName;
pub use temporal::Timestamp;
pub use value::{RawRecord, RawValue, ValueShape};
