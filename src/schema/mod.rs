//! Schema tree types and validation.
//!
//! This module provides the output model of the DSL parser and the rules a
//! schema must satisfy before it is handed to a repository.
//!
//! # Key Types
//!
//! - [`SchemaEntry`] - One field with its type, required flag and structure
//! - [`ValueType`] - The canonical value types
//!
//! # Examples
//!
//! ```rust
//! use schema_dsl::schema::{validate_schema, SchemaEntry, ValueType};
//!
//! let schema = vec![
//!     SchemaEntry::field("name", ValueType::String).required(),
//!     SchemaEntry::array("tags", ValueType::String),
//! ];
//! assert!(validate_schema(&schema).is_ok());
//! ```

pub mod types;
pub mod validation;


// Re-export the main types for convenience
pub use types::{SchemaEntry, ValueType};
pub use validation::{SCHEMA_KEY_PATTERN, is_valid_key, validate_entry, validate_schema};
