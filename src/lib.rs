//! Compact schema DSL for Rust.
//!
//! Turns a single-line, human-writable schema declaration into a typed,
//! ordered schema tree, checks the tree against the repository acceptance
//! rules, and writes it back out in canonical form.
//!
//! # Core Components
//!
//! - [`DslParser`] - Configurable parser from DSL text to [`SchemaEntry`] trees
//! - [`SchemaEntry`] - One parsed field, recursive for maps
//! - [`validate_schema`] - Key pattern and element type acceptance rules
//!
//! # Quick Start
//!
//! ```rust
//! use schema_dsl::{parse_and_validate, ValueType};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let schema = parse_and_validate("name s,age *l,tags a(s),meta map{x l,y b}")?;
//! assert_eq!(schema[1].value_type, ValueType::Long);
//! assert!(schema[1].required);
//! # Ok(())
//! # }
//! ```

pub mod dsl;
pub mod error;
pub mod schema;

// Re-export commonly used types for convenience
pub use dsl::{DslParser, ParserConfig, parse_and_validate, parse_dsl, to_dsl};
pub use error::{DslError, DslResult, SchemaError, SchemaResult, ValidationError};
pub use schema::{SchemaEntry, ValueType, validate_schema};
