//! Parsing and writing of the one-line schema DSL.
//!
//! A DSL string lists fields separated by commas. Each field is a key,
//! optionally followed by a type tag; `*` on either side of the tag marks the
//! field required, `a(t)` declares an array of `t`, and `key map{...}` (or
//! just `key{...}`) declares a nested map.
//!
//! # Examples
//!
//! ```rust
//! use schema_dsl::dsl::{parse_dsl, to_dsl};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let schema = parse_dsl("name s,age *l,tags a(s),meta map{x l,y b}")?;
//! assert_eq!(schema.len(), 4);
//! assert_eq!(
//!     to_dsl(&schema),
//!     "name string,age *long,tags array(string),meta map{x long,y boolean}"
//! );
//! # Ok(())
//! # }
//! ```

pub mod field;
pub mod normalizer;
pub mod parser;
pub mod writer;


pub use field::{FieldSpec, tokenize_field};
pub use normalizer::normalize_type;
pub use parser::{DEFAULT_NEST_LIMIT, DslParser, ParserConfig, parse_dsl};
pub use writer::to_dsl;

use crate::error::DslResult;
use crate::schema::{SchemaEntry, validate_schema};

/// Parse a DSL string and check the result against the acceptance rules.
pub fn parse_and_validate(dsl: &str) -> DslResult<Vec<SchemaEntry>> {
    let schema = parse_dsl(dsl)?;
    validate_schema(&schema)?;
    Ok(schema)
}
