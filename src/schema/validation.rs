//! Acceptance rules for parsed schemas.
//!
//! A schema tree is accepted when every key is an identifier, every array
//! names an allowed element type, and every map's children pass the same
//! rules. The value-type allow-list itself is closed by [`ValueType`].

use super::types::{SchemaEntry, ValueType};
use crate::error::{ValidationError, ValidationResult};
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

/// Pattern every field key must match.
pub const SCHEMA_KEY_PATTERN: &str = "^[a-zA-Z_][a-zA-Z0-9_]{0,127}$";

static SCHEMA_KEY_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(SCHEMA_KEY_PATTERN).expect("schema key pattern is a valid regex"));

/// Check a field key against [`SCHEMA_KEY_PATTERN`].
pub fn is_valid_key(key: &str) -> bool {
    SCHEMA_KEY_REGEX.is_match(key)
}

/// Validate a single entry and, for maps, all of its descendants.
pub fn validate_entry(entry: &SchemaEntry) -> ValidationResult<()> {
    if !is_valid_key(&entry.key) {
        return Err(ValidationError::invalid_key(&entry.key));
    }

    match entry.value_type {
        ValueType::Array => match entry.elem_type {
            Some(elem) if elem.is_array_element() => {}
            other => {
                return Err(ValidationError::InvalidElementType {
                    key: entry.key.clone(),
                    elem_type: other.map(|t| t.to_string()).unwrap_or_default(),
                });
            }
        },
        ValueType::Map => {
            for child in &entry.schema {
                validate_entry(child)?;
            }
        }
        _ => {}
    }

    Ok(())
}

/// Validate a top-level schema. An empty schema is rejected.
pub fn validate_schema(schema: &[SchemaEntry]) -> ValidationResult<()> {
    if schema.is_empty() {
        return Err(ValidationError::EmptySchema);
    }
    for entry in schema {
        validate_entry(entry)?;
    }
    debug!("Validated schema with {} top-level fields", schema.len());
    Ok(())
}
