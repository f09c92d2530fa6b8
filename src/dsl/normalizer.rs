//! Type tag normalization.
//!
//! Folds the short and long DSL type tags, in any letter case, onto the
//! canonical [`ValueType`] names:
//!
//! | tag                       | type      |
//! |---------------------------|-----------|
//! | `l`, `long`               | `long`    |
//! | `f`, `float`              | `float`   |
//! | `s`, `string`             | `string`  |
//! | `d`, `date`               | `date`    |
//! | `b`, `bool`, `boolean`    | `boolean` |
//! | `m`, `map`                | `map`     |
//!
//! `a`/`array` is never accepted bare; an array's element type is given in
//! parentheses and resolved by the field tokenizer.

use crate::error::{SchemaError, SchemaResult};
use crate::schema::ValueType;

/// Resolve a raw type tag.
///
/// Returns `Ok(None)` for an empty tag, leaving the caller to pick the
/// default for its context.
pub fn normalize_type(tag: &str) -> SchemaResult<Option<ValueType>> {
    let tag = tag.trim().to_lowercase();
    let value_type = match tag.as_str() {
        "l" | "long" => ValueType::Long,
        "f" | "float" => ValueType::Float,
        "s" | "string" => ValueType::String,
        "d" | "date" => ValueType::Date,
        "b" | "bool" | "boolean" => ValueType::Boolean,
        "m" | "map" => ValueType::Map,
        "a" | "array" => return Err(SchemaError::missing_element_type(tag)),
        "" => return Ok(None),
        _ => return Err(SchemaError::unsupported_type(tag)),
    };
    Ok(Some(value_type))
}
