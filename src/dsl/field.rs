//! Field segment tokenizer.
//!
//! A segment is the text of one field: `key`, `key type`, `key *type`,
//! `key type*` or `key a(type)`.

use super::normalizer::normalize_type;
use crate::error::{SchemaError, SchemaResult};
use crate::schema::ValueType;
use log::trace;

/// A tokenized field segment.
///
/// `value_type` is `None` when the segment carried no type tag; the parser
/// substitutes the default for the context the segment appeared in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub key: String,
    /// Type tag as written, without `*` markers
    pub raw_type: String,
    pub value_type: Option<ValueType>,
    pub elem_type: Option<ValueType>,
    pub required: bool,
}

/// Split one segment into key, type, element type and required flag.
///
/// Returns `Ok(None)` when the segment is blank.
pub fn tokenize_field(segment: &str) -> SchemaResult<Option<FieldSpec>> {
    let segment = segment.trim();
    if segment.is_empty() {
        return Ok(None);
    }

    let tokens: Vec<&str> = segment.split_whitespace().collect();
    let (key, raw_type) = match tokens.as_slice() {
        [key] => (*key, ""),
        [key, raw_type] => (*key, *raw_type),
        _ => return Err(SchemaError::malformed_field(segment)),
    };
    if key.is_empty() {
        return Err(SchemaError::EmptyKey {
            segment: segment.to_string(),
        });
    }
    trace!("Tokenized field '{}' as key {} type {:?}", segment, key, raw_type);

    // Every leading and trailing '*' goes, not only the first
    let required = raw_type.starts_with('*') || raw_type.ends_with('*');
    let type_tag = raw_type.trim_matches('*');

    let mut field = FieldSpec {
        key: key.to_string(),
        raw_type: type_tag.to_string(),
        value_type: None,
        elem_type: None,
        required,
    };

    if let Some(open) = type_tag.find('(') {
        let close = match type_tag.find(')') {
            Some(close) if close > open => close,
            _ => return Err(SchemaError::missing_element_type(segment)),
        };
        let elem_type = normalize_type(&type_tag[open + 1..close])
            .map_err(|e| e.in_field(segment, key, type_tag))?
            .ok_or_else(|| SchemaError::missing_element_type(segment))?;
        field.value_type = Some(ValueType::Array);
        field.elem_type = Some(elem_type);
        return Ok(Some(field));
    }

    field.value_type = normalize_type(type_tag).map_err(|e| e.in_field(segment, key, type_tag))?;
    Ok(Some(field))
}
