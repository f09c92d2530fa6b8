//! Canonical DSL rendering.
//!
//! Writes a schema tree back out using long type names, a leading `*` for
//! required fields, `array(elem)` for arrays and `key map{...}` for maps.
//! Parsing the output gives back the same tree.

use crate::schema::{SchemaEntry, ValueType};

/// Render a schema as a canonical DSL string.
pub fn to_dsl(schema: &[SchemaEntry]) -> String {
    schema
        .iter()
        .map(SchemaEntry::to_dsl)
        .collect::<Vec<_>>()
        .join(",")
}

impl SchemaEntry {
    /// Render this entry as a canonical DSL field.
    pub fn to_dsl(&self) -> String {
        let star = if self.required { "*" } else { "" };
        match self.value_type {
            ValueType::Map => format!("{} {}map{{{}}}", self.key, star, to_dsl(&self.schema)),
            ValueType::Array => format!(
                "{} {}array({})",
                self.key,
                star,
                self.elem_type.map(|t| t.as_str()).unwrap_or_default()
            ),
            scalar => format!("{} {}{}", self.key, star, scalar),
        }
    }
}
