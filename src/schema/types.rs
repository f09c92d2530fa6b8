//! Core schema type definitions.
//!
//! This module contains the data structures a parsed DSL turns into: the
//! closed set of canonical value types and the recursive [`SchemaEntry`]
//! tree that carries keys, required flags, array element types and nested
//! map fields.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Canonical value types of a schema field.
///
/// These are the seven type names accepted downstream. Short and upper-case
/// DSL tags are folded onto them by the type normalizer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    /// Floating point number
    Float,
    /// UTF-8 text
    String,
    /// 64-bit integer
    Long,
    /// Date or timestamp
    Date,
    /// Homogeneous list, element type carried separately
    Array,
    /// Nested record with its own fields
    Map,
    /// True or false
    Boolean,
}

impl ValueType {
    /// All canonical types, in declaration order.
    pub const ALL: [ValueType; 7] = [
        ValueType::Float,
        ValueType::String,
        ValueType::Long,
        ValueType::Date,
        ValueType::Array,
        ValueType::Map,
        ValueType::Boolean,
    ];

    /// Canonical lower-case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Float => "float",
            Self::String => "string",
            Self::Long => "long",
            Self::Date => "date",
            Self::Array => "array",
            Self::Map => "map",
            Self::Boolean => "boolean",
        }
    }

    /// Whether this type may appear as an array element downstream.
    pub fn is_array_element(&self) -> bool {
        matches!(self, Self::Float | Self::Long | Self::String)
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses canonical names only. DSL short forms go through the normalizer.
impl FromStr for ValueType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("unknown value type: {}", s))
    }
}

/// One field of a parsed schema.
///
/// Serializes with the wire names used by repository schemas: `valtype`,
/// `elemtype` and `schema` for nested fields. An array entry carries
/// `elem_type` and no children; a map entry carries children (possibly none)
/// and no element type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SchemaEntry {
    /// Field name
    pub key: String,
    /// Canonical type of the field
    #[serde(rename = "valtype")]
    pub value_type: ValueType,
    /// Whether the field must be present
    #[serde(default)]
    pub required: bool,
    /// Element type for array fields
    #[serde(rename = "elemtype", default, skip_serializing_if = "Option::is_none")]
    pub elem_type: Option<ValueType>,
    /// Ordered child fields for map fields
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub schema: Vec<SchemaEntry>,
}

impl SchemaEntry {
    /// Create a scalar field.
    pub fn field(key: impl Into<String>, value_type: ValueType) -> Self {
        Self {
            key: key.into(),
            value_type,
            required: false,
            elem_type: None,
            schema: Vec::new(),
        }
    }

    /// Create an array field with the given element type.
    pub fn array(key: impl Into<String>, elem_type: ValueType) -> Self {
        Self {
            elem_type: Some(elem_type),
            ..Self::field(key, ValueType::Array)
        }
    }

    /// Create a map field with the given children.
    pub fn map(key: impl Into<String>, schema: Vec<SchemaEntry>) -> Self {
        Self {
            schema,
            ..Self::field(key, ValueType::Map)
        }
    }

    /// Mark the field as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

impl fmt::Display for SchemaEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}
