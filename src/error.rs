//! Error types for schema DSL parsing and validation.
//!
//! Parsing failures are reported as [`SchemaError`], failures of the
//! downstream acceptance rules as [`ValidationError`]. [`DslError`] wraps
//! both for callers that run the whole pipeline.

/// Errors produced while parsing a schema DSL string.
///
/// Every variant carries the DSL text that triggered it so the caller can
/// locate the faulty substring.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    /// Field segment did not split into one or two whitespace separated tokens
    #[error("malformed field schema: <{segment}> was invalid")]
    MalformedField { segment: String },

    /// Field segment produced an empty key
    #[error("field schema '{segment}' key can not be empty")]
    EmptyKey { segment: String },

    /// Type tag is not one of the recognized short or long forms
    #[error("unsupported schema type: {tag}")]
    UnsupportedType { tag: String },

    /// Array tag without a parenthesized element type
    #[error("array type must specify element type surrounded by ( ): {segment}")]
    MissingElementType { segment: String },

    /// Type normalization failed inside a field, with the field context attached
    #[error("field '{segment}' (key {key}, type {raw_type}): {source}")]
    InvalidFieldType {
        segment: String,
        key: String,
        raw_type: String,
        #[source]
        source: Box<SchemaError>,
    },

    /// A `{...}` block with no key in front of it
    #[error("nested map must be named, map{{}} not specified before '{segment}'")]
    UnnamedMap { segment: String },

    /// Brace counts do not match
    #[error("unbalanced braces in schema DSL, {{ and }} not match: {dsl}")]
    UnbalancedBraces { dsl: String },

    /// Map nesting exceeded the configured limit
    #[error("schema nested too deep, out of limit {limit}: {dsl}")]
    NestedTooDeep { limit: usize, dsl: String },

    /// Scanner reached a state its own bookkeeping rules out
    #[error("internal parser error: {message}")]
    Internal { message: String },
}

/// Errors produced when a parsed schema fails the acceptance rules.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Key does not match the identifier pattern
    #[error("invalid field key: {key}")]
    InvalidKey { key: String },

    /// Array element type outside the allowed element types
    #[error(
        "invalid field type in array '{key}': {elem_type}, field type should be one of \"float\", \"string\", and \"long\""
    )]
    InvalidElementType { key: String, elem_type: String },

    /// Top-level schema has no entries
    #[error("schema should not be empty")]
    EmptySchema,
}

/// Error for the combined parse and validate pipeline.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DslError {
    #[error("Parse error: {0}")]
    Parse(#[from] SchemaError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl SchemaError {
    /// Create a malformed field error
    pub fn malformed_field(segment: impl Into<String>) -> Self {
        Self::MalformedField {
            segment: segment.into(),
        }
    }

    /// Create an unsupported type error
    pub fn unsupported_type(tag: impl Into<String>) -> Self {
        Self::UnsupportedType { tag: tag.into() }
    }

    /// Create a missing element type error
    pub fn missing_element_type(segment: impl Into<String>) -> Self {
        Self::MissingElementType {
            segment: segment.into(),
        }
    }

    /// Create an internal consistency error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Attach field context to a type normalization error
    pub fn in_field(
        self,
        segment: impl Into<String>,
        key: impl Into<String>,
        raw_type: impl Into<String>,
    ) -> Self {
        Self::InvalidFieldType {
            segment: segment.into(),
            key: key.into(),
            raw_type: raw_type.into(),
            source: Box::new(self),
        }
    }

    /// The innermost error beneath any field context wrappers.
    pub fn root_cause(&self) -> &SchemaError {
        match self {
            Self::InvalidFieldType { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

impl ValidationError {
    /// Create an invalid key error
    pub fn invalid_key(key: impl Into<String>) -> Self {
        Self::InvalidKey { key: key.into() }
    }
}

// Result type aliases for convenience
pub type SchemaResult<T> = Result<T, SchemaError>;
pub type ValidationResult<T> = Result<T, ValidationError>;
pub type DslResult<T> = Result<T, DslError>;
