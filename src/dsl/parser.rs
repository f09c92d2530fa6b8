//! The schema DSL parser.
//!
//! A DSL string is scanned once, left to right. Top-level fields are split on
//! commas outside any braces; every outermost `{...}` block is parsed again as
//! a schema of its own, one level deeper, and attached to the map field named
//! in front of it.
//!
//! ```text
//! name s,age *l,tags a(s),meta map{x l,y b}
//! ```

use super::field::{FieldSpec, tokenize_field};
use crate::error::{SchemaError, SchemaResult};
use crate::schema::{SchemaEntry, ValueType};
use log::{debug, trace};

/// Default maximum map nesting depth.
pub const DEFAULT_NEST_LIMIT: usize = 5;

/// Parser settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    /// Deepest map nesting accepted. The top-level schema is depth 0.
    pub max_depth: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_NEST_LIMIT,
        }
    }
}

impl ParserConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum nesting depth.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

/// Schema DSL parser.
///
/// Holds only its configuration, so one parser can be shared across threads
/// and every call is independent of the others.
#[derive(Debug, Clone, Default)]
pub struct DslParser {
    config: ParserConfig,
}

impl DslParser {
    /// Create a parser with the given configuration.
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    /// The parser's configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse a DSL string into an ordered list of schema entries.
    ///
    /// Parsing is all-or-nothing: on error no partial schema is returned.
    pub fn parse(&self, dsl: &str) -> SchemaResult<Vec<SchemaEntry>> {
        let schema = self.parse_at_depth(dsl, 0)?;
        debug!("Parsed schema DSL into {} top-level fields", schema.len());
        Ok(schema)
    }

    fn parse_at_depth(&self, dsl: &str, depth: usize) -> SchemaResult<Vec<SchemaEntry>> {
        if depth > self.config.max_depth {
            return Err(SchemaError::NestedTooDeep {
                limit: self.config.max_depth,
                dsl: dsl.trim().to_string(),
            });
        }

        // The trailing ',' closes the last segment like any other
        let trimmed = dsl.trim();
        let dsl = format!("{},", trimmed);
        let mut schema = Vec::new();
        let mut start = 0;
        let mut brace_depth = 0usize;
        let mut nest_start = 0;

        for (end, c) in dsl.char_indices() {
            match c {
                '{' => {
                    if brace_depth == 0 {
                        nest_start = end;
                    }
                    brace_depth += 1;
                }
                '}' => {
                    brace_depth = brace_depth.checked_sub(1).ok_or_else(|| {
                        SchemaError::UnbalancedBraces {
                            dsl: trimmed.to_string(),
                        }
                    })?;
                    if brace_depth > 0 {
                        continue;
                    }

                    let nest_end = end;
                    if nest_end <= nest_start {
                        return Err(SchemaError::internal(format!(
                            "nest end {} is not after nest start {}",
                            nest_end, nest_start
                        )));
                    }
                    let children = self.parse_at_depth(&dsl[nest_start + 1..nest_end], depth + 1)?;

                    let block = &dsl[start..=nest_end];
                    if nest_start <= start {
                        return Err(SchemaError::UnnamedMap {
                            segment: block.trim().to_string(),
                        });
                    }
                    // A blank prefix names nothing, so the block is dropped
                    match tokenize_field(&dsl[start..nest_start])? {
                        Some(field) => schema.push(map_entry(field, children, block)?),
                        None => trace!("Skipping unkeyed block at depth {}: '{}'", depth, block.trim()),
                    }
                    start = end + 1;
                }
                ',' if brace_depth == 0 => {
                    if start < end {
                        let segment = dsl[start..end].trim();
                        trace!("Field segment at depth {}: '{}'", depth, segment);
                        if let Some(field) = tokenize_field(segment)? {
                            schema.push(leaf_entry(field));
                        }
                    }
                    start = end + 1;
                }
                _ => {}
            }
        }

        if brace_depth != 0 {
            return Err(SchemaError::UnbalancedBraces {
                dsl: trimmed.to_string(),
            });
        }
        Ok(schema)
    }
}

/// Leaf fields without a type tag default to `string`.
fn leaf_entry(field: FieldSpec) -> SchemaEntry {
    SchemaEntry {
        key: field.key,
        value_type: field.value_type.unwrap_or(ValueType::String),
        required: field.required,
        elem_type: field.elem_type,
        schema: Vec::new(),
    }
}

/// Fields named in front of a `{...}` block default to `map`, and only `map`
/// may precede a block.
fn map_entry(
    field: FieldSpec,
    children: Vec<SchemaEntry>,
    block: &str,
) -> SchemaResult<SchemaEntry> {
    let value_type = field.value_type.unwrap_or(ValueType::Map);
    if value_type != ValueType::Map {
        return Err(SchemaError::unsupported_type(&field.raw_type).in_field(
            block.trim(),
            &field.key,
            &field.raw_type,
        ));
    }
    Ok(SchemaEntry {
        key: field.key,
        value_type,
        required: field.required,
        elem_type: None,
        schema: children,
    })
}

/// Parse a DSL string with the default configuration.
pub fn parse_dsl(dsl: &str) -> SchemaResult<Vec<SchemaEntry>> {
    DslParser::default().parse(dsl)
}
