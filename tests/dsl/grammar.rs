//! Grammar tests.
//!
//! Field forms, type tag spellings, default types and ordering.

use crate::assert_parses_to;
use crate::common::{field, nested_dsl, sample_schema};
use schema_dsl::dsl::DEFAULT_NEST_LIMIT;
use schema_dsl::{DslParser, ParserConfig, SchemaEntry, ValueType, parse_dsl};

#[test]
fn test_sample_schema() {
    let (dsl, expected) = sample_schema();
    assert_parses_to!(dsl, expected);
}

#[test]
fn test_type_tag_spellings() {
    let cases = [
        ("v l", ValueType::Long),
        ("v LONG", ValueType::Long),
        ("v F", ValueType::Float),
        ("v Float", ValueType::Float),
        ("v S", ValueType::String),
        ("v d", ValueType::Date),
        ("v DATE", ValueType::Date),
        ("v B", ValueType::Boolean),
        ("v bool", ValueType::Boolean),
        ("v BOOLEAN", ValueType::Boolean),
        ("v M", ValueType::Map),
    ];
    for (dsl, value_type) in cases {
        let expected = if value_type == ValueType::Map {
            SchemaEntry::map("v", Vec::new())
        } else {
            field("v", value_type)
        };
        assert_parses_to!(dsl, vec![expected]);
    }
}

#[test]
fn test_array_spellings() {
    assert_parses_to!("v a(l)", vec![SchemaEntry::array("v", ValueType::Long)]);
    assert_parses_to!("v A(S)", vec![SchemaEntry::array("v", ValueType::String)]);
    assert_parses_to!(
        "v array(float)",
        vec![SchemaEntry::array("v", ValueType::Float)]
    );
    assert_parses_to!(
        "v *a(f)*",
        vec![SchemaEntry::array("v", ValueType::Float).required()]
    );
}

#[test]
fn test_required_markers() {
    let expected = vec![field("v", ValueType::Long).required()];
    assert_parses_to!("v *l", expected.clone());
    assert_parses_to!("v l*", expected.clone());
    assert_parses_to!("v **l**", expected);
}

#[test]
fn test_key_only_defaults_to_string() {
    assert_parses_to!(
        "a, b, c",
        vec![
            field("a", ValueType::String),
            field("b", ValueType::String),
            field("c", ValueType::String),
        ]
    );
}

#[test]
fn test_required_marker_without_type() {
    assert_parses_to!("a *", vec![field("a", ValueType::String).required()]);
    assert_parses_to!(
        "m *{x s}",
        vec![SchemaEntry::map("m", vec![field("x", ValueType::String)]).required()]
    );
}

#[test]
fn test_map_without_type_tag() {
    assert_parses_to!(
        "m{x l}",
        vec![SchemaEntry::map("m", vec![field("x", ValueType::Long)])]
    );
    assert_parses_to!(
        "m M{x l}",
        vec![SchemaEntry::map("m", vec![field("x", ValueType::Long)])]
    );
}

#[test]
fn test_unkeyed_block_dropped() {
    assert_parses_to!("a l, {c s}", vec![field("a", ValueType::Long)]);
    assert_parses_to!(
        "m{x s, {y s}}",
        vec![SchemaEntry::map("m", vec![field("x", ValueType::String)])]
    );
}

#[test]
fn test_nested_children_keep_order() {
    let schema = parse_dsl("m{z s, y s, x s}").expect("should parse");
    let keys: Vec<&str> = schema[0].schema.iter().map(|e| e.key.as_str()).collect();
    assert_eq!(keys, vec!["z", "y", "x"]);
}

#[test]
fn test_whitespace_tolerance() {
    assert_parses_to!(
        "  a \t s ,\n b   m { c  l , d  b }  ",
        vec![
            field("a", ValueType::String),
            SchemaEntry::map(
                "b",
                vec![field("c", ValueType::Long), field("d", ValueType::Boolean)]
            ),
        ]
    );
}

#[test]
fn test_keys_are_not_checked_by_parser() {
    assert_parses_to!("1bad s", vec![field("1bad", ValueType::String)]);
}

#[test]
fn test_nesting_limits() {
    assert!(parse_dsl(&nested_dsl(DEFAULT_NEST_LIMIT)).is_ok());
    assert!(parse_dsl(&nested_dsl(DEFAULT_NEST_LIMIT + 1)).is_err());

    let parser = DslParser::new(ParserConfig::new().with_max_depth(DEFAULT_NEST_LIMIT + 2));
    assert!(parser.parse(&nested_dsl(DEFAULT_NEST_LIMIT + 2)).is_ok());
    assert_eq!(parser.config().max_depth, DEFAULT_NEST_LIMIT + 2);
}

#[test]
fn test_parser_shared_across_threads() {
    let parser = std::sync::Arc::new(DslParser::default());
    let inputs = ["a s", "b l,c{d f}", "e a(s)", "f *b"];

    let handles: Vec<_> = inputs
        .iter()
        .map(|dsl| {
            let parser = parser.clone();
            let dsl = dsl.to_string();
            std::thread::spawn(move || (parser.parse(&dsl), dsl))
        })
        .collect();

    for handle in handles {
        let (result, dsl) = handle.join().expect("thread should not panic");
        assert_eq!(result, parse_dsl(&dsl));
    }
}
