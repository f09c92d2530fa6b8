//! # Schema DSL Tool
//!
//! A command-line utility for parsing a schema DSL string, checking it
//! against the acceptance rules, and printing the resulting schema.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --bin schema-dsl -- "name s,age *l,tags a(s),meta map{x l,y b}"
//! cargo run --bin schema-dsl -- --max-depth 2 "a{b{c s}}"
//! cargo run --bin schema-dsl -- --no-validate "1bad s"
//! ```
//!
//! ## Output Example
//!
//! ```text
//! ✓ Schema is valid!
//! [
//!   {
//!     "key": "age",
//!     "valtype": "long",
//!     "required": true
//!   }
//! ]
//!
//! Canonical DSL: age *long
//! ```
//!
//! ## Exit Codes
//!
//! - `0`: The DSL parsed (and validated, unless `--no-validate`)
//! - `1`: Parsing or validation failed
//! - `2`: Invalid command-line arguments
//!
//! Set `RUST_LOG=debug` to see parser logging.

use schema_dsl::dsl::{DslParser, ParserConfig, to_dsl};
use schema_dsl::schema::{SchemaEntry, validate_schema};
use std::env;
use std::process;

struct Options {
    config: ParserConfig,
    validate: bool,
    dsl: String,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("schema-dsl");

    let options = match parse_args(args.get(1..).unwrap_or_default()) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("Error: {}", message);
            print_usage(program);
            process::exit(2);
        }
    };

    let parser = DslParser::new(options.config);
    let schema = match parser.parse(&options.dsl) {
        Ok(schema) => schema,
        Err(e) => {
            eprintln!("❌ Schema parse failed: {}", e);
            process::exit(1);
        }
    };

    if options.validate {
        if let Err(e) = validate_schema(&schema) {
            eprintln!("❌ Schema validation failed: {}", e);
            process::exit(1);
        }
        println!("✓ Schema is valid!");
    }

    print_schema(&schema);
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut config = ParserConfig::new();
    let mut validate = true;
    let mut dsl = None;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--max-depth" => {
                let value = iter
                    .next()
                    .ok_or_else(|| "--max-depth requires a value".to_string())?;
                let max_depth = value
                    .parse()
                    .map_err(|_| format!("invalid --max-depth value: {}", value))?;
                config = config.with_max_depth(max_depth);
            }
            "--no-validate" => validate = false,
            other if other.starts_with("--") => {
                return Err(format!("unknown option: {}", other));
            }
            other => {
                if dsl.replace(other.to_string()).is_some() {
                    return Err("expected a single DSL argument".to_string());
                }
            }
        }
    }

    let dsl = dsl.ok_or_else(|| "missing DSL argument".to_string())?;
    Ok(Options {
        config,
        validate,
        dsl,
    })
}

fn print_usage(program: &str) {
    eprintln!();
    eprintln!("Usage: {} [--max-depth N] [--no-validate] <dsl>", program);
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} \"name s,age *l,tags a(s)\"", program);
    eprintln!("  {} \"meta map{{x l,y b}}\"", program);
}

fn print_schema(schema: &[SchemaEntry]) {
    match serde_json::to_string_pretty(schema) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("❌ Failed to serialize schema: {}", e);
            process::exit(1);
        }
    }
    println!();
    println!("Canonical DSL: {}", to_dsl(schema));
}
