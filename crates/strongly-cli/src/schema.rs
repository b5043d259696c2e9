//! # Schema Subcommand
//!
//! Prints the JSON Schema fragment of one strong type, for pasting into
//! OpenAPI documents. Always JSON, whatever `--format` says.

use anyhow::Result;
use clap::Args;
use strongly_domain::CatalogEntry;

use crate::{lookup, to_pretty_json};

/// Arguments for the `strongly schema` subcommand.
#[derive(Args, Debug)]
pub struct SchemaArgs {
    /// Strong type name (case-insensitive).
    #[arg(value_name = "TYPE")]
    pub type_name: String,
}

/// Execute the schema subcommand.
pub fn run_schema(args: &SchemaArgs) -> Result<u8> {
    let entry = lookup(&args.type_name)?;
    println!("{}", render_schema(entry)?);
    Ok(0)
}

/// Render the schema fragment of `entry`.
pub fn render_schema(entry: &CatalogEntry) -> Result<String> {
    to_pretty_json(&entry.descriptor().json_schema())
}
