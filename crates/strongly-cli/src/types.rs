//! # Types Subcommand
//!
//! Lists the catalog: name, primitive kind, and the conventions each type
//! follows.

use anyhow::{Context, Result};
use clap::Args;
use strongly_core::{PrimitiveKind, TypeDescriptor};
use strongly_domain::catalog;

use crate::{to_pretty_json, OutputFormat};

/// Arguments for the `strongly types` subcommand.
#[derive(Args, Debug, Default)]
pub struct TypesArgs {
    /// Only list types of this primitive kind (e.g. `guid`, `time_span`).
    #[arg(long, value_name = "KIND")]
    pub kind: Option<String>,
}

/// Execute the types subcommand.
pub fn run_types(args: &TypesArgs, format: OutputFormat) -> Result<u8> {
    let kind = args
        .kind
        .as_deref()
        .map(str::parse::<PrimitiveKind>)
        .transpose()
        .context("invalid --kind")?;
    println!("{}", render_types(kind, format)?);
    Ok(0)
}

/// Render the catalog, optionally filtered by kind.
pub fn render_types(kind: Option<PrimitiveKind>, format: OutputFormat) -> Result<String> {
    let descriptors: Vec<&TypeDescriptor> = catalog()
        .iter()
        .map(|entry| entry.descriptor())
        .filter(|d| kind.map_or(true, |k| d.kind == k))
        .collect();

    match format {
        OutputFormat::Json => to_pretty_json(&descriptors),
        OutputFormat::Text => {
            let lines: Vec<String> = descriptors.iter().map(|d| text_line(d)).collect();
            Ok(lines.join("\n"))
        }
    }
}

fn text_line(d: &TypeDescriptor) -> String {
    let mut flags = Vec::new();
    if d.validated {
        flags.push("validated");
    }
    if d.case_insensitive {
        flags.push("ignore-case");
    }
    format!("{:<16} {:<18} {}", d.name, d.kind.as_str(), flags.join(",")).trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_lists_every_type() {
        let out = render_types(None, OutputFormat::Text).unwrap();
        assert_eq!(out.lines().count(), catalog().len());
        let currency = out.lines().find(|l| l.starts_with("CurrencyCode")).unwrap();
        assert!(currency.contains("string"));
        assert!(currency.ends_with("validated,ignore-case"));
    }

    #[test]
    fn kind_filter() {
        let out = render_types(Some(PrimitiveKind::Guid), OutputFormat::Text).unwrap();
        let names: Vec<&str> = out.lines().filter_map(|l| l.split_whitespace().next()).collect();
        assert_eq!(names, vec!["TenantId", "UserId"]);
    }

    #[test]
    fn json_is_an_array_of_descriptors() {
        let out = render_types(Some(PrimitiveKind::TimeSpan), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value[0]["name"], "Timeout");
        assert_eq!(value[0]["kind"], "time_span");
        assert_eq!(value.as_array().unwrap().len(), 1);
    }

    #[test]
    fn bad_kind_is_an_error() {
        let args = TypesArgs {
            kind: Some("uuid".to_string()),
        };
        assert!(run_types(&args, OutputFormat::Text).is_err());
    }
}
