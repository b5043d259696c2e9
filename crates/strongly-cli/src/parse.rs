//! # Parse Subcommand
//!
//! Parses text under one strong type's rules and reports the canonical
//! form, wire form, and format validity. Rejected input is an ordinary
//! outcome (exit code 1), not an error.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use strongly_domain::CatalogEntry;

use crate::{lookup, to_pretty_json, OutputFormat, EXIT_REJECTED};

/// Arguments for the `strongly parse` subcommand.
#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Strong type name (case-insensitive).
    #[arg(value_name = "TYPE")]
    pub type_name: String,

    /// Text to parse. Leading and trailing whitespace is significant for
    /// types that do not trim.
    #[arg(value_name = "TEXT", allow_hyphen_values = true)]
    pub text: String,
}

/// Outcome of parsing one input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParseReport {
    /// Declared type name.
    pub type_name: &'static str,
    /// The raw input.
    pub input: String,
    /// Whether the type accepted the input.
    pub accepted: bool,
    /// Canonical text of the parsed value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canonical: Option<String>,
    /// Format validity, for types with a format rule.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_format: Option<bool>,
    /// JSON wire form of the parsed value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json: Option<serde_json::Value>,
}

/// Execute the parse subcommand.
pub fn run_parse(args: &ParseArgs, format: OutputFormat) -> Result<u8> {
    let entry = lookup(&args.type_name)?;
    let report = parse_report(entry, &args.text)?;
    println!("{}", render_parse(&report, format)?);

    if report.accepted {
        Ok(0)
    } else {
        tracing::info!(strong_type = report.type_name, input = %report.input, "input rejected");
        Ok(EXIT_REJECTED)
    }
}

/// Parse `text` as `entry`'s type.
pub fn parse_report(entry: &CatalogEntry, text: &str) -> Result<ParseReport> {
    let mut report = ParseReport {
        type_name: entry.name(),
        input: text.to_string(),
        accepted: false,
        canonical: None,
        valid_format: None,
        json: None,
    };

    if let Some(value) = entry.parse(text) {
        report.accepted = true;
        report.canonical = Some(value.to_string());
        report.valid_format = value.as_validatable().map(|v| v.is_valid_format());
        report.json = Some(
            value
                .to_json()
                .with_context(|| format!("serializing {} value", entry.name()))?,
        );
    }
    Ok(report)
}

/// Render a parse report.
pub fn render_parse(report: &ParseReport, format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Json {
        return to_pretty_json(report);
    }

    let Some(canonical) = &report.canonical else {
        return Ok(format!("{} rejects {:?}", report.type_name, report.input));
    };

    let mut out = format!("{}: {canonical}", report.type_name);
    if let Some(json) = &report.json {
        out.push_str(&format!("\n  json: {json}"));
    }
    if let Some(valid) = report.valid_format {
        let verdict = if valid { "valid" } else { "invalid" };
        out.push_str(&format!("\n  format: {verdict}"));
    }
    Ok(out)
}
