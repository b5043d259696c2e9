//! # Compare Subcommand
//!
//! Parses two inputs as the same strong type and compares them with that
//! type's own semantics: case-insensitive codes compare equal across case,
//! doubles may be unordered.

use std::cmp::Ordering;

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use strongly_domain::CatalogEntry;

use crate::{lookup, to_pretty_json, OutputFormat, EXIT_REJECTED};

/// Arguments for the `strongly compare` subcommand.
#[derive(Args, Debug)]
pub struct CompareArgs {
    /// Strong type name (case-insensitive).
    #[arg(value_name = "TYPE")]
    pub type_name: String,

    /// Left-hand input.
    #[arg(value_name = "LEFT", allow_hyphen_values = true)]
    pub left: String,

    /// Right-hand input.
    #[arg(value_name = "RIGHT", allow_hyphen_values = true)]
    pub right: String,
}

/// Ordering of two values, `Unordered` when the type has none for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Relation {
    /// Left sorts first.
    Less,
    /// Same position.
    Equal,
    /// Left sorts last.
    Greater,
    /// No order, e.g. NaN.
    Unordered,
}

impl From<Option<Ordering>> for Relation {
    fn from(ordering: Option<Ordering>) -> Self {
        match ordering {
            Some(Ordering::Less) => Self::Less,
            Some(Ordering::Equal) => Self::Equal,
            Some(Ordering::Greater) => Self::Greater,
            None => Self::Unordered,
        }
    }
}

/// Outcome of a comparison.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompareReport {
    /// Declared type name.
    pub type_name: &'static str,
    /// Canonical left value.
    pub left: String,
    /// Canonical right value.
    pub right: String,
    /// Equality under the type's semantics.
    pub equal: bool,
    /// Ordering under the type's semantics.
    pub relation: Relation,
}

/// Why a comparison could not be made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejected {
    /// The input the type rejected.
    pub input: String,
}

/// Execute the compare subcommand.
pub fn run_compare(args: &CompareArgs, format: OutputFormat) -> Result<u8> {
    let entry = lookup(&args.type_name)?;
    match compare(entry, &args.left, &args.right) {
        Ok(report) => {
            println!("{}", render_compare(&report, format)?);
            Ok(0)
        }
        Err(rejected) => {
            println!("{} rejects {:?}", entry.name(), rejected.input);
            Ok(EXIT_REJECTED)
        }
    }
}

/// Parse both inputs as `entry`'s type and compare them.
///
/// # Errors
///
/// Returns the first input the type rejects.
pub fn compare(entry: &CatalogEntry, left: &str, right: &str) -> Result<CompareReport, Rejected> {
    let parse = |text: &str| {
        entry.parse(text).ok_or_else(|| Rejected {
            input: text.to_string(),
        })
    };
    let l = parse(left)?;
    let r = parse(right)?;

    Ok(CompareReport {
        type_name: entry.name(),
        left: l.to_string(),
        right: r.to_string(),
        equal: l.dyn_eq(r.as_ref()),
        relation: Relation::from(l.dyn_cmp(r.as_ref())),
    })
}

/// Render a comparison.
pub fn render_compare(report: &CompareReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => to_pretty_json(report),
        OutputFormat::Text => {
            let symbol = match report.relation {
                Relation::Less => "<",
                Relation::Equal => "==",
                Relation::Greater => ">",
                Relation::Unordered => "<>",
            };
            Ok(format!(
                "{}: {} {symbol} {} (equal: {})",
                report.type_name, report.left, report.right, report.equal
            ))
        }
    }
}
