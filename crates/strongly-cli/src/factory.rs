//! # Factory Subcommand
//!
//! Warms every catalog type's constructor and reports what the cache
//! holds. Useful to confirm every declared type resolves.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use strongly_core::{CachedPair, InstanceFactory};

use crate::{to_pretty_json, OutputFormat};

/// Arguments for the `strongly factory` subcommand.
#[derive(Args, Debug, Default)]
pub struct FactoryArgs {
    /// Warm a fresh factory instead of the process-wide one.
    #[arg(long)]
    pub fresh: bool,
}

/// Cache state after warming.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FactoryReport {
    /// Catalog types warmed.
    pub warmed: usize,
    /// Entries inserted over the factory's lifetime.
    pub builds: usize,
    /// Cached pairs.
    pub entries: Vec<CachedPair>,
}

/// Execute the factory subcommand.
pub fn run_factory(args: &FactoryArgs, format: OutputFormat) -> Result<u8> {
    let report = if args.fresh {
        factory_report(&InstanceFactory::new())?
    } else {
        factory_report(InstanceFactory::global())?
    };
    println!("{}", render_factory(&report, format)?);
    Ok(0)
}

/// Warm the catalog in `factory` and describe the result.
pub fn factory_report(factory: &InstanceFactory) -> Result<FactoryReport> {
    let warmed = strongly_domain::warm_all(factory).context("warming catalog constructors")?;
    Ok(FactoryReport {
        warmed,
        builds: factory.builds(),
        entries: factory.entries(),
    })
}

/// Render a factory report.
pub fn render_factory(report: &FactoryReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => to_pretty_json(report),
        OutputFormat::Text => {
            let mut out = format!(
                "warmed {} types, {} cached constructors",
                report.warmed,
                report.entries.len()
            );
            for pair in &report.entries {
                out.push_str(&format!("\n  {:<16} <- {}", pair.strong_type, pair.primitive));
            }
            Ok(out)
        }
    }
}
