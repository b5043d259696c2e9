//! # strongly CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use strongly_cli::compare::{run_compare, CompareArgs};
use strongly_cli::factory::{run_factory, FactoryArgs};
use strongly_cli::parse::{run_parse, ParseArgs};
use strongly_cli::schema::{run_schema, SchemaArgs};
use strongly_cli::types::{run_types, TypesArgs};
use strongly_cli::OutputFormat;

/// Exit code for operational errors.
const EXIT_OPERATIONAL: u8 = 2;

/// Inspect strong types: parse and compare values under a type's rules,
/// print schema fragments, and check the constructor cache.
#[derive(Parser, Debug)]
#[command(name = "strongly", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List every strong type with its metadata.
    Types(TypesArgs),

    /// Parse text as a strong type.
    Parse(ParseArgs),

    /// Compare two values of one strong type.
    Compare(CompareArgs),

    /// Print a strong type's JSON Schema fragment.
    Schema(SchemaArgs),

    /// Warm the constructor cache and list its entries.
    Factory(FactoryArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "strongly CLI starting");

    let result = match &cli.command {
        Commands::Types(args) => run_types(args, cli.format),
        Commands::Parse(args) => run_parse(args, cli.format),
        Commands::Compare(args) => run_compare(args, cli.format),
        Commands::Schema(args) => run_schema(args),
        Commands::Factory(args) => run_factory(args, cli.format),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(EXIT_OPERATIONAL)
        }
    }
}
