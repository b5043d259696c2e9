//! # strongly-cli — Strong Type Toolbox
//!
//! Provides the `strongly` command-line interface over the
//! [`strongly_domain`] catalog.
//!
//! ## Subcommands
//!
//! - `strongly types` — List every strong type with its metadata.
//! - `strongly parse <TYPE> <TEXT>` — Parse text under a type's rules.
//! - `strongly compare <TYPE> <LEFT> <RIGHT>` — Equality and ordering.
//! - `strongly schema <TYPE>` — JSON Schema fragment.
//! - `strongly factory` — Warm the constructor cache and list its entries.
//!
//! ## Exit codes
//!
//! `0` success, `1` input rejected by the type, `2` operational error such
//! as an unknown type name.
//!
//! ```bash
//! strongly parse EmailAddress " ops@example.com "
//! strongly compare CurrencyCode usd USD --format json
//! strongly -vv factory
//! ```

pub mod compare;
pub mod factory;
pub mod parse;
pub mod schema;
pub mod types;

use anyhow::{bail, Result};
use clap::ValueEnum;
use strongly_domain::CatalogEntry;

/// Exit code for input the type rejects.
pub const EXIT_REJECTED: u8 = 1;

/// Output rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Resolve a type name against the catalog, ignoring case.
pub fn lookup(name: &str) -> Result<&'static CatalogEntry> {
    match strongly_domain::find(name) {
        Some(entry) => Ok(entry),
        None => {
            let known: Vec<&str> = strongly_domain::catalog().iter().map(CatalogEntry::name).collect();
            bail!("unknown strong type {name:?}; known types: {}", known.join(", "))
        }
    }
}

/// Pretty-printed JSON.
pub(crate) fn to_pretty_json<T: serde::Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(lookup("sku").unwrap().name(), "Sku");
    }

    #[test]
    fn lookup_lists_known_types_on_failure() {
        let err = lookup("Unicorn").unwrap_err().to_string();
        assert!(err.contains("Unicorn"));
        assert!(err.contains("EmailAddress"));
    }
}
