//! # Error Hierarchy
//!
//! Structured error types for strong primitives, built with `thiserror`.
//!
//! Three failure classes:
//!
//! - [`ConstructionError`] means a strong type was declared without the
//!   constructor shape the factory requires, or that a validated type was
//!   requested without its format rule. Both are programming errors and
//!   surface on the first construction attempt for that type pair.
//! - [`ParseError`] means textual input did not parse as the primitive.
//!   `try_parse` reports this as `None`; `FromStr` carries it as a value.
//! - [`ValidationError`] means a value parsed but failed the type's format
//!   rule.

use thiserror::Error;

/// Top-level error type for the strong primitive stack.
#[derive(Error, Debug)]
pub enum StronglyError {
    /// The factory could not produce a constructor.
    #[error("construction error: {0}")]
    Construction(#[from] ConstructionError),

    /// Text did not parse as the strong type's primitive.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// A value failed its type's format rule.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failure to obtain a constructor for a `(strong type, primitive)` pair.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConstructionError {
    /// The strong type declares no single-argument constructor accepting
    /// exactly the requested primitive.
    #[error("strong type {strong_type} declares no constructor accepting {primitive}")]
    MissingConstructor {
        /// Name of the strong type.
        strong_type: &'static str,
        /// Rust type name of the requested primitive.
        primitive: &'static str,
    },

    /// The strong type has a format rule, so the factory will not build it
    /// from an unchecked value.
    #[error("strong type {strong_type} has a format rule; construct it through try_create")]
    ValidationRequired {
        /// Name of the strong type.
        strong_type: &'static str,
    },

    /// A cached entry did not hold the constructor type its key promised.
    #[error("factory cache entry for ({strong_type}, {primitive}) holds a foreign constructor")]
    CacheEntryMismatch {
        /// Name of the strong type.
        strong_type: &'static str,
        /// Rust type name of the requested primitive.
        primitive: &'static str,
    },
}

/// Textual input that is not a valid representation of the primitive.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("cannot parse \"{input}\" as {type_name} ({kind})")]
pub struct ParseError {
    /// Name of the strong type that was requested.
    pub type_name: &'static str,
    /// Primitive family name, e.g. `guid`.
    pub kind: &'static str,
    /// The rejected input.
    pub input: String,
}

/// Validation errors for strong types that declare a format rule.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The value does not satisfy the type's format rule.
    #[error("invalid {type_name}: \"{value}\"")]
    InvalidFormat {
        /// Name of the strong type.
        type_name: &'static str,
        /// Canonical text of the rejected value.
        value: String,
    },
}
