#![deny(missing_docs)]

//! # strongly-core — Strong Primitive Types
//!
//! This crate turns primitive values (`String`, `Uuid`, `i32`, `i64`,
//! `Decimal`, `f64`, `bool`, `char`, instants, durations) into distinct,
//! nominal domain types. A `UserId` and a `TenantId` may both wrap a
//! `Uuid`, but neither is accepted where the other is expected:
//!
//! ```compile_fail
//! use strongly_core::{strong_type, Construct};
//!
//! strong_type! { pub struct UserId: StrongInt64; }
//! strong_type! { pub struct TenantId: StrongInt64; }
//!
//! let same = UserId::from_value(1) == TenantId::from_value(1);
//! ```
//!
//! ## Design Principles
//!
//! 1. **One holder, many tags.** [`ValueHolder`] stores the primitive and
//!    carries the owning strong type as a phantom tag. Comparison and
//!    formatting traits forward to the primitive and exist only when it
//!    has them.
//!
//! 2. **Construction through one cache.** [`InstanceFactory`] resolves
//!    each `(strong type, primitive)` constructor once, then hands out a
//!    plain function pointer. Concurrent first use is safe and
//!    deterministic.
//!
//! 3. **Families carry conventions.** A [`PrimitiveFamily`] fixes parsing,
//!    canonical text, and wire form for its primitive. Strong types pick a
//!    family; they never re-implement conventions.
//!
//! 4. **Validation is a capability.** Types with a [`FormatRule`] are built
//!    only through `try_create`, and expose [`Validatable`] to code that
//!    discovers them through [`StrongValue`].
//!
//! 5. **Structured errors with `thiserror`.** No `.unwrap()` outside tests.

pub mod error;
pub mod factory;
pub mod family;
pub mod holder;
pub mod macros;
pub mod schema;
pub mod strong;
pub mod validate;

// Re-export primary types at crate root for ergonomic imports.
pub use error::{ConstructionError, ParseError, StronglyError, ValidationError};
pub use factory::{CachedPair, Constructor, ConstructorTable, InstanceFactory};
pub use family::{
    BooleanStrongType, CharStrongType, DateTimeOffsetStrongType, DateTimeStrongType,
    DecimalStrongType, DoubleStrongType, GuidStrongType, Int32StrongType, Int64StrongType,
    PrimitiveFamily, PrimitiveKind, StringStrongType, TimeSpanStrongType,
};
pub use holder::ValueHolder;
pub use schema::TypeDescriptor;
pub use strong::{deserialize_constructed, Construct, StrongType, StrongValue, TryParse, ValueOf};
pub use validate::{deserialize_validated, FormatRule, Validatable};

// Primitive crates, so declaring crates agree on versions.
pub use chrono;
pub use rust_decimal;
pub use uuid;

#[doc(hidden)]
pub mod __private {
    pub use serde;
}
