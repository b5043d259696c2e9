#![deny(missing_docs)]

//! # strongly-domain — Domain Strong Types
//!
//! Concrete strong types an application reaches for first, each declared
//! with [`strong_type!`](strongly_core::strong_type) over one primitive
//! family. You cannot pass a [`TenantId`] where a [`UserId`] is expected,
//! and a [`Quantity`] is not an `i32`.
//!
//! ## Validation
//!
//! Text types with a format ([`EmailAddress`], [`CurrencyCode`],
//! [`LocaleCode`], [`MacAddress`], [`Sku`]) are constructed through
//! `try_create` only. Their rules are structural checks, applied after
//! trimming. Everything else is valid by construction.
//!
//! ## Catalog
//!
//! [`catalog()`] lists every type here by name, with a dynamic parser and a
//! factory warm-up hook. The `strongly` CLI is built on it.

pub mod catalog;
pub mod codes;
pub mod contact;
pub mod identifiers;
pub mod measures;
pub mod temporal;

pub use catalog::{catalog, find, warm_all, CatalogEntry};
pub use codes::{CurrencyCode, LocaleCode, MacAddress, Sku};
pub use contact::EmailAddress;
pub use identifiers::{SequenceNumber, TenantId, UserId};
pub use measures::{Amount, Grade, OptIn, Percentage, Quantity};
pub use temporal::{CreatedAt, ScheduledAt, Timeout};
