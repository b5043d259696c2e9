//! # Type Catalog
//!
//! A name-indexed registry of every strong type in this crate, for tools
//! that receive a type name as text (the CLI, schema exporters).
//!
//! Each entry carries the type's [`TypeDescriptor`], a parser producing a
//! type-erased [`StrongValue`], and a hook that warms the type's
//! constructor in a given [`InstanceFactory`].

use std::fmt;
use std::sync::OnceLock;

use strongly_core::{
    ConstructionError, InstanceFactory, StrongType, StrongValue, TryParse, TypeDescriptor,
};

use crate::codes::{CurrencyCode, LocaleCode, MacAddress, Sku};
use crate::contact::EmailAddress;
use crate::identifiers::{SequenceNumber, TenantId, UserId};
use crate::measures::{Amount, Grade, OptIn, Percentage, Quantity};
use crate::temporal::{CreatedAt, ScheduledAt, Timeout};

type DynParse = fn(&str) -> Option<Box<dyn StrongValue>>;
type Warm = fn(&InstanceFactory) -> Result<(), ConstructionError>;

/// One catalog entry.
pub struct CatalogEntry {
    descriptor: TypeDescriptor,
    parse: DynParse,
    warm: Warm,
}

impl CatalogEntry {
    fn of<S>() -> Self
    where
        S: TryParse + StrongValue,
    {
        Self {
            descriptor: S::descriptor(),
            parse: parse_erased::<S>,
            warm: warm_in::<S>,
        }
    }

    /// Declared type name.
    pub fn name(&self) -> &'static str {
        self.descriptor.name
    }

    /// Metadata of the type.
    pub fn descriptor(&self) -> &TypeDescriptor {
        &self.descriptor
    }

    /// Parse `text` as this type. Malformed or invalid input is `None`.
    pub fn parse(&self, text: &str) -> Option<Box<dyn StrongValue>> {
        (self.parse)(text)
    }

    /// Build this type's constructor in `factory` ahead of first use.
    ///
    /// # Errors
    ///
    /// Returns the factory's [`ConstructionError`] when the type declares
    /// no constructor for its own primitive.
    pub fn warm(&self, factory: &InstanceFactory) -> Result<(), ConstructionError> {
        (self.warm)(factory)
    }
}

impl fmt::Debug for CatalogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogEntry")
            .field("descriptor", &self.descriptor)
            .finish_non_exhaustive()
    }
}

fn parse_erased<S: TryParse + StrongValue>(text: &str) -> Option<Box<dyn StrongValue>> {
    S::try_parse(text).map(|value| Box::new(value) as Box<dyn StrongValue>)
}

fn warm_in<S: StrongType>(factory: &InstanceFactory) -> Result<(), ConstructionError> {
    factory.warm::<S>()
}

static CATALOG: OnceLock<Vec<CatalogEntry>> = OnceLock::new();

/// Every domain strong type, sorted by name.
pub fn catalog() -> &'static [CatalogEntry] {
    CATALOG.get_or_init(|| {
        let mut entries = vec![
            CatalogEntry::of::<Amount>(),
            CatalogEntry::of::<CreatedAt>(),
            CatalogEntry::of::<CurrencyCode>(),
            CatalogEntry::of::<EmailAddress>(),
            CatalogEntry::of::<Grade>(),
            CatalogEntry::of::<LocaleCode>(),
            CatalogEntry::of::<MacAddress>(),
            CatalogEntry::of::<OptIn>(),
            CatalogEntry::of::<Percentage>(),
            CatalogEntry::of::<Quantity>(),
            CatalogEntry::of::<ScheduledAt>(),
            CatalogEntry::of::<SequenceNumber>(),
            CatalogEntry::of::<Sku>(),
            CatalogEntry::of::<TenantId>(),
            CatalogEntry::of::<Timeout>(),
            CatalogEntry::of::<UserId>(),
        ];
        entries.sort_by_key(CatalogEntry::name);
        entries
    })
}

/// Look up an entry by type name, ignoring ASCII case.
pub fn find(name: &str) -> Option<&'static CatalogEntry> {
    catalog()
        .iter()
        .find(|entry| entry.name().eq_ignore_ascii_case(name.trim()))
}

/// Warm every catalog type in `factory`. Returns the number of types
/// warmed.
///
/// # Errors
///
/// Stops at the first type that cannot be warmed.
pub fn warm_all(factory: &InstanceFactory) -> Result<usize, ConstructionError> {
    for entry in catalog() {
        entry.warm(factory)?;
        tracing::debug!(strong_type = entry.name(), "warmed constructor");
    }
    tracing::info!(types = catalog().len(), cached = factory.len(), "catalog warmed");
    Ok(catalog().len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use strongly_core::PrimitiveKind;

    #[test]
    fn names_are_unique_and_sorted() {
        let names: Vec<&str> = catalog().iter().map(CatalogEntry::name).collect();
        let unique: HashSet<&str> = names.iter().copied().collect();
        assert_eq!(unique.len(), names.len());
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
    }

    #[test]
    fn every_family_is_represented() {
        let kinds: HashSet<PrimitiveKind> = catalog().iter().map(|e| e.descriptor().kind).collect();
        for kind in PrimitiveKind::all() {
            assert!(kinds.contains(kind), "no domain type for {kind}");
        }
    }

    #[test]
    fn find_ignores_case() {
        assert_eq!(find("emailaddress").map(CatalogEntry::name), Some("EmailAddress"));
        assert_eq!(find(" UserId ").map(CatalogEntry::name), Some("UserId"));
        assert!(find("Nope").is_none());
    }

    #[test]
    fn dynamic_parse_respects_validation() {
        let email = find("EmailAddress").unwrap();
        assert!(email.parse("not-an-email").is_none());
        let parsed = email.parse("a@b.com").unwrap();
        assert_eq!(parsed.to_string(), "a@b.com");
        assert!(parsed.as_validatable().is_some());
        assert_eq!(parsed.type_descriptor().name, "EmailAddress");
    }

    #[test]
    fn dynamic_values_of_different_types_never_match() {
        let g = "67e55044-10b1-426f-9247-bb680e5fe0c8";
        let user = find("UserId").unwrap().parse(g).unwrap();
        let tenant = find("TenantId").unwrap().parse(g).unwrap();
        assert!(!user.dyn_eq(tenant.as_ref()));
        assert!(user.dyn_eq(find("UserId").unwrap().parse(g).unwrap().as_ref()));
    }

    #[test]
    fn warm_all_fills_a_fresh_factory() {
        let factory = InstanceFactory::new();
        assert_eq!(warm_all(&factory).unwrap(), catalog().len());
        assert_eq!(factory.len(), catalog().len());
        assert_eq!(factory.builds(), catalog().len());
        warm_all(&factory).unwrap();
        assert_eq!(factory.builds(), catalog().len());
    }
}
