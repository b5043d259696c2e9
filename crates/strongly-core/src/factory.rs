//! # Instance Factory
//!
//! Produces reusable constructors `T -> S` for strong types without
//! per-type boilerplate and without any per-call lookup.
//!
//! ## Build algorithm
//!
//! 1. Fast path: shared read of the cache keyed by `(TypeId of S, TypeId
//!    of T)`.
//! 2. On a miss, ask `S` for its declared constructors
//!    ([`StrongType::declare_constructors`]) and pick the one accepting
//!    exactly `T`. No cache lock is held while user code runs.
//! 3. Insert with an atomic get-or-insert. If another thread inserted
//!    first, its entry wins and is returned.
//!
//! Concurrent first users may resolve the same pair redundantly; exactly
//! one entry is retained and every caller receives the same function
//! pointer, so the outcome is deterministic. [`InstanceFactory::builds`]
//! counts retained inserts only.
//!
//! A missing constructor is reported as
//! [`ConstructionError::MissingConstructor`] and is not cached: every
//! request for that pair fails the same way.
//!
//! Strong types with a format rule are refused by the public surface with
//! [`ConstructionError::ValidationRequired`]. Their only way in is
//! `FormatRule::try_create` or `FormatRule::validate`, which check the
//! value before reaching the cache.
//!
//! ## Lifetime
//!
//! [`InstanceFactory::global`] lives from first use to process exit and
//! needs no teardown. Entries are never evicted; the cache is bounded by
//! the number of strong types the program declares.

use std::any::{type_name, Any, TypeId};
use std::fmt;
use std::marker::PhantomData;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use crate::error::ConstructionError;
use crate::strong::{StrongType, ValueOf};

/// A compiled constructor: a plain function pointer, no dispatch.
pub struct Constructor<S, T> {
    build: fn(T) -> S,
}

impl<S, T> Constructor<S, T> {
    /// Wrap a constructor function.
    pub const fn new(build: fn(T) -> S) -> Self {
        Self { build }
    }

    /// Construct an instance.
    pub fn call(&self, value: T) -> S {
        (self.build)(value)
    }

    /// Whether two handles point at the same function.
    pub fn same_function(&self, other: &Self) -> bool {
        self.build as usize == other.build as usize
    }
}

impl<S, T> Clone for Constructor<S, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S, T> Copy for Constructor<S, T> {}

impl<S, T> fmt::Debug for Constructor<S, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Constructor<{}, {}>", type_name::<S>(), type_name::<T>())
    }
}

/// The single-argument constructors a strong type exposes, keyed by the
/// exact primitive type they accept.
pub struct ConstructorTable<S> {
    entries: Vec<(TypeId, Box<dyn Any + Send + Sync>)>,
    owner: PhantomData<fn() -> S>,
}

impl<S: 'static> ConstructorTable<S> {
    fn new() -> Self {
        Self {
            entries: Vec::new(),
            owner: PhantomData,
        }
    }

    /// Declare a constructor accepting `T`. A later declaration for the
    /// same `T` replaces the earlier one.
    pub fn accept<T: 'static>(&mut self, build: fn(T) -> S) -> &mut Self {
        let key = TypeId::of::<T>();
        let erased: Box<dyn Any + Send + Sync> = Box::new(Constructor::new(build));
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = erased,
            None => self.entries.push((key, erased)),
        }
        self
    }

    /// Number of declared constructors.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing was declared.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn find<T: 'static>(&self) -> Option<Constructor<S, T>> {
        let key = TypeId::of::<T>();
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .and_then(|(_, erased)| erased.downcast_ref::<Constructor<S, T>>().copied())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct FactoryKey {
    strong: TypeId,
    primitive: TypeId,
}

struct CacheEntry {
    strong_type: &'static str,
    primitive: &'static str,
    constructor: Box<dyn Any + Send + Sync>,
}

/// A cached `(strong type, primitive)` pair, for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, serde::Serialize)]
pub struct CachedPair {
    /// Strong type name.
    pub strong_type: &'static str,
    /// Primitive type name.
    pub primitive: &'static str,
}

/// Process-wide cache of compiled strong-type constructors.
pub struct InstanceFactory {
    cache: DashMap<FactoryKey, CacheEntry>,
    builds: AtomicUsize,
}

static GLOBAL: OnceLock<InstanceFactory> = OnceLock::new();

impl InstanceFactory {
    /// An empty factory. Most code uses [`InstanceFactory::global`].
    pub fn new() -> Self {
        Self {
            cache: DashMap::new(),
            builds: AtomicUsize::new(0),
        }
    }

    /// The process-wide factory.
    pub fn global() -> &'static InstanceFactory {
        GLOBAL.get_or_init(InstanceFactory::new)
    }

    /// Get or build the constructor of `S` accepting exactly `T`.
    ///
    /// # Errors
    ///
    /// [`ConstructionError::ValidationRequired`] when `S` has a format
    /// rule. [`ConstructionError::MissingConstructor`] when `S` declares
    /// no constructor for `T`.
    pub fn constructor<S, T>(&self) -> Result<Constructor<S, T>, ConstructionError>
    where
        S: StrongType,
        T: 'static,
    {
        refuse_validated::<S>()?;
        self.cached_constructor()
    }

    /// Construct `S` from `value` through the cached constructor.
    ///
    /// # Errors
    ///
    /// Same as [`InstanceFactory::constructor`].
    pub fn construct<S, T>(&self, value: T) -> Result<S, ConstructionError>
    where
        S: StrongType,
        T: 'static,
    {
        Ok(self.constructor::<S, T>()?.call(value))
    }

    /// Build the entry for `S`'s own primitive ahead of first use. Works
    /// for validated types too; warming hands out no constructor.
    ///
    /// # Errors
    ///
    /// [`ConstructionError::MissingConstructor`] when `S` declares no
    /// constructor for its own primitive.
    pub fn warm<S: StrongType>(&self) -> Result<(), ConstructionError> {
        self.cached_constructor::<S, ValueOf<S>>().map(|_| ())
    }

    /// Construct without the format-rule gate. Callers must have
    /// validated `value` already.
    pub(crate) fn construct_unchecked<S, T>(&self, value: T) -> Result<S, ConstructionError>
    where
        S: StrongType,
        T: 'static,
    {
        Ok(self.cached_constructor::<S, T>()?.call(value))
    }

    fn cached_constructor<S, T>(&self) -> Result<Constructor<S, T>, ConstructionError>
    where
        S: StrongType,
        T: 'static,
    {
        let key = FactoryKey {
            strong: TypeId::of::<S>(),
            primitive: TypeId::of::<T>(),
        };

        if let Some(entry) = self.cache.get(&key) {
            tracing::trace!(strong_type = S::NAME, "factory cache hit");
            return downcast_entry::<S, T>(&entry);
        }

        let resolved = resolve::<S, T>()?;

        match self.cache.entry(key) {
            Entry::Occupied(existing) => downcast_entry::<S, T>(existing.get()),
            Entry::Vacant(slot) => {
                slot.insert(CacheEntry {
                    strong_type: S::NAME,
                    primitive: type_name::<T>(),
                    constructor: Box::new(resolved),
                });
                self.builds.fetch_add(1, Ordering::Relaxed);
                tracing::debug!(
                    strong_type = S::NAME,
                    primitive = type_name::<T>(),
                    "cached strong-type constructor"
                );
                Ok(resolved)
            }
        }
    }

    /// Whether the pair is cached.
    pub fn contains<S: 'static, T: 'static>(&self) -> bool {
        self.cache.contains_key(&FactoryKey {
            strong: TypeId::of::<S>(),
            primitive: TypeId::of::<T>(),
        })
    }

    /// Number of cached pairs.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Whether nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Number of entries inserted over the factory's lifetime.
    pub fn builds(&self) -> usize {
        self.builds.load(Ordering::Relaxed)
    }

    /// Cached pairs, sorted by name.
    pub fn entries(&self) -> Vec<CachedPair> {
        let mut pairs: Vec<CachedPair> = self
            .cache
            .iter()
            .map(|e| CachedPair {
                strong_type: e.strong_type,
                primitive: e.primitive,
            })
            .collect();
        pairs.sort();
        pairs
    }
}

impl Default for InstanceFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for InstanceFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InstanceFactory")
            .field("entries", &self.len())
            .field("builds", &self.builds())
            .finish()
    }
}

fn refuse_validated<S: StrongType>() -> Result<(), ConstructionError> {
    if !S::VALIDATED {
        return Ok(());
    }
    tracing::warn!(
        strong_type = S::NAME,
        "refused unchecked construction of a validated strong type"
    );
    Err(ConstructionError::ValidationRequired {
        strong_type: S::NAME,
    })
}

fn resolve<S: StrongType, T: 'static>() -> Result<Constructor<S, T>, ConstructionError> {
    let mut table = ConstructorTable::<S>::new();
    S::declare_constructors(&mut table);
    table.find::<T>().ok_or_else(|| {
        tracing::warn!(
            strong_type = S::NAME,
            primitive = type_name::<T>(),
            declared = table.len(),
            "strong type has no matching constructor"
        );
        ConstructionError::MissingConstructor {
            strong_type: S::NAME,
            primitive: type_name::<T>(),
        }
    })
}

fn downcast_entry<S: StrongType, T: 'static>(
    entry: &CacheEntry,
) -> Result<Constructor<S, T>, ConstructionError> {
    entry
        .constructor
        .downcast_ref::<Constructor<S, T>>()
        .copied()
        .ok_or(ConstructionError::CacheEntryMismatch {
            strong_type: S::NAME,
            primitive: type_name::<T>(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::family::{StrongInt32, StrongInt64, StrongString};
    use crate::strong_type;
    use crate::validate::FormatRule;

    strong_type! {
        /// Counter used by factory tests.
        pub struct Hits: StrongInt32;
    }

    strong_type! {
        /// Label used by factory tests.
        pub struct Label: StrongString;
    }

    strong_type! {
        /// Lowercase code used by factory tests.
        pub struct Code: StrongString, validated;
    }

    impl FormatRule for Code {
        fn is_valid_value(value: &String) -> bool {
            !value.is_empty() && value.chars().all(|c| c.is_ascii_lowercase())
        }
    }

    /// Declares no constructor at all.
    struct Shapeless(i64);

    impl StrongType for Shapeless {
        type Family = StrongInt64;
        const NAME: &'static str = "Shapeless";

        fn value(&self) -> &i64 {
            &self.0
        }

        fn into_value(self) -> i64 {
            self.0
        }

        fn declare_constructors(_table: &mut ConstructorTable<Self>) {}
    }

    /// Declares a constructor for a primitive other than its own.
    struct Widened(i64);

    impl StrongType for Widened {
        type Family = StrongInt64;
        const NAME: &'static str = "Widened";

        fn value(&self) -> &i64 {
            &self.0
        }

        fn into_value(self) -> i64 {
            self.0
        }

        fn declare_constructors(table: &mut ConstructorTable<Self>) {
            table.accept::<i32>(|v| Widened(i64::from(v)));
        }
    }

    #[test]
    fn builds_once_and_reuses() {
        let factory = InstanceFactory::new();
        let a = factory.constructor::<Hits, i32>().unwrap();
        let b = factory.constructor::<Hits, i32>().unwrap();
        assert!(a.same_function(&b));
        assert_eq!(factory.len(), 1);
        assert_eq!(factory.builds(), 1);
        assert_eq!(a.call(5).into_value(), 5);
    }

    #[test]
    fn distinct_pairs_get_distinct_entries() {
        let factory = InstanceFactory::new();
        factory.constructor::<Hits, i32>().unwrap();
        factory.constructor::<Label, String>().unwrap();
        assert_eq!(factory.len(), 2);
        assert!(factory.contains::<Hits, i32>());
        assert!(factory.contains::<Label, String>());
        assert!(!factory.contains::<Label, i32>());
    }

    #[test]
    fn construct_wraps_value() {
        let factory = InstanceFactory::new();
        let label: Label = factory.construct("x".to_string()).unwrap();
        assert_eq!(label.value(), "x");
    }

    #[test]
    fn missing_constructor_is_descriptive_and_uncached() {
        let factory = InstanceFactory::new();
        for _ in 0..2 {
            let err = factory.constructor::<Shapeless, i64>().unwrap_err();
            assert_eq!(
                err,
                ConstructionError::MissingConstructor {
                    strong_type: "Shapeless",
                    primitive: "i64",
                }
            );
        }
        assert!(factory.is_empty());
        assert_eq!(factory.builds(), 0);
    }

    #[test]
    fn lookup_requires_exact_primitive() {
        let factory = InstanceFactory::new();
        let from_i32 = factory.constructor::<Widened, i32>().unwrap();
        assert_eq!(from_i32.call(7).into_value(), 7);
        let err = factory.constructor::<Widened, i64>().unwrap_err();
        assert!(err.to_string().contains("Widened"));
        assert!(err.to_string().contains("i64"));
    }

    #[test]
    fn warm_prebuilds_own_primitive() {
        let factory = InstanceFactory::new();
        factory.warm::<Label>().unwrap();
        assert!(factory.contains::<Label, String>());
        assert!(factory.warm::<Shapeless>().is_err());
    }

    #[test]
    fn validated_type_is_refused_without_its_rule() {
        let factory = InstanceFactory::new();
        let err = factory
            .construct::<Code, String>("NOT VALID".to_string())
            .unwrap_err();
        assert_eq!(err, ConstructionError::ValidationRequired { strong_type: "Code" });
        assert!(factory.constructor::<Code, String>().is_err());
        assert!(factory.is_empty());
    }

    #[test]
    fn validated_type_can_still_be_warmed() {
        let factory = InstanceFactory::new();
        factory.warm::<Code>().unwrap();
        assert!(factory.contains::<Code, String>());
        assert!(factory.construct::<Code, String>("abc".to_string()).is_err());
    }

    #[test]
    fn unchecked_path_serves_format_rules() {
        let factory = InstanceFactory::new();
        let code: Code = factory.construct_unchecked("abc".to_string()).unwrap();
        assert_eq!(code.value(), "abc");
        assert!(Code::try_create("abc".to_string()).is_some());
        assert!(Code::try_create("ABC".to_string()).is_none());
    }

    #[test]
    fn entries_are_sorted_names() {
        let factory = InstanceFactory::new();
        factory.warm::<Label>().unwrap();
        factory.warm::<Hits>().unwrap();
        let names: Vec<_> = factory.entries().into_iter().map(|p| p.strong_type).collect();
        assert_eq!(names, vec!["Hits", "Label"]);
    }

    #[test]
    fn table_redeclaration_replaces() {
        let mut table = ConstructorTable::<Widened>::new();
        table.accept::<i32>(|v| Widened(i64::from(v)));
        table.accept::<i32>(|v| Widened(i64::from(v) * 2));
        assert_eq!(table.len(), 1);
        assert_eq!(table.find::<i32>().unwrap().call(2).into_value(), 4);
        assert!(table.find::<u8>().is_none());
    }

    #[test]
    fn global_is_a_singleton() {
        assert!(std::ptr::eq(InstanceFactory::global(), InstanceFactory::global()));
    }
}
