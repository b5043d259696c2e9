//! # Value Holder
//!
//! [`ValueHolder<T, Tag>`] binds one primitive value to a nominal identity.
//! `Tag` is a phantom marker, normally the strong type that owns the
//! holder, so `ValueHolder<Uuid, UserId>` and `ValueHolder<Uuid, TenantId>`
//! are unrelated types and cannot be compared with each other.
//!
//! Every comparison and formatting trait is implemented exactly when `T`
//! implements it and forwards to `T`. A holder over `f64` is therefore
//! `PartialOrd` but not `Ord`; asking for a total order does not compile.
//!
//! The value is stored verbatim. Trimming or case normalization belongs to
//! the domain type's format rule, not here.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// An immutable primitive value under a nominal type tag.
pub struct ValueHolder<T, Tag> {
    value: T,
    tag: PhantomData<fn() -> Tag>,
}

impl<T, Tag> ValueHolder<T, Tag> {
    /// Wrap a value.
    pub const fn new(value: T) -> Self {
        Self {
            value,
            tag: PhantomData,
        }
    }

    /// Borrow the wrapped value.
    pub const fn value(&self) -> &T {
        &self.value
    }

    /// Unwrap into the primitive.
    pub fn into_value(self) -> T {
        self.value
    }
}

impl<T: AsRef<str>, Tag> ValueHolder<T, Tag> {
    /// Case-insensitive equality using invariant upper-case folding.
    pub fn eq_ignore_case(&self, other: &Self) -> bool {
        folded(self.value.as_ref()).eq(folded(other.value.as_ref()))
    }

    /// Case-insensitive ordering, consistent with [`Self::eq_ignore_case`].
    pub fn cmp_ignore_case(&self, other: &Self) -> Ordering {
        folded(self.value.as_ref()).cmp(folded(other.value.as_ref()))
    }

    /// Feed the case-folded value into `state`, so values equal under
    /// [`Self::eq_ignore_case`] hash identically.
    pub fn hash_ignore_case<H: Hasher>(&self, state: &mut H) {
        for c in folded(self.value.as_ref()) {
            c.hash(state);
        }
        state.write_u8(0xff);
    }
}

fn folded(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars().flat_map(char::to_uppercase)
}

impl<T: Clone, Tag> Clone for ValueHolder<T, Tag> {
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }
}

impl<T: Copy, Tag> Copy for ValueHolder<T, Tag> {}

impl<T: PartialEq, Tag> PartialEq for ValueHolder<T, Tag> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Eq, Tag> Eq for ValueHolder<T, Tag> {}

impl<T: PartialOrd, Tag> PartialOrd for ValueHolder<T, Tag> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<T: Ord, Tag> Ord for ValueHolder<T, Tag> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<T: Hash, Tag> Hash for ValueHolder<T, Tag> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T: fmt::Debug, Tag> fmt::Debug for ValueHolder<T, Tag> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}

impl<T: fmt::Display, Tag> fmt::Display for ValueHolder<T, Tag> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}
