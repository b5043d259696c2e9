//! # Strong Type Contract
//!
//! [`StrongType`] is the shared contract every concrete strong type
//! satisfies. Concrete types are normally declared with
//! [`strong_type!`](crate::strong_type), which generates the struct, its
//! private [`ValueHolder`](crate::ValueHolder) field, and every impl below.
//!
//! ## Construction surface
//!
//! - [`Construct`]: `from_value` / `try_from_value`, routed through the
//!   [`InstanceFactory`]. Only types without a format rule get this; a type
//!   with a [`FormatRule`](crate::FormatRule) is constructed through
//!   `try_create` alone.
//! - [`TryParse`]: text to strong type, `None` on malformed input.
//!
//! ## Nominal identity
//!
//! Two strong types wrapping the same primitive never compare: their
//! holders carry different tags, so `UserId == TenantId` is a type error.
//! [`StrongValue`] offers the runtime counterpart for type-erased code,
//! where [`StrongValue::dyn_eq`] is `false` across nominal types.

use std::any::Any;
use std::cmp::Ordering;
use std::fmt;

use serde::de::Error as _;
use serde::{Deserializer, Serialize};

use crate::error::{ConstructionError, ParseError};
use crate::factory::{ConstructorTable, InstanceFactory};
use crate::family::PrimitiveFamily;
use crate::schema::TypeDescriptor;
use crate::validate::Validatable;

/// The primitive wrapped by strong type `S`.
pub type ValueOf<S> = <<S as StrongType>::Family as PrimitiveFamily>::Value;

/// The contract shared by all strong types.
pub trait StrongType: Sized + Send + Sync + 'static {
    /// Primitive family: fixes the wrapped type and its text conventions.
    type Family: PrimitiveFamily;

    /// Declared type name, used in diagnostics and metadata.
    const NAME: &'static str;

    /// Whether the type declares a format rule.
    const VALIDATED: bool = false;

    /// Whether equality ignores letter case.
    const CASE_INSENSITIVE: bool = false;

    /// Borrow the wrapped primitive.
    fn value(&self) -> &ValueOf<Self>;

    /// Unwrap into the primitive.
    fn into_value(self) -> ValueOf<Self>;

    /// List the single-argument constructors this type exposes to the
    /// factory. Called at most once per factory miss, never per instance.
    fn declare_constructors(table: &mut ConstructorTable<Self>);

    /// The validation capability, when the type has one.
    fn validation(&self) -> Option<&dyn Validatable> {
        None
    }

    /// Introspectable metadata.
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::of::<Self>()
    }

    /// Canonical text of the wrapped value.
    fn to_canonical_string(&self) -> String {
        <Self::Family as PrimitiveFamily>::format(self.value())
    }
}

/// Infallible construction for strong types without a format rule.
pub trait Construct: StrongType {
    /// Build through the global factory.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::MissingConstructor`] when the type does
    /// not declare a constructor for its own primitive, and
    /// [`ConstructionError::ValidationRequired`] when it has a format rule.
    fn try_from_value(value: ValueOf<Self>) -> Result<Self, ConstructionError> {
        InstanceFactory::global().construct::<Self, ValueOf<Self>>(value)
    }

    /// Build through the global factory.
    ///
    /// # Panics
    ///
    /// Panics with the [`ConstructionError`] text when the type does not
    /// declare a constructor for its own primitive. That is a declaration
    /// bug, reported on first use.
    fn from_value(value: ValueOf<Self>) -> Self {
        construct_or_panic(value)
    }
}

/// Text to strong type.
pub trait TryParse: StrongType {
    /// Parse with the family's grammar (and the type's format rule, if any).
    /// Malformed input yields `None`.
    fn try_parse(text: &str) -> Option<Self>;

    /// Like [`TryParse::try_parse`], carrying the rejected input.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] when `text` is rejected.
    fn parse_str(text: &str) -> Result<Self, ParseError> {
        Self::try_parse(text).ok_or_else(|| ParseError {
            type_name: Self::NAME,
            kind: <Self::Family as PrimitiveFamily>::KIND.as_str(),
            input: text.to_string(),
        })
    }
}

fn construct_or_panic<S: StrongType>(value: ValueOf<S>) -> S {
    match InstanceFactory::global().construct::<S, ValueOf<S>>(value) {
        Ok(instance) => instance,
        Err(err) => panic!("{err}"),
    }
}

/// Deserialize a [`Construct`] type: the family's wire form, then
/// [`Construct::try_from_value`]. Construction errors surface as the
/// deserializer's custom error.
///
/// # Errors
///
/// Returns the wire-form error or the [`ConstructionError`] text.
pub fn deserialize_constructed<'de, S, D>(deserializer: D) -> Result<S, D::Error>
where
    S: Construct,
    D: Deserializer<'de>,
{
    let value = <S::Family as PrimitiveFamily>::deserialize_value(deserializer)?;
    S::try_from_value(value).map_err(D::Error::custom)
}

/// Object-safe view of any strong value, for code that handles many
/// strong types without knowing which.
pub trait StrongValue: Any + fmt::Debug + fmt::Display + Send + Sync {
    /// Metadata of the concrete type.
    fn type_descriptor(&self) -> TypeDescriptor;

    /// The validation capability, when the concrete type has one.
    fn as_validatable(&self) -> Option<&dyn Validatable>;

    /// Upcast for downcasting to the concrete type.
    fn as_any(&self) -> &dyn Any;

    /// Equality under the concrete type's semantics; `false` when `other`
    /// is a different strong type, whatever its value.
    fn dyn_eq(&self, other: &dyn StrongValue) -> bool;

    /// Ordering under the concrete type's semantics; `None` across types
    /// or for unordered values.
    fn dyn_cmp(&self, other: &dyn StrongValue) -> Option<Ordering>;

    /// Wire form as JSON.
    ///
    /// # Errors
    ///
    /// Returns the serializer error. Family wire forms are all JSON
    /// representable, so only hand-written `Serialize` impls can fail.
    fn to_json(&self) -> Result<serde_json::Value, serde_json::Error>;
}

impl<S> StrongValue for S
where
    S: StrongType + PartialEq + PartialOrd + fmt::Debug + fmt::Display + Serialize,
{
    fn type_descriptor(&self) -> TypeDescriptor {
        S::descriptor()
    }

    fn as_validatable(&self) -> Option<&dyn Validatable> {
        self.validation()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn dyn_eq(&self, other: &dyn StrongValue) -> bool {
        other.as_any().downcast_ref::<S>().is_some_and(|o| self == o)
    }

    fn dyn_cmp(&self, other: &dyn StrongValue) -> Option<Ordering> {
        other
            .as_any()
            .downcast_ref::<S>()
            .and_then(|o| self.partial_cmp(o))
    }

    fn to_json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}
