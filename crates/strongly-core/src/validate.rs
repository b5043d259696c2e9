//! # Validation Capability
//!
//! A strong type opts into format validation by implementing
//! [`FormatRule`] and declaring itself `validated` in
//! [`strong_type!`](crate::strong_type). Such types are built only through
//! [`FormatRule::try_create`] (or parsing and deserialization, which route
//! through it), never through an unchecked `from_value`.
//!
//! [`Validatable`] is the object-safe half of the capability. Middleware
//! discovers it on any [`StrongValue`](crate::StrongValue) through
//! `as_validatable()`, without knowing the concrete type.

use serde::de::Error as _;
use serde::Deserializer;

use crate::error::ValidationError;
use crate::factory::InstanceFactory;
use crate::family::PrimitiveFamily;
use crate::strong::{StrongType, ValueOf};

/// Object-safe format check.
pub trait Validatable {
    /// Whether the wrapped value satisfies the type's format rule.
    fn is_valid_format(&self) -> bool;
}

/// A strong type's format rule.
pub trait FormatRule: StrongType {
    /// Whether `value` is acceptable. Called after [`FormatRule::normalize`].
    fn is_valid_value(value: &ValueOf<Self>) -> bool;

    /// Canonicalize raw input before validation, e.g. trimming.
    fn normalize(raw: ValueOf<Self>) -> ValueOf<Self> {
        raw
    }

    /// Normalize, validate, construct.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidFormat`] carrying the normalized
    /// value when the rule rejects it.
    ///
    /// # Panics
    ///
    /// Panics when the type declares no constructor for its own primitive.
    fn validate(raw: ValueOf<Self>) -> Result<Self, ValidationError> {
        let value = Self::normalize(raw);
        if !Self::is_valid_value(&value) {
            return Err(ValidationError::InvalidFormat {
                type_name: Self::NAME,
                value: <Self::Family as PrimitiveFamily>::format(&value),
            });
        }
        match InstanceFactory::global().construct_unchecked::<Self, ValueOf<Self>>(value) {
            Ok(instance) => Ok(instance),
            Err(err) => panic!("{err}"),
        }
    }

    /// Normalize, validate, construct; `None` when the rule rejects.
    fn try_create(raw: ValueOf<Self>) -> Option<Self> {
        Self::validate(raw).ok()
    }
}

/// Deserialize a validated type: the family's wire form, then
/// [`FormatRule::validate`].
///
/// # Errors
///
/// Returns the wire-form error or the [`ValidationError`] text.
pub fn deserialize_validated<'de, S, D>(deserializer: D) -> Result<S, D::Error>
where
    S: FormatRule,
    D: Deserializer<'de>,
{
    let value = <S::Family as PrimitiveFamily>::deserialize_value(deserializer)?;
    S::validate(value).map_err(D::Error::custom)
}

impl<S: FormatRule> Validatable for S {
    fn is_valid_format(&self) -> bool {
        S::is_valid_value(self.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::family::StrongString;
    use crate::strong::{StrongValue, TryParse};
    use crate::strong_type;

    strong_type! {
        /// Lowercase ASCII slug.
        pub struct Slug: StrongString, validated;
    }

    impl FormatRule for Slug {
        fn is_valid_value(value: &String) -> bool {
            !value.is_empty()
                && value
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        }

        fn normalize(raw: String) -> String {
            raw.trim().to_string()
        }
    }

    #[test]
    fn try_create_accepts_valid_after_normalizing() {
        let slug = Slug::try_create("  hello-world ".to_string()).unwrap();
        assert_eq!(slug.value(), "hello-world");
        assert!(slug.is_valid_format());
    }

    #[test]
    fn try_create_rejects_invalid() {
        assert!(Slug::try_create("Hello World".to_string()).is_none());
        assert!(Slug::try_create("   ".to_string()).is_none());
    }

    #[test]
    fn validate_reports_normalized_value() {
        let err = Slug::validate(" Bad ".to_string()).unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidFormat {
                type_name: "Slug",
                value: "Bad".to_string(),
            }
        );
    }

    #[test]
    fn parsing_goes_through_the_rule() {
        assert!(Slug::try_parse("ok-1").is_some());
        assert!(Slug::try_parse("NOT OK").is_none());
    }

    #[test]
    fn capability_is_discoverable_through_dyn() {
        let slug: Box<dyn StrongValue> = Box::new(Slug::try_create("a".to_string()).unwrap());
        let capability = slug.as_validatable().expect("validated type exposes capability");
        assert!(capability.is_valid_format());
        assert!(slug.type_descriptor().validated);
    }

    #[test]
    fn deserialization_enforces_the_rule() {
        let ok: Slug = serde_json::from_str("\" fine \"").unwrap();
        assert_eq!(ok.value(), "fine");
        let err = serde_json::from_str::<Slug>("\"Not Fine\"").unwrap_err();
        assert!(err.to_string().contains("invalid Slug"));
    }
}
