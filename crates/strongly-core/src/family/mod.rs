//! # Primitive Families — Typed Specializations
//!
//! A primitive family fixes the wrapped type `T` of a strong type and
//! supplies the conventions that go with it: how text parses into `T`,
//! the canonical string form, and the wire form used by serde.
//!
//! | Family | Value | Canonical text |
//! |--------|-------|----------------|
//! | [`StrongString`] | `String` | verbatim |
//! | [`StrongGuid`] | `Uuid` | lowercase hyphenated |
//! | [`StrongInt32`] | `i32` | invariant decimal |
//! | [`StrongInt64`] | `i64` | invariant decimal |
//! | [`StrongDecimal`] | `Decimal` | scale-preserving decimal |
//! | [`StrongDouble`] | `f64` | shortest round-trip, `Infinity`, `NaN` |
//! | [`StrongBoolean`] | `bool` | `true` / `false` |
//! | [`StrongChar`] | `char` | the character |
//! | [`StrongDateTime`] | `DateTime<Utc>` | RFC 3339 with `Z` |
//! | [`StrongDateTimeOffset`] | `DateTime<FixedOffset>` | RFC 3339 with offset |
//! | [`StrongTimeSpan`] | `TimeDelta` | `[-][d.]hh:mm:ss[.fffffff]` |
//!
//! Families are uninhabited marker types; they exist only at the type level.
//! Each family also has a capability trait (e.g. [`GuidStrongType`]) that
//! every strong type of that family implements automatically, so generic
//! adapters can bound on "any Guid-backed strong type".

mod numeric;
mod temporal;
mod text;

use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ParseError;
use crate::strong::StrongType;

pub use numeric::{StrongDecimal, StrongDouble, StrongInt32, StrongInt64};
pub use temporal::{StrongDateTime, StrongDateTimeOffset, StrongTimeSpan};
pub use text::{StrongBoolean, StrongChar, StrongGuid, StrongString};

/// Parse and format conventions for one primitive type.
pub trait PrimitiveFamily: Send + Sync + 'static {
    /// The wrapped primitive.
    type Value: Clone + fmt::Debug + PartialEq + PartialOrd + Send + Sync + 'static;

    /// Runtime tag for introspection.
    const KIND: PrimitiveKind;

    /// Parse text in the family's canonical grammar. Malformed input is
    /// `None`, never a panic.
    fn parse(text: &str) -> Option<Self::Value>;

    /// Canonical string form.
    fn format(value: &Self::Value) -> String;

    /// Snap a value onto the family's representable grid. Every strong
    /// value passes through this on construction, so the canonical text
    /// of a stored value always parses back to the same value.
    fn canonicalize(value: Self::Value) -> Self::Value {
        value
    }

    /// Wire form. Defaults to the canonical string.
    fn serialize_value<S: Serializer>(value: &Self::Value, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&Self::format(value))
    }

    /// Inverse of [`PrimitiveFamily::serialize_value`].
    fn deserialize_value<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Self::Value, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text).ok_or_else(|| {
            D::Error::custom(format_args!("invalid {} value: {text:?}", Self::KIND))
        })
    }
}

/// The primitive kinds a strong type can wrap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimitiveKind {
    /// UTF-8 text.
    String,
    /// RFC 4122 UUID.
    Guid,
    /// 32-bit signed integer.
    Int32,
    /// 64-bit signed integer.
    Int64,
    /// 96-bit fixed-point decimal.
    Decimal,
    /// IEEE 754 double.
    Double,
    /// Boolean.
    Boolean,
    /// Single Unicode scalar value.
    Char,
    /// UTC instant.
    DateTime,
    /// Instant with its original UTC offset.
    DateTimeOffset,
    /// Signed duration.
    TimeSpan,
}

impl PrimitiveKind {
    /// Every kind in declaration order.
    pub fn all() -> &'static [PrimitiveKind] {
        &[
            Self::String,
            Self::Guid,
            Self::Int32,
            Self::Int64,
            Self::Decimal,
            Self::Double,
            Self::Boolean,
            Self::Char,
            Self::DateTime,
            Self::DateTimeOffset,
            Self::TimeSpan,
        ]
    }

    /// The snake_case identifier, matching the serde form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Guid => "guid",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::Decimal => "decimal",
            Self::Double => "double",
            Self::Boolean => "boolean",
            Self::Char => "char",
            Self::DateTime => "date_time",
            Self::DateTimeOffset => "date_time_offset",
            Self::TimeSpan => "time_span",
        }
    }

    /// Whether values of this kind have a total order.
    pub fn is_totally_ordered(&self) -> bool {
        !matches!(self, Self::Double)
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PrimitiveKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ParseError {
                type_name: "PrimitiveKind",
                kind: "primitive_kind",
                input: s.to_string(),
            })
    }
}

macro_rules! family_capability {
    ($(#[$meta:meta])* $capability:ident => $family:ty) => {
        $(#[$meta])*
        pub trait $capability: StrongType<Family = $family> {}

        impl<S: StrongType<Family = $family>> $capability for S {}
    };
}

family_capability!(
    /// Marker for strong types wrapping text.
    StringStrongType => StrongString
);
family_capability!(
    /// Marker for strong types wrapping a UUID.
    GuidStrongType => StrongGuid
);
family_capability!(
    /// Marker for strong types wrapping an `i32`.
    Int32StrongType => StrongInt32
);
family_capability!(
    /// Marker for strong types wrapping an `i64`.
    Int64StrongType => StrongInt64
);
family_capability!(
    /// Marker for strong types wrapping a decimal.
    DecimalStrongType => StrongDecimal
);
family_capability!(
    /// Marker for strong types wrapping an `f64`.
    DoubleStrongType => StrongDouble
);
family_capability!(
    /// Marker for strong types wrapping a `bool`.
    BooleanStrongType => StrongBoolean
);
family_capability!(
    /// Marker for strong types wrapping a `char`.
    CharStrongType => StrongChar
);
family_capability!(
    /// Marker for strong types wrapping a UTC instant.
    DateTimeStrongType => StrongDateTime
);
family_capability!(
    /// Marker for strong types wrapping an offset instant.
    DateTimeOffsetStrongType => StrongDateTimeOffset
);
family_capability!(
    /// Marker for strong types wrapping a duration.
    TimeSpanStrongType => StrongTimeSpan
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_kinds_unique() {
        let mut seen = std::collections::HashSet::new();
        for k in PrimitiveKind::all() {
            assert!(seen.insert(k), "duplicate kind: {k}");
        }
        assert_eq!(seen.len(), 11);
    }

    #[test]
    fn as_str_roundtrip() {
        for kind in PrimitiveKind::all() {
            let parsed: PrimitiveKind = kind.as_str().parse().unwrap();
            assert_eq!(*kind, parsed);
        }
    }

    #[test]
    fn from_str_rejects_unknown() {
        assert!("uuid".parse::<PrimitiveKind>().is_err());
        assert!("GUID".parse::<PrimitiveKind>().is_err());
        assert!("".parse::<PrimitiveKind>().is_err());
    }

    #[test]
    fn serde_form_matches_as_str() {
        for kind in PrimitiveKind::all() {
            let json = serde_json::to_string(kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
        }
    }

    #[test]
    fn family_kinds_line_up() {
        assert_eq!(StrongString::KIND, PrimitiveKind::String);
        assert_eq!(StrongGuid::KIND, PrimitiveKind::Guid);
        assert_eq!(StrongInt32::KIND, PrimitiveKind::Int32);
        assert_eq!(StrongInt64::KIND, PrimitiveKind::Int64);
        assert_eq!(StrongDecimal::KIND, PrimitiveKind::Decimal);
        assert_eq!(StrongDouble::KIND, PrimitiveKind::Double);
        assert_eq!(StrongBoolean::KIND, PrimitiveKind::Boolean);
        assert_eq!(StrongChar::KIND, PrimitiveKind::Char);
        assert_eq!(StrongDateTime::KIND, PrimitiveKind::DateTime);
        assert_eq!(StrongDateTimeOffset::KIND, PrimitiveKind::DateTimeOffset);
        assert_eq!(StrongTimeSpan::KIND, PrimitiveKind::TimeSpan);
    }

    #[test]
    fn only_double_is_partially_ordered() {
        for kind in PrimitiveKind::all() {
            assert_eq!(kind.is_totally_ordered(), *kind != PrimitiveKind::Double);
        }
    }
}
