//! Numeric families: `i32`, `i64`, decimal, double.
//!
//! All parsing is culture-invariant: `.` is the only decimal separator and
//! group separators are rejected. Surrounding whitespace is ignored.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serializer};

use super::{PrimitiveFamily, PrimitiveKind};

/// 32-bit integer family.
#[derive(Debug)]
pub enum StrongInt32 {}

impl PrimitiveFamily for StrongInt32 {
    type Value = i32;
    const KIND: PrimitiveKind = PrimitiveKind::Int32;

    fn parse(text: &str) -> Option<i32> {
        text.trim().parse().ok()
    }

    fn format(value: &i32) -> String {
        value.to_string()
    }

    fn serialize_value<S: Serializer>(value: &i32, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i32(*value)
    }

    fn deserialize_value<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i32, D::Error> {
        i32::deserialize(deserializer)
    }
}

/// 64-bit integer family.
#[derive(Debug)]
pub enum StrongInt64 {}

impl PrimitiveFamily for StrongInt64 {
    type Value = i64;
    const KIND: PrimitiveKind = PrimitiveKind::Int64;

    fn parse(text: &str) -> Option<i64> {
        text.trim().parse().ok()
    }

    fn format(value: &i64) -> String {
        value.to_string()
    }

    fn serialize_value<S: Serializer>(value: &i64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(*value)
    }

    fn deserialize_value<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
        i64::deserialize(deserializer)
    }
}

/// Fixed-point decimal family.
///
/// Serialized as a JSON string so no precision is lost in transit.
/// Deserialization also accepts JSON integers.
#[derive(Debug)]
pub enum StrongDecimal {}

#[derive(Deserialize)]
#[serde(untagged)]
enum DecimalRepr {
    Text(String),
    Integer(i64),
}

impl PrimitiveFamily for StrongDecimal {
    type Value = Decimal;
    const KIND: PrimitiveKind = PrimitiveKind::Decimal;

    fn parse(text: &str) -> Option<Decimal> {
        Decimal::from_str(text.trim()).ok()
    }

    fn format(value: &Decimal) -> String {
        value.to_string()
    }

    fn deserialize_value<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Decimal, D::Error> {
        match DecimalRepr::deserialize(deserializer)? {
            DecimalRepr::Integer(n) => Ok(Decimal::from(n)),
            DecimalRepr::Text(text) => Self::parse(&text)
                .ok_or_else(|| D::Error::custom(format_args!("invalid decimal value: {text:?}"))),
        }
    }
}

/// Double-precision family. Only partially ordered: `NaN` compares
/// unordered with everything, itself included.
///
/// Finite values travel as JSON numbers. JSON has no literal for `NaN` or
/// the infinities, so those travel as the strings `"NaN"`, `"Infinity"`,
/// and `"-Infinity"`. Deserialization accepts either shape.
#[derive(Debug)]
pub enum StrongDouble {}

#[derive(Deserialize)]
#[serde(untagged)]
enum DoubleRepr {
    Number(f64),
    Text(String),
}

impl PrimitiveFamily for StrongDouble {
    type Value = f64;
    const KIND: PrimitiveKind = PrimitiveKind::Double;

    fn parse(text: &str) -> Option<f64> {
        text.trim().parse().ok()
    }

    fn format(value: &f64) -> String {
        if value.is_infinite() {
            if value.is_sign_positive() {
                "Infinity".to_string()
            } else {
                "-Infinity".to_string()
            }
        } else {
            value.to_string()
        }
    }

    fn serialize_value<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_finite() {
            serializer.serialize_f64(*value)
        } else {
            serializer.serialize_str(&Self::format(value))
        }
    }

    fn deserialize_value<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        match DoubleRepr::deserialize(deserializer)? {
            DoubleRepr::Number(n) => Ok(n),
            DoubleRepr::Text(text) => Self::parse(&text)
                .ok_or_else(|| D::Error::custom(format_args!("invalid double value: {text:?}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int32_parse_is_invariant() {
        assert_eq!(StrongInt32::parse("10"), Some(10));
        assert_eq!(StrongInt32::parse(" -42 "), Some(-42));
        assert_eq!(StrongInt32::parse("+7"), Some(7));
        assert_eq!(StrongInt32::parse("1,000"), None);
        assert_eq!(StrongInt32::parse("2147483648"), None);
        assert_eq!(StrongInt32::parse("ten"), None);
    }

    #[test]
    fn int64_covers_full_range() {
        assert_eq!(StrongInt64::parse("9223372036854775807"), Some(i64::MAX));
        assert_eq!(StrongInt64::parse("-9223372036854775808"), Some(i64::MIN));
        assert_eq!(StrongInt64::format(&i64::MIN), "-9223372036854775808");
    }

    #[test]
    fn decimal_preserves_scale() {
        let d = StrongDecimal::parse("1.50").unwrap();
        assert_eq!(StrongDecimal::format(&d), "1.50");
        assert_eq!(d, StrongDecimal::parse("1.5").unwrap());
        assert_eq!(StrongDecimal::parse("1,5"), None);
    }

    #[test]
    fn decimal_wire_accepts_string_and_integer() {
        #[derive(Deserialize)]
        struct Wrapper(#[serde(deserialize_with = "StrongDecimal::deserialize_value")] Decimal);

        let Wrapper(a) = serde_json::from_str("\"12.340\"").unwrap();
        assert_eq!(a.to_string(), "12.340");
        let Wrapper(b) = serde_json::from_str("12").unwrap();
        assert_eq!(b, Decimal::from(12));
        assert!(serde_json::from_str::<Wrapper>("\"abc\"").is_err());
    }

    #[test]
    fn double_special_values() {
        assert_eq!(StrongDouble::format(&f64::INFINITY), "Infinity");
        assert_eq!(StrongDouble::format(&f64::NEG_INFINITY), "-Infinity");
        assert_eq!(StrongDouble::format(&f64::NAN), "NaN");
        assert_eq!(StrongDouble::parse("Infinity"), Some(f64::INFINITY));
        assert_eq!(StrongDouble::parse("-infinity"), Some(f64::NEG_INFINITY));
        assert!(StrongDouble::parse("NaN").unwrap().is_nan());
    }

    #[derive(serde::Serialize, Deserialize)]
    struct Reading(
        #[serde(
            serialize_with = "StrongDouble::serialize_value",
            deserialize_with = "StrongDouble::deserialize_value"
        )]
        f64,
    );

    #[test]
    fn double_wire_keeps_non_finite_values() {
        assert_eq!(serde_json::to_string(&Reading(f64::INFINITY)).unwrap(), "\"Infinity\"");
        assert_eq!(serde_json::to_string(&Reading(f64::NEG_INFINITY)).unwrap(), "\"-Infinity\"");
        assert_eq!(serde_json::to_string(&Reading(f64::NAN)).unwrap(), "\"NaN\"");
        assert_eq!(serde_json::to_string(&Reading(1.5)).unwrap(), "1.5");

        let Reading(up) = serde_json::from_str("\"Infinity\"").unwrap();
        assert_eq!(up, f64::INFINITY);
        let Reading(down) = serde_json::from_str("\"-Infinity\"").unwrap();
        assert_eq!(down, f64::NEG_INFINITY);
        let Reading(nan) = serde_json::from_str("\"NaN\"").unwrap();
        assert!(nan.is_nan());
        let Reading(plain) = serde_json::from_str("2").unwrap();
        assert_eq!(plain, 2.0);
    }

    #[test]
    fn double_wire_rejects_other_text() {
        assert!(serde_json::from_str::<Reading>("\"lots\"").is_err());
        assert!(serde_json::from_str::<Reading>("null").is_err());
    }

    #[test]
    fn double_shortest_roundtrip_text() {
        assert_eq!(StrongDouble::format(&0.1), "0.1");
        assert_eq!(StrongDouble::format(&2.0), "2");
        assert_eq!(StrongDouble::parse("2.5e3"), Some(2500.0));
        assert_eq!(StrongDouble::parse("2,5"), None);
    }
}
