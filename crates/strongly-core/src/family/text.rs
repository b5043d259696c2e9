//! Textual and identifier families: string, GUID, boolean, char.

use serde::{Deserialize, Deserializer, Serializer};
use uuid::Uuid;

use super::{PrimitiveFamily, PrimitiveKind};

/// Text family. Parsing accepts any input verbatim.
#[derive(Debug)]
pub enum StrongString {}

impl PrimitiveFamily for StrongString {
    type Value = String;
    const KIND: PrimitiveKind = PrimitiveKind::String;

    fn parse(text: &str) -> Option<String> {
        Some(text.to_owned())
    }

    fn format(value: &String) -> String {
        value.clone()
    }

    fn deserialize_value<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        String::deserialize(deserializer)
    }
}

/// UUID family. Accepts hyphenated, simple, braced, and URN forms;
/// formats as lowercase hyphenated.
#[derive(Debug)]
pub enum StrongGuid {}

impl PrimitiveFamily for StrongGuid {
    type Value = Uuid;
    const KIND: PrimitiveKind = PrimitiveKind::Guid;

    fn parse(text: &str) -> Option<Uuid> {
        Uuid::parse_str(text.trim()).ok()
    }

    fn format(value: &Uuid) -> String {
        value.hyphenated().to_string()
    }
}

/// Boolean family. `true`/`false` in any letter case.
#[derive(Debug)]
pub enum StrongBoolean {}

impl PrimitiveFamily for StrongBoolean {
    type Value = bool;
    const KIND: PrimitiveKind = PrimitiveKind::Boolean;

    fn parse(text: &str) -> Option<bool> {
        let text = text.trim();
        if text.eq_ignore_ascii_case("true") {
            Some(true)
        } else if text.eq_ignore_ascii_case("false") {
            Some(false)
        } else {
            None
        }
    }

    fn format(value: &bool) -> String {
        value.to_string()
    }

    fn serialize_value<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bool(*value)
    }

    fn deserialize_value<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        bool::deserialize(deserializer)
    }
}

/// Single-character family. Input must be exactly one Unicode scalar;
/// whitespace is a character like any other.
#[derive(Debug)]
pub enum StrongChar {}

impl PrimitiveFamily for StrongChar {
    type Value = char;
    const KIND: PrimitiveKind = PrimitiveKind::Char;

    fn parse(text: &str) -> Option<char> {
        let mut chars = text.chars();
        let c = chars.next()?;
        chars.next().is_none().then_some(c)
    }

    fn format(value: &char) -> String {
        value.to_string()
    }

    fn serialize_value<S: Serializer>(value: &char, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_char(*value)
    }

    fn deserialize_value<'de, D: Deserializer<'de>>(deserializer: D) -> Result<char, D::Error> {
        char::deserialize(deserializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_parse_is_verbatim() {
        assert_eq!(StrongString::parse("  a b ").as_deref(), Some("  a b "));
        assert_eq!(StrongString::parse("").as_deref(), Some(""));
    }

    #[test]
    fn guid_accepts_common_forms() {
        let expected = Uuid::parse_str("67e55044-10b1-426f-9247-bb680e5fe0c8").unwrap();
        for text in [
            "67e55044-10b1-426f-9247-bb680e5fe0c8",
            "67E55044-10B1-426F-9247-BB680E5FE0C8",
            "67e5504410b1426f9247bb680e5fe0c8",
            "{67e55044-10b1-426f-9247-bb680e5fe0c8}",
            "urn:uuid:67e55044-10b1-426f-9247-bb680e5fe0c8",
            "  67e55044-10b1-426f-9247-bb680e5fe0c8\n",
        ] {
            assert_eq!(StrongGuid::parse(text), Some(expected), "input {text:?}");
        }
    }

    #[test]
    fn guid_rejects_malformed() {
        assert_eq!(StrongGuid::parse("not-a-guid"), None);
        assert_eq!(StrongGuid::parse(""), None);
        assert_eq!(StrongGuid::parse("67e55044-10b1-426f-9247"), None);
    }

    #[test]
    fn guid_formats_lowercase_hyphenated() {
        let id = Uuid::parse_str("67E55044-10B1-426F-9247-BB680E5FE0C8").unwrap();
        assert_eq!(StrongGuid::format(&id), "67e55044-10b1-426f-9247-bb680e5fe0c8");
        assert_eq!(StrongGuid::format(&Uuid::nil()), "00000000-0000-0000-0000-000000000000");
    }

    #[test]
    fn boolean_parse_ignores_case() {
        assert_eq!(StrongBoolean::parse("TRUE"), Some(true));
        assert_eq!(StrongBoolean::parse(" false "), Some(false));
        assert_eq!(StrongBoolean::parse("yes"), None);
        assert_eq!(StrongBoolean::parse("1"), None);
    }

    #[test]
    fn char_requires_exactly_one() {
        assert_eq!(StrongChar::parse("x"), Some('x'));
        assert_eq!(StrongChar::parse(" "), Some(' '));
        assert_eq!(StrongChar::parse("é"), Some('é'));
        assert_eq!(StrongChar::parse(""), None);
        assert_eq!(StrongChar::parse("xy"), None);
    }
}
