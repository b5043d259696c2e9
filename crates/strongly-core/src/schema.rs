//! # Introspectable Metadata
//!
//! Schema and documentation generators ask a strong type what it wraps
//! and which conventions it follows, instead of reading source.
//! [`TypeDescriptor`] answers that; [`TypeDescriptor::json_schema`]
//! renders the answer as a JSON Schema fragment.

use serde::Serialize;
use serde_json::{json, Value};

use crate::family::{PrimitiveFamily, PrimitiveKind};
use crate::strong::{StrongType, ValueOf};

/// Metadata describing one strong type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TypeDescriptor {
    /// Declared type name.
    pub name: &'static str,
    /// Primitive family.
    pub kind: PrimitiveKind,
    /// Rust type name of the wrapped primitive.
    pub primitive: &'static str,
    /// Whether a format rule applies.
    pub validated: bool,
    /// Whether equality ignores letter case.
    pub case_insensitive: bool,
}

impl TypeDescriptor {
    /// Describe `S`.
    pub fn of<S: StrongType>() -> Self {
        Self {
            name: S::NAME,
            kind: <S::Family as PrimitiveFamily>::KIND,
            primitive: std::any::type_name::<ValueOf<S>>(),
            validated: S::VALIDATED,
            case_insensitive: S::CASE_INSENSITIVE,
        }
    }

    /// JSON Schema fragment for the wire form.
    pub fn json_schema(&self) -> Value {
        let mut schema = match self.kind {
            PrimitiveKind::String => json!({ "type": "string" }),
            PrimitiveKind::Guid => json!({ "type": "string", "format": "uuid" }),
            PrimitiveKind::Int32 => json!({ "type": "integer", "format": "int32" }),
            PrimitiveKind::Int64 => json!({ "type": "integer", "format": "int64" }),
            PrimitiveKind::Decimal => json!({
                "type": "string",
                "format": "decimal",
                "pattern": r"^[+-]?\d+(\.\d+)?$",
            }),
            PrimitiveKind::Double => json!({
                "oneOf": [
                    { "type": "number", "format": "double" },
                    { "type": "string", "enum": ["NaN", "Infinity", "-Infinity"] },
                ],
            }),
            PrimitiveKind::Boolean => json!({ "type": "boolean" }),
            PrimitiveKind::Char => json!({ "type": "string", "minLength": 1, "maxLength": 1 }),
            PrimitiveKind::DateTime | PrimitiveKind::DateTimeOffset => {
                json!({ "type": "string", "format": "date-time" })
            }
            PrimitiveKind::TimeSpan => json!({
                "type": "string",
                "pattern": r"^-?(\d+\.)?\d{2}:\d{2}:\d{2}(\.\d{7})?$",
            }),
        };

        if let Value::Object(map) = &mut schema {
            map.insert("x-strong-type".to_string(), json!(self.name));
            map.insert("x-primitive".to_string(), json!(self.kind.as_str()));
            if self.case_insensitive {
                map.insert("x-case-insensitive".to_string(), json!(true));
            }
        }
        schema
    }
}
