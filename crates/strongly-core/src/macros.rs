//! # Strong Type Declaration
//!
//! [`strong_type!`](crate::strong_type) declares a concrete strong type:
//!
//! ```
//! use strongly_core::{strong_type, Construct, TryParse};
//!
//! strong_type! {
//!     /// Number of seats on a booking.
//!     pub struct SeatCount: StrongInt32;
//! }
//!
//! let seats = SeatCount::from_value(4);
//! assert_eq!(*seats.value(), 4);
//! assert_eq!(SeatCount::try_parse(" 12 ").map(|s| s.into_value()), Some(12));
//! assert!(SeatCount::try_parse("twelve").is_none());
//! ```
//!
//! Grammar: `$vis struct Name: Family [, validated] [, ignore_case];`
//! where `Family` is one of the markers in [`family`](crate::family).
//!
//! - `validated`: the type implements [`FormatRule`](crate::FormatRule)
//!   (written by hand next to the declaration). No `Construct` or `From`
//!   impl is generated; parsing and deserialization validate, and the
//!   public factory refuses to build the type.
//! - `ignore_case`: equality, ordering, and hashing fold letter case.
//!   Textual families only.
//!
//! `StrongDouble` types get `PartialEq`/`PartialOrd` only. Every other
//! family gets `Eq`, `Ord`, and `Hash`.

/// Declare a strong type. See the [module docs](crate::macros).
#[macro_export]
macro_rules! strong_type {
    // -- option lookup ------------------------------------------------------
    (@has $needle:ident []) => { false };
    (@has validated [validated $($rest:ident)*]) => { true };
    (@has ignore_case [ignore_case $($rest:ident)*]) => { true };
    (@has $needle:ident [$head:ident $($rest:ident)*]) => {
        $crate::strong_type!(@has $needle [$($rest)*])
    };

    // -- validation capability hook inside `impl StrongType` ---------------
    (@validation []) => {};
    (@validation [validated $($rest:ident)*]) => {
        fn validation(&self) -> ::core::option::Option<&dyn $crate::Validatable> {
            ::core::option::Option::Some(self)
        }
    };
    (@validation [$head:ident $($rest:ident)*]) => {
        $crate::strong_type!(@validation [$($rest)*]);
    };

    // -- concrete primitive per family ----------------------------------------
    // Trait impl headers need the concrete type: a projection through
    // `PrimitiveFamily::Value` is opaque to coherence in downstream crates.
    (@prim StrongString) => { ::std::string::String };
    (@prim StrongGuid) => { $crate::uuid::Uuid };
    (@prim StrongInt32) => { i32 };
    (@prim StrongInt64) => { i64 };
    (@prim StrongDecimal) => { $crate::rust_decimal::Decimal };
    (@prim StrongDouble) => { f64 };
    (@prim StrongBoolean) => { bool };
    (@prim StrongChar) => { char };
    (@prim StrongDateTime) => { $crate::chrono::DateTime<$crate::chrono::Utc> };
    (@prim StrongDateTimeOffset) => { $crate::chrono::DateTime<$crate::chrono::FixedOffset> };
    (@prim StrongTimeSpan) => { $crate::chrono::TimeDelta };

    // -- construction surface ------------------------------------------------
    (@construct $name:ident $family:ident [validated $($rest:ident)*]) => {
        impl $crate::TryParse for $name {
            fn try_parse(text: &str) -> ::core::option::Option<Self> {
                let value = <$crate::family::$family as $crate::PrimitiveFamily>::parse(text)?;
                <Self as $crate::FormatRule>::try_create(value)
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                $crate::deserialize_validated(deserializer)
            }
        }
    };
    (@construct $name:ident $family:ident [$head:ident $($rest:ident)*]) => {
        $crate::strong_type!(@construct $name $family [$($rest)*]);
    };
    (@construct $name:ident $family:ident []) => {
        impl $crate::Construct for $name {}

        impl ::core::convert::From<$crate::strong_type!(@prim $family)> for $name {
            fn from(value: $crate::strong_type!(@prim $family)) -> Self {
                <Self as $crate::Construct>::from_value(value)
            }
        }

        impl $crate::TryParse for $name {
            fn try_parse(text: &str) -> ::core::option::Option<Self> {
                <$crate::family::$family as $crate::PrimitiveFamily>::parse(text)
                    .map(<Self as $crate::Construct>::from_value)
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                $crate::deserialize_constructed(deserializer)
            }
        }
    };

    // -- comparison semantics ------------------------------------------------
    (@compare $name:ident StrongDouble [$($option:ident)*]) => {
        impl ::core::cmp::PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.0 == other.0
            }
        }

        impl ::core::cmp::PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> ::core::option::Option<::core::cmp::Ordering> {
                self.0.partial_cmp(&other.0)
            }
        }
    };
    (@compare $name:ident $family:ident [ignore_case $($rest:ident)*]) => {
        impl ::core::cmp::PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.0.eq_ignore_case(&other.0)
            }
        }

        impl ::core::cmp::Eq for $name {}

        impl ::core::cmp::PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> ::core::option::Option<::core::cmp::Ordering> {
                ::core::option::Option::Some(::core::cmp::Ord::cmp(self, other))
            }
        }

        impl ::core::cmp::Ord for $name {
            fn cmp(&self, other: &Self) -> ::core::cmp::Ordering {
                self.0.cmp_ignore_case(&other.0)
            }
        }

        impl ::core::hash::Hash for $name {
            fn hash<H: ::core::hash::Hasher>(&self, state: &mut H) {
                self.0.hash_ignore_case(state);
            }
        }
    };
    (@compare $name:ident $family:ident [$head:ident $($rest:ident)*]) => {
        $crate::strong_type!(@compare $name $family [$($rest)*]);
    };
    (@compare $name:ident $family:ident []) => {
        impl ::core::cmp::PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.0 == other.0
            }
        }

        impl ::core::cmp::Eq for $name {}

        impl ::core::cmp::PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> ::core::option::Option<::core::cmp::Ordering> {
                ::core::option::Option::Some(::core::cmp::Ord::cmp(self, other))
            }
        }

        impl ::core::cmp::Ord for $name {
            fn cmp(&self, other: &Self) -> ::core::cmp::Ordering {
                ::core::cmp::Ord::cmp(&self.0, &other.0)
            }
        }

        impl ::core::hash::Hash for $name {
            fn hash<H: ::core::hash::Hasher>(&self, state: &mut H) {
                ::core::hash::Hash::hash(&self.0, state);
            }
        }
    };

    // -- entry point -----------------------------------------------------------
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident : $family:ident $(, $option:ident)* ;
    ) => {
        $(#[$meta])*
        #[derive(Clone)]
        $vis struct $name(
            $crate::ValueHolder<<$crate::family::$family as $crate::PrimitiveFamily>::Value, $name>,
        );

        #[allow(dead_code)]
        impl $name {
            /// Borrow the wrapped primitive.
            pub fn value(&self) -> &<$crate::family::$family as $crate::PrimitiveFamily>::Value {
                self.0.value()
            }

            /// Unwrap into the primitive.
            pub fn into_value(self) -> <$crate::family::$family as $crate::PrimitiveFamily>::Value {
                self.0.into_value()
            }

            fn wrap(value: <$crate::family::$family as $crate::PrimitiveFamily>::Value) -> Self {
                Self($crate::ValueHolder::new(
                    <$crate::family::$family as $crate::PrimitiveFamily>::canonicalize(value),
                ))
            }
        }

        impl $crate::StrongType for $name {
            type Family = $crate::family::$family;
            const NAME: &'static str = ::core::stringify!($name);
            const VALIDATED: bool = $crate::strong_type!(@has validated [$($option)*]);
            const CASE_INSENSITIVE: bool = $crate::strong_type!(@has ignore_case [$($option)*]);

            fn value(&self) -> &<$crate::family::$family as $crate::PrimitiveFamily>::Value {
                self.0.value()
            }

            fn into_value(self) -> <$crate::family::$family as $crate::PrimitiveFamily>::Value {
                self.0.into_value()
            }

            fn declare_constructors(table: &mut $crate::ConstructorTable<Self>) {
                table.accept(Self::wrap);
            }

            $crate::strong_type!(@validation [$($option)*]);
        }

        $crate::strong_type!(@construct $name $family [$($option)*]);
        $crate::strong_type!(@compare $name $family [$($option)*]);

        impl ::core::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.debug_tuple(::core::stringify!($name))
                    .field(self.0.value())
                    .finish()
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&<$crate::family::$family as $crate::PrimitiveFamily>::format(
                    self.0.value(),
                ))
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = $crate::ParseError;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                <Self as $crate::TryParse>::parse_str(s)
            }
        }

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                <$crate::family::$family as $crate::PrimitiveFamily>::serialize_value(
                    self.0.value(),
                    serializer,
                )
            }
        }
    };
}
