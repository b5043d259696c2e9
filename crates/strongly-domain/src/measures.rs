//! # Measures and Flags

use rust_decimal::Decimal;
use strongly_core::{strong_type, Construct};

strong_type! {
    /// A count of items.
    pub struct Quantity: StrongInt32;
}

impl Quantity {
    /// Sum, or `None` on overflow.
    pub fn checked_add(&self, other: &Self) -> Option<Self> {
        self.value().checked_add(*other.value()).map(Self::from_value)
    }
}

strong_type! {
    /// A monetary amount. Scale is preserved: `10.50` stays `10.50`.
    pub struct Amount: StrongDecimal;
}

impl Amount {
    /// Round half away from zero to `dp` decimal places.
    pub fn round_to(&self, dp: u32) -> Self {
        Self::from_value(self.value().round_dp_with_strategy(
            dp,
            rust_decimal::RoundingStrategy::MidpointAwayFromZero,
        ))
    }

    /// Zero with no scale.
    pub fn zero() -> Self {
        Self::from_value(Decimal::ZERO)
    }
}

strong_type! {
    /// A percentage on the 0-100 scale, not clamped.
    pub struct Percentage: StrongDouble;
}

impl Percentage {
    /// The value as a fraction of one.
    pub fn as_fraction(&self) -> f64 {
        self.value() / 100.0
    }
}

strong_type! {
    /// A consent flag.
    pub struct OptIn: StrongBoolean;
}

strong_type! {
    /// A single-letter grade.
    pub struct Grade: StrongChar;
}
