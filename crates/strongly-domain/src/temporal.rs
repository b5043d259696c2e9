//! # Temporal Types
//!
//! Instants render as RFC 3339 and durations in the constant
//! `[-][d.]hh:mm:ss[.fffffff]` form, whatever shape they were parsed from.

use chrono::{DateTime, TimeDelta, Utc};
use strongly_core::{strong_type, Construct};

strong_type! {
    /// When a record was created, in UTC.
    pub struct CreatedAt: StrongDateTime;
}

impl CreatedAt {
    /// The current instant.
    pub fn now() -> Self {
        Self::from_value(Utc::now())
    }
}

strong_type! {
    /// A scheduled instant that keeps the offset it was given in.
    pub struct ScheduledAt: StrongDateTimeOffset;
}

impl ScheduledAt {
    /// The same instant in UTC.
    pub fn to_utc(&self) -> DateTime<Utc> {
        self.value().with_timezone(&Utc)
    }
}

strong_type! {
    /// How long to wait before giving up.
    pub struct Timeout: StrongTimeSpan;
}

impl Timeout {
    /// As a std duration; `None` when negative.
    pub fn to_std(&self) -> Option<std::time::Duration> {
        self.value().to_std().ok()
    }

    /// A timeout of `secs` seconds.
    pub fn from_secs(secs: i64) -> Option<Self> {
        TimeDelta::try_seconds(secs).map(Self::from_value)
    }
}
