//! Temporal families: UTC instants, offset instants, durations.
//!
//! Instants use ISO-8601 / RFC 3339 text. Durations use the constant
//! `[-][d.]hh:mm:ss[.fffffff]` form with 100-nanosecond tick precision.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, SecondsFormat, TimeDelta, TimeZone, Utc};

use super::{PrimitiveFamily, PrimitiveKind};

/// UTC instant family.
///
/// Parsing accepts RFC 3339 with any offset (converted to UTC), a naive
/// `YYYY-MM-DDTHH:MM:SS[.f]` date-time, or a bare `YYYY-MM-DD` date; naive
/// inputs are taken as UTC. Formatting always uses the `Z` suffix.
#[derive(Debug)]
pub enum StrongDateTime {}

impl PrimitiveFamily for StrongDateTime {
    type Value = DateTime<Utc>;
    const KIND: PrimitiveKind = PrimitiveKind::DateTime;

    fn parse(text: &str) -> Option<DateTime<Utc>> {
        let text = text.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
            return Some(dt.with_timezone(&Utc));
        }
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f") {
            return Some(Utc.from_utc_datetime(&naive));
        }
        let date = NaiveDate::parse_from_str(text, "%Y-%m-%d").ok()?;
        Some(Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0)?))
    }

    fn format(value: &DateTime<Utc>) -> String {
        value.to_rfc3339_opts(SecondsFormat::AutoSi, true)
    }
}

/// Offset instant family. The offset is kept; equality compares instants.
#[derive(Debug)]
pub enum StrongDateTimeOffset {}

impl PrimitiveFamily for StrongDateTimeOffset {
    type Value = DateTime<FixedOffset>;
    const KIND: PrimitiveKind = PrimitiveKind::DateTimeOffset;

    fn parse(text: &str) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(text.trim()).ok()
    }

    fn format(value: &DateTime<FixedOffset>) -> String {
        value.to_rfc3339_opts(SecondsFormat::AutoSi, false)
    }
}

/// Duration family.
///
/// Values are held at tick precision. Construction rounds sub-tick
/// nanoseconds to the nearest tick, halves away from zero, so a stored
/// span always formats to text that parses back to itself.
#[derive(Debug)]
pub enum StrongTimeSpan {}

const NANOS_PER_TICK: i64 = 100;
const TICK_DIGITS: usize = 7;
const SECONDS_PER_DAY: i64 = 86_400;

impl PrimitiveFamily for StrongTimeSpan {
    type Value = TimeDelta;
    const KIND: PrimitiveKind = PrimitiveKind::TimeSpan;

    fn parse(text: &str) -> Option<TimeDelta> {
        parse_time_span(text.trim())
    }

    fn format(value: &TimeDelta) -> String {
        format_time_span(value)
    }

    fn canonicalize(value: TimeDelta) -> TimeDelta {
        round_to_tick(value)
    }
}

fn round_to_tick(value: TimeDelta) -> TimeDelta {
    let negative = value < TimeDelta::zero();
    let magnitude = value.abs();
    let Some(whole) = TimeDelta::try_seconds(magnitude.num_seconds()) else {
        return value;
    };
    let nanos = i64::from(magnitude.subsec_nanos());
    let ticks = (nanos + NANOS_PER_TICK / 2) / NANOS_PER_TICK;
    // Rounding up at the range limit keeps the truncated value.
    let rounded = whole
        .checked_add(&TimeDelta::nanoseconds(ticks * NANOS_PER_TICK))
        .unwrap_or(whole);
    if negative {
        -rounded
    } else {
        rounded
    }
}

/// Accepted shapes: `d`, `hh:mm`, `hh:mm:ss`, `d.hh:mm[:ss]`, each with an
/// optional leading `-` and an optional `.fffffff` fraction after seconds.
fn parse_time_span(text: &str) -> Option<TimeDelta> {
    let (negative, body) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    if body.is_empty() {
        return None;
    }

    let magnitude = match body.find(':') {
        None => TimeDelta::try_days(parse_digits(body)?)?,
        Some(first_colon) => {
            let (days, clock) = match body[..first_colon].find('.') {
                Some(dot) => (parse_digits(&body[..dot])?, &body[dot + 1..]),
                None => (0, body),
            };
            let clock_span = parse_clock(clock)?;
            TimeDelta::try_days(days)?.checked_add(&clock_span)?
        }
    };

    Some(if negative { -magnitude } else { magnitude })
}

fn parse_clock(clock: &str) -> Option<TimeDelta> {
    let parts: Vec<&str> = clock.split(':').collect();
    let (hours, minutes, seconds_part) = match parts.as_slice() {
        [h, m] => (*h, *m, None),
        [h, m, s] => (*h, *m, Some(*s)),
        _ => return None,
    };

    let hours = parse_digits(hours).filter(|h| *h < 24)?;
    let minutes = parse_digits(minutes).filter(|m| *m < 60)?;
    let (seconds, nanos) = match seconds_part {
        None => (0, 0),
        Some(s) => {
            let (whole, fraction) = match s.split_once('.') {
                Some((whole, fraction)) => (whole, Some(fraction)),
                None => (s, None),
            };
            let seconds = parse_digits(whole).filter(|s| *s < 60)?;
            let nanos = match fraction {
                None => 0,
                Some(f) => parse_fraction(f)?,
            };
            (seconds, nanos)
        }
    };

    let total_seconds = hours * 3_600 + minutes * 60 + seconds;
    TimeDelta::try_seconds(total_seconds)?.checked_add(&TimeDelta::nanoseconds(nanos))
}

fn parse_digits(s: &str) -> Option<i64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// One to seven fraction digits, as nanoseconds.
fn parse_fraction(f: &str) -> Option<i64> {
    if f.is_empty() || f.len() > TICK_DIGITS {
        return None;
    }
    let padded = format!("{f:0<width$}", width = TICK_DIGITS);
    Some(parse_digits(&padded)? * NANOS_PER_TICK)
}

fn format_time_span(value: &TimeDelta) -> String {
    let value = round_to_tick(*value);
    let negative = value < TimeDelta::zero();
    let magnitude = value.abs();
    let total_seconds = magnitude.num_seconds();
    let ticks = i64::from(magnitude.subsec_nanos()) / NANOS_PER_TICK;

    let days = total_seconds / SECONDS_PER_DAY;
    let rem = total_seconds % SECONDS_PER_DAY;
    let (hours, minutes, seconds) = (rem / 3_600, (rem % 3_600) / 60, rem % 60);

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    if days > 0 {
        out.push_str(&format!("{days}."));
    }
    out.push_str(&format!("{hours:02}:{minutes:02}:{seconds:02}"));
    if ticks > 0 {
        out.push_str(&format!(".{ticks:07}"));
    }
    out
}
