//! # Code Types
//!
//! Short structured codes. The case-insensitive ones keep the text as
//! given; equality, ordering, and hashing fold letter case, so `usd` and
//! `USD` are the same currency while each still displays as entered.

use strongly_core::{strong_type, FormatRule};

// ---------------------------------------------------------------------------
// Currency
// ---------------------------------------------------------------------------

strong_type! {
    /// ISO 4217 alphabetic currency code, e.g. `USD`.
    pub struct CurrencyCode: StrongString, validated, ignore_case;
}

impl CurrencyCode {
    /// The code in upper case.
    pub fn to_upper(&self) -> String {
        self.value().to_ascii_uppercase()
    }
}

impl FormatRule for CurrencyCode {
    fn is_valid_value(value: &String) -> bool {
        value.len() == 3 && value.bytes().all(|b| b.is_ascii_alphabetic())
    }

    fn normalize(raw: String) -> String {
        raw.trim().to_string()
    }
}

// ---------------------------------------------------------------------------
// Locale
// ---------------------------------------------------------------------------

strong_type! {
    /// BCP 47 style locale tag: `language[-Script][-REGION]`, with `-` or
    /// `_` as separator, e.g. `en`, `en-US`, `zh_Hant_TW`.
    pub struct LocaleCode: StrongString, validated, ignore_case;
}

impl LocaleCode {
    /// The language subtag.
    pub fn language(&self) -> &str {
        self.value().split(['-', '_']).next().unwrap_or_default()
    }
}

impl FormatRule for LocaleCode {
    fn is_valid_value(value: &String) -> bool {
        let mut parts = value.split(['-', '_']);
        let language_ok = parts
            .next()
            .is_some_and(|l| (2..=3).contains(&l.len()) && l.bytes().all(|b| b.is_ascii_alphabetic()));
        if !language_ok {
            return false;
        }

        let rest: Vec<&str> = parts.collect();
        let (script, region) = match rest.as_slice() {
            [] => (None, None),
            [one] if one.len() == 4 => (Some(*one), None),
            [one] => (None, Some(*one)),
            [script, region] => (Some(*script), Some(*region)),
            _ => return false,
        };

        let script_ok = script.map_or(true, |s| s.len() == 4 && s.bytes().all(|b| b.is_ascii_alphabetic()));
        let region_ok = region.map_or(true, |r| {
            (r.len() == 2 && r.bytes().all(|b| b.is_ascii_alphabetic()))
                || (r.len() == 3 && r.bytes().all(|b| b.is_ascii_digit()))
        });
        script_ok && region_ok
    }

    fn normalize(raw: String) -> String {
        raw.trim().to_string()
    }
}

// ---------------------------------------------------------------------------
// MAC address
// ---------------------------------------------------------------------------

strong_type! {
    /// IEEE 802 MAC-48 address: six hex octets separated by `:` or `-`
    /// (one separator throughout).
    pub struct MacAddress: StrongString, validated, ignore_case;
}

impl MacAddress {
    /// The six octets.
    pub fn octets(&self) -> [u8; 6] {
        let mut out = [0u8; 6];
        for (slot, group) in out.iter_mut().zip(self.value().split([':', '-'])) {
            *slot = u8::from_str_radix(group, 16).unwrap_or_default();
        }
        out
    }
}

impl FormatRule for MacAddress {
    fn is_valid_value(value: &String) -> bool {
        let separator = match value.as_bytes().get(2) {
            Some(b':') => ':',
            Some(b'-') => '-',
            _ => return false,
        };
        let groups: Vec<&str> = value.split(separator).collect();
        groups.len() == 6
            && groups
                .iter()
                .all(|g| g.len() == 2 && g.bytes().all(|b| b.is_ascii_hexdigit()))
    }

    fn normalize(raw: String) -> String {
        raw.trim().to_string()
    }
}

// ---------------------------------------------------------------------------
// Stock keeping unit
// ---------------------------------------------------------------------------

const MAX_SKU_LEN: usize = 64;

strong_type! {
    /// Stock keeping unit: 1 to 64 ASCII letters, digits, `-` or `_`,
    /// starting with a letter or digit. Case-sensitive.
    pub struct Sku: StrongString, validated;
}

impl FormatRule for Sku {
    fn is_valid_value(value: &String) -> bool {
        let starts_alnum = value.bytes().next().is_some_and(|b| b.is_ascii_alphanumeric());
        starts_alnum
            && value.len() <= MAX_SKU_LEN
            && value
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
    }

    fn normalize(raw: String) -> String {
        raw.trim().to_string()
    }
}
