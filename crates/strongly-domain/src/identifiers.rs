//! # Identifiers
//!
//! UUID-backed identifiers are always valid by construction. Two of them
//! wrapping the same UUID are still different values of different types.

use strongly_core::{strong_type, Construct};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// UUID-based identifiers
// ---------------------------------------------------------------------------

strong_type! {
    /// A user account.
    pub struct UserId: StrongGuid;
}

impl UserId {
    /// A new random identifier.
    pub fn new() -> Self {
        Self::from_value(Uuid::new_v4())
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

strong_type! {
    /// A tenant owning users and data.
    pub struct TenantId: StrongGuid;
}

impl TenantId {
    /// A new random identifier.
    pub fn new() -> Self {
        Self::from_value(Uuid::new_v4())
    }
}

impl Default for TenantId {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Sequence numbers
// ---------------------------------------------------------------------------

strong_type! {
    /// Monotonic position in an ordered stream.
    pub struct SequenceNumber: StrongInt64;
}

impl SequenceNumber {
    /// The following position, or `None` at `i64::MAX`.
    pub fn next(&self) -> Option<Self> {
        self.value().checked_add(1).map(Self::from_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strongly_core::{StrongType, StrongValue, TryParse};

    #[test]
    fn random_ids_differ() {
        assert_ne!(UserId::new(), UserId::new());
        assert_ne!(TenantId::default(), TenantId::default());
    }

    #[test]
    fn same_uuid_different_types_do_not_compare() {
        let g = Uuid::new_v4();
        let user = UserId::from_value(g);
        let tenant = TenantId::from_value(g);
        assert_eq!(user.value(), tenant.value());
        assert!(!user.dyn_eq(&tenant));
    }

    #[test]
    fn guid_parse_accepts_common_shapes() {
        let canonical = "67e55044-10b1-426f-9247-bb680e5fe0c8";
        for text in [
            canonical,
            "67E55044-10B1-426F-9247-BB680E5FE0C8",
            "67e5504410b1426f9247bb680e5fe0c8",
            "{67e55044-10b1-426f-9247-bb680e5fe0c8}",
            "  67e55044-10b1-426f-9247-bb680e5fe0c8  ",
        ] {
            let id = UserId::try_parse(text).unwrap_or_else(|| panic!("rejected {text:?}"));
            assert_eq!(id.to_string(), canonical);
        }
        assert!(UserId::try_parse("not-a-guid").is_none());
    }

    #[test]
    fn guid_json_is_a_string() {
        let id = UserId::from_value(Uuid::nil());
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"00000000-0000-0000-0000-000000000000\"");
        let back: UserId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn sequence_next_saturates() {
        assert_eq!(SequenceNumber::from(41).next(), Some(SequenceNumber::from(42)));
        assert_eq!(SequenceNumber::from(i64::MAX).next(), None);
    }

    #[test]
    fn sequence_orders_numerically() {
        let mut seq = vec![
            SequenceNumber::from(10),
            SequenceNumber::from(-3),
            SequenceNumber::from(7),
        ];
        seq.sort();
        let values: Vec<i64> = seq.into_iter().map(SequenceNumber::into_value).collect();
        assert_eq!(values, vec![-3, 7, 10]);
        assert_eq!(SequenceNumber::NAME, "SequenceNumber");
    }
}
