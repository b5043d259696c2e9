//! # Contact Types

use strongly_core::{strong_type, FormatRule};

const MAX_EMAIL_LEN: usize = 254;
const MAX_LOCAL_LEN: usize = 64;

strong_type! {
    /// An email address. Surrounding whitespace is trimmed; the local part
    /// is kept verbatim.
    pub struct EmailAddress: StrongString, validated;
}

impl EmailAddress {
    /// The part before `@`.
    pub fn local_part(&self) -> &str {
        self.split().0
    }

    /// The part after `@`.
    pub fn domain(&self) -> &str {
        self.split().1
    }

    fn split(&self) -> (&str, &str) {
        self.value().split_once('@').unwrap_or((self.value(), ""))
    }
}

impl FormatRule for EmailAddress {
    fn is_valid_value(value: &String) -> bool {
        if value.len() > MAX_EMAIL_LEN || value.chars().any(char::is_whitespace) {
            return false;
        }
        let Some((local, domain)) = value.split_once('@') else {
            return false;
        };
        if local.is_empty() || local.len() > MAX_LOCAL_LEN || domain.contains('@') {
            return false;
        }
        let labels: Vec<&str> = domain.split('.').collect();
        labels.len() >= 2
            && labels.iter().all(|label| {
                !label.is_empty()
                    && !label.starts_with('-')
                    && !label.ends_with('-')
                    && label.chars().all(|c| c.is_alphanumeric() || c == '-')
            })
    }

    fn normalize(raw: String) -> String {
        raw.trim().to_string()
    }
}
