//! PII category enumeration

use serde::{Deserialize, Serialize};

/// PII category
///
/// Each category maps to exactly one masking strategy and, for free-text
/// scanning, at most one detection pattern. [`Password`](Self::Password) and
/// [`Secret`](Self::Secret) are drop-only: their values are deleted from
/// records rather than masked, because even a masked credential has no
/// legitimate use downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PiiCategory {
    /// Email addresses
    Email,
    /// Telephone numbers
    Phone,
    /// Payment card numbers
    CreditCard,
    /// Government-issued identifiers (9-digit numeric form, SSN/SIN style)
    GovernmentId,
    /// IP addresses (v4 dotted-quad or v6-style colon-separated)
    IpAddress,
    /// Bearer/JWT-shaped opaque tokens
    Token,
    /// Passwords in any form (drop-only)
    Password,
    /// API keys, private keys, and other secrets (drop-only)
    Secret,
}

impl PiiCategory {
    /// Get human-readable label for the category
    pub fn label(&self) -> &'static str {
        match self {
            Self::Email => "EMAIL",
            Self::Phone => "PHONE",
            Self::CreditCard => "CREDIT_CARD",
            Self::GovernmentId => "GOVERNMENT_ID",
            Self::IpAddress => "IP_ADDRESS",
            Self::Token => "TOKEN",
            Self::Password => "PASSWORD",
            Self::Secret => "SECRET",
        }
    }

    /// Marker string returned when a value cannot be safely masked
    ///
    /// A malformed value must never round-trip through a masker unchanged,
    /// so each category has an explicit invalid marker.
    pub fn invalid_marker(&self) -> &'static str {
        match self {
            Self::Email => "[INVALID_EMAIL]",
            Self::Phone => "[INVALID_PHONE]",
            Self::CreditCard => "[INVALID_CREDIT_CARD]",
            Self::GovernmentId => "[INVALID_GOVERNMENT_ID]",
            Self::IpAddress => "[INVALID_IP_ADDRESS]",
            Self::Token => "[INVALID_TOKEN]",
            Self::Password => "[PASSWORD]",
            Self::Secret => "[SECRET]",
        }
    }

    /// Check if values of this category are dropped from records
    /// instead of masked
    pub fn is_drop_only(&self) -> bool {
        matches!(self, Self::Password | Self::Secret)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(PiiCategory::Email.label(), "EMAIL");
        assert_eq!(PiiCategory::CreditCard.label(), "CREDIT_CARD");
        assert_eq!(PiiCategory::GovernmentId.label(), "GOVERNMENT_ID");
    }

    #[test]
    fn test_drop_only_categories() {
        assert!(PiiCategory::Password.is_drop_only());
        assert!(PiiCategory::Secret.is_drop_only());
        assert!(!PiiCategory::Email.is_drop_only());
        assert!(!PiiCategory::Token.is_drop_only());
    }

    #[test]
    fn test_serde_screaming_snake_case() {
        let json = serde_json::to_string(&PiiCategory::IpAddress).unwrap();
        assert_eq!(json, "\"IP_ADDRESS\"");

        let parsed: PiiCategory = serde_json::from_str("\"CREDIT_CARD\"").unwrap();
        assert_eq!(parsed, PiiCategory::CreditCard);
    }
}
