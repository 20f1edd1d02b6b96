//! Category-specific masking functions
//!
//! One deterministic, pure function per PII category. Maskers are
//! deliberately infallible: malformed input yields the category's invalid
//! marker, never the raw value and never an error, so a masking call can
//! never become a point of information leakage or service failure.

use crate::domain::PiiCategory;

/// Mask an email address, keeping the first character of the local part
/// and the domain verbatim
///
/// The local part is replaced by a run of `*` at least 3 long
/// (`max(local_len - 1, 3)`), so `j.doe@x.com` becomes `j***@x.com`.
pub fn mask_email(value: &str) -> String {
    let marker = PiiCategory::Email.invalid_marker().to_string();

    let Some((local, domain)) = value.split_once('@') else {
        return marker;
    };
    if local.is_empty() || domain.is_empty() {
        return marker;
    }

    let mut chars = local.chars();
    let first = match chars.next() {
        Some(c) => c,
        None => return marker,
    };
    let run = local.chars().count().saturating_sub(1).max(3);

    format!("{first}{}@{domain}", "*".repeat(run))
}

/// Mask a phone number, keeping only the last 4 digits
///
/// All non-digits are stripped; fewer than 4 digits are masked fully.
pub fn mask_phone(value: &str) -> String {
    mask_digits_keep_last4(value, PiiCategory::Phone)
}

/// Mask a payment card number, keeping only the last 4 digits
pub fn mask_card(value: &str) -> String {
    mask_digits_keep_last4(value, PiiCategory::CreditCard)
}

/// Mask a 9-digit government identifier, revealing only the last 3 digits
///
/// The input must be exactly 9 ASCII digits with no separators. A
/// separator-formatted or wrong-length value is not safely maskable and
/// yields the invalid marker instead of a partial mask.
pub fn mask_government_id(value: &str) -> String {
    if value.len() == 9 && value.bytes().all(|b| b.is_ascii_digit()) {
        format!("***-***-{}", &value[6..])
    } else {
        PiiCategory::GovernmentId.invalid_marker().to_string()
    }
}

/// Mask an IP address
///
/// Dotted-quad addresses keep all but the last octet; colon-separated
/// (v6-style) addresses keep all but the last segment. Anything else
/// yields the invalid marker.
pub fn mask_ip(value: &str) -> String {
    let marker = PiiCategory::IpAddress.invalid_marker().to_string();

    if value.is_empty() {
        return marker;
    }

    if value.contains('.') {
        let parts: Vec<&str> = value.split('.').collect();
        let valid = parts.len() == 4
            && parts
                .iter()
                .all(|p| !p.is_empty() && p.len() <= 3 && p.bytes().all(|b| b.is_ascii_digit()));
        if valid {
            return format!("{}.{}.{}.***", parts[0], parts[1], parts[2]);
        }
        return marker;
    }

    if value.contains(':') {
        let parts: Vec<&str> = value.split(':').collect();
        // Empty segments are allowed for "::" compression
        let valid = parts.len() >= 2
            && parts
                .iter()
                .all(|p| p.len() <= 4 && p.bytes().all(|b| b.is_ascii_hexdigit()));
        if valid {
            let mut masked = parts[..parts.len() - 1].join(":");
            masked.push_str(":***");
            return masked;
        }
        return marker;
    }

    marker
}

/// Mask a bearer/token-style string
///
/// Reveals only the first 3 characters when the token is at least 10
/// characters long; shorter tokens are masked fully.
pub fn mask_token(value: &str) -> String {
    if value.is_empty() {
        return PiiCategory::Token.invalid_marker().to_string();
    }

    let len = value.chars().count();
    if len >= 10 {
        let head: String = value.chars().take(3).collect();
        format!("{head}{}", "*".repeat(len - 3))
    } else {
        "*".repeat(len)
    }
}

/// Mask a value according to its category
///
/// Drop-only categories (`Password`, `Secret`) never flow through record
/// masking; when masked directly they collapse to their category token.
pub fn mask_value(category: PiiCategory, value: &str) -> String {
    match category {
        PiiCategory::Email => mask_email(value),
        PiiCategory::Phone => mask_phone(value),
        PiiCategory::CreditCard => mask_card(value),
        PiiCategory::GovernmentId => mask_government_id(value),
        PiiCategory::IpAddress => mask_ip(value),
        PiiCategory::Token => mask_token(value),
        PiiCategory::Password | PiiCategory::Secret => category.invalid_marker().to_string(),
    }
}

fn mask_digits_keep_last4(value: &str, category: PiiCategory) -> String {
    let digits: Vec<char> = value.chars().filter(|c| c.is_ascii_digit()).collect();

    if digits.is_empty() {
        return category.invalid_marker().to_string();
    }
    if digits.len() < 4 {
        return "*".repeat(digits.len());
    }

    let keep: String = digits[digits.len() - 4..].iter().collect();
    format!("{}{keep}", "*".repeat(digits.len() - 4))
}
