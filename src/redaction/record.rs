//! Structured record redaction
//!
//! Applies the compliance policy to a string-keyed record before it reaches
//! a log transport: a drop pass deletes deny-listed credential keys outright,
//! then a mask pass rewrites known PII keys in place. Drop runs strictly
//! before mask, so a key that is both deny-listed and PII-shaped is dropped,
//! not masked.

use crate::domain::PiiCategory;
use crate::masking::MaskingRuleSet;
use serde_json::{Map, Value};
use std::sync::Arc;

/// Maximum nesting depth traversed when redacting records.
/// Deeper values pass through untouched.
pub const MAX_DEPTH: usize = 16;

/// What the redactor did to a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RedactionAction {
    /// Key removed entirely (deny-listed)
    Dropped,
    /// Value rewritten by the category masker
    Masked,
}

/// A single redaction performed on a record
///
/// Carries the original value so the audit trail can hash it; the plaintext
/// never leaves the process through this type.
#[derive(Debug, Clone)]
pub struct RedactionEvent {
    /// Dot-separated path to the field
    pub key_path: String,
    /// PII category that triggered the redaction
    pub category: PiiCategory,
    /// Drop or mask
    pub action: RedactionAction,
    /// Original value, for audit hashing only
    pub original_value: String,
}

/// Record redactor
///
/// Deny-list and PII-key tables are code-defined: they encode a compliance
/// policy, not a per-deployment preference.
#[derive(Clone)]
pub struct RecordRedactor {
    rules: Arc<MaskingRuleSet>,
}

impl RecordRedactor {
    /// Create a redactor sharing the given masking rule set
    pub fn new(rules: Arc<MaskingRuleSet>) -> Self {
        Self { rules }
    }

    /// Redact a record, discarding event details
    pub fn redact(&self, record: Map<String, Value>) -> Map<String, Value> {
        self.redact_recorded(record).0
    }

    /// Redact a record, returning the redaction events for auditing
    pub fn redact_recorded(
        &self,
        record: Map<String, Value>,
    ) -> (Map<String, Value>, Vec<RedactionEvent>) {
        let mut events = Vec::new();
        let redacted = self.redact_map(record, "", 0, &mut events);
        (redacted, events)
    }

    fn redact_map(
        &self,
        map: Map<String, Value>,
        prefix: &str,
        depth: usize,
        events: &mut Vec<RedactionEvent>,
    ) -> Map<String, Value> {
        let mut out = Map::with_capacity(map.len());

        for (key, value) in map {
            let key_path = if prefix.is_empty() {
                key.clone()
            } else {
                format!("{prefix}.{key}")
            };

            if let Some(category) = deny_category(&key) {
                events.push(RedactionEvent {
                    key_path,
                    category,
                    action: RedactionAction::Dropped,
                    original_value: value_for_audit(&value),
                });
                continue;
            }

            let value = match value {
                Value::String(s) => match mask_category(&key) {
                    Some(category) => {
                        let masked = self.rules.mask(category, &s);
                        events.push(RedactionEvent {
                            key_path,
                            category,
                            action: RedactionAction::Masked,
                            original_value: s,
                        });
                        Value::String(masked)
                    }
                    None => Value::String(s),
                },
                other => self.redact_value(other, &key_path, depth, events),
            };

            out.insert(key, value);
        }

        out
    }

    /// Recurse into container values uniformly, so an object is redacted no
    /// matter how many array layers it is buried under
    fn redact_value(
        &self,
        value: Value,
        key_path: &str,
        depth: usize,
        events: &mut Vec<RedactionEvent>,
    ) -> Value {
        match value {
            Value::Object(inner) if depth + 1 < MAX_DEPTH => {
                Value::Object(self.redact_map(inner, key_path, depth + 1, events))
            }
            Value::Array(items) if depth + 1 < MAX_DEPTH => Value::Array(
                items
                    .into_iter()
                    .enumerate()
                    .map(|(idx, item)| {
                        self.redact_value(item, &format!("{key_path}[{idx}]"), depth + 1, events)
                    })
                    .collect(),
            ),
            other => other,
        }
    }
}

/// Deny-list lookup: keys whose values are never logged in any form
///
/// Exact entries are case-sensitive; the `*token` rule is a case-insensitive
/// suffix check since `accessToken`/`access_token`/`AccessToken` all carry
/// the same compliance weight.
fn deny_category(key: &str) -> Option<PiiCategory> {
    match key {
        "password" | "passwordConfirmation" | "password_confirmation" | "currentPassword"
        | "current_password" | "newPassword" | "new_password" => Some(PiiCategory::Password),
        "secret" | "apiKey" | "api_key" | "privateKey" | "private_key" => {
            Some(PiiCategory::Secret)
        }
        "cardNumber" | "card_number" | "cvv" | "cvc" => Some(PiiCategory::CreditCard),
        "sin" | "ssn" => Some(PiiCategory::GovernmentId),
        _ if key.to_ascii_lowercase().ends_with("token") => Some(PiiCategory::Token),
        _ => None,
    }
}

/// PII-key table for the mask pass
fn mask_category(key: &str) -> Option<PiiCategory> {
    match key {
        "email" => Some(PiiCategory::Email),
        "phone" | "phoneNumber" | "phone_number" | "mobile" => Some(PiiCategory::Phone),
        "ip" | "ipAddress" | "ip_address" => Some(PiiCategory::IpAddress),
        _ => None,
    }
}

fn value_for_audit(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
