//! Free-text sanitization
//!
//! Scans unstructured text (log messages, error strings) with the shared
//! masking rule table and rewrites each match in place. The scan order is
//! the rule set's fixed order, so run-length-specific patterns (credit card)
//! fire before generic digit patterns (phone).

use crate::masking::MaskingRuleSet;
use std::sync::Arc;

/// Pattern-based sanitizer for free-form text
///
/// Idempotent: masked output (mostly `*` runs) no longer matches any
/// category pattern, so sanitizing twice yields the same string.
#[derive(Clone)]
pub struct TextSanitizer {
    rules: Arc<MaskingRuleSet>,
}

impl TextSanitizer {
    /// Create a sanitizer sharing the given masking rule set
    pub fn new(rules: Arc<MaskingRuleSet>) -> Self {
        Self { rules }
    }

    /// Mask every category match in the text
    pub fn sanitize(&self, text: &str) -> String {
        let mut output = text.to_string();

        for rule in self.rules.scan_rules() {
            output = rule
                .detector
                .replace_all(&output, |caps: &regex::Captures<'_>| (rule.masker)(&caps[0]))
                .into_owned();
        }

        output
    }
}
