//! Category-specific PII masking
//!
//! This module provides the pure masking functions ([`rules`]) and the single
//! ordered `{category, detector, masker}` table ([`MaskingRuleSet`]) that both
//! record redaction and free-text sanitization iterate. Keeping one table is
//! what guarantees the two paths mask the same category identically.

pub mod patterns;
pub mod rules;

pub use patterns::{MaskingRule, MaskingRuleSet};
