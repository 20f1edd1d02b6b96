//! Domain error types
//!
//! All errors are domain-specific and don't expose third-party types.
//! Error messages must never contain key material or plaintext PII.

use thiserror::Error;

/// Main Shroud error type
///
/// This is the primary error type used throughout the library.
/// It wraps specific error categories and provides context for error handling.
#[derive(Debug, Error)]
pub enum ShroudError {
    /// Configuration-related errors (including missing/malformed cipher key)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Cipher key loading or validation errors
    #[error("Key error: {0}")]
    Key(String),

    /// Masking rule compilation errors
    #[error("Masking rule error: {0}")]
    MaskingRule(String),

    /// Audit trail errors
    #[error("Audit error: {0}")]
    Audit(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for ShroudError {
    fn from(err: std::io::Error) -> Self {
        ShroudError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ShroudError {
    fn from(err: serde_json::Error) -> Self {
        ShroudError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for ShroudError {
    fn from(err: toml::de::Error) -> Self {
        ShroudError::Configuration(format!("TOML parse error: {err}"))
    }
}

impl From<regex::Error> for ShroudError {
    fn from(err: regex::Error) -> Self {
        ShroudError::MaskingRule(err.to_string())
    }
}
