//! Log record sanitization pipeline
//!
//! A [`LogRecord`] is constructed per log call, passed through sanitization
//! synchronously, then handed to the transport; it is never mutated after
//! emission. Metadata goes through the [`RecordRedactor`], message and error
//! strings through the [`TextSanitizer`], so the transport only ever sees
//! post-sanitization data.

use crate::redaction::{RecordRedactor, RedactionEvent, TextSanitizer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Log severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// A structured log record bound for the transport
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogRecord {
    /// Severity
    pub level: LogLevel,
    /// Free-form message
    pub message: String,
    /// Structured metadata
    #[serde(default)]
    pub metadata: Map<String, Value>,
    /// Optional nested error string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl LogRecord {
    /// Create a record with no metadata
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            metadata: Map::new(),
            error: None,
        }
    }

    /// Attach structured metadata
    pub fn with_metadata(mut self, metadata: Map<String, Value>) -> Self {
        self.metadata = metadata;
        self
    }

    /// Attach a nested error string
    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }
}

/// Composes record redaction and text sanitization over log records
#[derive(Clone)]
pub struct LogSanitizer {
    redactor: RecordRedactor,
    sanitizer: TextSanitizer,
}

impl LogSanitizer {
    /// Create a pipeline from its two halves
    pub fn new(redactor: RecordRedactor, sanitizer: TextSanitizer) -> Self {
        Self {
            redactor,
            sanitizer,
        }
    }

    /// Sanitize a record before it reaches the transport
    pub fn sanitize(&self, record: LogRecord) -> LogRecord {
        self.sanitize_recorded(record).0
    }

    /// Sanitize a record, returning metadata redaction events for auditing
    pub fn sanitize_recorded(&self, record: LogRecord) -> (LogRecord, Vec<RedactionEvent>) {
        let (metadata, events) = self.redactor.redact_recorded(record.metadata);

        let sanitized = LogRecord {
            level: record.level,
            message: self.sanitizer.sanitize(&record.message),
            metadata,
            error: record.error.map(|e| self.sanitizer.sanitize(&e)),
        };

        (sanitized, events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::masking::MaskingRuleSet;
    use serde_json::json;
    use std::sync::Arc;

    fn pipeline() -> LogSanitizer {
        let rules = Arc::new(MaskingRuleSet::new().unwrap());
        LogSanitizer::new(
            RecordRedactor::new(Arc::clone(&rules)),
            TextSanitizer::new(rules),
        )
    }

    #[test]
    fn test_message_sanitized_metadata_redacted() {
        let metadata = json!({
            "password": "Secr3t!",
            "email": "a.b@co.io"
        })
        .as_object()
        .unwrap()
        .clone();

        let record = LogRecord::new(LogLevel::Warn, "login failed for john.doe@example.com")
            .with_metadata(metadata);

        let sanitized = pipeline().sanitize(record);

        assert_eq!(sanitized.message, "login failed for j*******@example.com");
        assert!(!sanitized.metadata.contains_key("password"));
        assert_eq!(sanitized.metadata["email"], json!("a***@co.io"));
    }

    #[test]
    fn test_error_string_sanitized() {
        let record = LogRecord::new(LogLevel::Error, "request failed")
            .with_error("timeout contacting 10.1.2.3 for card 4532015112830366");

        let sanitized = pipeline().sanitize(record);

        let error = sanitized.error.unwrap();
        assert!(error.contains("************0366"));
        assert!(!error.contains("4532015112830366"));
    }

    #[test]
    fn test_level_preserved() {
        let record = LogRecord::new(LogLevel::Debug, "plain");
        let sanitized = pipeline().sanitize(record);
        assert_eq!(sanitized.level, LogLevel::Debug);
        assert_eq!(sanitized.message, "plain");
    }

    #[test]
    fn test_recorded_events_surface_metadata_redactions() {
        let metadata = json!({ "password": "x" }).as_object().unwrap().clone();
        let record = LogRecord::new(LogLevel::Info, "ok").with_metadata(metadata);

        let (sanitized, events) = pipeline().sanitize_recorded(record);

        assert!(sanitized.metadata.is_empty());
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].key_path, "password");
    }
}
