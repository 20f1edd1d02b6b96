//! Audit logger for redaction operations

use crate::config::AuditConfig;
use crate::domain::errors::ShroudError;
use crate::domain::result::Result;
use crate::redaction::{RedactionAction, RedactionEvent};
use chrono::Utc;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

/// Audit log entry
#[derive(Debug, Serialize)]
struct AuditLogEntry {
    timestamp: String,
    operation: String,
    events_count: usize,
    events: Vec<AuditEvent>,
}

/// Audit event entry (with hashed PII)
#[derive(Debug, Serialize)]
struct AuditEvent {
    category: String,
    key_path: String,
    action: RedactionAction,
    /// SHA-256 hash of the original value (plaintext PII is never written).
    /// Absent for drop-only categories: an unsalted hash of a low-entropy
    /// credential is still guessable offline.
    #[serde(skip_serializing_if = "Option::is_none")]
    value_hash: Option<String>,
}

/// Audit logger for redaction operations
pub struct AuditLogger {
    log_path: PathBuf,
    json_format: bool,
    enabled: bool,
}

impl AuditLogger {
    /// Create a new audit logger from configuration
    pub fn new(config: &AuditConfig) -> Result<Self> {
        if config.enabled {
            if let Some(parent) = config.log_path.parent() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    ShroudError::Audit(format!(
                        "Failed to create audit log directory {}: {e}",
                        parent.display()
                    ))
                })?;
            }
        }

        Ok(Self {
            log_path: config.log_path.clone(),
            json_format: config.json_format,
            enabled: config.enabled,
        })
    }

    /// Log the redaction events of one record
    pub fn log_redaction(&self, operation: &str, events: &[RedactionEvent]) -> Result<()> {
        if !self.enabled || events.is_empty() {
            return Ok(());
        }

        let entry = AuditLogEntry {
            timestamp: Utc::now().to_rfc3339(),
            operation: operation.to_string(),
            events_count: events.len(),
            events: events.iter().map(Self::create_audit_event).collect(),
        };

        self.write_entry(&entry)
    }

    fn create_audit_event(event: &RedactionEvent) -> AuditEvent {
        let value_hash = if event.category.is_drop_only() {
            None
        } else {
            Some(hash_pii_value(&event.original_value))
        };

        AuditEvent {
            category: event.category.label().to_string(),
            key_path: event.key_path.clone(),
            action: event.action,
            value_hash,
        }
    }

    fn write_entry(&self, entry: &AuditLogEntry) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| {
                ShroudError::Audit(format!(
                    "Failed to open audit log {}: {e}",
                    self.log_path.display()
                ))
            })?;

        if self.json_format {
            let json_line = serde_json::to_string(entry)
                .map_err(|e| ShroudError::Audit(format!("Failed to serialize audit entry: {e}")))?;
            writeln!(file, "{json_line}")
                .map_err(|e| ShroudError::Audit(format!("Failed to write audit entry: {e}")))?;
        } else {
            writeln!(
                file,
                "[{}] Operation: {} | Events: {}",
                entry.timestamp, entry.operation, entry.events_count
            )
            .map_err(|e| ShroudError::Audit(format!("Failed to write audit entry: {e}")))?;
        }

        Ok(())
    }
}

/// Hash a PII value using SHA-256
fn hash_pii_value(value: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    let result = hasher.finalize();
    format!("{result:x}")
}
