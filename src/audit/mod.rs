//! Audit trail for redaction operations
//!
//! Records what was dropped or masked, where, and a SHA-256 hash of the
//! original value. Plaintext PII never reaches the audit file.

pub mod logger;

pub use logger::AuditLogger;
