//! Protection layer facade
//!
//! [`ProtectionLayer`] is constructed once at process start from a validated
//! [`ProtectionConfig`]: it loads the cipher key, compiles the masking rule
//! table, and wires the cipher, redactor, sanitizer, codec, and optional
//! audit logger together. All shared state is immutable after construction,
//! so the layer can be cloned into or shared across any number of threads
//! without synchronization.

use crate::audit::AuditLogger;
use crate::cipher::{CipherKey, FieldCipher};
use crate::config::ProtectionConfig;
use crate::domain::result::Result;
use crate::logging::{LogRecord, LogSanitizer};
use crate::masking::MaskingRuleSet;
use crate::redaction::{PiiFieldCodec, RecordRedactor, TextSanitizer};
use serde_json::{Map, Value};
use std::sync::Arc;

/// PII protection layer
pub struct ProtectionLayer {
    cipher: FieldCipher,
    codec: PiiFieldCodec,
    redactor: RecordRedactor,
    sanitizer: TextSanitizer,
    log_sanitizer: LogSanitizer,
    audit: Option<AuditLogger>,
}

impl ProtectionLayer {
    /// Build the layer from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if configuration validation fails, the cipher key is
    /// missing in production mode, a masking pattern fails to compile, or
    /// the audit log location cannot be prepared.
    pub fn new(config: ProtectionConfig) -> Result<Self> {
        config.validate()?;

        let key = Arc::new(CipherKey::load(&config.key, config.mode)?);
        let rules = Arc::new(MaskingRuleSet::new()?);

        let cipher = FieldCipher::new(key);
        let codec = PiiFieldCodec::new(cipher.clone());
        let redactor = RecordRedactor::new(Arc::clone(&rules));
        let sanitizer = TextSanitizer::new(rules);
        let log_sanitizer = LogSanitizer::new(redactor.clone(), sanitizer.clone());

        let audit = if config.audit.enabled {
            Some(AuditLogger::new(&config.audit)?)
        } else {
            None
        };

        Ok(Self {
            cipher,
            codec,
            redactor,
            sanitizer,
            log_sanitizer,
            audit,
        })
    }

    /// Field cipher for single values
    pub fn cipher(&self) -> &FieldCipher {
        &self.cipher
    }

    /// Codec for persistence-bound records
    pub fn codec(&self) -> &PiiFieldCodec {
        &self.codec
    }

    /// Redactor for structured records
    pub fn redactor(&self) -> &RecordRedactor {
        &self.redactor
    }

    /// Sanitizer for free-form text
    pub fn sanitizer(&self) -> &TextSanitizer {
        &self.sanitizer
    }

    /// Redact a structured record, feeding the audit trail when enabled
    pub fn redact_record(&self, record: Map<String, Value>) -> Result<Map<String, Value>> {
        let (redacted, events) = self.redactor.redact_recorded(record);
        if let Some(audit) = &self.audit {
            audit.log_redaction("record_redaction", &events)?;
        }
        Ok(redacted)
    }

    /// Sanitize a log record, feeding the audit trail when enabled
    pub fn sanitize_log(&self, record: LogRecord) -> Result<LogRecord> {
        let (sanitized, events) = self.log_sanitizer.sanitize_recorded(record);
        if let Some(audit) = &self.audit {
            audit.log_redaction("log_record", &events)?;
        }
        Ok(sanitized)
    }
}
