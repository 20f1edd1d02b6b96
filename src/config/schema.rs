//! Configuration schema for the protection layer

use super::secret::SecretString;
use crate::domain::errors::ShroudError;
use crate::domain::result::Result;
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Deployment mode
///
/// Production refuses to start without real key material; development may
/// fall back to a fixed insecure key (logged loudly).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeploymentMode {
    Production,
    Development,
}

impl Default for DeploymentMode {
    fn default() -> Self {
        // Failing loudly on a missing key is the safe default posture
        Self::Production
    }
}

/// Top-level protection layer configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProtectionConfig {
    /// Deployment mode
    #[serde(default)]
    pub mode: DeploymentMode,

    /// Cipher key configuration
    #[serde(default)]
    pub key: KeyConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Audit trail configuration
    #[serde(default)]
    pub audit: AuditConfig,
}

impl ProtectionConfig {
    /// Build a configuration from environment variables only
    ///
    /// Applies `SHROUD_*` overrides on top of defaults, then validates.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// In production mode, missing or malformed key material is fatal here,
    /// before any component is constructed.
    pub fn validate(&self) -> Result<()> {
        match &self.key.material {
            Some(material) => {
                let hex = material.expose_secret();
                if hex.len() != 64 || !hex.as_ref().bytes().all(|b| b.is_ascii_hexdigit()) {
                    return Err(ShroudError::Configuration(
                        "Cipher key material must be exactly 64 hex characters".to_string(),
                    ));
                }
            }
            None => {
                if self.mode == DeploymentMode::Production {
                    return Err(ShroudError::Configuration(
                        "Cipher key material is required in production mode \
                         (set SHROUD_CIPHER_KEY)"
                            .to_string(),
                    ));
                }
            }
        }

        self.logging.validate()?;
        self.audit.validate()?;

        Ok(())
    }

    /// Apply environment variable overrides (`SHROUD_*` prefix)
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("SHROUD_ENV") {
            self.mode = match val.to_lowercase().as_str() {
                "production" | "prod" => DeploymentMode::Production,
                "development" | "dev" => DeploymentMode::Development,
                _ => {
                    return Err(ShroudError::Configuration(format!(
                        "Invalid SHROUD_ENV: {val}"
                    )))
                }
            };
        }

        if let Ok(val) = std::env::var("SHROUD_CIPHER_KEY") {
            self.key.material = Some(super::secret::secret_string(val));
        }

        if let Ok(val) = std::env::var("SHROUD_LOG_LEVEL") {
            self.logging.level = val;
        }

        if let Ok(val) = std::env::var("SHROUD_AUDIT_ENABLED") {
            self.audit.enabled = val.parse().map_err(|_| {
                ShroudError::Configuration(format!("Invalid SHROUD_AUDIT_ENABLED: {val}"))
            })?;
        }

        if let Ok(val) = std::env::var("SHROUD_AUDIT_LOG_PATH") {
            self.audit.log_path = PathBuf::from(val);
        }

        Ok(())
    }
}

/// Cipher key configuration
///
/// Holds the raw 64-hex-character key material until it is turned into a
/// [`CipherKey`](crate::cipher::CipherKey) at startup. The material is
/// debug-redacted and zeroized on drop.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct KeyConfig {
    /// 64 hex characters (32 bytes) of key material
    #[serde(default)]
    pub material: Option<SecretString>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Enable local file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log file path
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy (daily, hourly)
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_local_path() -> String {
    "./logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

impl LoggingConfig {
    /// Validate logging configuration
    pub fn validate(&self) -> Result<()> {
        match self.level.to_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            other => {
                return Err(ShroudError::Configuration(format!(
                    "Invalid log level: {other}. Must be one of: trace, debug, info, warn, error"
                )))
            }
        }

        match self.local_rotation.as_str() {
            "daily" | "hourly" => Ok(()),
            other => Err(ShroudError::Configuration(format!(
                "Invalid log rotation: {other}. Must be one of: daily, hourly"
            ))),
        }
    }
}

/// Audit trail configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditConfig {
    /// Enable audit logging
    #[serde(default = "default_audit_enabled")]
    pub enabled: bool,

    /// Audit log file path
    #[serde(default = "default_audit_log_path")]
    pub log_path: PathBuf,

    /// Use JSON format for audit logs
    #[serde(default = "default_audit_json_format")]
    pub json_format: bool,
}

fn default_audit_enabled() -> bool {
    false
}

fn default_audit_log_path() -> PathBuf {
    PathBuf::from("./audit/redaction.log")
}

fn default_audit_json_format() -> bool {
    true
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            enabled: default_audit_enabled(),
            log_path: default_audit_log_path(),
            json_format: default_audit_json_format(),
        }
    }
}

impl AuditConfig {
    /// Validate audit configuration
    ///
    /// Pure check only; the audit logger creates its own log directory when
    /// it is constructed.
    pub fn validate(&self) -> Result<()> {
        if self.enabled && self.log_path.as_os_str().is_empty() {
            return Err(ShroudError::Configuration(
                "Audit log path must not be empty when auditing is enabled".to_string(),
            ));
        }
        Ok(())
    }
}
