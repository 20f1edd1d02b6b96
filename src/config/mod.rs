//! Configuration management
//!
//! Configuration comes from a TOML file (with `${VAR}` substitution), from
//! `SHROUD_*` environment variable overrides, or from the environment alone
//! via [`ProtectionConfig::from_env`]. Key material is held in
//! [`SecretString`] from the moment it enters the process.

pub mod loader;
pub mod schema;
pub mod secret;

pub use loader::load_config;
pub use schema::{AuditConfig, DeploymentMode, KeyConfig, LoggingConfig, ProtectionConfig};
pub use secret::{secret_string, SecretString, SecretValue};
