// Shroud - PII protection layer
// Copyright (c) 2026 Shroud Contributors
// Licensed under the MIT License

//! # Shroud - PII Protection Layer
//!
//! Shroud is the compliance core of a service-marketplace backend: it
//! reversibly encrypts selected personal-data fields at rest, and
//! irreversibly redacts personal data flowing through logs, error messages,
//! and audit trails, so a compromised store or log aggregator never exposes
//! decryptable personal data in plaintext.
//!
//! ## Architecture
//!
//! - [`cipher`] - AES-256-CBC field encryption with an injected process key
//! - [`masking`] - Category-specific masking functions and the ordered
//!   detection rule table
//! - [`redaction`] - Record redaction, free-text sanitization, and the
//!   persistence field codec
//! - [`logging`] - Structured logging and the log sanitization pipeline
//! - [`audit`] - Redaction audit trail with hashed values
//! - [`config`] - Configuration management
//! - [`domain`] - Core types, errors, and the `Result` alias
//! - [`engine`] - The [`ProtectionLayer`] facade wiring it all together
//!
//! ## Quick Start
//!
//! ```rust
//! use shroud::config::{DeploymentMode, ProtectionConfig};
//! use shroud::ProtectionLayer;
//! use serde_json::json;
//!
//! # fn main() -> shroud::domain::Result<()> {
//! let config = ProtectionConfig {
//!     mode: DeploymentMode::Development,
//!     ..Default::default()
//! };
//! let layer = ProtectionLayer::new(config)?;
//!
//! // Encrypt before persistence, decrypt after read
//! let encrypted = layer.cipher().encrypt("alice@example.com");
//! assert_eq!(layer.cipher().decrypt(&encrypted), "alice@example.com");
//!
//! // Redact anything bound for the logs
//! let record = json!({ "password": "hunter2", "email": "a.b@co.io" })
//!     .as_object()
//!     .unwrap()
//!     .clone();
//! let redacted = layer.redact_record(record)?;
//! assert!(!redacted.contains_key("password"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Concurrency
//!
//! Every operation is synchronous and stateless apart from the shared
//! read-only cipher key, so the layer can be called from any concurrency
//! model without adaptation.

pub mod audit;
pub mod cipher;
pub mod config;
pub mod domain;
pub mod engine;
pub mod logging;
pub mod masking;
pub mod redaction;

pub use domain::{PiiCategory, Result, ShroudError};
pub use engine::ProtectionLayer;
