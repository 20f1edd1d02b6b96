//! Process-wide cipher key
//!
//! The key is constructed once at startup and passed by reference into every
//! component that needs it; leaf functions never read ambient environment
//! state. Key bytes are zeroized on drop and never appear in Debug output or
//! error messages.

use crate::config::schema::{DeploymentMode, KeyConfig};
use crate::domain::errors::ShroudError;
use crate::domain::result::Result;
use secrecy::ExposeSecret;
use zeroize::Zeroize;

/// Key length in bytes (AES-256)
pub const KEY_LEN: usize = 32;

/// Fixed development-only key. Anything encrypted with it must be treated
/// as plaintext.
const DEV_KEY_HEX: &str = "4f3a6c1e9b2d7085c4e1f8a30d6b592e7c18f0a45b3d9c62e8507f1a4b6d3e90";

/// 32-byte process-wide cipher key
pub struct CipherKey([u8; KEY_LEN]);

impl CipherKey {
    /// Load the key from configuration
    ///
    /// Missing key material is fatal in production mode. In development mode
    /// the fixed insecure key is used instead, with a mandatory warning log.
    pub fn load(config: &KeyConfig, mode: DeploymentMode) -> Result<Self> {
        match &config.material {
            Some(material) => Self::from_hex(material.expose_secret().as_ref()),
            None => match mode {
                DeploymentMode::Production => Err(ShroudError::Key(
                    "cipher key material is required in production mode".to_string(),
                )),
                DeploymentMode::Development => {
                    tracing::warn!(
                        "No cipher key configured; falling back to the fixed development key. \
                         Values encrypted with it are NOT protected."
                    );
                    Self::from_hex(DEV_KEY_HEX)
                }
            },
        }
    }

    /// Construct a key from 64 hex characters
    pub fn from_hex(material: &str) -> Result<Self> {
        let mut bytes = hex::decode(material)
            .map_err(|_| ShroudError::Key("key material is not valid hex".to_string()))?;

        if bytes.len() != KEY_LEN {
            bytes.zeroize();
            return Err(ShroudError::Key(format!(
                "key material must be {KEY_LEN} bytes ({} provided)",
                material.len() / 2
            )));
        }

        let mut key = [0u8; KEY_LEN];
        key.copy_from_slice(&bytes);
        bytes.zeroize();

        Ok(Self(key))
    }

    /// Raw key bytes
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }
}

impl Drop for CipherKey {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

impl std::fmt::Debug for CipherKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("CipherKey([REDACTED])")
    }
}
