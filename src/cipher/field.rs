//! Field-level symmetric encryption
//!
//! Encrypts single string values with AES-256-CBC and a fresh random IV per
//! call, producing the `hex(iv):hex(ciphertext)` wire format. Decryption is
//! fail-open: a value that is not in our format, or that fails to decrypt,
//! comes back unchanged with a side-channel warning log, so read paths
//! degrade to an opaque string instead of crashing.

use super::key::CipherKey;
use aes::cipher::{block_padding::Pkcs7, BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use rand::RngCore;
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::warn;

/// IV length in bytes (AES block size)
pub const IV_LEN: usize = 16;

type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;
type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;

/// Symmetric cipher over single string fields
///
/// Cheap to clone; the key is shared and immutable for the process lifetime,
/// so the cipher is safe to call concurrently without synchronization.
#[derive(Clone)]
pub struct FieldCipher {
    key: Arc<CipherKey>,
}

impl FieldCipher {
    /// Create a cipher over the given key
    pub fn new(key: Arc<CipherKey>) -> Self {
        Self { key }
    }

    /// Encrypt a plaintext string
    ///
    /// Empty input is returned unchanged: encrypting an absent value is
    /// meaningless, not an error. Identical plaintexts yield different
    /// outputs because the IV is freshly random per call.
    pub fn encrypt(&self, plaintext: &str) -> String {
        if plaintext.is_empty() {
            return String::new();
        }

        let mut iv = [0u8; IV_LEN];
        rand::thread_rng().fill_bytes(&mut iv);

        let ciphertext = Aes256CbcEnc::new(self.key.as_bytes().into(), (&iv).into())
            .encrypt_padded_vec_mut::<Pkcs7>(plaintext.as_bytes());

        format!("{}:{}", hex::encode(iv), hex::encode(ciphertext))
    }

    /// Decrypt an encoded `hex(iv):hex(ciphertext)` string
    ///
    /// Values that are empty or carry no `:` separator are treated as "not
    /// our format" and returned unchanged, which lets pre-encryption data
    /// migrate gradually. Any decryption failure (bad hex, wrong IV length,
    /// bad padding, tampered ciphertext, non-UTF-8 plaintext) also returns
    /// the input unchanged and only logs a warning.
    pub fn decrypt(&self, encoded: &str) -> String {
        if encoded.is_empty() || !encoded.contains(':') {
            return encoded.to_string();
        }

        match self.try_decrypt(encoded) {
            Some(plaintext) => plaintext,
            None => {
                warn!(
                    encoded_len = encoded.len(),
                    "Field decryption failed; returning value unchanged"
                );
                encoded.to_string()
            }
        }
    }

    fn try_decrypt(&self, encoded: &str) -> Option<String> {
        let (iv_hex, ct_hex) = encoded.split_once(':')?;

        let iv: [u8; IV_LEN] = hex::decode(iv_hex).ok()?.try_into().ok()?;
        let ciphertext = hex::decode(ct_hex).ok()?;
        if ciphertext.is_empty() || ciphertext.len() % IV_LEN != 0 {
            return None;
        }

        let plaintext = Aes256CbcDec::new(self.key.as_bytes().into(), (&iv).into())
            .decrypt_padded_vec_mut::<Pkcs7>(&ciphertext)
            .ok()?;

        String::from_utf8(plaintext).ok()
    }

    /// Encrypt the named string fields of a record in place
    ///
    /// Fields that are absent, null, or not strings are skipped; all other
    /// fields are left untouched.
    pub fn encrypt_fields(&self, record: &mut Map<String, Value>, fields: &[&str]) {
        for &field in fields {
            if let Some(Value::String(plaintext)) = record.get(field) {
                let encrypted = self.encrypt(plaintext);
                record.insert(field.to_string(), Value::String(encrypted));
            }
        }
    }

    /// Decrypt the named string fields of a record in place
    pub fn decrypt_fields(&self, record: &mut Map<String, Value>, fields: &[&str]) {
        for &field in fields {
            if let Some(Value::String(encoded)) = record.get(field) {
                let decrypted = self.decrypt(encoded);
                record.insert(field.to_string(), Value::String(decrypted));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn test_cipher() -> FieldCipher {
        let key = CipherKey::from_hex(&"0f".repeat(32)).unwrap();
        FieldCipher::new(Arc::new(key))
    }

    #[test]
    fn test_roundtrip_ascii() {
        let cipher = test_cipher();
        let encrypted = cipher.encrypt("alice@example.com");
        assert_ne!(encrypted, "alice@example.com");
        assert_eq!(cipher.decrypt(&encrypted), "alice@example.com");
    }

    #[test]
    fn test_roundtrip_unicode() {
        let cipher = test_cipher();
        let plaintext = "Ünïcødé — 日本語 🦀";
        assert_eq!(cipher.decrypt(&cipher.encrypt(plaintext)), plaintext);
    }

    #[test]
    fn test_empty_plaintext_is_noop() {
        let cipher = test_cipher();
        assert_eq!(cipher.encrypt(""), "");
        assert_eq!(cipher.decrypt(""), "");
    }

    #[test]
    fn test_iv_uniqueness() {
        let cipher = test_cipher();
        let a = cipher.encrypt("same plaintext");
        let b = cipher.encrypt("same plaintext");
        assert_ne!(a, b);
    }

    #[test]
    fn test_wire_format() {
        let cipher = test_cipher();
        let encrypted = cipher.encrypt("value");
        let (iv_hex, ct_hex) = encrypted.split_once(':').unwrap();
        assert_eq!(iv_hex.len(), IV_LEN * 2);
        assert!(iv_hex.bytes().all(|b| b.is_ascii_hexdigit()));
        assert!(!ct_hex.is_empty());
    }

    #[test]
    fn test_not_our_format_passthrough() {
        let cipher = test_cipher();
        assert_eq!(cipher.decrypt("plain legacy value"), "plain legacy value");
    }

    #[test]
    fn test_tampered_ciphertext_fails_open() {
        let cipher = test_cipher();
        let encrypted = cipher.encrypt("sensitive");

        // Flip one ciphertext bit
        let mut bytes = encrypted.into_bytes();
        let last = bytes.len() - 1;
        bytes[last] = if bytes[last] == b'0' { b'1' } else { b'0' };
        let tampered = String::from_utf8(bytes).unwrap();

        assert_eq!(cipher.decrypt(&tampered), tampered);
    }

    #[test]
    fn test_truncated_ciphertext_fails_open() {
        let cipher = test_cipher();
        let encrypted = cipher.encrypt("sensitive");
        let truncated = &encrypted[..encrypted.len() - 6];
        assert_eq!(cipher.decrypt(truncated), truncated);
    }

    #[test]
    fn test_garbage_after_separator_fails_open() {
        let cipher = test_cipher();
        assert_eq!(cipher.decrypt("abc:not-hex"), "abc:not-hex");
    }

    #[test]
    fn test_encrypt_fields_touches_only_listed_strings() {
        let cipher = test_cipher();
        let mut record = json!({
            "email": "a@b.com",
            "age": 41,
            "city": "Duluth"
        })
        .as_object()
        .unwrap()
        .clone();

        cipher.encrypt_fields(&mut record, &["email", "age", "missing"]);

        assert_ne!(record["email"], json!("a@b.com"));
        assert_eq!(record["age"], json!(41));
        assert_eq!(record["city"], json!("Duluth"));

        cipher.decrypt_fields(&mut record, &["email"]);
        assert_eq!(record["email"], json!("a@b.com"));
    }
}
