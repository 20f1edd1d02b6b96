//! Field-level symmetric encryption
//!
//! [`CipherKey`] is loaded once at startup (fatal in production when
//! missing); [`FieldCipher`] encrypts and decrypts single string values in
//! the `hex(iv):hex(ciphertext)` wire format.

pub mod field;
pub mod key;

pub use field::{FieldCipher, IV_LEN};
pub use key::{CipherKey, KEY_LEN};
