//! Cipher codec.
//!
//! Encodes and decodes opaque byte blobs with authenticated encryption.
//! The codec knows nothing about tokens or files; it turns a plaintext
//! document into ciphertext and back.
//!
//! ## Adding a New Backend
//!
//! 1. Implement the `Cipher` trait
//! 2. Add the implementation in a new file
//! 3. Re-export from this module
//!
//! Whatever the backend, `decrypt` must reject truncated, tampered or
//! wrong-key input with `CipherError::DecryptionFailed` and nothing finer.

use zeroize::Zeroizing;

use crate::core::key::Key;
use crate::error::Result;

mod age;

pub use self::age::Age;

/// Authenticated encryption of whole documents.
pub trait Cipher {
    /// Encrypt a plaintext blob.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::EncryptionFailed` if the backend rejects the key.
    fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>>;

    /// Decrypt and verify a ciphertext blob.
    ///
    /// The plaintext is returned in a buffer that is wiped on drop.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::DecryptionFailed` if the ciphertext is malformed,
    /// truncated, tampered with, or was produced under another key.
    fn decrypt(&self, ciphertext: &[u8]) -> Result<Zeroizing<Vec<u8>>>;

    /// Backend name for diagnostics.
    fn name(&self) -> &'static str;
}

/// Encrypt `plaintext` under `key` with the default backend.
pub fn encrypt(key: &Key, plaintext: &[u8]) -> Result<Vec<u8>> {
    self::age::seal(key, plaintext)
}

/// Decrypt `ciphertext` under `key` with the default backend.
pub fn decrypt(key: &Key, ciphertext: &[u8]) -> Result<Zeroizing<Vec<u8>>> {
    self::age::open(key, ciphertext)
}
