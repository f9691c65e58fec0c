//! Age encryption backend implementation.
//!
//! Uses the binary age format with the store key as both recipient and
//! identity. The header MAC and the ChaCha20-Poly1305 payload chunks cover
//! every byte of the file, so any modification fails decryption.

use std::io::{Read, Write};

use tracing::{debug, trace};
use zeroize::Zeroizing;

use super::Cipher;
use crate::core::key::Key;
use crate::error::{CipherError, Result};

/// Age-based cipher bound to one key.
pub struct Age {
    key: Key,
}

impl Age {
    /// Create a codec for `key`.
    pub fn new(key: Key) -> Self {
        Self { key }
    }
}

impl std::fmt::Debug for Age {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Age").field("key", &self.key).finish()
    }
}

impl Cipher for Age {
    fn name(&self) -> &'static str {
        "age"
    }

    fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        seal(&self.key, plaintext)
    }

    fn decrypt(&self, ciphertext: &[u8]) -> Result<Zeroizing<Vec<u8>>> {
        open(&self.key, ciphertext)
    }
}

pub(super) fn seal(key: &Key, plaintext: &[u8]) -> Result<Vec<u8>> {
    trace!(plaintext_len = plaintext.len(), "encrypting");

    let recipient = key.recipient();
    let encryptor =
        age::Encryptor::with_recipients(std::iter::once(&recipient as &dyn age::Recipient))
            .map_err(|e| CipherError::EncryptionFailed(format!("{}", e)))?;

    let mut encrypted = Vec::with_capacity(plaintext.len() + 256);
    let mut writer = encryptor.wrap_output(&mut encrypted)?;
    writer.write_all(plaintext)?;
    writer.finish()?;

    trace!(ciphertext_len = encrypted.len(), "encrypted");
    Ok(encrypted)
}

pub(super) fn open(key: &Key, ciphertext: &[u8]) -> Result<Zeroizing<Vec<u8>>> {
    trace!(ciphertext_len = ciphertext.len(), "decrypting");

    let rejected = || {
        debug!("ciphertext rejected");
        CipherError::DecryptionFailed
    };

    let decryptor = age::Decryptor::new(ciphertext).map_err(|_| rejected())?;
    let mut reader = decryptor
        .decrypt(std::iter::once(key.identity() as &dyn age::Identity))
        .map_err(|_| rejected())?;

    let mut plaintext = Zeroizing::new(Vec::with_capacity(ciphertext.len()));
    reader
        .read_to_end(&mut plaintext)
        .map_err(|_| rejected())?;

    trace!(plaintext_len = plaintext.len(), "decrypted");
    Ok(plaintext)
}
