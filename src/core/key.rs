//! Encryption key.
//!
//! A single age x25519 identity serves as the symmetric key for the store:
//! the file is encrypted to the identity's own public half and decrypted with
//! the identity, so whoever holds the key text can do both.

use std::env::VarError;

use age::secrecy::ExposeSecret;
use age::x25519;
use tracing::debug;
use zeroize::Zeroizing;

use crate::error::{KeyError, Result};

/// Symmetric key material for the store file.
pub struct Key {
    inner: x25519::Identity,
}

impl Key {
    /// Generate a fresh random key.
    pub fn generate() -> Self {
        Self {
            inner: x25519::Identity::generate(),
        }
    }

    /// Parse key text (`AGE-SECRET-KEY-1...`).
    ///
    /// `source` names where the text came from and only appears in the error.
    ///
    /// # Errors
    ///
    /// Returns `KeyError::Invalid` if the text is not a valid key.
    pub fn parse(text: &str, source: &str) -> Result<Self> {
        let inner = text
            .trim()
            .parse::<x25519::Identity>()
            .map_err(|_| KeyError::Invalid(source.to_string()))?;
        Ok(Self { inner })
    }

    /// Load the key from an environment variable.
    ///
    /// # Errors
    ///
    /// Returns `KeyError::NotFound` if the variable is unset or empty,
    /// `KeyError::Invalid` if its value is not a key (or not UTF-8).
    pub fn from_env(var: &str) -> Result<Self> {
        let text = match std::env::var(var) {
            Ok(text) => Zeroizing::new(text),
            Err(VarError::NotPresent) => return Err(KeyError::NotFound(var.to_string()).into()),
            Err(VarError::NotUnicode(_)) => return Err(KeyError::Invalid(var.to_string()).into()),
        };
        if text.trim().is_empty() {
            return Err(KeyError::NotFound(var.to_string()).into());
        }
        debug!(var = %var, "loading key from environment");
        Self::parse(&text, var)
    }

    /// Key text suitable for `export TKMANAGER_KEY=...`.
    pub fn to_secret_string(&self) -> Zeroizing<String> {
        Zeroizing::new(self.inner.to_string().expose_secret().to_string())
    }

    pub(crate) fn identity(&self) -> &x25519::Identity {
        &self.inner
    }

    pub(crate) fn recipient(&self) -> x25519::Recipient {
        self.inner.to_public()
    }
}

impl std::fmt::Debug for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Key(***)")
    }
}
