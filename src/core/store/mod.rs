//! Byte-blob storage for the encrypted store file.
//!
//! A store holds one opaque blob. It knows nothing about encryption or tokens:
//! it checks existence, creates the blob once, reads it whole and replaces it
//! whole.
//!
//! ## Adding a New Storage Backend
//!
//! 1. Implement the `Store` trait
//! 2. Add the implementation in a new file
//! 3. Re-export from this module
//!
//! `write_raw` must be all-or-nothing: a failure halfway through may not
//! leave a partially written blob behind.

use std::path::Path;

use sha2::{Digest, Sha256};

use crate::error::{Result, StoreError};

mod fs;
mod memory;

pub use fs::Filesystem;
pub use memory::Memory;

/// Blob storage trait.
pub trait Store {
    /// Where the blob lives, for messages and logs.
    fn path(&self) -> &Path;

    /// Check whether the blob exists.
    fn exists(&self) -> bool;

    /// Create the blob with `contents`.
    ///
    /// An existing but empty blob is replaced.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::FileOverwrite` if the blob already holds data.
    fn initialize(&self, contents: &[u8]) -> Result<()>;

    /// Read the entire blob.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the blob does not exist.
    fn read_raw(&self) -> Result<Vec<u8>>;

    /// Replace the entire blob atomically.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::WriteFailed` if the write cannot be committed; the
    /// previous contents are then left in place.
    fn write_raw(&self, contents: &[u8]) -> Result<()>;

    /// Replace the blob only if it still matches `expected`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::ConcurrentModification` if the blob changed since
    /// `expected` was taken, without writing anything.
    fn replace(&self, expected: &Fingerprint, contents: &[u8]) -> Result<()> {
        let current = self.read_raw()?;
        if Fingerprint::of(&current) != *expected {
            return Err(StoreError::ConcurrentModification(self.path().to_path_buf()).into());
        }
        self.write_raw(contents)
    }
}

/// SHA-256 digest of a blob, taken when a read-modify-write cycle starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fingerprint([u8; 32]);

impl Fingerprint {
    /// Fingerprint `bytes`.
    pub fn of(bytes: &[u8]) -> Self {
        Self(Sha256::digest(bytes).into())
    }
}
