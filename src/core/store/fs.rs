//! Filesystem-backed store.
//!
//! Writes go to a temporary file in the target directory which is synced and
//! then renamed over the store file, so readers only ever see a complete old
//! or a complete new blob.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, trace, warn};

use super::Store;
use crate::error::{Result, StoreError};

/// Store file on the local filesystem.
#[derive(Debug, Clone)]
pub struct Filesystem {
    path: PathBuf,
}

impl Filesystem {
    /// Store backed by the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn dir(&self) -> PathBuf {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    fn write_failed(&self, source: std::io::Error) -> StoreError {
        StoreError::WriteFailed {
            path: self.path.clone(),
            source,
        }
    }

    /// Write `contents` through a synced temporary file.
    ///
    /// With `clobber` false the final rename refuses to replace an existing
    /// file, which makes creation race-free.
    fn write_atomic(&self, contents: &[u8], clobber: bool) -> Result<()> {
        let dir = self.dir();
        fs::create_dir_all(&dir).map_err(|e| self.write_failed(e))?;

        // NamedTempFile is created with mode 0600 on Unix
        let mut tmp = NamedTempFile::new_in(&dir).map_err(|e| self.write_failed(e))?;
        tmp.write_all(contents).map_err(|e| self.write_failed(e))?;
        tmp.as_file().sync_all().map_err(|e| self.write_failed(e))?;

        if clobber {
            tmp.persist(&self.path)
                .map_err(|e| self.write_failed(e.error))?;
        } else {
            tmp.persist_noclobber(&self.path).map_err(|e| {
                if e.error.kind() == ErrorKind::AlreadyExists {
                    StoreError::FileOverwrite(self.path.clone())
                } else {
                    self.write_failed(e.error)
                }
            })?;
        }

        trace!(path = %self.path.display(), bytes = contents.len(), "store file written");
        Ok(())
    }

    #[cfg(unix)]
    fn check_permissions(&self) {
        use std::os::unix::fs::PermissionsExt;

        if let Ok(metadata) = fs::metadata(&self.path) {
            let mode = metadata.permissions().mode() & 0o777;
            if mode & 0o077 != 0 {
                warn!(
                    path = %self.path.display(),
                    mode = %format!("{:o}", mode),
                    "store file is readable by other users"
                );
            }
        }
    }
}

impl Store for Filesystem {
    fn path(&self) -> &Path {
        &self.path
    }

    fn exists(&self) -> bool {
        self.path.exists()
    }

    fn initialize(&self, contents: &[u8]) -> Result<()> {
        match fs::metadata(&self.path) {
            Ok(metadata) if metadata.len() > 0 => {
                Err(StoreError::FileOverwrite(self.path.clone()).into())
            }
            Ok(_) => {
                debug!(path = %self.path.display(), "replacing empty store file");
                self.write_atomic(contents, true)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "creating store file");
                self.write_atomic(contents, false)
            }
            Err(source) => Err(StoreError::ReadFailed {
                path: self.path.clone(),
                source,
            }
            .into()),
        }
    }

    fn read_raw(&self) -> Result<Vec<u8>> {
        debug!(path = %self.path.display(), "reading store file");

        let bytes = fs::read(&self.path).map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                StoreError::NotFound(self.path.clone())
            } else {
                StoreError::ReadFailed {
                    path: self.path.clone(),
                    source,
                }
            }
        })?;

        #[cfg(unix)]
        self.check_permissions();

        trace!(bytes = bytes.len(), "store file read");
        Ok(bytes)
    }

    fn write_raw(&self, contents: &[u8]) -> Result<()> {
        debug!(path = %self.path.display(), "replacing store file");
        self.write_atomic(contents, true)
    }
}
