//! In-memory store.
//!
//! Clones share the same blob, so a test can hand one clone to a `Manager`
//! and inspect the bytes through another.

use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

use super::Store;
use crate::error::{Result, StoreError};

/// Blob held in memory.
#[derive(Debug, Clone, Default)]
pub struct Memory {
    contents: Rc<RefCell<Option<Vec<u8>>>>,
}

impl Memory {
    /// Empty store (no blob yet).
    pub fn new() -> Self {
        Self::default()
    }

    /// Store already holding `contents`.
    pub fn with_contents(contents: Vec<u8>) -> Self {
        Self {
            contents: Rc::new(RefCell::new(Some(contents))),
        }
    }

    /// Copy of the current blob, if any.
    pub fn snapshot(&self) -> Option<Vec<u8>> {
        self.contents.borrow().clone()
    }
}

impl Store for Memory {
    fn path(&self) -> &Path {
        Path::new(":memory:")
    }

    fn exists(&self) -> bool {
        self.contents.borrow().is_some()
    }

    fn initialize(&self, contents: &[u8]) -> Result<()> {
        let mut slot = self.contents.borrow_mut();
        if slot.as_ref().is_some_and(|c| !c.is_empty()) {
            return Err(StoreError::FileOverwrite(self.path().to_path_buf()).into());
        }
        *slot = Some(contents.to_vec());
        Ok(())
    }

    fn read_raw(&self) -> Result<Vec<u8>> {
        self.contents
            .borrow()
            .clone()
            .ok_or_else(|| StoreError::NotFound(self.path().to_path_buf()).into())
    }

    fn write_raw(&self, contents: &[u8]) -> Result<()> {
        *self.contents.borrow_mut() = Some(contents.to_vec());
        Ok(())
    }
}
