//! Test support utilities for tkmanager integration tests.
//!
//! Provides reusable test environment setup and helper commands.

#![allow(dead_code)]

pub mod assertions;
pub mod commands;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::path::PathBuf;

use tempfile::TempDir;
use tkmanager::Key;

/// Test environment with an isolated home directory and its own key.
///
/// No process-global state is mutated; child processes get `HOME` and
/// `TKMANAGER_KEY` through `.env()` so tests can safely run in parallel.
pub struct Test {
    /// Working directory for child processes
    pub dir: TempDir,
    /// Temporary home directory; the default store file lives here
    pub home: TempDir,
    /// Key text exported as `TKMANAGER_KEY`
    pub key: String,
}

impl Test {
    /// Create a new environment without a store file.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let home = TempDir::new().expect("failed to create temp home");
        let key = Key::generate().to_secret_string().to_string();

        Self { dir, home, key }
    }

    /// Create an environment with the store file already made.
    pub fn init() -> Self {
        let t = Self::new();
        let output = t.make_file();
        assert!(
            output.status.success(),
            "Failed to create store file: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        t
    }

    /// Create an environment holding the given `(name, group, secret)` tokens.
    pub fn with_tokens(tokens: &[(&str, &str, &str)]) -> Self {
        let t = Self::init();
        for (name, group, secret) in tokens {
            let output = t.store_in(name, group, secret);
            assert!(
                output.status.success(),
                "Failed to store token {}: {}",
                name,
                String::from_utf8_lossy(&output.stderr)
            );
        }
        t
    }

    /// Default store file location.
    pub fn store_path(&self) -> PathBuf {
        self.home.path().join("TKMANAGER")
    }

    /// Raw bytes of the store file.
    pub fn store_bytes(&self) -> Vec<u8> {
        std::fs::read(self.store_path()).expect("failed to read store file")
    }
}
