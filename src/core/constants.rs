//! Constants used throughout tkmanager.
//!
//! Centralizes magic strings and configuration values.

/// Environment variable holding the encryption key.
pub const KEY_ENV: &str = "TKMANAGER_KEY";

/// Environment variable overriding the store file location.
pub const FILE_ENV: &str = "TKMANAGER_FILE";

/// Environment variable for the log filter.
pub const LOG_ENV: &str = "TKMANAGER_LOG";

/// Store file name, relative to HOME.
pub const STORE_FILE: &str = "TKMANAGER";

/// Optional config file name, relative to HOME.
pub const CONFIG_FILE: &str = ".tkmanager.toml";

/// Group used when the caller names none.
pub const DEFAULT_GROUP: &str = "DEFAULT";

/// Plaintext of a freshly initialized store.
pub const EMPTY_DOCUMENT: &[u8] = b"{}";
