//! Test fixtures and constants.

use tkmanager::Key;

/// A valid key unrelated to any test environment.
pub fn foreign_key() -> String {
    Key::generate().to_secret_string().to_string()
}

/// Text that is not a key at all.
pub const INVALID_KEY: &str = "not-a-valid-key";

/// Tokens used across multiple tests, as `(name, group, secret)`.
pub const STANDARD_TOKENS: &[(&str, &str, &str)] = &[
    ("github", "DEFAULT", "ghp_1234567890"),
    ("gitlab", "DEFAULT", "glpat-abcdef"),
    ("api", "WEB", "sk-test-12345"),
    ("cdn", "WEB", "cdn-secret"),
    ("db", "PROD", "postgres://localhost/mydb"),
];

/// Exit codes of the CLI.
pub mod exit {
    pub const KEY_NOT_FOUND: i32 = 10;
    pub const FILE_OVERWRITE: i32 = 11;
    pub const DECRYPTION: i32 = 12;
    pub const GROUP_NOT_FOUND: i32 = 13;
    pub const TOKEN_NOT_FOUND: i32 = 14;
    pub const TOKEN_OVERWRITE: i32 = 15;
    pub const FILE_NOT_FOUND: i32 = 16;
    pub const INVALID_KEY: i32 = 17;
    pub const VALIDATION: i32 = 18;
}
