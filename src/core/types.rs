//! Type aliases for domain concepts.
//!
//! Provides semantic type aliases to make function signatures more descriptive.

/// A token name, stored lowercase (e.g., github, api_key).
pub type TokenName = String;

/// A group name, stored uppercase (e.g., DEFAULT, WEB).
pub type GroupName = String;

/// An absolute instant in whole seconds since the Unix epoch.
pub type Timestamp = i64;
