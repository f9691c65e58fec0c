//! Error types.
//!
//! One enum per concern, all folded into [`Error`]. Every variant the CLI can
//! surface has a stable exit code (see [`Error::exit_code`]).

use std::path::PathBuf;

use thiserror::Error;

/// Key material errors.
#[derive(Error, Debug)]
pub enum KeyError {
    #[error("no key found: set {0} in your environment")]
    NotFound(String),

    #[error("invalid key in {0}: expected an AGE-SECRET-KEY-1... string")]
    Invalid(String),
}

/// Backing file errors.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("no tokens stored: {} does not exist", .0.display())]
    NotFound(PathBuf),

    #[error("there's already data in {}", .0.display())]
    FileOverwrite(PathBuf),

    #[error("{} changed while this command was running; retry", .0.display())]
    ConcurrentModification(PathBuf),

    #[error("invalid token document: {0}")]
    InvalidFormat(String),

    #[error("failed to read {}: {source}", .path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Encryption boundary errors.
///
/// Decryption failures carry no detail on purpose: a wrong key and a damaged
/// file are indistinguishable to the caller.
#[derive(Error, Debug)]
pub enum CipherError {
    #[error("encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("decryption failed: wrong key or corrupted file")]
    DecryptionFailed,
}

/// Token registry errors.
#[derive(Error, Debug)]
pub enum TokenError {
    #[error("the group '{0}' was not found")]
    GroupNotFound(String),

    #[error("token '{name}' was not found in group '{group}'")]
    TokenNotFound { name: String, group: String },

    #[error("token '{name}' is already defined in group '{group}' (use --force to overwrite)")]
    Overwrite { name: String, group: String },
}

/// Input validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("token name cannot be empty")]
    EmptyName,

    #[error("group name cannot be empty")]
    EmptyGroup,

    #[error("secret for '{0}' cannot be empty")]
    EmptySecret(String),

    #[error("invalid expiration '{0}': use unix seconds, RFC 3339 or YYYY-MM-DD[THH:MM[:SS]]")]
    InvalidExpiration(String),
}

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("unable to determine home directory")]
    NoHome,

    #[error("failed to read config {}: {source}", .path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Key(#[from] KeyError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Cipher(#[from] CipherError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
}

impl Error {
    /// Process exit code for this error.
    ///
    /// Each user-actionable kind gets its own code so scripts can branch on
    /// it; everything else exits with 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Key(KeyError::NotFound(_)) => 10,
            Error::Store(StoreError::FileOverwrite(_)) => 11,
            Error::Cipher(CipherError::DecryptionFailed) => 12,
            Error::Token(TokenError::GroupNotFound(_)) => 13,
            Error::Token(TokenError::TokenNotFound { .. }) => 14,
            Error::Token(TokenError::Overwrite { .. }) => 15,
            Error::Store(StoreError::NotFound(_)) => 16,
            Error::Key(KeyError::Invalid(_)) => 17,
            Error::Validation(_) => 18,
            Error::Store(StoreError::ConcurrentModification(_)) => 19,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
