//! Token type.
//!
//! A secret value with an optional absolute expiration instant.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use zeroize::Zeroize;

use super::expiration;
use crate::core::types::Timestamp;
use crate::error::Result;

/// A stored secret and when it stops being valid.
///
/// The secret is wiped from memory when the token is dropped and never shows
/// up in `Debug` output.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    secret: String,
    #[serde(default)]
    expires: Option<Timestamp>,
}

impl Token {
    /// Create a token from a secret and an already resolved expiration.
    pub fn new(secret: impl Into<String>, expires: Option<Timestamp>) -> Self {
        Self {
            secret: secret.into(),
            expires,
        }
    }

    /// Create a token whose expiration is given as text.
    ///
    /// Accepts unix seconds, RFC 3339, or a local `YYYY-MM-DD[THH:MM[:SS]]`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidExpiration` if `expires` cannot be parsed.
    pub fn parse(secret: impl Into<String>, expires: Option<&str>) -> Result<Self> {
        let expires = expires.map(expiration::parse).transpose()?;
        Ok(Self::new(secret, expires))
    }

    /// Create a token expiring at `at`.
    pub fn expiring_at<Tz: TimeZone>(secret: impl Into<String>, at: DateTime<Tz>) -> Self {
        Self::new(secret, Some(at.timestamp()))
    }

    /// The secret value.
    pub fn secret(&self) -> &str {
        &self.secret
    }

    /// Expiration in unix seconds, if any.
    pub fn expires(&self) -> Option<Timestamp> {
        self.expires
    }

    /// Expiration as a UTC date-time, if any.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expires
            .and_then(|secs| Utc.timestamp_opt(secs, 0).single())
    }

    /// Whether the token has expired as of now.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now().timestamp())
    }

    /// Whether the token has expired as of `now` (unix seconds).
    ///
    /// A token without expiration never expires.
    pub fn is_expired_at(&self, now: Timestamp) -> bool {
        self.expires.is_some_and(|expires| expires <= now)
    }
}

impl Drop for Token {
    fn drop(&mut self) {
        self.secret.zeroize();
    }
}

impl std::fmt::Debug for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Token")
            .field("secret", &"***")
            .field("expires", &self.expires)
            .finish()
    }
}
