//! Read command - print a token's secret.

use std::path::Path;

use zeroize::Zeroizing;

use crate::cli::output;
use crate::core::domain::token_key;
use crate::error::Result;

/// Print the secret of a token, optionally with its expiration.
pub fn execute(file: Option<&Path>, name: &str, group: &str, show_expires: bool) -> Result<()> {
    let manager = crate::cli::open_existing(file)?;
    let token = manager.read_token(name, group)?;

    if token.is_expired() {
        let when = token
            .expires_at()
            .map(|at| at.to_rfc3339())
            .unwrap_or_default();
        output::warn(&format!("token '{}' expired at {}", token_key(name), when));
    }

    let line = match token.expires() {
        Some(expires) if show_expires => {
            Zeroizing::new(format!("{} : {}", token.secret(), expires))
        }
        _ => Zeroizing::new(token.secret().to_string()),
    };
    output::data(&line);
    Ok(())
}
