//! Keygen command - print a fresh key for `TKMANAGER_KEY`.

use tracing::debug;

use crate::cli::output;
use crate::core::constants::KEY_ENV;
use crate::core::key::Key;
use crate::error::Result;

/// Generate a key and print it to stdout.
pub fn execute() -> Result<()> {
    if std::env::var_os(KEY_ENV).is_some_and(|v| !v.is_empty()) {
        output::warn(&format!(
            "{} is already set; a new key cannot read files made with the old one",
            KEY_ENV
        ));
    }

    let key = Key::generate();
    debug!("generated key");
    output::data(&key.to_secret_string());
    output::hint(&format!("export {}=<the key above>", KEY_ENV));
    Ok(())
}
