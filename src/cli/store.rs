//! Store command.
//!
//! Stores a token, taking the secret from the command line, a pipe, or a
//! hidden prompt.

use std::io::{self, IsTerminal, Read};
use std::path::Path;

use dialoguer::Password;
use tracing::info;
use zeroize::Zeroizing;

use crate::cli::output;
use crate::core::constants::DEFAULT_GROUP;
use crate::core::domain::{group_key, token_key, Token};
use crate::error::Result;

/// Store a token.
pub fn execute(
    file: Option<&Path>,
    name: &str,
    secret: Option<String>,
    group: &str,
    expires: Option<&str>,
    force: bool,
) -> Result<()> {
    let manager = crate::cli::open_existing(file)?;

    let secret = match secret {
        Some(secret) => Zeroizing::new(secret),
        None => read_secret(name)?,
    };

    let token = Token::parse(secret.as_str(), expires)?;
    info!(name = %name, group = %group, force, "storing token");
    manager.store_token(token, name, group, force)?;

    let name = token_key(name);
    let group = group_key(group);
    if group == DEFAULT_GROUP {
        output::success(&format!("stored {}", output::key(&name)));
    } else {
        output::success(&format!(
            "stored {} in group {}",
            output::key(&name),
            output::key(&group)
        ));
    }
    Ok(())
}

fn read_secret(name: &str) -> Result<Zeroizing<String>> {
    if !io::stdin().is_terminal() {
        // Piped input; only the final line ending is dropped
        let mut input = Zeroizing::new(String::new());
        io::stdin().read_to_string(&mut input)?;
        let end = strip_line_ending(&input).len();
        input.truncate(end);
        return Ok(input);
    }

    let secret = Password::new()
        .with_prompt(format!("Secret for {}", output::key(name)))
        .interact()?;
    Ok(Zeroizing::new(secret))
}

fn strip_line_ending(input: &str) -> &str {
    input
        .strip_suffix("\r\n")
        .or_else(|| input.strip_suffix('\n'))
        .unwrap_or(input)
}
