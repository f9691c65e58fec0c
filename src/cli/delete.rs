//! Delete command.

use std::io::{self, IsTerminal};
use std::path::Path;

use dialoguer::Confirm;
use tracing::info;

use crate::cli::output;
use crate::core::domain::{group_key, token_key};
use crate::error::Result;

/// Delete a token, asking first when attached to a terminal.
pub fn execute(file: Option<&Path>, name: &str, group: &str, yes: bool) -> Result<()> {
    let manager = crate::cli::open_existing(file)?;
    let name = token_key(name);
    let group = group_key(group);

    if !yes && io::stdin().is_terminal() && !confirm(&name, &group)? {
        output::dimmed("cancelled");
        return Ok(());
    }

    info!(name = %name, group = %group, "deleting token");
    manager.delete_token(&name, &group)?;
    output::success(&format!(
        "deleted {} from {}",
        output::key(&name),
        output::key(&group)
    ));
    Ok(())
}

fn confirm(name: &str, group: &str) -> Result<bool> {
    Confirm::new()
        .with_prompt(format!("Delete {} from {}?", name, group))
        .default(false)
        .interact()
        .map_err(Into::into)
}
