//! Make-file command - create the encrypted store file.

use std::path::Path;

use tracing::info;

use crate::cli::output;
use crate::core::config::Settings;
use crate::core::manager::Manager;
use crate::error::Result;

/// Create the store file.
pub fn execute(file: Option<&Path>) -> Result<()> {
    let settings = Settings::load(file)?;
    let manager = Manager::open(&settings)?;

    info!(path = %settings.path.display(), "creating store file");
    manager.make_file()?;

    output::success(&format!("created {}", settings.path.display()));
    Ok(())
}
