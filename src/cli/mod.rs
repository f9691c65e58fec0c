//! Command-line interface.

pub mod completions;
pub mod delete;
pub mod keygen;
pub mod list;
pub mod make_file;
pub mod output;
pub mod read;
pub mod store;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::core::config::Settings;
use crate::core::constants::DEFAULT_GROUP;
use crate::core::manager::Manager;
use crate::error::{Result, StoreError};

/// tkmanager - safe local storage for tokens.
#[derive(Parser)]
#[command(
    name = "tkmanager",
    about = "Manages the safe storage of tokens",
    version,
    after_help = "The key is read from TKMANAGER_KEY. Generate one with `tkmanager keygen`."
)]
pub struct Cli {
    /// Store file to use instead of ~/TKMANAGER
    #[arg(long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Create the encrypted store file
    MakeFile,

    /// Store a token
    Store {
        /// Token name (case-insensitive)
        name: String,
        /// Secret value; prompted for (or read from stdin) when omitted
        secret: Option<String>,
        /// Group used to avoid name collisions
        #[arg(short, long, default_value = DEFAULT_GROUP, hide_default_value = true)]
        group: String,
        /// Expiration: unix seconds, RFC 3339, or YYYY-MM-DD[THH:MM[:SS]]
        #[arg(short, long)]
        expires: Option<String>,
        /// Overwrite an existing token
        #[arg(short, long)]
        force: bool,
    },

    /// Print a token's secret
    Read {
        /// Token name (case-insensitive)
        name: String,
        /// Group the token belongs to
        #[arg(short, long, default_value = DEFAULT_GROUP, hide_default_value = true)]
        group: String,
        /// Also print the expiration unix time
        #[arg(short, long)]
        expires: bool,
    },

    /// List stored token names
    List {
        /// Only list this group
        #[arg(short, long)]
        group: Option<String>,
        /// Only list expired tokens
        #[arg(short, long)]
        expired: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a token
    Delete {
        /// Token name (case-insensitive)
        name: String,
        /// Group the token belongs to
        #[arg(short, long, default_value = DEFAULT_GROUP, hide_default_value = true)]
        group: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Generate a new key and print it
    Keygen,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Execute a command.
pub fn execute(command: Command, file: Option<PathBuf>) -> Result<()> {
    use Command::*;

    let file = file.as_deref();
    match command {
        MakeFile => make_file::execute(file),
        Store {
            name,
            secret,
            group,
            expires,
            force,
        } => store::execute(file, &name, secret, &group, expires.as_deref(), force),
        Read {
            name,
            group,
            expires,
        } => read::execute(file, &name, &group, expires),
        List {
            group,
            expired,
            json,
        } => list::execute(file, group.as_deref(), expired, json),
        Delete { name, group, yes } => delete::execute(file, &name, &group, yes),
        Keygen => keygen::execute(),
        Completions { shell } => completions::execute(shell),
    }
}

/// Open the manager for a store file that must already exist.
pub(crate) fn open_existing(file: Option<&Path>) -> Result<Manager> {
    let settings = Settings::load(file)?;
    let manager = Manager::open(&settings)?;
    if !manager.has_file() {
        return Err(StoreError::NotFound(settings.path).into());
    }
    Ok(manager)
}
