//! Settings resolution.
//!
//! Decides where the store file lives and which environment variable holds
//! the key. Sources, highest priority first:
//!
//! 1. `--file` on the command line
//! 2. `TKMANAGER_FILE` in the environment
//! 3. `file = "..."` in `~/.tkmanager.toml`
//! 4. `~/TKMANAGER`

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::core::constants;
use crate::error::{ConfigError, Result};

/// Contents of `~/.tkmanager.toml`. Every field is optional.
#[derive(Debug, Default, Deserialize)]
pub struct FileConfig {
    /// Store file location; a leading `~` expands to the home directory.
    #[serde(default)]
    pub file: Option<String>,
    /// Environment variable to read the key from.
    #[serde(default)]
    pub key_var: Option<String>,
}

impl FileConfig {
    /// Load the config file at `path`, or defaults if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ReadFile` or `ConfigError::Parse` if the file
    /// exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        debug!(path = %path.display(), "loading config");

        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(config)
    }
}

/// Resolved runtime settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Store file location.
    pub path: PathBuf,
    /// Environment variable holding the key.
    pub key_var: String,
}

impl Settings {
    /// Resolve settings from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file is malformed or no home
    /// directory can be found when one is needed.
    pub fn load(file_override: Option<&Path>) -> Result<Self> {
        let env_file = std::env::var(constants::FILE_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty());
        Self::resolve(dirs::home_dir().as_deref(), file_override, env_file)
    }

    /// Resolve settings from explicit inputs.
    pub fn resolve(
        home: Option<&Path>,
        file_override: Option<&Path>,
        env_file: Option<String>,
    ) -> Result<Self> {
        let config = match home {
            Some(home) => FileConfig::load(&home.join(constants::CONFIG_FILE))?,
            None => FileConfig::default(),
        };

        let path = if let Some(path) = file_override {
            path.to_path_buf()
        } else if let Some(path) = env_file {
            expand_home(&path, home)?
        } else if let Some(path) = config.file.as_deref() {
            expand_home(path, home)?
        } else {
            home.ok_or(ConfigError::NoHome)?.join(constants::STORE_FILE)
        };

        let key_var = config
            .key_var
            .unwrap_or_else(|| constants::KEY_ENV.to_string());

        debug!(path = %path.display(), key_var = %key_var, "settings resolved");
        Ok(Self { path, key_var })
    }
}

/// Expand a bare `~` or a leading `~/` to the home directory.
///
/// Other paths, including `~user/...`, are taken literally.
fn expand_home(raw: &str, home: Option<&Path>) -> Result<PathBuf> {
    let rest = match raw.strip_prefix('~') {
        Some("") => "",
        Some(rest) if rest.starts_with(['/', '\\']) => &rest[1..],
        _ => return Ok(PathBuf::from(raw)),
    };
    let home = home.ok_or(ConfigError::NoHome)?;
    if rest.is_empty() {
        Ok(home.to_path_buf())
    } else {
        Ok(home.join(rest))
    }
}
