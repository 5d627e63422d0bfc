//! Locating, reading, and writing the configuration file.
//!
//! The working directory is searched first (`plank.json5`, then
//! `plank.json`), then the user configuration directory
//! (`~/.config/plank/config.json5`, then `config.json`). Files are parsed as
//! JSON5, which accepts plain JSON too; writes produce pretty JSON.

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::{ConfigError, Result};

/// File names tried in the working directory, in priority order.
const LOCAL_FILE_NAMES: &[&str] = &["plank.json5", "plank.json"];

/// Subdirectory of the user configuration directory.
const USER_CONFIG_DIR: &str = "plank";

/// File names tried in the user configuration directory, in priority order.
const USER_FILE_NAMES: &[&str] = &["config.json5", "config.json"];

/// The first configuration file that exists, local names before the user
/// configuration directory, or `None` when there is none.
#[must_use]
pub fn find_config_file() -> Option<PathBuf> {
    let local = LOCAL_FILE_NAMES.iter().map(PathBuf::from);
    let user = user_config_dir()
        .ok()
        .into_iter()
        .flat_map(|dir| USER_FILE_NAMES.iter().map(move |name| dir.join(name)));
    local.chain(user).find(|path| path.exists())
}

/// The user configuration directory, `~/.config/plank/` on Unix.
///
/// # Errors
///
/// Fails when the platform configuration directory cannot be determined.
pub fn user_config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join(USER_CONFIG_DIR))
        .ok_or(ConfigError::NoHomeDirectory)
}

/// Where a freshly written user configuration goes,
/// `~/.config/plank/config.json5`.
///
/// # Errors
///
/// Fails when the platform configuration directory cannot be determined.
pub fn default_user_config_path() -> Result<PathBuf> {
    Ok(user_config_dir()?.join(USER_FILE_NAMES[0]))
}

/// Reads and parses a configuration file.
///
/// # Errors
///
/// Fails when the file cannot be read or does not parse as JSON5.
pub fn read_config_file(path: impl AsRef<Path>) -> Result<Config> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json5::from_str(&content)?)
}

/// Writes the configuration as pretty-printed JSON, creating missing parent
/// directories.
///
/// serde_json5 has no JSON5 writer; JSON is valid JSON5, so the written file
/// stays loadable.
///
/// # Errors
///
/// Fails when a directory cannot be created, the configuration cannot be
/// serialized, or the file cannot be written.
pub fn write_config_file(path: impl AsRef<Path>, config: &Config) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.exists()) {
        std::fs::create_dir_all(parent).map_err(|source| ConfigError::WriteFile {
            path: path.to_path_buf(),
            source,
        })?;
    }

    let content = serde_json::to_string_pretty(config)?;
    std::fs::write(path, content).map_err(|source| ConfigError::WriteFile {
        path: path.to_path_buf(),
        source,
    })
}
