//! Core configuration struct and loading logic.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::persistence::{find_config_file, read_config_file, write_config_file};

/// Lowest accepted poll interval, in milliseconds.
pub const MIN_POLL_INTERVAL_MS: u64 = 10;

/// Highest accepted poll interval, in milliseconds.
pub const MAX_POLL_INTERVAL_MS: u64 = 10_000;

fn default_poll_interval_ms() -> u64 {
    100
}

/// The main configuration struct for the plank application.
///
/// # Examples
///
/// ```
/// use plank_config::Config;
///
/// let config = Config::default();
/// assert!(!config.demo_items);
/// assert_eq!(config.poll_interval_ms, 100);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Seed the board with a few sample items at startup.
    #[serde(default)]
    pub demo_items: bool,

    /// How long the event loop waits for input before redrawing, in
    /// milliseconds.
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            demo_items: false,
            poll_interval_ms: default_poll_interval_ms(),
        }
    }
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from the default file locations.
    ///
    /// Searches in the following order:
    ///
    /// 1. Local: `./plank.json5` or `./plank.json`
    /// 2. User: `~/.config/plank/config.json5` or `~/.config/plank/config.json`
    ///
    /// If no configuration file is found, returns the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file is found but cannot be read,
    /// parsed, or validated.
    pub fn load() -> Result<Self> {
        match find_config_file() {
            Some(path) => {
                let config = read_config_file(&path)?;
                config.validate()?;
                Ok(config)
            }
            None => Ok(Self::default()),
        }
    }

    /// Loads configuration from a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use plank_config::Config;
    ///
    /// # fn example() -> plank_config::Result<()> {
    /// let config = Config::load_from("custom-config.json5")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn load_from(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let config = read_config_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Saves the configuration to a file as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_to(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        write_config_file(path, self)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the poll interval is zero or above ten seconds.
    ///
    /// # Examples
    ///
    /// ```
    /// use plank_config::Config;
    ///
    /// let mut config = Config::default();
    /// assert!(config.validate().is_ok());
    ///
    /// config.poll_interval_ms = 0;
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        if self.poll_interval_ms < MIN_POLL_INTERVAL_MS {
            return Err(ConfigError::InvalidPollInterval {
                reason: format!(
                    "{} ms is below the minimum of {MIN_POLL_INTERVAL_MS} ms",
                    self.poll_interval_ms
                ),
            });
        }
        if self.poll_interval_ms > MAX_POLL_INTERVAL_MS {
            return Err(ConfigError::InvalidPollInterval {
                reason: format!(
                    "{} ms is above the maximum of {MAX_POLL_INTERVAL_MS} ms",
                    self.poll_interval_ms
                ),
            });
        }
        Ok(())
    }
}
