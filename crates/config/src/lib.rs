//! Configuration management for the plank application.
//!
//! This crate handles loading, validating, and persisting configuration
//! from files and built-in defaults.
//!
//! # Overview
//!
//! - [`config`]: Core configuration struct and loading logic
//! - [`persistence`]: Config file reading and writing
//! - [`error`]: Error types for configuration operations
//!
//! # Configuration Sources (Priority)
//!
//! 1. Local config (`./plank.json5` or `./plank.json`)
//! 2. User config (`~/.config/plank/config.json5` or `~/.config/plank/config.json`)
//! 3. Built-in defaults
//!
//! # Examples
//!
//! ```no_run
//! use plank_config::Config;
//!
//! # fn example() -> plank_config::Result<()> {
//! let config = Config::load()?;
//! println!("Polling every {} ms", config.poll_interval_ms);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod persistence;

// Re-export primary types at crate root for convenience
pub use config::Config;
pub use error::{ConfigError, Result};
