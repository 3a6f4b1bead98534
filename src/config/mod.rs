//! Configuration system for whatunga.
//!
//! This module provides the configuration structure for the whatunga shell with
//! sensible defaults and support for serialization/deserialization via serde.
//! Configuration is loaded from `~/.config/whatunga/config.toml`.
//!
//! # Example
//!
//! ```
//! use whatunga::config::Config;
//!
//! // Use default configuration
//! let config = Config::default();
//! assert_eq!(config.history_size, 500);
//! assert_eq!(config.indent_size, 2);
//!
//! // Create custom configuration
//! let custom = Config {
//!     indent_size: 4,
//!     create_backup: true,
//!     ..Config::default()
//! };
//! assert!(custom.completion_list);
//! ```

use std::path::{Path, PathBuf};

use log::warn;
use serde::{Deserialize, Serialize};

/// Configuration for the whatunga shell.
///
/// # Fields
///
/// * `history_file` - Where the command history is kept (default: `~/.whatunga_history`)
/// * `history_size` - Maximum number of history entries (default: 500)
/// * `indent_size` - Spaces per indentation level in `whatunga.json` and `ls` output (default: 2)
/// * `create_backup` - Create `.bak` files before saving the project (default: false)
/// * `completion_list` - List all candidates on ambiguous completion instead of cycling (default: true)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// History file; unset means `~/.whatunga_history`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history_file: Option<String>,

    /// Maximum number of history entries
    #[serde(default = "default_history_size")]
    pub history_size: usize,

    /// Number of spaces per indentation level
    #[serde(default = "default_indent_size")]
    pub indent_size: usize,

    /// Create .bak files before saving
    #[serde(default)]
    pub create_backup: bool,

    /// List candidates on ambiguous completion
    #[serde(default = "default_completion_list")]
    pub completion_list: bool,
}

fn default_history_size() -> usize {
    500
}

fn default_indent_size() -> usize {
    2
}

fn default_completion_list() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            history_file: None,
            history_size: default_history_size(),
            indent_size: default_indent_size(),
            create_backup: false,
            completion_list: default_completion_list(),
        }
    }
}

impl Config {
    /// Returns the path to the config file.
    ///
    /// Uses `~/.config/whatunga/config.toml` on all platforms.
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|mut path| {
            path.push(".config");
            path.push("whatunga");
            path.push("config.toml");
            path
        })
    }

    /// Loads configuration from the default config file.
    ///
    /// Returns the default configuration if the file doesn't exist or can't be read.
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(path),
            None => Self::default(),
        }
    }

    /// Loads configuration from `path`, falling back to defaults.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents).unwrap_or_else(|err| {
                warn!("Ignoring malformed config {}: {}", path.display(), err);
                Self::default()
            }),
            Err(err) => {
                warn!("Unable to read config {}: {}", path.display(), err);
                Self::default()
            }
        }
    }

    /// The history file, with a leading `~/` expanded.
    pub fn history_path(&self) -> Option<PathBuf> {
        match &self.history_file {
            Some(file) => match file.strip_prefix("~/") {
                Some(rest) => dirs::home_dir().map(|home| home.join(rest)),
                None => Some(PathBuf::from(file)),
            },
            None => dirs::home_dir().map(|home| home.join(".whatunga_history")),
        }
    }
}
