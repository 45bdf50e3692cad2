//! core::config
//!
//! Configuration schema and loading.
//!
//! # Locations
//!
//! Searched in order, first match wins:
//! 1. An explicit path (the `--config` flag); it must exist
//! 2. `$MINIGIT_CONFIG` if set
//! 3. `$XDG_CONFIG_HOME/minigit/config.toml`
//! 4. `~/.minigit/config.toml`
//!
//! Missing config files are not an error; defaults are used.
//!
//! # Example
//!
//! ```no_run
//! use minigit::core::config::Config;
//!
//! let config = Config::load(None).unwrap();
//! println!("Prompt: {}", config.prompt());
//! println!("Banner: {}", config.banner());
//! ```

pub mod schema;

pub use schema::{ClientConfig, ReplConfig};

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default text of the operation prompt.
pub const DEFAULT_PROMPT: &str = "Enter operation and repository: ";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("config file not found: {0}")]
    NotFound(PathBuf),

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Loaded client configuration.
///
/// Accessors apply defaults for anything not configured.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Parsed configuration
    pub client: ClientConfig,
    /// Path the configuration was read from (if any)
    path: Option<PathBuf>,
}

impl Config {
    /// Wrap an already parsed configuration.
    pub fn new(client: ClientConfig) -> Self {
        Self { client, path: None }
    }

    /// Load configuration from `explicit` or the default locations.
    ///
    /// # Errors
    ///
    /// Returns an error if `explicit` does not exist, or if a config file
    /// exists but cannot be read, parsed, or validated.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            return Self::from_file(path);
        }

        match Self::discover() {
            Some(path) => Self::from_file(&path),
            None => Ok(Self::default()),
        }
    }

    /// Read, parse and validate a single config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let client: ClientConfig =
            toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        client.validate()?;

        Ok(Self {
            client,
            path: Some(path.to_path_buf()),
        })
    }

    /// Find the first existing config file in the default locations.
    fn discover() -> Option<PathBuf> {
        // 1. Check $MINIGIT_CONFIG
        if let Ok(path) = std::env::var("MINIGIT_CONFIG") {
            let path = PathBuf::from(path);
            if path.exists() {
                return Some(path);
            }
        }

        // 2. Check $XDG_CONFIG_HOME/minigit/config.toml
        if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
            let path = PathBuf::from(xdg_home).join("minigit/config.toml");
            if path.exists() {
                return Some(path);
            }
        }

        // 3. Check ~/.minigit/config.toml
        dirs::home_dir()
            .map(|home| home.join(".minigit/config.toml"))
            .filter(|path| path.exists())
    }

    fn repl(&self) -> Option<&ReplConfig> {
        self.client.repl.as_ref()
    }

    /// Whether to print the welcome banner.
    ///
    /// Defaults to `true` if not configured.
    pub fn banner(&self) -> bool {
        self.repl().and_then(|r| r.banner).unwrap_or(true)
    }

    /// Whether to list repositories before each prompt.
    ///
    /// Defaults to `true` if not configured.
    pub fn list_repositories(&self) -> bool {
        self.repl().and_then(|r| r.list_repositories).unwrap_or(true)
    }

    /// Text of the operation prompt.
    pub fn prompt(&self) -> &str {
        self.repl()
            .and_then(|r| r.prompt.as_deref())
            .unwrap_or(DEFAULT_PROMPT)
    }

    /// Path the configuration was loaded from.
    pub fn loaded_from(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}
