//! core::config
//!
//! Configuration schema and loading.
//!
//! # Precedence
//!
//! Configuration values are resolved in this order (later overrides earlier):
//! 1. Default values
//! 2. Config file
//! 3. CLI flags (not handled here)
//!
//! # Config Locations
//!
//! Searched in order:
//! 1. An explicit path (`--config`)
//! 2. `$CUBEWORK_CONFIG` if set
//! 3. `$XDG_CONFIG_HOME/cubework/config.toml`
//! 4. `~/.cubework/config.toml` (canonical write location)
//!
//! # Example
//!
//! ```no_run
//! use cubework::core::config::Config;
//!
//! let result = Config::load(None).unwrap();
//! let config = result.config;
//!
//! println!("Format: {}", config.view_format());
//! println!("Auto view: {}", config.session_auto_view());
//! ```

pub mod schema;

pub use schema::{GlobalConfig, SessionConfig, ViewConfig};

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "CUBEWORK_CONFIG";

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

    #[error("failed to write config file '{path}': {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config value: {0}")]
    InvalidValue(String),

    #[error("unknown config key: {0}")]
    UnknownKey(String),

    #[error("home directory not found")]
    NoHomeDir,
}

/// Warnings generated during config loading.
#[derive(Debug, Clone)]
pub struct ConfigWarning {
    /// The warning message.
    pub message: String,
    /// The path that triggered the warning.
    pub path: PathBuf,
}

/// Result of loading configuration.
#[derive(Debug)]
pub struct ConfigLoadResult {
    /// The loaded configuration.
    pub config: Config,
    /// Any warnings generated during loading.
    pub warnings: Vec<ConfigWarning>,
}

/// Loaded configuration with defaulting accessors.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// File contents (all fields optional)
    pub global: GlobalConfig,
    /// Path the config was loaded from, if any
    path: Option<PathBuf>,
}

/// Keys accepted by [`GlobalConfig::set_value`].
pub const KEYS: &[&str] = &[
    "view.format",
    "view.style",
    "view.empty",
    "session.prompt",
    "session.auto_view",
];

impl Config {
    /// Wrap already-parsed settings that did not come from a file.
    pub fn from_global(global: GlobalConfig) -> Self {
        Self { global, path: None }
    }

    /// Load configuration.
    ///
    /// An explicit path must exist; the standard locations are optional.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be read, parsed
    /// or validated.
    pub fn load(explicit: Option<&Path>) -> Result<ConfigLoadResult, ConfigError> {
        let mut warnings = Vec::new();

        let (global, path) = match explicit {
            Some(path) => (Self::read_global_config(path)?, Some(path.to_path_buf())),
            None => Self::load_global(&mut warnings)?,
        };

        global.validate()?;

        Ok(ConfigLoadResult {
            config: Config { global, path },
            warnings,
        })
    }

    /// Load configuration from the standard locations.
    fn load_global(
        warnings: &mut Vec<ConfigWarning>,
    ) -> Result<(GlobalConfig, Option<PathBuf>), ConfigError> {
        // 1. Check $CUBEWORK_CONFIG
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            let path = PathBuf::from(path);
            if path.exists() {
                let config = Self::read_global_config(&path)?;
                return Ok((config, Some(path)));
            }
            warnings.push(ConfigWarning {
                message: format!("${} points to a missing file, ignoring it", CONFIG_ENV),
                path,
            });
        }

        // 2. Check $XDG_CONFIG_HOME/cubework/config.toml
        if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
            let path = PathBuf::from(xdg_home).join("cubework/config.toml");
            if path.exists() {
                let config = Self::read_global_config(&path)?;
                return Ok((config, Some(path)));
            }
        }

        // 3. Check ~/.cubework/config.toml
        if let Some(home) = dirs::home_dir() {
            let path = home.join(".cubework/config.toml");
            if path.exists() {
                let config = Self::read_global_config(&path)?;
                return Ok((config, Some(path)));
            }
        }

        Ok((GlobalConfig::default(), None))
    }

    /// Read and parse a config file.
    fn read_global_config(path: &Path) -> Result<GlobalConfig, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Get the canonical path for the config file.
    ///
    /// Returns `~/.cubework/config.toml`.
    pub fn global_config_path() -> Result<PathBuf, ConfigError> {
        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
        Ok(home.join(".cubework/config.toml"))
    }

    /// Write config atomically to `path`.
    ///
    /// Creates parent directories if needed. Uses atomic write
    /// (write to temp file, then rename) to prevent corruption.
    pub fn write_to(path: &Path, config: &GlobalConfig) -> Result<(), ConfigError> {
        config.validate()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::WriteError {
                path: path.to_path_buf(),
                source: e,
            })?;
        }

        let contents =
            toml::to_string_pretty(config).map_err(|e| ConfigError::InvalidValue(e.to_string()))?;

        // Temp file in the same directory so the rename stays on one filesystem
        let temp_path = path.with_extension("toml.tmp");
        let mut file = fs::File::create(&temp_path).map_err(|e| ConfigError::WriteError {
            path: temp_path.clone(),
            source: e,
        })?;

        file.write_all(contents.as_bytes())
            .map_err(|e| ConfigError::WriteError {
                path: temp_path.clone(),
                source: e,
            })?;

        file.sync_all().map_err(|e| ConfigError::WriteError {
            path: temp_path.clone(),
            source: e,
        })?;

        fs::rename(&temp_path, path).map_err(|e| ConfigError::WriteError {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(())
    }

    // =========================================================================
    // Accessor methods with defaults
    // =========================================================================

    /// Net output format.
    ///
    /// Defaults to "text" if not configured.
    pub fn view_format(&self) -> &str {
        self.global
            .view
            .as_ref()
            .and_then(|v| v.format.as_deref())
            .unwrap_or("text")
    }

    /// Net text style.
    ///
    /// Defaults to "letters" if not configured.
    pub fn view_style(&self) -> &str {
        self.global
            .view
            .as_ref()
            .and_then(|v| v.style.as_deref())
            .unwrap_or("letters")
    }

    /// Character printed for empty net cells.
    ///
    /// Defaults to `' '` if not configured.
    pub fn view_empty(&self) -> char {
        self.global
            .view
            .as_ref()
            .and_then(|v| v.empty.as_deref())
            .and_then(|s| s.chars().next())
            .unwrap_or(' ')
    }

    /// Session prompt.
    ///
    /// Defaults to no prompt.
    pub fn session_prompt(&self) -> &str {
        self.global
            .session
            .as_ref()
            .and_then(|s| s.prompt.as_deref())
            .unwrap_or("")
    }

    /// Whether the session prints the net after every move.
    ///
    /// Defaults to `false` if not configured.
    pub fn session_auto_view(&self) -> bool {
        self.global
            .session
            .as_ref()
            .and_then(|s| s.auto_view)
            .unwrap_or(false)
    }

    /// Effective value of a dotted key, after defaults.
    pub fn get(&self, key: &str) -> Result<String, ConfigError> {
        let value = match key {
            "view.format" => self.view_format().to_string(),
            "view.style" => self.view_style().to_string(),
            "view.empty" => self.view_empty().to_string(),
            "session.prompt" => self.session_prompt().to_string(),
            "session.auto_view" => self.session_auto_view().to_string(),
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        };
        Ok(value)
    }

    /// Path the config was loaded from.
    pub fn loaded_from(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

impl GlobalConfig {
    /// Set a dotted key from its string form and re-validate.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnknownKey` for keys outside [`KEYS`] and
    /// `ConfigError::InvalidValue` if the value does not validate. The config
    /// is unchanged on error.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let mut updated = self.clone();
        match key {
            "view.format" => {
                updated.view.get_or_insert_with(Default::default).format = Some(value.into())
            }
            "view.style" => {
                updated.view.get_or_insert_with(Default::default).style = Some(value.into())
            }
            "view.empty" => {
                updated.view.get_or_insert_with(Default::default).empty = Some(value.into())
            }
            "session.prompt" => {
                updated.session.get_or_insert_with(Default::default).prompt = Some(value.into())
            }
            "session.auto_view" => {
                let flag = value.parse::<bool>().map_err(|_| {
                    ConfigError::InvalidValue(format!(
                        "session.auto_view must be true or false, got '{}'",
                        value
                    ))
                })?;
                updated.session.get_or_insert_with(Default::default).auto_view = Some(flag)
            }
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        updated.validate()?;
        *self = updated;
        Ok(())
    }
}
