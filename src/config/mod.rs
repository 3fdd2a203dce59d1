//! Configuration management for pathcomp
//!
//! This module handles loading, parsing, and managing configuration from
//! various sources:
//! - Configuration files (TOML format)
//! - Command-line arguments
//!
//! Configuration precedence (highest to lowest):
//! 1. Command-line arguments
//! 2. Configuration file
//! 3. Default values
//!
//! The loaded [`Config`] is constructed once at startup and passed by value
//! into every operation; nothing here is globally mutable, so overlapping
//! completion requests never observe each other's settings.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{ConfigError, Result};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Search configuration
    #[serde(default)]
    pub search: SearchConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// External search invocation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Lister command and its arguments. The first element is the program
    /// name; a fuzzy pattern argument is appended per request.
    #[serde(default = "default_command")]
    pub command: Vec<String>,

    /// Hard timeout for the lister process in milliseconds
    #[serde(default = "default_timeout_millis")]
    pub timeout_millis: u64,

    /// Run the lister synchronously, blocking the caller for its full
    /// duration instead of racing it against the timeout
    #[serde(default = "default_blocking")]
    pub blocking: bool,
}

impl SearchConfig {
    /// Configured timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_millis)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: LogLevel,
}

/// Log level options
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Convert to the corresponding `tracing` level.
    pub fn to_tracing_level(self) -> tracing::Level {
        match self {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

// Default value functions
fn default_command() -> Vec<String> {
    // fd: recurse 20 levels, match case-insensitively, include hidden files
    vec![
        "fd".to_string(),
        "--max-depth".to_string(),
        "20".to_string(),
        "--ignore-case".to_string(),
        "--hidden".to_string(),
    ]
}

fn default_timeout_millis() -> u64 {
    1500
}

fn default_blocking() -> bool {
    false
}

fn default_log_level() -> LogLevel {
    LogLevel::Warn
}

impl Default for Config {
    fn default() -> Self {
        Self {
            search: SearchConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            command: default_command(),
            timeout_millis: default_timeout_millis(),
            blocking: default_blocking(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the config file
    ///
    /// # Returns
    /// * `Result<Config>` - Parsed configuration or error
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|_| ConfigError::FileNotFound(path.display().to_string()))?;
        let config: Config =
            toml::from_str(&content).map_err(|e| ConfigError::InvalidFormat(e.to_string()))?;
        Ok(config)
    }

    /// Load configuration with fallback to defaults.
    ///
    /// An explicit path must exist; the default location is optional and
    /// silently skipped when absent.
    ///
    /// # Arguments
    /// * `explicit` - Path given on the command line, if any
    ///
    /// # Returns
    /// * `Result<Config>` - Configuration, defaulted when no file applies
    pub fn load_or_default(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let default_path = Self::default_path();
        if default_path.is_file() {
            Self::load(default_path)
        } else {
            Ok(Config::default())
        }
    }

    /// Default config file location: `~/.pathcomp.toml`.
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".pathcomp.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_search_config() {
        let config = SearchConfig::default();
        assert_eq!(config.command[0], "fd");
        assert!(config.command.contains(&"--max-depth".to_string()));
        assert!(config.command.contains(&"20".to_string()));
        assert!(config.command.contains(&"--hidden".to_string()));
        assert_eq!(config.timeout_millis, 1500);
        assert!(!config.blocking);
    }

    #[test]
    fn test_timeout_duration() {
        let config = SearchConfig {
            timeout_millis: 250,
            ..SearchConfig::default()
        };
        assert_eq!(config.timeout(), Duration::from_millis(250));
    }

    #[test]
    fn test_parse_partial_toml() {
        let config: Config = toml::from_str(
            r#"
            [search]
            timeout_millis = 500
            "#,
        )
        .unwrap();

        // Unspecified fields fall back to defaults
        assert_eq!(config.search.timeout_millis, 500);
        assert_eq!(config.search.command[0], "fd");
        assert!(!config.search.blocking);
        assert_eq!(config.logging.level, LogLevel::Warn);
    }

    #[test]
    fn test_parse_full_toml() {
        let config: Config = toml::from_str(
            r#"
            [search]
            command = ["rg", "--files"]
            timeout_millis = 2000
            blocking = true

            [logging]
            level = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(config.search.command, vec!["rg", "--files"]);
        assert_eq!(config.search.timeout_millis, 2000);
        assert!(config.search.blocking);
        assert_eq!(config.logging.level, LogLevel::Debug);
    }

    #[test]
    fn test_load_missing_file_is_error() {
        let result = Config::load("/no/such/pathcomp.toml");
        assert!(result.is_err());
    }

    #[test]
    fn test_config_roundtrip() {
        let config = Config::default();
        let serialized = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed.search.command, config.search.command);
        assert_eq!(parsed.search.timeout_millis, config.search.timeout_millis);
    }

    #[test]
    fn test_log_level_mapping() {
        assert_eq!(LogLevel::Debug.to_tracing_level(), tracing::Level::DEBUG);
        assert_eq!(LogLevel::Error.to_tracing_level(), tracing::Level::ERROR);
    }
}
