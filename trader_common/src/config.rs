//! Configuration loading traits and types.
//!
//! This module provides a standardized way to load TOML configuration files
//! for applications built on the common crate.
//!
//! # Usage
//!
//! ```rust,no_run
//! use trader_common::config::{CommonConfig, ConfigError, ConfigLoader};
//! use serde::Deserialize;
//! use std::path::Path;
//!
//! #[derive(Debug, Deserialize)]
//! struct MyAppConfig {
//!     common: CommonConfig,
//!     exchange: String,
//! }
//!
//! fn main() -> Result<(), ConfigError> {
//!     let config = MyAppConfig::load(Path::new("config.toml"))?;
//!     config.common.validate()?;
//!     config.common.apply()?;
//!     println!("Exchange: {}", config.exchange);
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

use crate::consts::DEFAULT_HTTP_TIMEOUT_SECS;
use crate::http;

/// Error type for configuration loading operations.
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// Configuration file not found at specified path.
    #[error("Configuration file not found")]
    FileNotFound,

    /// TOML parsing failed.
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    /// Semantic validation failed.
    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

/// Log level for application logging.
///
/// Uses lowercase serde values for TOML compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Most verbose, detailed tracing information.
    Trace,
    /// Debug information useful during development.
    Debug,
    /// General information about application operation.
    #[default]
    Info,
    /// Warning messages for potentially problematic situations.
    Warn,
    /// Error messages for serious problems.
    Error,
}

impl LogLevel {
    /// Directive string understood by `tracing_subscriber::EnvFilter`.
    pub const fn as_filter(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

fn default_http_timeout_secs() -> u64 {
    DEFAULT_HTTP_TIMEOUT_SECS
}

/// Settings shared by every application that uses this crate.
///
/// # TOML Example
///
/// ```toml
/// [common]
/// log_level = "debug"
/// http_timeout_secs = 30
/// user_agent = "tradebot/1.0"
/// data_dir = "/var/lib/tradebot"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommonConfig {
    /// Logging verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Timeout for outbound HTTP requests, in seconds.
    #[serde(default = "default_http_timeout_secs")]
    pub http_timeout_secs: u64,

    /// User agent sent with outbound HTTP requests.
    #[serde(default)]
    pub user_agent: Option<String>,

    /// Overrides the platform default data directory.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

impl Default for CommonConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::default(),
            http_timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
            user_agent: None,
            data_dir: None,
        }
    }
}

impl CommonConfig {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValidationError` if:
    /// - `http_timeout_secs` is zero
    /// - `user_agent` is set but empty
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.http_timeout_secs == 0 {
            return Err(ConfigError::ValidationError(
                "http_timeout_secs must be greater than zero".to_string(),
            ));
        }
        if self.user_agent.as_deref().is_some_and(str::is_empty) {
            return Err(ConfigError::ValidationError(
                "user_agent cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Data directory: the configured override, or the platform default.
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir
            .clone()
            .unwrap_or_else(crate::fs::get_default_data_dir)
    }

    /// Push the HTTP settings into the process-wide client.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValidationError` when the HTTP layer rejects a
    /// value.
    pub fn apply(&self) -> Result<(), ConfigError> {
        http::set_http_client_with_timeout(Duration::from_secs(self.http_timeout_secs))
            .map_err(|e| ConfigError::ValidationError(e.to_string()))?;
        if let Some(agent) = &self.user_agent {
            http::set_http_user_agent(agent)
                .map_err(|e| ConfigError::ValidationError(e.to_string()))?;
        }
        Ok(())
    }
}

/// Trait for loading configuration from TOML files.
///
/// Blanket-implemented for every `serde::de::DeserializeOwned` type.
///
/// # Contract
///
/// - Returns `ConfigError::FileNotFound` if the file does not exist
/// - Returns `ConfigError::ParseError` if TOML syntax is invalid
pub trait ConfigLoader: Sized + serde::de::DeserializeOwned {
    /// Load configuration from a TOML file.
    fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::FileNotFound
            } else {
                ConfigError::ParseError(e.to_string())
            }
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }
}

impl<T: serde::de::DeserializeOwned> ConfigLoader for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_log_level_default() {
        assert_eq!(LogLevel::default(), LogLevel::Info);
        assert_eq!(LogLevel::Warn.as_filter(), "warn");
    }

    #[test]
    fn test_log_level_deserialization() {
        #[derive(Debug, Deserialize, PartialEq)]
        struct TestWrapper {
            level: LogLevel,
        }

        for (raw, expected) in [
            ("trace", LogLevel::Trace),
            ("debug", LogLevel::Debug),
            ("info", LogLevel::Info),
            ("warn", LogLevel::Warn),
            ("error", LogLevel::Error),
        ] {
            let parsed: TestWrapper = toml::from_str(&format!("level = \"{raw}\"")).unwrap();
            assert_eq!(parsed.level, expected);
        }
    }

    #[test]
    fn test_common_config_validation_success() {
        assert!(CommonConfig::default().validate().is_ok());
    }

    #[test]
    fn test_common_config_zero_timeout() {
        let config = CommonConfig {
            http_timeout_secs: 0,
            ..CommonConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_common_config_empty_user_agent() {
        let config = CommonConfig {
            user_agent: Some(String::new()),
            ..CommonConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_data_dir_override() {
        let config = CommonConfig {
            data_dir: Some(PathBuf::from("/srv/trader")),
            ..CommonConfig::default()
        };
        assert_eq!(config.data_dir(), PathBuf::from("/srv/trader"));
    }

    #[test]
    fn test_config_loader_file_not_found() {
        let result = CommonConfig::load(Path::new("/nonexistent/path/config.toml"));
        assert!(matches!(result, Err(ConfigError::FileNotFound)));
    }

    #[test]
    fn test_config_loader_parse_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "invalid toml {{{{").unwrap();

        let result = CommonConfig::load(file.path());
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_config_loader_defaults() {
        #[derive(Debug, Deserialize)]
        struct TestConfig {
            common: CommonConfig,
        }

        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[common]").unwrap();
        file.flush().unwrap();

        let config = TestConfig::load(file.path()).unwrap();
        assert_eq!(config.common, CommonConfig::default());
    }
}
