//! Configuration loading traits and types.
//!
//! This module provides a standardized way to load TOML configuration
//! files across the ROVA applications, plus the configuration types for
//! the HAL binary and the mock backends.
//!
//! # Usage
//!
//! ```rust,no_run
//! use rova_common::config::{ConfigLoader, HalConfig};
//! use std::path::Path;
//!
//! let config = HalConfig::load(Path::new("rova.toml")).unwrap();
//! println!("Environment: {}", config.environment);
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

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
    /// The level as a `tracing_subscriber` filter directive string.
    pub fn as_filter_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Common configuration fields shared across ROVA applications.
///
/// # TOML Example
///
/// ```toml
/// [shared]
/// log_level = "debug"
/// service_name = "rova-hal-01"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SharedConfig {
    /// Logging verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Application instance identifier.
    pub service_name: String,
}

impl SharedConfig {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValidationError` if `service_name` is empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.service_name.is_empty() {
            return Err(ConfigError::ValidationError(
                "service_name cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for SharedConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::default(),
            service_name: "rova-hal".to_string(),
        }
    }
}

/// Settings for the shipped mock backends.
///
/// # TOML Example
///
/// ```toml
/// [mock]
/// boards = 3
/// default_led_state = true
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MockConfig {
    /// Number of boards the mock backend reports from discovery.
    #[serde(default = "default_mock_boards")]
    pub boards: usize,

    /// LED state reported before any write has happened.
    #[serde(default = "default_led_state")]
    pub default_led_state: bool,
}

impl MockConfig {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValidationError` if `boards` is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.boards == 0 {
            return Err(ConfigError::ValidationError(
                "mock backend must expose at least one board".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            boards: default_mock_boards(),
            default_led_state: default_led_state(),
        }
    }
}

fn default_mock_boards() -> usize {
    3
}

fn default_led_state() -> bool {
    true
}

/// Top-level configuration for the HAL binary.
///
/// # TOML Example
///
/// ```toml
/// [shared]
/// service_name = "rova-hal-01"
///
/// environment = "mock"
///
/// [mock]
/// boards = 3
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HalConfig {
    /// Shared application fields.
    #[serde(default)]
    pub shared: SharedConfig,

    /// Name of the environment to build at startup.
    #[serde(default = "default_environment")]
    pub environment: String,

    /// Mock backend settings.
    #[serde(default)]
    pub mock: MockConfig,
}

impl HalConfig {
    /// Validate the configuration and every embedded section.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValidationError` if the environment name is
    /// empty or any section fails its own validation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.shared.validate()?;
        if self.environment.is_empty() {
            return Err(ConfigError::ValidationError(
                "environment cannot be empty".to_string(),
            ));
        }
        self.mock.validate()?;
        Ok(())
    }
}

impl Default for HalConfig {
    fn default() -> Self {
        Self {
            shared: SharedConfig::default(),
            environment: default_environment(),
            mock: MockConfig::default(),
        }
    }
}

fn default_environment() -> String {
    "mock".to_string()
}

/// Trait for loading configuration from TOML files.
///
/// # Contract
///
/// - Returns `ConfigError::FileNotFound` if the file does not exist
/// - Returns `ConfigError::ParseError` if TOML syntax is invalid
pub trait ConfigLoader: Sized + serde::de::DeserializeOwned {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// See the trait-level contract. Semantic validation is a separate
    /// step; call `validate()` on the loaded value.
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

// Blanket implementation for all types that implement DeserializeOwned.
impl<T: Sized + serde::de::DeserializeOwned> ConfigLoader for T {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = HalConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.environment, "mock");
        assert_eq!(config.mock.boards, 3);
        assert!(config.mock.default_led_state);
    }

    #[test]
    fn empty_service_name_rejected() {
        let config = HalConfig {
            shared: SharedConfig {
                log_level: LogLevel::Info,
                service_name: String::new(),
            },
            ..HalConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn zero_mock_boards_rejected() {
        let config = HalConfig {
            mock: MockConfig {
                boards: 0,
                default_led_state: true,
            },
            ..HalConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn log_level_filter_strings() {
        assert_eq!(LogLevel::Debug.as_filter_str(), "debug");
        assert_eq!(LogLevel::default().as_filter_str(), "info");
    }
}
