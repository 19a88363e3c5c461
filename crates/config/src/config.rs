//! Core configuration struct and loading logic.
//!
//! This module provides the main [`Config`] struct which aggregates all
//! configuration options for the trellis application.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::persistence::{find_config_file, read_config_file, write_config_file};

/// Default event poll interval in milliseconds.
const DEFAULT_TICK_RATE_MS: u64 = 100;

/// Upper bound on the poll interval; anything slower makes the UI feel dead.
const MAX_TICK_RATE_MS: u64 = 2_000;

/// The main configuration struct for the trellis application.
///
/// # Examples
///
/// ```
/// use trellis_config::Config;
///
/// // Defaults: 100ms tick, mouse capture on, no demo data
/// let config = Config::default();
/// assert!(config.mouse);
/// assert!(!config.demo);
///
/// let config = Config {
///     tick_rate_ms: 250,
///     mouse: false,
///     demo: true,
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// How often the event loop polls for input, in milliseconds.
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// Whether to capture mouse events for pointer-driven dragging.
    ///
    /// Keyboard grab-and-drop works either way.
    #[serde(default = "default_true")]
    pub mouse: bool,

    /// Whether to seed the board with sample items on startup.
    #[serde(default)]
    pub demo: bool,
}

fn default_tick_rate_ms() -> u64 {
    DEFAULT_TICK_RATE_MS
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_rate_ms: DEFAULT_TICK_RATE_MS,
            mouse: true,
            demo: false,
        }
    }
}

impl Config {
    /// Creates a new configuration with defaults.
    ///
    /// This is equivalent to `Config::default()`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from the default file locations.
    ///
    /// Searches local files first (`./trellis.json5`, `./trellis.json`),
    /// then the user config directory. Returns defaults if no file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file is found but cannot be
    /// read, parsed, or validated.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use trellis_config::Config;
    ///
    /// # fn example() -> trellis_config::Result<()> {
    /// let config = Config::load()?;
    /// println!("tick rate: {}ms", config.tick_rate_ms);
    /// # Ok(())
    /// # }
    /// ```
    pub fn load() -> Result<Self> {
        match find_config_file() {
            Some(path) => Self::load_from(path),
            None => Ok(Self::default()),
        }
    }

    /// Loads configuration from a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated.
    pub fn load_from(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let config: Self = read_config_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Saves the configuration to a file.
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
    /// Returns an error if the tick rate is zero or implausibly slow.
    ///
    /// # Examples
    ///
    /// ```
    /// use trellis_config::Config;
    ///
    /// let mut config = Config::default();
    /// assert!(config.validate().is_ok());
    ///
    /// config.tick_rate_ms = 0;
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        if self.tick_rate_ms == 0 {
            return Err(ConfigError::InvalidTickRate {
                reason: "must be positive".to_string(),
            });
        }
        if self.tick_rate_ms > MAX_TICK_RATE_MS {
            return Err(ConfigError::InvalidTickRate {
                reason: format!("must be at most {MAX_TICK_RATE_MS}ms"),
            });
        }
        Ok(())
    }

    /// Returns the poll interval as a [`std::time::Duration`].
    #[must_use]
    pub const fn tick_rate(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.tick_rate_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.tick_rate_ms, DEFAULT_TICK_RATE_MS);
    }

    #[test]
    fn zero_tick_rate_is_rejected() {
        let config = Config {
            tick_rate_ms: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidTickRate { .. })
        ));
    }

    #[test]
    fn excessive_tick_rate_is_rejected() {
        let config = Config {
            tick_rate_ms: 60_000,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: Config = serde_json5::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn partial_file_overrides_only_named_fields() {
        let config: Config = serde_json5::from_str("{ demo: true }").unwrap();
        assert!(config.demo);
        assert_eq!(config.tick_rate_ms, DEFAULT_TICK_RATE_MS);
        assert!(config.mouse);
    }

    #[test]
    fn save_and_reload_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");

        let original = Config {
            tick_rate_ms: 250,
            mouse: false,
            demo: true,
        };

        original.save_to(&path).unwrap();
        let loaded = Config::load_from(&path).unwrap();

        assert_eq!(original, loaded);
    }

    #[test]
    fn load_from_rejects_invalid_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json5");
        std::fs::write(&path, "{ tick_rate_ms: 0 }").unwrap();

        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn tick_rate_duration_conversion() {
        let config = Config {
            tick_rate_ms: 250,
            ..Default::default()
        };
        assert_eq!(config.tick_rate(), std::time::Duration::from_millis(250));
    }
}
