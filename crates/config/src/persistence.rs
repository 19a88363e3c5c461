//! Configuration file reading and writing.
//!
//! This module handles locating, loading, and saving configuration files.
//!
//! # File Formats
//!
//! Both JSON5 and JSON are supported for reading:
//!
//! - JSON5 (`.json5`): Preferred format with comments and trailing commas
//! - JSON (`.json`): Standard JSON format
//!
//! Writes always produce pretty-printed JSON, since `serde_json5` does not
//! serialize to JSON5.
//!
//! # File Locations
//!
//! Configuration is searched in the following order:
//!
//! 1. Local: `./trellis.json5` or `./trellis.json`
//! 2. User: `~/.config/trellis/config.json5` or `~/.config/trellis/config.json`

use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// Local configuration file names, in priority order.
const LOCAL_FILE_NAMES: &[&str] = &["trellis.json5", "trellis.json"];

/// User config directory name under the platform config root.
const USER_CONFIG_DIR: &str = "trellis";

/// User config file names, in priority order.
const USER_FILE_NAMES: &[&str] = &["config.json5", "config.json"];

/// Finds the first existing configuration file.
///
/// Local files win over the user config directory so a project checkout can
/// carry its own settings.
///
/// # Examples
///
/// ```no_run
/// use trellis_config::persistence::find_config_file;
///
/// if let Some(path) = find_config_file() {
///     println!("Found config at: {}", path.display());
/// }
/// ```
#[must_use]
pub fn find_config_file() -> Option<PathBuf> {
    for name in LOCAL_FILE_NAMES {
        let path = PathBuf::from(name);
        if path.exists() {
            return Some(path);
        }
    }

    if let Some(dir) = dirs::config_dir() {
        let user_dir = dir.join(USER_CONFIG_DIR);
        for name in USER_FILE_NAMES {
            let path = user_dir.join(name);
            if path.exists() {
                return Some(path);
            }
        }
    }

    None
}

/// Returns the default user configuration file path.
///
/// This is typically `~/.config/trellis/config.json5` on Unix systems.
///
/// # Errors
///
/// Returns an error if the platform config directory cannot be determined.
pub fn default_user_config_path() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join(USER_CONFIG_DIR).join(USER_FILE_NAMES[0]))
        .ok_or(ConfigError::NoHomeDirectory)
}

/// Reads and parses a configuration file (JSON5 or JSON).
///
/// # Errors
///
/// Returns an error if the file cannot be read or its content cannot be
/// parsed.
///
/// # Examples
///
/// ```no_run
/// use trellis_config::persistence::read_config_file;
/// use trellis_config::Config;
///
/// # fn main() -> trellis_config::Result<()> {
/// let config: Config = read_config_file("trellis.json5")?;
/// # Ok(())
/// # }
/// ```
pub fn read_config_file<T: serde::de::DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    // The JSON5 parser handles both JSON5 and plain JSON
    serde_json5::from_str(&content).map_err(ConfigError::from)
}

/// Writes a configuration to a file as pretty-printed JSON.
///
/// Parent directories are created if missing.
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created, the value
/// cannot be serialized, or the file cannot be written.
pub fn write_config_file<T: serde::Serialize>(path: impl AsRef<Path>, config: &T) -> Result<()> {
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
