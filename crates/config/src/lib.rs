//! Configuration management for the trellis application.
//!
//! This crate handles loading, validating, and persisting configuration.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`config`]: Core configuration struct and loading logic
//! - [`persistence`]: Config file locating, reading, and writing
//! - [`error`]: Error types for configuration operations
//!
//! # Configuration Sources (Priority)
//!
//! Configuration is loaded from the first file found, highest priority
//! first:
//!
//! 1. Local config (`./trellis.json5` or `./trellis.json`)
//! 2. User config (`~/.config/trellis/config.json5` or `.json`)
//! 3. Built-in defaults
//!
//! # Examples
//!
//! ```no_run
//! use trellis_config::Config;
//!
//! # fn example() -> trellis_config::Result<()> {
//! let config = Config::load()?;
//! if config.demo {
//!     println!("demo mode on");
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod persistence;

// Re-export primary types at crate root for convenience
pub use config::Config;
pub use error::{ConfigError, Result};
