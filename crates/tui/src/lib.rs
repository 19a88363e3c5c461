//! Terminal UI for the trellis application.
//!
//! This crate provides a Ratatui-based terminal interface for the project
//! board: two status columns, a new-item form, and drag-and-drop between
//! columns driven by either the mouse or the keyboard.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`app`]: Main application struct and run loop
//! - [`state`]: Application state management
//! - [`form_state`]: New-item form state management
//! - [`terminal`]: Terminal setup, teardown, and panic handling
//! - [`event`]: Event polling and key mappings
//! - [`layout`]: Shared layout measurements
//! - [`widgets`]: Rendering functions for every visual component
//!
//! # Example
//!
//! ```no_run
//! use trellis_protocol::Registry;
//! use trellis_tui::{App, terminal};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     terminal::install_panic_hook();
//!     let mut terminal = terminal::setup_terminal(true)?;
//!
//!     let mut app = App::new(Registry::shared());
//!     let result = app.run(&mut terminal).await;
//!
//!     terminal::restore_terminal(&mut terminal)?;
//!     result
//! }
//! ```

pub mod app;
pub mod event;
pub mod form_state;
pub mod layout;
pub mod state;
pub mod terminal;
pub mod widgets;

// Re-export primary types at crate root for convenience
pub use app::App;
pub use form_state::{FormField, FormState, InputBuffer};
pub use state::AppState;
