//! Shared protocol types for the trellis application.
//!
//! This crate defines the core of the project board: the item model, the
//! owning registry with its change-notification fan-out, status-filtered
//! listings, and the drag-initiated status-transition protocol. The TUI
//! crate renders these types but the core never depends on it.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`item`]: Item identifiers, lifecycle statuses, and the `Item` struct
//! - [`registry`]: The owning store and its subscription mechanism
//! - [`listing`]: Status-filtered views that double as drop targets
//! - [`drag`]: The drag session, payloads, and source/target contracts
//! - [`validate`]: The declarative input-validation contract
//! - [`message`]: TUI event messages
//! - [`demo`]: Sample data seeding
//! - [`error`]: Error types for registry operations
//!
//! # Examples
//!
//! Creating items and moving one across the board:
//!
//! ```
//! use trellis_protocol::{Listing, Registry, Status};
//!
//! // One registry per application, shared by handle.
//! let registry = Registry::shared();
//! let active = Listing::attach(&registry, Status::Active);
//! let finished = Listing::attach(&registry, Status::Finished);
//!
//! let id = registry.add("Build API", "Design the REST API", 3).unwrap();
//! assert_eq!(active.len(), 1);
//!
//! registry.transfer(id, Status::Finished).unwrap();
//! assert_eq!(active.len(), 0);
//! assert_eq!(finished.len(), 1);
//! ```

pub mod demo;
pub mod drag;
pub mod error;
pub mod item;
pub mod listing;
pub mod message;
pub mod registry;
pub mod validate;

// Re-export primary types at crate root for convenience
pub use drag::{
    CONTENT_TYPE_TEXT, DragPayload, DragSession, DragSource, DropResponse, DropTarget, ItemRow,
};
pub use error::{RegistryError, Result};
pub use item::{Item, ItemId, Status};
pub use listing::Listing;
pub use message::Message;
pub use registry::Registry;
pub use validate::{Constraints, Value, validate};
