//! Error types for the trellis-protocol crate.
//!
//! This module defines the error types that can occur when mutating the
//! item registry. Malformed drag payloads are deliberately not represented
//! here: the drop-target contract absorbs them silently.

use thiserror::Error;

use crate::item::ItemId;

/// Errors that can occur during registry operations.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// A transfer referenced an item id absent from the registry.
    #[error("item not found: {0}")]
    NotFound(ItemId),

    /// A mutation was attempted from inside an active notification pass.
    #[error("registry mutated re-entrantly during notification")]
    ReentrantMutation,
}

/// A specialized Result type for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;
