//! Item-related types for the project board.
//!
//! This module defines the core item types used throughout the trellis
//! application, including item identifiers, lifecycle statuses, and the
//! item structure itself.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for an item.
///
/// Uses UUID v4 for globally unique identification.
pub type ItemId = uuid::Uuid;

/// The lifecycle status of an item.
///
/// Represents the closed set of states an item moves through on the board.
/// The order reflects the progression of work.
///
/// # Examples
///
/// ```
/// use trellis_protocol::Status;
///
/// let status = Status::Active;
/// assert_eq!(status.display_name(), "Active");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Items currently being worked on. New items start here.
    #[default]
    Active,
    /// Completed items.
    Finished,
}

impl Status {
    /// Returns all statuses in lifecycle order.
    ///
    /// # Examples
    ///
    /// ```
    /// use trellis_protocol::Status;
    ///
    /// let all = Status::all();
    /// assert_eq!(all.len(), 2);
    /// assert_eq!(all[0], Status::Active);
    /// ```
    #[must_use]
    pub const fn all() -> [Self; 2] {
        [Self::Active, Self::Finished]
    }

    /// Returns a human-readable display name for the status.
    ///
    /// # Examples
    ///
    /// ```
    /// use trellis_protocol::Status;
    ///
    /// assert_eq!(Status::Active.display_name(), "Active");
    /// assert_eq!(Status::Finished.display_name(), "Finished");
    /// ```
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Finished => "Finished",
        }
    }

    /// Returns the index of this status in the lifecycle (0-1).
    ///
    /// # Examples
    ///
    /// ```
    /// use trellis_protocol::Status;
    ///
    /// assert_eq!(Status::Active.index(), 0);
    /// assert_eq!(Status::Finished.index(), 1);
    /// ```
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Active => 0,
            Self::Finished => 1,
        }
    }

    /// Creates a `Status` from its index.
    ///
    /// Returns `None` if the index is out of range (>= 2).
    ///
    /// # Examples
    ///
    /// ```
    /// use trellis_protocol::Status;
    ///
    /// assert_eq!(Status::from_index(0), Some(Status::Active));
    /// assert_eq!(Status::from_index(2), None);
    /// ```
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Active),
            1 => Some(Self::Finished),
            _ => None,
        }
    }
}

/// An item tracked on the project board.
///
/// Represents a unit of work with a unique identifier, descriptive content,
/// a headcount, and a lifecycle status. Everything except the status is
/// immutable after creation; the status is mutated only by the
/// [`Registry`](crate::Registry) transition operation.
///
/// # Examples
///
/// ```
/// use trellis_protocol::{Item, Status};
///
/// let item = Item::new("Build API", "Design the REST API", 3);
/// assert_eq!(item.status, Status::Active);
/// assert_eq!(item.people, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier for this item.
    pub id: ItemId,
    /// Short summary of the work.
    pub title: String,
    /// Detailed description of what needs to be done.
    pub description: String,
    /// Number of people assigned. Always at least 1.
    pub people: u32,
    /// Current lifecycle status.
    pub status: Status,
    /// When this item was created.
    pub created_at: DateTime<Utc>,
}

impl Item {
    /// Creates a new item with the given title, description, and headcount.
    ///
    /// The item is created with a fresh id and [`Status::Active`].
    ///
    /// # Examples
    ///
    /// ```
    /// use trellis_protocol::Item;
    ///
    /// let item = Item::new("Fix login", "The login button is dead on mobile", 2);
    /// assert_eq!(item.title, "Fix login");
    /// ```
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>, people: u32) -> Self {
        Self {
            id: ItemId::new_v4(),
            title: title.into(),
            description: description.into(),
            people,
            status: Status::Active,
            created_at: Utc::now(),
        }
    }

    /// Creates a new item with a specific ID.
    ///
    /// Useful for tests that need deterministic identifiers.
    ///
    /// # Examples
    ///
    /// ```
    /// use trellis_protocol::{Item, ItemId};
    ///
    /// let id = ItemId::new_v4();
    /// let item = Item::with_id(id, "Test item", "Description", 1);
    /// assert_eq!(item.id, id);
    /// ```
    #[must_use]
    pub fn with_id(
        id: ItemId,
        title: impl Into<String>,
        description: impl Into<String>,
        people: u32,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            people,
            status: Status::Active,
            created_at: Utc::now(),
        }
    }

    /// Returns the headcount as display text.
    ///
    /// Singular for exactly one person, plural otherwise. Computed from
    /// `people` on every call, never cached.
    ///
    /// # Examples
    ///
    /// ```
    /// use trellis_protocol::Item;
    ///
    /// assert_eq!(Item::new("A", "B", 1).people_label(), "1 person");
    /// assert_eq!(Item::new("A", "B", 4).people_label(), "4 persons");
    /// ```
    #[must_use]
    pub fn people_label(&self) -> String {
        if self.people == 1 {
            "1 person".to_string()
        } else {
            format!("{} persons", self.people)
        }
    }
}
