//! Status-filtered views over the registry.
//!
//! A [`Listing`] represents one status group. It subscribes to the registry
//! at construction, keeps a filtered copy of the latest snapshot for the
//! rendering collaborator to read, and implements the drop-target role of
//! the drag protocol scoped to its own status.
//!
//! Listings hold derived, read-only data only: the filtered list is
//! discarded and rebuilt from scratch on every notification. Collection
//! sizes are small, so there is no diffing.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::drag::{CONTENT_TYPE_TEXT, DragPayload, DropResponse, DropTarget};
use crate::error::Result;
use crate::item::{Item, ItemId, Status};
use crate::registry::Registry;

/// A view over the registry filtered to a single status.
///
/// Constructed with [`Listing::attach`], which subscribes it to the given
/// registry. The subscription holds the listing weakly: dropping every
/// strong handle silences the callback without unsubscribing.
///
/// # Examples
///
/// ```
/// use trellis_protocol::{Listing, Registry, Status};
///
/// let registry = Registry::shared();
/// let active = Listing::attach(&registry, Status::Active);
///
/// registry.add("Build API", "Design the REST API", 3).unwrap();
/// assert_eq!(active.items().len(), 1);
/// ```
pub struct Listing {
    status: Status,
    items: RefCell<Vec<Item>>,
    droppable: Cell<bool>,
    registry: Rc<Registry>,
}

impl std::fmt::Debug for Listing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listing")
            .field("status", &self.status)
            .field("items", &self.items)
            .field("droppable", &self.droppable)
            .finish()
    }
}

impl Listing {
    /// Creates a listing for one status and subscribes it to the registry.
    ///
    /// The listing is immediately synchronized with the registry's current
    /// contents; afterwards the subscription keeps it current.
    #[must_use]
    pub fn attach(registry: &Rc<Registry>, status: Status) -> Rc<Self> {
        let listing = Rc::new(Self {
            status,
            items: RefCell::new(Vec::new()),
            droppable: Cell::new(false),
            registry: Rc::clone(registry),
        });

        let weak = Rc::downgrade(&listing);
        registry.subscribe(move |snapshot| {
            if let Some(listing) = weak.upgrade() {
                listing.refresh(snapshot);
            }
        });
        listing.refresh(&registry.snapshot());

        listing
    }

    /// The status this listing represents. Fixed at construction.
    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    /// Returns a copy of the current filtered item list, in insertion order.
    #[must_use]
    pub fn items(&self) -> Vec<Item> {
        self.items.borrow().clone()
    }

    /// Returns the number of items currently in this status group.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    /// Returns `true` if this status group is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }

    /// Returns `true` while the listing shows its droppable affordance.
    #[must_use]
    pub fn is_droppable(&self) -> bool {
        self.droppable.get()
    }

    /// Rebuilds the filtered list from a registry snapshot.
    fn refresh(&self, snapshot: &[Item]) {
        let filtered: Vec<Item> = snapshot
            .iter()
            .filter(|item| item.status == self.status)
            .cloned()
            .collect();
        *self.items.borrow_mut() = filtered;
    }
}

impl DropTarget for Listing {
    fn drag_over(&self, content_type: &str) -> DropResponse {
        if content_type == CONTENT_TYPE_TEXT {
            self.droppable.set(true);
            DropResponse::Accept
        } else {
            DropResponse::Reject
        }
    }

    fn drag_leave(&self) {
        self.droppable.set(false);
    }

    fn drop_payload(&self, payload: &DragPayload) -> Result<Option<ItemId>> {
        // A drop only counts if this target accepted an "over" signal first,
        // and the affordance clears no matter how the drop resolves.
        if !self.droppable.replace(false) {
            return Ok(None);
        }
        if !payload.is_plain_text() {
            return Ok(None);
        }
        let Ok(id) = payload.data.parse::<ItemId>() else {
            tracing::warn!(data = %payload.data, "ignoring malformed drag payload");
            return Ok(None);
        };

        self.registry.transfer(id, self.status)?;
        Ok(Some(id))
    }
}
