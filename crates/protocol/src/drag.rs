//! The drag-initiated status-transition protocol.
//!
//! This module models drag-and-drop as a three-message exchange between a
//! drag source, a set of drop targets, and an explicit [`DragSession`],
//! independent of any UI toolkit:
//!
//! 1. `begin(payload)` — a source starts the session, encoding its item id
//!    as a text payload tagged [`CONTENT_TYPE_TEXT`].
//! 2. `drag_over(tag) -> accept | reject` — each candidate target inspects
//!    the tag as the pointer crosses it and marks itself droppable on a
//!    match.
//! 3. `drop_payload(payload) -> transition` — the accepting target reads
//!    the id back out of the payload and asks the registry to transfer the
//!    item to the target's own status.
//!
//! A target that never accepted ignores a drop even if one arrives, and a
//! foreign or unparseable payload is absorbed silently: dragging alien
//! content across the surface is normal, not an error.

use crate::error::Result;
use crate::item::{Item, ItemId};

/// The payload type tag recognized by the board's drop targets.
pub const CONTENT_TYPE_TEXT: &str = "text/plain";

/// The opaque payload carried by a drag session: a type tag plus text data.
///
/// # Examples
///
/// ```
/// use trellis_protocol::drag::{CONTENT_TYPE_TEXT, DragPayload};
///
/// let payload = DragPayload::plain_text("some-item-id");
/// assert_eq!(payload.content_type, CONTENT_TYPE_TEXT);
/// assert!(payload.is_plain_text());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragPayload {
    /// MIME-style type tag describing `data`.
    pub content_type: String,
    /// The payload text. For board rows this is the item id.
    pub data: String,
}

impl DragPayload {
    /// Creates a payload tagged [`CONTENT_TYPE_TEXT`].
    #[must_use]
    pub fn plain_text(data: impl Into<String>) -> Self {
        Self {
            content_type: CONTENT_TYPE_TEXT.to_string(),
            data: data.into(),
        }
    }

    /// Returns `true` if the payload carries the recognized text tag.
    #[must_use]
    pub fn is_plain_text(&self) -> bool {
        self.content_type == CONTENT_TYPE_TEXT
    }
}

/// The effect a drag source declares for its payload.
///
/// Only `Move` exists on this board: a drop relocates the item rather than
/// copying it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragEffect {
    /// The item moves to the drop target.
    #[default]
    Move,
}

/// A drop target's answer to an "over" signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropResponse {
    /// The target recognizes the payload tag and marks itself droppable.
    Accept,
    /// The target takes no action; the platform default (reject) stands.
    Reject,
}

/// The drag-source role: anything that can start a drag session.
pub trait DragSource {
    /// The payload this source contributes when a drag begins.
    fn payload(&self) -> DragPayload;

    /// The effect this source allows. Defaults to [`DragEffect::Move`].
    fn effect(&self) -> DragEffect {
        DragEffect::Move
    }
}

/// The drop-target role: anything a drag session can end on.
///
/// Implementations must re-validate the payload tag in
/// [`drop_payload`](DropTarget::drop_payload) even though
/// [`drag_over`](DropTarget::drag_over) already inspected it: the session
/// relies on the accept/reject answer being honored, but the drop handler
/// must not trust that it was.
pub trait DropTarget {
    /// Candidate signal: the pointer is over this target carrying a payload
    /// of the given type.
    fn drag_over(&self, content_type: &str) -> DropResponse;

    /// The pointer left this target without dropping.
    fn drag_leave(&self);

    /// The session ended on this target.
    ///
    /// Returns the id of the transferred item, or `Ok(None)` when the drop
    /// was ignored (target never accepted, foreign tag, unparseable id).
    ///
    /// # Errors
    ///
    /// Propagates registry failures for an accepted, well-formed payload.
    fn drop_payload(&self, payload: &DragPayload) -> Result<Option<ItemId>>;
}

/// The visual representation of a single item, acting as a drag source.
///
/// A row wraps exactly one item for its lifetime; listings rebuild their
/// rows from scratch on every render rather than reusing them.
///
/// # Examples
///
/// ```
/// use trellis_protocol::drag::{DragSource, ItemRow};
/// use trellis_protocol::Item;
///
/// let item = Item::new("Build API", "Design the REST API", 3);
/// let id = item.id;
/// let row = ItemRow::new(item);
///
/// assert_eq!(row.payload().data, id.to_string());
/// assert_eq!(row.item().people_label(), "3 persons");
/// ```
#[derive(Debug, Clone)]
pub struct ItemRow {
    item: Item,
}

impl ItemRow {
    /// Creates a row for the given item.
    #[must_use]
    pub fn new(item: Item) -> Self {
        Self { item }
    }

    /// The item this row represents.
    #[must_use]
    pub fn item(&self) -> &Item {
        &self.item
    }
}

impl DragSource for ItemRow {
    /// Encodes the item id as a plain-text payload.
    fn payload(&self) -> DragPayload {
        DragPayload::plain_text(self.item.id.to_string())
    }
}

/// The state of a drag gesture.
#[derive(Debug, Clone, Default)]
pub enum DragState {
    /// No drag in progress.
    #[default]
    Idle,
    /// A payload is in flight.
    Active {
        /// The payload contributed by the source at `begin` time.
        payload: DragPayload,
    },
}

/// An explicit drag session: the state machine driven by pointer events.
///
/// The session is entered and exited purely in response to input events;
/// there are no timers and no timeouts. A drag that never completes simply
/// stays active until an end event arrives.
///
/// # Examples
///
/// ```
/// use trellis_protocol::drag::{DragSession, ItemRow};
/// use trellis_protocol::Item;
///
/// let mut session = DragSession::new();
/// assert!(!session.is_active());
///
/// let row = ItemRow::new(Item::new("A", "B", 1));
/// session.begin(&row);
/// assert!(session.is_active());
///
/// session.cancel();
/// assert!(!session.is_active());
/// ```
#[derive(Debug, Clone, Default)]
pub struct DragSession {
    state: DragState,
}

impl DragSession {
    /// Creates an idle session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` while a payload is in flight.
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self.state, DragState::Active { .. })
    }

    /// The in-flight payload, if any.
    #[must_use]
    pub fn payload(&self) -> Option<&DragPayload> {
        match &self.state {
            DragState::Idle => None,
            DragState::Active { payload } => Some(payload),
        }
    }

    /// Starts a drag from the given source.
    ///
    /// Beginning while a session is already active replaces it: platform
    /// drag sessions are singular.
    pub fn begin(&mut self, source: &dyn DragSource) {
        self.state = DragState::Active {
            payload: source.payload(),
        };
    }

    /// Presents the in-flight payload's tag to a candidate target.
    ///
    /// Returns [`DropResponse::Reject`] when no drag is active.
    pub fn drag_over(&self, target: &dyn DropTarget) -> DropResponse {
        match &self.state {
            DragState::Idle => DropResponse::Reject,
            DragState::Active { payload } => target.drag_over(&payload.content_type),
        }
    }

    /// Signals the pointer leaving a candidate target without dropping.
    pub fn drag_leave(&self, target: &dyn DropTarget) {
        target.drag_leave();
    }

    /// Ends the session on the given target.
    ///
    /// The session returns to idle whether or not the target acted on the
    /// payload.
    ///
    /// # Errors
    ///
    /// Propagates registry failures from the target's drop handler.
    pub fn drop_on(&mut self, target: &dyn DropTarget) -> Result<Option<ItemId>> {
        match std::mem::take(&mut self.state) {
            DragState::Idle => Ok(None),
            DragState::Active { payload } => target.drop_payload(&payload),
        }
    }

    /// Ends the session with no drop. No registry mutation occurs.
    pub fn cancel(&mut self) {
        self.state = DragState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Status;
    use crate::listing::Listing;
    use crate::registry::Registry;

    #[test]
    fn payload_carries_item_id() {
        let item = Item::new("Test", "Description", 2);
        let id = item.id;
        let row = ItemRow::new(item);

        let payload = row.payload();
        assert!(payload.is_plain_text());
        assert_eq!(payload.data.parse::<ItemId>().expect("parse"), id);
    }

    #[test]
    fn row_declares_move_effect() {
        let row = ItemRow::new(Item::new("Test", "Description", 1));
        assert_eq!(row.effect(), DragEffect::Move);
    }

    #[test]
    fn session_starts_idle() {
        let session = DragSession::new();
        assert!(!session.is_active());
        assert!(session.payload().is_none());
    }

    #[test]
    fn begin_replaces_active_session() {
        let first = ItemRow::new(Item::new("First", "D", 1));
        let second = ItemRow::new(Item::new("Second", "D", 1));

        let mut session = DragSession::new();
        session.begin(&first);
        session.begin(&second);

        let payload = session.payload().expect("active");
        assert_eq!(payload.data, second.item().id.to_string());
    }

    #[test]
    fn drag_over_idle_session_rejects() {
        let registry = Registry::shared();
        let listing = Listing::attach(&registry, Status::Active);

        let session = DragSession::new();
        assert_eq!(session.drag_over(&*listing), DropResponse::Reject);
        assert!(!listing.is_droppable());
    }

    #[test]
    fn full_gesture_transfers_item() {
        let registry = Registry::shared();
        let finished = Listing::attach(&registry, Status::Finished);
        let id = registry.add("Test", "Description", 1).expect("add");

        let row = ItemRow::new(registry.get(id).expect("item"));
        let mut session = DragSession::new();
        session.begin(&row);

        assert_eq!(session.drag_over(&*finished), DropResponse::Accept);
        let dropped = session.drop_on(&*finished).expect("drop");

        assert_eq!(dropped, Some(id));
        assert!(!session.is_active());
        assert_eq!(registry.get(id).expect("item").status, Status::Finished);
    }

    #[test]
    fn drop_without_session_is_a_no_op() {
        let registry = Registry::shared();
        let finished = Listing::attach(&registry, Status::Finished);

        let mut session = DragSession::new();
        let dropped = session.drop_on(&*finished).expect("drop");
        assert_eq!(dropped, None);
    }

    #[test]
    fn cancel_leaves_registry_untouched() {
        let registry = Registry::shared();
        let id = registry.add("Test", "Description", 1).expect("add");

        let row = ItemRow::new(registry.get(id).expect("item"));
        let mut session = DragSession::new();
        session.begin(&row);
        session.cancel();

        assert!(!session.is_active());
        assert_eq!(registry.get(id).expect("item").status, Status::Active);
    }
}
