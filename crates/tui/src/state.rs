//! Application state management.
//!
//! This module defines the core state structure for the TUI application:
//! the registry handle, the attached listings, the drag session, focus and
//! selection tracking, and overlay visibility.
//!
//! The keyboard drag drives the same three-message protocol as the pointer:
//! grabbing fires an "over" signal at the focused listing, moving focus
//! fires "leave"/"over" pairs, and dropping or cancelling ends the session.

use std::cell::Cell;
use std::rc::Rc;

use ratatui::layout::Rect;
use trellis_protocol::{
    DragSession, DropResponse, Item, ItemId, ItemRow, Listing, Registry, Status,
};

use crate::form_state::FormState;

/// The application state.
///
/// Contains all mutable state for the TUI application including the
/// registry handle, the per-status listings, drag state, and selection
/// tracking.
#[derive(Debug)]
pub struct AppState {
    /// Handle to the single owning store, shared with the listings.
    pub registry: Rc<Registry>,
    /// One listing per status, in [`Status::all`] order.
    pub listings: Vec<Rc<Listing>>,
    /// The drag state machine shared by pointer and keyboard gestures.
    pub drag: DragSession,
    /// Index of the listing currently hovered by an active drag, if any.
    pub drag_over: Option<usize>,
    /// Index of the currently focused listing.
    pub focused_listing: usize,
    /// Index of the selected row within the focused listing, if any.
    pub selected_row: Option<usize>,
    /// The new-item form, while open.
    pub form: Option<FormState>,
    /// Whether the detail panel is visible.
    pub detail_visible: bool,
    /// Scroll offset for the detail panel description.
    pub detail_scroll: u16,
    /// Whether the help overlay is visible.
    pub help_visible: bool,
    /// The board area from the last render, for pointer hit-testing.
    pub board_area: Cell<Rect>,
}

impl AppState {
    /// Creates a new application state around the given registry handle.
    ///
    /// Attaches one listing per status; the listings subscribe to the
    /// registry and stay current from here on.
    ///
    /// # Examples
    ///
    /// ```
    /// use trellis_protocol::Registry;
    /// use trellis_tui::AppState;
    ///
    /// let state = AppState::new(Registry::shared());
    /// assert_eq!(state.listings.len(), 2);
    /// assert_eq!(state.focused_listing, 0);
    /// ```
    #[must_use]
    pub fn new(registry: Rc<Registry>) -> Self {
        let listings = Status::all()
            .iter()
            .map(|status| Listing::attach(&registry, *status))
            .collect();

        Self {
            registry,
            listings,
            drag: DragSession::new(),
            drag_over: None,
            focused_listing: 0,
            selected_row: None,
            form: None,
            detail_visible: false,
            detail_scroll: 0,
            help_visible: false,
            board_area: Cell::new(Rect::default()),
        }
    }

    /// Returns the currently focused listing.
    ///
    /// # Panics
    ///
    /// Panics if `focused_listing` is out of bounds, which the navigation
    /// methods never allow.
    #[must_use]
    pub fn focused(&self) -> &Rc<Listing> {
        self.listings
            .get(self.focused_listing)
            .expect("focused_listing should always be in bounds")
    }

    /// Returns a copy of the currently selected item, if any.
    #[must_use]
    pub fn selected_item(&self) -> Option<Item> {
        let row = self.selected_row?;
        self.focused().items().get(row).cloned()
    }

    /// Moves the listing focus to the left, wrapping around.
    ///
    /// During an active drag the focus doubles as the drop candidate, so
    /// the old listing gets a "leave" signal and the new one an "over".
    pub fn navigate_left(&mut self) {
        let next = if self.focused_listing > 0 {
            self.focused_listing - 1
        } else {
            self.listings.len() - 1
        };
        self.set_focused_listing(next);
    }

    /// Moves the listing focus to the right, wrapping around.
    pub fn navigate_right(&mut self) {
        let next = if self.focused_listing + 1 < self.listings.len() {
            self.focused_listing + 1
        } else {
            0
        };
        self.set_focused_listing(next);
    }

    /// Moves the row selection up within the focused listing.
    pub fn navigate_up(&mut self) {
        let len = self.focused().len();
        if len == 0 {
            self.selected_row = None;
            return;
        }

        self.selected_row = match self.selected_row {
            Some(idx) if idx > 0 => Some(idx - 1),
            Some(_) => Some(len - 1), // Wrap to bottom
            None => Some(0),
        };
    }

    /// Moves the row selection down within the focused listing.
    pub fn navigate_down(&mut self) {
        let len = self.focused().len();
        if len == 0 {
            self.selected_row = None;
            return;
        }

        self.selected_row = match self.selected_row {
            Some(idx) if idx + 1 < len => Some(idx + 1),
            Some(_) => Some(0), // Wrap to top
            None => Some(0),
        };
    }

    /// Begins a drag of the selected row.
    ///
    /// The focused listing immediately receives an "over" signal: the
    /// gesture starts with the pointer over the source's own group.
    /// Returns `true` if a drag started.
    pub fn grab_selected(&mut self) -> bool {
        if self.drag.is_active() {
            return false;
        }
        let Some(item) = self.selected_item() else {
            return false;
        };

        let row = ItemRow::new(item);
        self.drag.begin(&row);
        self.hover_listing(Some(self.focused_listing));
        true
    }

    /// Retargets the drop candidate to the given listing, if any.
    ///
    /// Fires "leave" on the previous candidate and "over" on the new one.
    /// Does nothing when no drag is active.
    pub fn hover_listing(&mut self, index: Option<usize>) {
        if !self.drag.is_active() {
            return;
        }
        if self.drag_over == index {
            return;
        }

        if let Some(prev) = self.drag_over.take()
            && let Some(listing) = self.listings.get(prev)
        {
            self.drag.drag_leave(&**listing);
        }
        if let Some(next) = index
            && let Some(listing) = self.listings.get(next)
            && self.drag.drag_over(&**listing) == DropResponse::Accept
        {
            self.drag_over = Some(next);
        }
    }

    /// Drops the active drag on the current candidate listing.
    ///
    /// Returns the transferred item id, or `None` when nothing happened
    /// (no active drag, no candidate, or the payload was refused). A
    /// registry failure is logged and ends the gesture without mutating
    /// anything.
    pub fn drop_active(&mut self) -> Option<ItemId> {
        if !self.drag.is_active() {
            return None;
        }
        let Some(index) = self.drag_over.take() else {
            self.drag.cancel();
            return None;
        };
        let listing = Rc::clone(self.listings.get(index)?);

        let dropped = match self.drag.drop_on(&*listing) {
            Ok(dropped) => dropped,
            Err(err) => {
                tracing::warn!(%err, "drop failed");
                None
            }
        };
        self.clamp_row_selection();
        dropped
    }

    /// Cancels the active drag without mutating the registry.
    pub fn cancel_drag(&mut self) {
        self.hover_listing(None);
        self.drag.cancel();
    }

    /// Toggles the detail panel visibility.
    pub fn toggle_detail(&mut self) {
        self.detail_visible = !self.detail_visible;
        // Reset scroll when opening/closing
        self.detail_scroll = 0;
    }

    /// Scrolls the detail panel by the given delta.
    ///
    /// Positive delta scrolls down, negative scrolls up. The offset
    /// saturates at zero.
    pub fn scroll_detail(&mut self, delta: i16) {
        if delta > 0 {
            self.detail_scroll = self.detail_scroll.saturating_add(delta.unsigned_abs());
        } else {
            self.detail_scroll = self.detail_scroll.saturating_sub(delta.unsigned_abs());
        }
    }

    /// Toggles the help overlay visibility.
    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }

    /// Dismisses the help overlay if it is visible.
    ///
    /// Returns `true` if help was visible and has been dismissed.
    #[must_use]
    pub fn dismiss_help(&mut self) -> bool {
        if self.help_visible {
            self.help_visible = false;
            true
        } else {
            false
        }
    }

    /// Clears the current row selection.
    pub fn clear_selection(&mut self) {
        self.selected_row = None;
    }

    /// Changes the focused listing and keeps selection and drag state
    /// consistent with it.
    pub fn set_focused_listing(&mut self, index: usize) {
        if index >= self.listings.len() {
            return;
        }
        self.focused_listing = index;
        self.clamp_row_selection();
        if self.drag.is_active() {
            self.hover_listing(Some(index));
        }
    }

    /// Ensures the row selection is valid for the focused listing.
    pub fn clamp_row_selection(&mut self) {
        let len = self.focused().len();
        if len == 0 {
            self.selected_row = None;
        } else if let Some(idx) = self.selected_row
            && idx >= len
        {
            self.selected_row = Some(len - 1);
        }
    }

    /// The id carried by the active drag, for dimming the source row.
    #[must_use]
    pub fn dragged_id(&self) -> Option<ItemId> {
        self.drag.payload()?.data.parse().ok()
    }
}
