//! Board rendering widget.
//!
//! This module provides functions for rendering the complete project board
//! with one column per status, arranged horizontally. The column split is
//! exposed separately so pointer hit-testing agrees with rendering about
//! where each listing is.

use std::rc::Rc;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
};
use trellis_protocol::{ItemId, Listing};

use super::listing::{ListingPosition, render_listing};

/// Splits a board area into equal-width columns, one per listing.
///
/// Both [`render_board`] and pointer hit-testing use this split.
///
/// # Examples
///
/// ```
/// use ratatui::layout::Rect;
/// use trellis_tui::widgets::column_areas;
///
/// let areas = column_areas(Rect::new(0, 0, 80, 20), 2);
/// assert_eq!(areas.len(), 2);
/// assert_eq!(areas[0].width + areas[1].width, 80);
/// ```
#[must_use]
pub fn column_areas(area: Rect, count: usize) -> Vec<Rect> {
    if count == 0 {
        return Vec::new();
    }
    let percentage = (100 / count) as u16;
    let constraints: Vec<Constraint> = (0..count)
        .map(|_| Constraint::Percentage(percentage))
        .collect();

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area)
        .to_vec()
}

/// Renders the complete board to the buffer.
///
/// Each listing gets an equal-width column with the focused column and
/// selected row highlighted; the item carried by an active drag is dimmed
/// in place.
///
/// # Arguments
///
/// * `listings` - The per-status listings, in display order
/// * `focused` - Index of the currently focused column
/// * `selected_row` - Index of the selected row within the focused column
/// * `dragged` - Id of the item carried by an active drag, if any
/// * `area` - The rectangular area to render into
/// * `buf` - The buffer to render into
///
/// # Layout
///
/// ```text
/// +-----------------+-----------------+
/// | Active (2)      | Finished (1)    |
/// +-----------------+-----------------+
/// | Item 1          | Item 3          |
/// | Item 2          |                 |
/// +-----------------+-----------------+
/// ```
pub fn render_board(
    listings: &[Rc<Listing>],
    focused: usize,
    selected_row: Option<usize>,
    dragged: Option<ItemId>,
    area: Rect,
    buf: &mut Buffer,
) {
    let areas = column_areas(area, listings.len());
    let count = listings.len();

    for (i, listing) in listings.iter().enumerate() {
        let is_focused = focused == i;

        // Only show the row selection in the focused column
        let row_selection = if is_focused { selected_row } else { None };

        let position = if i == 0 {
            ListingPosition::First
        } else if i == count - 1 {
            ListingPosition::Last
        } else {
            ListingPosition::Middle
        };

        // Check if the previous column is focused (for shared border coloring)
        let prev_focused = i > 0 && focused == i - 1;

        render_listing(
            listing,
            is_focused,
            row_selection,
            dragged,
            areas[i],
            buf,
            position,
            prev_focused,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::tests_support::buffer_to_string;
    use trellis_protocol::{Registry, Status};

    fn attached_listings(registry: &Rc<Registry>) -> Vec<Rc<Listing>> {
        Status::all()
            .iter()
            .map(|status| Listing::attach(registry, *status))
            .collect()
    }

    #[test]
    fn render_empty_board() {
        let registry = Registry::shared();
        let listings = attached_listings(&registry);
        let area = Rect::new(0, 0, 60, 20);
        let mut buf = Buffer::empty(area);

        render_board(&listings, 0, None, None, area, &mut buf);

        let content = buffer_to_string(&buf);
        assert!(content.contains("Active"));
        assert!(content.contains("Finished"));
    }

    #[test]
    fn render_board_with_items() {
        let registry = Registry::shared();
        let listings = attached_listings(&registry);
        registry.add("Item 1", "First item", 2).expect("add");
        let id = registry.add("Item 2", "Second item", 1).expect("add");
        registry.transfer(id, Status::Finished).expect("transfer");

        let area = Rect::new(0, 0, 60, 20);
        let mut buf = Buffer::empty(area);

        render_board(&listings, 0, Some(0), None, area, &mut buf);

        let content = buffer_to_string(&buf);
        assert!(content.contains("Active (1)"));
        assert!(content.contains("Finished (1)"));
        assert!(content.contains("Item 1"));
        assert!(content.contains("Item 2"));
    }

    #[test]
    fn render_board_narrow_terminal() {
        let registry = Registry::shared();
        let listings = attached_listings(&registry);
        let area = Rect::new(0, 0, 30, 8);
        let mut buf = Buffer::empty(area);

        // Should not panic with a narrow area
        render_board(&listings, 0, None, None, area, &mut buf);
    }

    #[test]
    fn column_areas_tile_the_board() {
        let area = Rect::new(0, 0, 80, 20);
        let areas = column_areas(area, 2);

        assert_eq!(areas.len(), 2);
        assert_eq!(areas[0].x, 0);
        assert_eq!(areas[0].width, 40);
        assert_eq!(areas[1].x, 40);
        assert_eq!(areas[1].width, 40);
    }

    #[test]
    fn column_areas_empty_count() {
        assert!(column_areas(Rect::new(0, 0, 10, 10), 0).is_empty());
    }
}
