//! Listing column rendering widget.
//!
//! This module provides functions for rendering one status listing as a
//! board column: a header with the status name and count, the item cards,
//! and the droppable affordance while a drag hovers over it.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use trellis_protocol::{ItemId, ItemRow, Listing};

use super::item_card::render_item_card;
use crate::layout::CARD_HEIGHT;

/// Position of a listing in the horizontal layout.
///
/// Used to determine which borders to render for each column, enabling
/// collapsed borders between adjacent columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingPosition {
    /// First (leftmost) column - has left border with rounded corners.
    First,
    /// Middle columns - left border with T-connectors, no right border.
    Middle,
    /// Last (rightmost) column - both borders, rounded on the right.
    Last,
}

/// Border set for the first (leftmost) column: rounded corners on left, no right border.
const BORDER_SET_FIRST: border::Set = border::Set {
    top_left: "╭",
    top_right: "─", // No corner, just continues the line
    bottom_left: "╰",
    bottom_right: "─", // No corner, just continues the line
    vertical_left: "│",
    vertical_right: " ", // No right border
    horizontal_top: "─",
    horizontal_bottom: "─",
};

/// Border set for middle columns: T-connectors on left, no right border.
const BORDER_SET_MIDDLE: border::Set = border::Set {
    top_left: "┬",     // T-connector joining from previous column
    top_right: "─",    // No corner, just continues the line
    bottom_left: "┴",  // T-connector joining from previous column
    bottom_right: "─", // No corner, just continues the line
    vertical_left: "│",
    vertical_right: " ", // No right border
    horizontal_top: "─",
    horizontal_bottom: "─",
};

/// Border set for the last (rightmost) column: T-connectors on left, rounded on right.
const BORDER_SET_LAST: border::Set = border::Set {
    top_left: "┬",     // T-connector joining from previous column
    top_right: "╮",    // Rounded corner on outer edge
    bottom_left: "┴",  // T-connector joining from previous column
    bottom_right: "╯", // Rounded corner on outer edge
    vertical_left: "│",
    vertical_right: "│",
    horizontal_top: "─",
    horizontal_bottom: "─",
};

/// Renders a single listing column to the buffer.
///
/// A column displays its header (status name and item count) followed by a
/// vertical list of item cards. Empty listings show a placeholder message.
/// While a drag hovers over the listing its border turns into the
/// droppable affordance.
///
/// # Arguments
///
/// * `listing` - The listing to render
/// * `is_focused` - Whether this column currently has keyboard focus
/// * `selected_idx` - Index of the selected row within this column, if any
/// * `dragged` - Id of the item carried by an active drag, for dimming
/// * `area` - The rectangular area to render into
/// * `buf` - The buffer to render into
/// * `position` - The column's position, used to collapse shared borders
/// * `prev_focused` - Whether the previous (left) column is focused
///
/// # Layout
///
/// ```text
/// +----------------+
/// | Active (2)     |  <- Header with status name and count
/// +----------------+
/// | +------------+ |
/// | | Item 1     | |  <- Item cards
/// | | 3 persons  | |
/// | +------------+ |
/// +----------------+
/// ```
pub fn render_listing(
    listing: &Listing,
    is_focused: bool,
    selected_idx: Option<usize>,
    dragged: Option<ItemId>,
    area: Rect,
    buf: &mut Buffer,
    position: ListingPosition,
    prev_focused: bool,
) {
    // Determine border style: the droppable affordance wins over focus.
    let left_border_highlighted = is_focused || prev_focused;
    let border_style = if listing.is_droppable() {
        Style::default().fg(Color::Green)
    } else if is_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    // Create the column header
    let title = format!("{} ({})", listing.status().display_name(), listing.len());
    let title_style = if listing.is_droppable() {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    } else if is_focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    // Collapse borders between adjacent columns to avoid double-borders:
    // every column draws its left edge, only the last draws a right edge.
    let borders = match position {
        ListingPosition::First | ListingPosition::Middle => {
            Borders::TOP | Borders::BOTTOM | Borders::LEFT
        }
        ListingPosition::Last => Borders::ALL,
    };

    let border_set = match position {
        ListingPosition::First => BORDER_SET_FIRST,
        ListingPosition::Middle => BORDER_SET_MIDDLE,
        ListingPosition::Last => BORDER_SET_LAST,
    };

    let block = Block::default()
        .title(Span::styled(title, title_style))
        .borders(borders)
        .border_set(border_set)
        .border_style(border_style);

    // Render the outer block
    let inner_area = block.inner(area);
    block.render(area, buf);

    // If the left border should be highlighted (prev column is focused) but
    // this one isn't, recolor the shared edge rendered in gray above.
    if left_border_highlighted && !is_focused && !listing.is_droppable() && area.width > 0 {
        let highlight_style = Style::default().fg(Color::Cyan);
        let x = area.x;
        for y in area.y..area.y.saturating_add(area.height) {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_style(highlight_style);
            }
        }
    }

    // Handle empty listings
    if listing.is_empty() {
        render_empty_placeholder(inner_area, buf);
        return;
    }

    // Calculate how many cards fit in the visible area
    let visible_rows = (inner_area.height / CARD_HEIGHT).max(1) as usize;

    // Determine scroll offset to keep the selected row visible
    let items = listing.items();
    let scroll_offset = calculate_scroll_offset(selected_idx, items.len(), visible_rows);

    // Create constraints for visible cards
    let row_count = items.len().min(visible_rows);
    let mut constraints: Vec<Constraint> = (0..row_count)
        .map(|_| Constraint::Length(CARD_HEIGHT))
        .collect();
    constraints.push(Constraint::Min(0)); // Fill remaining space

    let card_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner_area);

    // Render visible cards; a fresh row wraps each item
    for (i, card_area) in card_areas.iter().take(row_count).enumerate() {
        let item_idx = scroll_offset + i;
        let Some(item) = items.get(item_idx) else {
            break;
        };

        let is_selected = is_focused && selected_idx == Some(item_idx);
        let is_dragged = dragged == Some(item.id);
        let row = ItemRow::new(item.clone());

        render_item_card(&row, is_selected, is_dragged, *card_area, buf);
    }
}

/// Renders a placeholder message for empty listings.
fn render_empty_placeholder(area: Rect, buf: &mut Buffer) {
    let placeholder = Paragraph::new(Line::from(Span::styled(
        "No items",
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
    )));

    placeholder.render(area, buf);
}

/// Calculates the scroll offset to keep the selected row visible.
///
/// Pointer hit-testing uses the same function so clicks land on the card
/// the user sees.
pub(crate) fn calculate_scroll_offset(
    selected_idx: Option<usize>,
    total_rows: usize,
    visible_rows: usize,
) -> usize {
    let Some(selected) = selected_idx else {
        return 0;
    };

    if total_rows <= visible_rows {
        return 0;
    }

    // Ensure the selected row is visible
    let max_offset = total_rows.saturating_sub(visible_rows);

    if selected < visible_rows / 2 {
        0
    } else {
        (selected.saturating_sub(visible_rows / 2)).min(max_offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::tests_support::buffer_to_string;
    use trellis_protocol::{CONTENT_TYPE_TEXT, DropTarget, Registry, Status};

    #[test]
    fn render_empty_listing() {
        let registry = Registry::shared();
        let listing = Listing::attach(&registry, Status::Active);
        let area = Rect::new(0, 0, 20, 15);
        let mut buf = Buffer::empty(area);

        render_listing(
            &listing,
            false,
            None,
            None,
            area,
            &mut buf,
            ListingPosition::First,
            false,
        );

        let content = buffer_to_string(&buf);
        assert!(content.contains("No items"));
        assert!(content.contains("Active (0)"));
    }

    #[test]
    fn render_listing_with_items() {
        let registry = Registry::shared();
        let listing = Listing::attach(&registry, Status::Active);
        registry.add("Item 1", "Description 1", 1).expect("add");
        registry.add("Item 2", "Description 2", 4).expect("add");

        let area = Rect::new(0, 0, 25, 15);
        let mut buf = Buffer::empty(area);

        render_listing(
            &listing,
            true,
            Some(0),
            None,
            area,
            &mut buf,
            ListingPosition::Last,
            false,
        );

        let content = buffer_to_string(&buf);
        assert!(content.contains("Active (2)"));
        assert!(content.contains("Item 1"));
        assert!(content.contains("1 person"));
        assert!(content.contains("4 persons"));
    }

    #[test]
    fn droppable_listing_renders_with_affordance() {
        let registry = Registry::shared();
        let listing = Listing::attach(&registry, Status::Finished);
        listing.drag_over(CONTENT_TYPE_TEXT);

        let area = Rect::new(0, 0, 20, 10);
        let mut buf = Buffer::empty(area);

        render_listing(
            &listing,
            false,
            None,
            None,
            area,
            &mut buf,
            ListingPosition::Last,
            false,
        );

        let cell = buf.cell((0, 0)).expect("cell");
        assert_eq!(cell.style().fg, Some(Color::Green));
    }

    #[test]
    fn scroll_offset_no_selection() {
        assert_eq!(calculate_scroll_offset(None, 10, 3), 0);
    }

    #[test]
    fn scroll_offset_all_visible() {
        assert_eq!(calculate_scroll_offset(Some(2), 3, 5), 0);
    }

    #[test]
    fn scroll_offset_selection_at_start() {
        assert_eq!(calculate_scroll_offset(Some(0), 10, 3), 0);
    }

    #[test]
    fn scroll_offset_selection_in_middle() {
        let offset = calculate_scroll_offset(Some(5), 10, 3);
        assert!(offset > 0);
        assert!(offset <= 7);
    }
}
