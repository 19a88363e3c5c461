//! Cross-widget rendering tests.
//!
//! These tests render complete board states into buffers and assert on the
//! text output, covering interactions between widgets that the per-module
//! tests don't reach.

use std::rc::Rc;

use ratatui::{buffer::Buffer, layout::Rect};
use trellis_protocol::{CONTENT_TYPE_TEXT, DropTarget, Listing, Registry, Status};

use super::{render_board, render_status_bar};
use crate::widgets::tests_support::buffer_to_string;

/// Creates a registry with items in both statuses, plus attached listings.
fn sample_board() -> (Rc<Registry>, Vec<Rc<Listing>>) {
    let registry = Registry::shared();
    let listings = Status::all()
        .iter()
        .map(|status| Listing::attach(&registry, *status))
        .collect();

    registry
        .add("Design UI mockups", "Create wireframes for the new feature", 2)
        .expect("add");
    registry
        .add("Write specs", "Document requirements", 1)
        .expect("add");
    let shipped = registry
        .add("Setup CI", "Configure the pipeline", 3)
        .expect("add");
    registry
        .transfer(shipped, Status::Finished)
        .expect("transfer");

    (registry, listings)
}

#[test]
fn board_shows_items_under_their_status() {
    let (_registry, listings) = sample_board();
    let area = Rect::new(0, 0, 80, 24);
    let mut buf = Buffer::empty(area);

    render_board(&listings, 0, None, None, area, &mut buf);

    let content = buffer_to_string(&buf);
    assert!(content.contains("Active (2)"));
    assert!(content.contains("Finished (1)"));
    assert!(content.contains("Design UI mockups"));
    assert!(content.contains("Setup CI"));
}

#[test]
fn board_rerenders_after_transfer() {
    let (registry, listings) = sample_board();
    let area = Rect::new(0, 0, 80, 24);

    let first = registry.snapshot()[0].id;
    registry.transfer(first, Status::Finished).expect("transfer");

    let mut buf = Buffer::empty(area);
    render_board(&listings, 0, None, None, area, &mut buf);

    let content = buffer_to_string(&buf);
    assert!(content.contains("Active (1)"));
    assert!(content.contains("Finished (2)"));
}

#[test]
fn board_marks_droppable_column_during_drag() {
    let (_registry, listings) = sample_board();
    listings[1].drag_over(CONTENT_TYPE_TEXT);

    let area = Rect::new(0, 0, 80, 24);
    let mut buf = Buffer::empty(area);
    render_board(&listings, 0, Some(0), None, area, &mut buf);

    // The Finished column's right border carries the green affordance
    let right_edge = buf
        .cell((area.width - 1, 5))
        .expect("cell")
        .style()
        .fg;
    assert_eq!(right_edge, Some(ratatui::style::Color::Green));
}

#[test]
fn board_and_status_bar_compose() {
    let (_registry, listings) = sample_board();
    let area = Rect::new(0, 0, 80, 24);
    let mut buf = Buffer::empty(area);

    let board_area = Rect::new(0, 0, 80, 21);
    let bar_area = Rect::new(0, 21, 80, 3);
    render_board(&listings, 1, Some(0), None, board_area, &mut buf);
    render_status_bar(false, bar_area, &mut buf);

    let content = buffer_to_string(&buf);
    assert!(content.contains("Finished (1)"));
    assert!(content.contains("Navigate"));
}
