//! Item detail panel widget.
//!
//! This module renders the full-screen view of a single item: metadata
//! (status, headcount, creation date) above a scrollable description.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};
use trellis_protocol::{Item, ItemRow};

use super::item_card::status_color;

/// Renders the detail panel for one item.
///
/// # Layout
///
/// ```text
/// +-- Title ------------------------------+
/// | Status: Active   3 persons   2026-08  |
/// |---------------------------------------|
/// | Description text, wrapped and         |
/// | scrollable...                         |
/// +---------------------------------------+
/// ```
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use trellis_protocol::Item;
/// use trellis_tui::widgets::render_detail_panel;
///
/// let item = Item::new("Build API", "Design the REST API", 3);
/// let area = Rect::new(0, 0, 60, 20);
/// let mut buf = Buffer::empty(area);
///
/// render_detail_panel(&item, 0, area, &mut buf);
/// ```
pub fn render_detail_panel(item: &Item, scroll: u16, area: Rect, buf: &mut Buffer) {
    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", item.title),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(status_color(item.status)));

    let inner = block.inner(area);
    block.render(area, buf);

    if inner.height < 2 {
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Metadata
            Constraint::Length(1), // Separator
            Constraint::Min(0),    // Description
        ])
        .split(inner);

    // Rows are rebuilt per render; the headcount label is recomputed here,
    // never cached.
    let row = ItemRow::new(item.clone());
    let metadata = Line::from(vec![
        Span::styled("Status: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            item.status.display_name(),
            Style::default().fg(status_color(item.status)),
        ),
        Span::raw("   "),
        Span::styled(row.item().people_label(), Style::default().fg(Color::White)),
        Span::raw("   "),
        Span::styled(
            item.created_at.format("%Y-%m-%d").to_string(),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    Paragraph::new(metadata).render(rows[0], buf);

    let separator = "─".repeat(inner.width as usize);
    Paragraph::new(Line::from(Span::styled(
        separator,
        Style::default().fg(Color::DarkGray),
    )))
    .render(rows[1], buf);

    let description = Paragraph::new(item.description.clone())
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    description.render(rows[2], buf);
}

/// Maximum scroll offset for a description of `lines` wrapped lines in a
/// panel showing `visible` lines at once.
#[must_use]
pub const fn max_scroll_offset(lines: u16, visible: u16) -> u16 {
    lines.saturating_sub(visible)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::tests_support::buffer_to_string;

    #[test]
    fn render_detail_shows_metadata_and_description() {
        let item = Item::new("Build API", "Design the REST API end to end", 3);
        let area = Rect::new(0, 0, 60, 20);
        let mut buf = Buffer::empty(area);

        render_detail_panel(&item, 0, area, &mut buf);

        let content = buffer_to_string(&buf);
        assert!(content.contains("Build API"));
        assert!(content.contains("Status: Active"));
        assert!(content.contains("3 persons"));
        assert!(content.contains("Design the REST API"));
    }

    #[test]
    fn render_detail_singular_headcount() {
        let item = Item::new("Solo task", "One pair of hands only", 1);
        let area = Rect::new(0, 0, 60, 20);
        let mut buf = Buffer::empty(area);

        render_detail_panel(&item, 0, area, &mut buf);

        let content = buffer_to_string(&buf);
        assert!(content.contains("1 person"));
    }

    #[test]
    fn render_detail_tiny_area_does_not_panic() {
        let item = Item::new("X", "Y", 1);
        let area = Rect::new(0, 0, 5, 2);
        let mut buf = Buffer::empty(area);

        render_detail_panel(&item, 0, area, &mut buf);
    }

    #[test]
    fn max_scroll_offset_saturates() {
        assert_eq!(max_scroll_offset(10, 4), 6);
        assert_eq!(max_scroll_offset(3, 10), 0);
    }
}
