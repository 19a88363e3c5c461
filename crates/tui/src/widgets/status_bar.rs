//! Status bar rendering widget.
//!
//! This module provides functions for rendering the footer status bar with
//! keybinding hints. The hints change while a drag is in flight, when the
//! useful keys are different.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Renders the status bar with keybinding hints.
///
/// # Layout
///
/// ```text
/// +----------------------------------------------------------+
/// | ←→↑↓ Navigate  n New  g Grab  Enter Details  Ctrl+C Quit |
/// +----------------------------------------------------------+
/// ```
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use trellis_tui::widgets::render_status_bar;
///
/// let area = Rect::new(0, 0, 80, 3);
/// let mut buf = Buffer::empty(area);
///
/// render_status_bar(false, area, &mut buf);
/// ```
pub fn render_status_bar(drag_active: bool, area: Rect, buf: &mut Buffer) {
    let key_style = Style::default().fg(Color::Yellow);
    let text_style = Style::default().fg(Color::White);

    let hints = if drag_active {
        Line::from(vec![
            Span::styled(
                "Dragging",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  |  ", text_style),
            Span::styled("←→", key_style),
            Span::styled(" Target  ", text_style),
            Span::styled("Enter", key_style),
            Span::styled(" Drop  ", text_style),
            Span::styled("Esc", key_style),
            Span::styled(" Cancel", text_style),
        ])
    } else {
        Line::from(vec![
            Span::styled("←→↑↓", key_style),
            Span::styled(" Navigate  ", text_style),
            Span::styled("n", key_style),
            Span::styled(" New  ", text_style),
            Span::styled("g", key_style),
            Span::styled(" Grab  ", text_style),
            Span::styled("Enter", key_style),
            Span::styled(" Details  ", text_style),
            Span::styled("Ctrl+C", key_style),
            Span::styled(" Quit", text_style),
        ])
    };

    let status_bar = Paragraph::new(hints).block(Block::default().borders(Borders::ALL));

    status_bar.render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::tests_support::buffer_to_string;

    #[test]
    fn render_status_bar_contains_hints() {
        let area = Rect::new(0, 0, 80, 3);
        let mut buf = Buffer::empty(area);

        render_status_bar(false, area, &mut buf);

        let content = buffer_to_string(&buf);
        assert!(content.contains("Navigate"));
        assert!(content.contains("Quit"));
        assert!(content.contains("Grab"));
    }

    #[test]
    fn render_status_bar_drag_mode_hints() {
        let area = Rect::new(0, 0, 80, 3);
        let mut buf = Buffer::empty(area);

        render_status_bar(true, area, &mut buf);

        let content = buffer_to_string(&buf);
        assert!(content.contains("Dragging"));
        assert!(content.contains("Drop"));
        assert!(content.contains("Cancel"));
    }
}
