//! Help overlay widget.
//!
//! This module provides the help overlay that displays all available
//! keybindings when the user presses `?`.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

/// The width of the help overlay panel.
const HELP_WIDTH: u16 = 38;

/// The height of the help overlay panel.
const HELP_HEIGHT: u16 = 19;

/// Renders a centered help overlay displaying all keybindings.
///
/// The overlay is rendered on top of the existing content, with the area
/// behind it cleared first.
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use trellis_tui::widgets::render_help_overlay;
///
/// let area = Rect::new(0, 0, 80, 24);
/// let mut buf = Buffer::empty(area);
///
/// render_help_overlay(area, &mut buf);
/// ```
pub fn render_help_overlay(area: Rect, buf: &mut Buffer) {
    let popup_area = centered_rect(HELP_WIDTH, HELP_HEIGHT, area);

    // Clear the area behind the popup for a clean look
    Clear.render(popup_area, buf);

    let block = Block::default()
        .title(Span::styled(
            " Help ",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Yellow));

    let inner = block.inner(popup_area);
    block.render(popup_area, buf);

    let section_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let key_style = Style::default().fg(Color::Yellow);
    let text_style = Style::default().fg(Color::White);

    let binding = |key: &'static str, action: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {key:<10}"), key_style),
            Span::styled(action, text_style),
        ])
    };

    let lines = vec![
        Line::raw(""),
        Line::from(Span::styled("  Navigation", section_style)),
        binding("← →", "Focus listing"),
        binding("↑ ↓", "Select item"),
        Line::raw(""),
        Line::from(Span::styled("  Items", section_style)),
        binding("n", "New item"),
        binding("Enter", "Open details"),
        binding("g", "Grab item (start drag)"),
        binding("Enter", "Drop grabbed item"),
        binding("Esc", "Cancel drag / close panel"),
        Line::raw(""),
        Line::from(Span::styled("  General", section_style)),
        binding("?", "Toggle help"),
        binding("Ctrl+C", "Quit"),
        Line::raw(""),
        Line::from(Span::styled(
            "  Press any key to close",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )),
    ];

    Paragraph::new(lines)
        .alignment(Alignment::Left)
        .render(inner, buf);
}

/// Creates a centered rectangle of the given size within an area.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::tests_support::buffer_to_string;

    #[test]
    fn render_help_shows_sections_and_bindings() {
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);

        render_help_overlay(area, &mut buf);

        let content = buffer_to_string(&buf);
        assert!(content.contains("Help"));
        assert!(content.contains("Navigation"));
        assert!(content.contains("Grab item"));
        assert!(content.contains("Ctrl+C"));
    }

    #[test]
    fn render_help_tiny_area_does_not_panic() {
        let area = Rect::new(0, 0, 10, 4);
        let mut buf = Buffer::empty(area);

        render_help_overlay(area, &mut buf);
    }
}
