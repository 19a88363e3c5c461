//! New-item form overlay widget.
//!
//! This module renders the centered form used to create a new item: three
//! labeled fields, a cursor in the focused one, and the validation failure
//! message when the last submit was rejected.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use crate::form_state::{FormField, FormState};

/// The width of the form overlay panel.
const FORM_WIDTH: u16 = 46;

/// The height of the form overlay panel.
const FORM_HEIGHT: u16 = 14;

/// Renders the centered new-item form on top of the board.
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use trellis_tui::FormState;
/// use trellis_tui::widgets::render_form;
///
/// let form = FormState::new();
/// let area = Rect::new(0, 0, 80, 24);
/// let mut buf = Buffer::empty(area);
///
/// render_form(&form, area, &mut buf);
/// ```
pub fn render_form(form: &FormState, area: Rect, buf: &mut Buffer) {
    let popup_area = centered_rect(FORM_WIDTH, FORM_HEIGHT, area);

    // Clear the area behind the popup for a clean look
    Clear.render(popup_area, buf);

    let block = Block::default()
        .title(Span::styled(
            " New Item ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(popup_area);
    block.render(popup_area, buf);

    // One row of label + one row of value per field, then error + hints
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title label
            Constraint::Length(1), // Title value
            Constraint::Length(1), // Description label
            Constraint::Length(1), // Description value
            Constraint::Length(1), // People label
            Constraint::Length(1), // People value
            Constraint::Length(1), // (spacer)
            Constraint::Length(1), // Error line
            Constraint::Min(0),
            Constraint::Length(1), // Hints
        ])
        .split(inner);

    for (i, field) in FormField::all().into_iter().enumerate() {
        render_field(form, field, rows[i * 2], rows[i * 2 + 1], buf);
    }

    if let Some(error) = form.error() {
        let error_line = Paragraph::new(Line::from(Span::styled(
            error,
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )));
        error_line.render(rows[7], buf);
    }

    let key_style = Style::default().fg(Color::Yellow);
    let text_style = Style::default().fg(Color::DarkGray);
    let hints = Paragraph::new(Line::from(vec![
        Span::styled("Tab", key_style),
        Span::styled(" Next  ", text_style),
        Span::styled("Enter", key_style),
        Span::styled(" Add  ", text_style),
        Span::styled("Esc", key_style),
        Span::styled(" Cancel", text_style),
    ]))
    .alignment(Alignment::Center);
    hints.render(rows[9], buf);
}

/// Renders one labeled field with a cursor when focused.
fn render_field(
    form: &FormState,
    field: FormField,
    label_area: Rect,
    value_area: Rect,
    buf: &mut Buffer,
) {
    let is_focused = form.focused() == field;
    let buffer = form.buffer(field);

    let label_style = if is_focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Paragraph::new(Line::from(Span::styled(field.label(), label_style))).render(label_area, buf);

    let value_style = Style::default().fg(Color::White);
    let line = if is_focused {
        // Split at the cursor and render the cursor cell reversed
        let (before, rest) = buffer.value().split_at(buffer.cursor());
        let mut chars = rest.chars();
        let at_cursor = chars.next().unwrap_or(' ');
        let after: String = chars.collect();

        Line::from(vec![
            Span::styled(before.to_string(), value_style),
            Span::styled(
                at_cursor.to_string(),
                Style::default().add_modifier(Modifier::REVERSED),
            ),
            Span::styled(after, value_style),
        ])
    } else {
        Line::from(Span::styled(buffer.value().to_string(), value_style))
    };

    Paragraph::new(line).render(value_area, buf);
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
    use trellis_protocol::Registry;

    #[test]
    fn render_empty_form_shows_labels_and_hints() {
        let form = FormState::new();
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);

        render_form(&form, area, &mut buf);

        let content = buffer_to_string(&buf);
        assert!(content.contains("New Item"));
        assert!(content.contains("Title"));
        assert!(content.contains("Description"));
        assert!(content.contains("People"));
        assert!(content.contains("Cancel"));
    }

    #[test]
    fn render_form_shows_typed_text() {
        let mut form = FormState::new();
        for ch in "Build API".chars() {
            form.insert_char(ch);
        }

        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        render_form(&form, area, &mut buf);

        let content = buffer_to_string(&buf);
        assert!(content.contains("Build API"));
    }

    #[test]
    fn render_form_shows_error_after_failed_submit() {
        let registry = Registry::new();
        let mut form = FormState::new();
        assert!(!form.submit(&registry));

        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        render_form(&form, area, &mut buf);

        let content = buffer_to_string(&buf);
        assert!(content.contains("Invalid input"));
    }

    #[test]
    fn render_form_tiny_area_does_not_panic() {
        let form = FormState::new();
        let area = Rect::new(0, 0, 10, 4);
        let mut buf = Buffer::empty(area);

        render_form(&form, area, &mut buf);
    }

    #[test]
    fn centered_rect_is_centered() {
        let rect = centered_rect(40, 10, Rect::new(0, 0, 80, 30));
        assert_eq!(rect, Rect::new(20, 10, 40, 10));
    }

    #[test]
    fn centered_rect_clamps_to_area() {
        let rect = centered_rect(100, 50, Rect::new(0, 0, 20, 10));
        assert_eq!(rect, Rect::new(0, 0, 20, 10));
    }
}
