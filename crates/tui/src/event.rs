//! Event handling and key mappings.
//!
//! This module provides event polling and conversion from terminal events
//! to application messages. Key events map differently depending on whether
//! the new-item form is open; mouse events become pointer messages that the
//! app feeds into the drag session.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEventKind};
use trellis_protocol::Message;

/// Polls for a terminal event, waiting up to `tick`.
///
/// Returns `Some(Event)` if an event is available within the timeout,
/// or `None` if the timeout expires without an event.
///
/// # Errors
///
/// Returns an error if polling the terminal fails.
pub fn poll_event(tick: Duration) -> std::io::Result<Option<Event>> {
    if event::poll(tick)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Converts an event (keyboard or mouse) to an application message.
///
/// `form_open` selects the key mapping: an open form captures printable
/// characters as field input instead of board shortcuts.
#[must_use]
pub fn event_to_message(event: &Event, form_open: bool) -> Option<Message> {
    match event {
        Event::Key(key) => {
            if form_open {
                key_to_form_message(*key)
            } else {
                key_to_message(*key)
            }
        }
        Event::Mouse(mouse) => mouse_to_message(mouse),
        _ => None,
    }
}

/// Converts a mouse event to a pointer message.
///
/// Only the left button takes part in the drag gesture.
#[must_use]
fn mouse_to_message(mouse: &crossterm::event::MouseEvent) -> Option<Message> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(Message::PointerDown {
            column: mouse.column,
            row: mouse.row,
        }),
        MouseEventKind::Drag(MouseButton::Left) => Some(Message::PointerDrag {
            column: mouse.column,
            row: mouse.row,
        }),
        MouseEventKind::Up(MouseButton::Left) => Some(Message::PointerUp {
            column: mouse.column,
            row: mouse.row,
        }),
        _ => None,
    }
}

/// Converts a terminal key event to a board-mode message.
///
/// Returns `Some(Message)` if the key event maps to an action,
/// or `None` if the key is not bound.
///
/// # Key Bindings
///
/// | Key | Action |
/// |-----|--------|
/// | `Ctrl+C` | Quit |
/// | `Esc` | Escape (cancel drag, close panel, or clear selection) |
/// | `Left` / `Right` | Focus listing |
/// | `Up` / `Down` | Select row |
/// | `Enter` or `Space` | Open details, or drop a grabbed item |
/// | `g` | Grab the selected item |
/// | `n` | New item |
/// | `?` | Toggle help |
#[must_use]
pub fn key_to_message(key: KeyEvent) -> Option<Message> {
    // Check for Ctrl+C first
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Message::Quit);
    }

    match key.code {
        // Escape (contextual: cancel drag, close panel, clear selection)
        KeyCode::Esc => Some(Message::Escape),

        // Navigation (arrow keys only)
        KeyCode::Left => Some(Message::NavigateLeft),
        KeyCode::Right => Some(Message::NavigateRight),
        KeyCode::Up => Some(Message::NavigateUp),
        KeyCode::Down => Some(Message::NavigateDown),

        // Selection and drag
        KeyCode::Enter | KeyCode::Char(' ') => Some(Message::Select),
        KeyCode::Char('g') => Some(Message::Grab),

        // Other actions
        KeyCode::Char('n') => Some(Message::NewItem),
        KeyCode::Char('?') => Some(Message::ToggleHelp),

        _ => None,
    }
}

/// Converts a terminal key event to a form-mode message.
///
/// While the new-item form is open, printable characters are field input
/// and only a handful of control keys keep their meaning.
///
/// # Key Bindings
///
/// | Key | Action |
/// |-----|--------|
/// | `Ctrl+C` | Quit |
/// | `Esc` | Close the form without submitting |
/// | `Tab` / `Down` | Focus next field |
/// | `Shift+Tab` / `Up` | Focus previous field |
/// | `Enter` | Validate and submit |
/// | `Backspace` | Delete before the cursor |
/// | printable | Insert into the focused field |
#[must_use]
pub fn key_to_form_message(key: KeyEvent) -> Option<Message> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Message::Quit);
    }

    match key.code {
        KeyCode::Esc => Some(Message::Escape),
        KeyCode::Tab | KeyCode::Down => Some(Message::FormNextField),
        KeyCode::BackTab | KeyCode::Up => Some(Message::FormPrevField),
        KeyCode::Enter => Some(Message::FormSubmit),
        KeyCode::Backspace => Some(Message::FormBackspace),
        KeyCode::Char(ch) => Some(Message::FormInput { ch }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, MouseEvent};

    fn make_key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn make_key_with_modifiers(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: event::KeyEventState::NONE,
        }
    }

    fn make_mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn quit_keys() {
        // Only Ctrl+C quits
        assert_eq!(
            key_to_message(make_key_with_modifiers(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL
            )),
            Some(Message::Quit)
        );
        // 'q' is not a quit key
        assert_eq!(key_to_message(make_key(KeyCode::Char('q'))), None);
    }

    #[test]
    fn escape_key() {
        assert_eq!(
            key_to_message(make_key(KeyCode::Esc)),
            Some(Message::Escape)
        );
    }

    #[test]
    fn navigation_keys() {
        assert_eq!(
            key_to_message(make_key(KeyCode::Left)),
            Some(Message::NavigateLeft)
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Right)),
            Some(Message::NavigateRight)
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Up)),
            Some(Message::NavigateUp)
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Down)),
            Some(Message::NavigateDown)
        );
    }

    #[test]
    fn selection_and_drag_keys() {
        assert_eq!(
            key_to_message(make_key(KeyCode::Enter)),
            Some(Message::Select)
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Char(' '))),
            Some(Message::Select)
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Char('g'))),
            Some(Message::Grab)
        );
    }

    #[test]
    fn other_action_keys() {
        assert_eq!(
            key_to_message(make_key(KeyCode::Char('n'))),
            Some(Message::NewItem)
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Char('?'))),
            Some(Message::ToggleHelp)
        );
    }

    #[test]
    fn unmapped_keys_return_none() {
        assert_eq!(key_to_message(make_key(KeyCode::Char('x'))), None);
        assert_eq!(key_to_message(make_key(KeyCode::F(1))), None);
    }

    #[test]
    fn form_mode_captures_printable_characters() {
        assert_eq!(
            key_to_form_message(make_key(KeyCode::Char('n'))),
            Some(Message::FormInput { ch: 'n' })
        );
        assert_eq!(
            key_to_form_message(make_key(KeyCode::Char('?'))),
            Some(Message::FormInput { ch: '?' })
        );
    }

    #[test]
    fn form_mode_control_keys() {
        assert_eq!(
            key_to_form_message(make_key(KeyCode::Tab)),
            Some(Message::FormNextField)
        );
        assert_eq!(
            key_to_form_message(make_key(KeyCode::BackTab)),
            Some(Message::FormPrevField)
        );
        assert_eq!(
            key_to_form_message(make_key(KeyCode::Enter)),
            Some(Message::FormSubmit)
        );
        assert_eq!(
            key_to_form_message(make_key(KeyCode::Backspace)),
            Some(Message::FormBackspace)
        );
        assert_eq!(
            key_to_form_message(make_key(KeyCode::Esc)),
            Some(Message::Escape)
        );
    }

    #[test]
    fn form_mode_still_quits_on_ctrl_c() {
        assert_eq!(
            key_to_form_message(make_key_with_modifiers(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL
            )),
            Some(Message::Quit)
        );
    }

    #[test]
    fn event_to_message_selects_mapping() {
        let event = Event::Key(make_key(KeyCode::Char('g')));
        assert_eq!(event_to_message(&event, false), Some(Message::Grab));
        assert_eq!(
            event_to_message(&event, true),
            Some(Message::FormInput { ch: 'g' })
        );
    }

    #[test]
    fn left_button_mouse_events_become_pointer_messages() {
        let down = Event::Mouse(make_mouse(MouseEventKind::Down(MouseButton::Left), 3, 5));
        assert_eq!(
            event_to_message(&down, false),
            Some(Message::PointerDown { column: 3, row: 5 })
        );

        let drag = Event::Mouse(make_mouse(MouseEventKind::Drag(MouseButton::Left), 4, 5));
        assert_eq!(
            event_to_message(&drag, false),
            Some(Message::PointerDrag { column: 4, row: 5 })
        );

        let up = Event::Mouse(make_mouse(MouseEventKind::Up(MouseButton::Left), 9, 6));
        assert_eq!(
            event_to_message(&up, false),
            Some(Message::PointerUp { column: 9, row: 6 })
        );
    }

    #[test]
    fn other_mouse_events_are_ignored() {
        let right = Event::Mouse(make_mouse(MouseEventKind::Down(MouseButton::Right), 3, 5));
        assert_eq!(event_to_message(&right, false), None);

        let scroll = Event::Mouse(make_mouse(MouseEventKind::ScrollDown, 3, 5));
        assert_eq!(event_to_message(&scroll, false), None);
    }
}
