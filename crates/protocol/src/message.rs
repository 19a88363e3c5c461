//! TUI message types for event handling.
//!
//! This module defines the message enum used for communication between
//! the TUI input handler and the application state.

use serde::{Deserialize, Serialize};

/// Messages that represent user actions in the TUI.
///
/// These messages are produced by the input handler and consumed by
/// the application state to update the UI.
///
/// # Examples
///
/// ```
/// use trellis_protocol::Message;
///
/// let msg = Message::NavigateRight;
/// assert!(msg.is_navigation());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Message {
    /// Move focus to the listing on the left.
    NavigateLeft,
    /// Move focus to the listing on the right.
    NavigateRight,
    /// Move the row selection up within the focused listing.
    NavigateUp,
    /// Move the row selection down within the focused listing.
    NavigateDown,
    /// Open the detail view for the selected row, or commit an active drag.
    Select,
    /// Begin a keyboard drag of the selected row.
    Grab,
    /// Commit the active drag on the focused listing.
    Drop,
    /// Open the new-item form.
    NewItem,
    /// Contextual escape: cancel drag, close form or detail, clear selection.
    Escape,
    /// Toggle the help overlay.
    ToggleHelp,
    /// Quit the application.
    Quit,
    /// Type a character into the focused form field.
    FormInput {
        /// The character typed.
        ch: char,
    },
    /// Delete the character before the cursor in the focused form field.
    FormBackspace,
    /// Move focus to the next form field.
    FormNextField,
    /// Move focus to the previous form field.
    FormPrevField,
    /// Validate the form and submit it to the registry.
    FormSubmit,
    /// Left button pressed at a terminal cell.
    PointerDown {
        /// Terminal column.
        column: u16,
        /// Terminal row.
        row: u16,
    },
    /// Pointer moved with the left button held.
    PointerDrag {
        /// Terminal column.
        column: u16,
        /// Terminal row.
        row: u16,
    },
    /// Left button released at a terminal cell.
    PointerUp {
        /// Terminal column.
        column: u16,
        /// Terminal row.
        row: u16,
    },
}

impl Message {
    /// Returns `true` if this message is a navigation action.
    ///
    /// # Examples
    ///
    /// ```
    /// use trellis_protocol::Message;
    ///
    /// assert!(Message::NavigateLeft.is_navigation());
    /// assert!(!Message::Grab.is_navigation());
    /// ```
    #[must_use]
    pub const fn is_navigation(self) -> bool {
        matches!(
            self,
            Self::NavigateLeft | Self::NavigateRight | Self::NavigateUp | Self::NavigateDown
        )
    }

    /// Returns `true` if this message should terminate the application.
    ///
    /// # Examples
    ///
    /// ```
    /// use trellis_protocol::Message;
    ///
    /// assert!(Message::Quit.is_terminating());
    /// assert!(!Message::Escape.is_terminating());
    /// ```
    #[must_use]
    pub const fn is_terminating(self) -> bool {
        matches!(self, Self::Quit)
    }

    /// Returns `true` if this message only makes sense while the form is open.
    #[must_use]
    pub const fn is_form_input(self) -> bool {
        matches!(
            self,
            Self::FormInput { .. }
                | Self::FormBackspace
                | Self::FormNextField
                | Self::FormPrevField
                | Self::FormSubmit
        )
    }

    /// Returns `true` if this message carries pointer coordinates.
    #[must_use]
    pub const fn is_pointer(self) -> bool {
        matches!(
            self,
            Self::PointerDown { .. } | Self::PointerDrag { .. } | Self::PointerUp { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_navigation_detection() {
        assert!(Message::NavigateLeft.is_navigation());
        assert!(Message::NavigateRight.is_navigation());
        assert!(Message::NavigateUp.is_navigation());
        assert!(Message::NavigateDown.is_navigation());
        assert!(!Message::Select.is_navigation());
        assert!(!Message::Drop.is_navigation());
        assert!(!Message::Quit.is_navigation());
    }

    #[test]
    fn message_terminating_detection() {
        assert!(Message::Quit.is_terminating());
        assert!(!Message::Escape.is_terminating());
        assert!(!Message::Grab.is_terminating());
    }

    #[test]
    fn message_form_input_detection() {
        assert!(Message::FormInput { ch: 'a' }.is_form_input());
        assert!(Message::FormBackspace.is_form_input());
        assert!(Message::FormSubmit.is_form_input());
        assert!(!Message::NewItem.is_form_input());
        assert!(!Message::Select.is_form_input());
    }

    #[test]
    fn message_serialization_roundtrip() {
        let messages = [
            Message::NavigateLeft,
            Message::NavigateRight,
            Message::NavigateUp,
            Message::NavigateDown,
            Message::Select,
            Message::Grab,
            Message::Drop,
            Message::NewItem,
            Message::Escape,
            Message::ToggleHelp,
            Message::Quit,
            Message::FormInput { ch: 'x' },
            Message::FormBackspace,
            Message::FormNextField,
            Message::FormPrevField,
            Message::FormSubmit,
            Message::PointerDown { column: 4, row: 7 },
            Message::PointerDrag { column: 5, row: 7 },
            Message::PointerUp { column: 6, row: 8 },
        ];

        for msg in messages {
            let json = serde_json::to_string(&msg).expect("serialize");
            let parsed: Message = serde_json::from_str(&json).expect("deserialize");
            assert_eq!(msg, parsed);
        }
    }

    #[test]
    fn message_pointer_detection() {
        assert!(Message::PointerDown { column: 0, row: 0 }.is_pointer());
        assert!(Message::PointerDrag { column: 0, row: 0 }.is_pointer());
        assert!(Message::PointerUp { column: 0, row: 0 }.is_pointer());
        assert!(!Message::Select.is_pointer());
    }

    #[test]
    fn message_json_format() {
        let json = serde_json::to_string(&Message::NavigateLeft).expect("serialize");
        assert_eq!(json, r#""navigate_left""#);

        let json = serde_json::to_string(&Message::NewItem).expect("serialize");
        assert_eq!(json, r#""new_item""#);
    }
}
