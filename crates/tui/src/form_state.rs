//! New-item form state management.
//!
//! This module provides state management for the new-item form, including
//! field focus, text editing, validation, and submission to the registry.
//!
//! The form is the only path by which raw user input reaches the registry:
//! it validates every field against the declarative constraint sets first,
//! and on failure shows a message and performs no registry call.

use trellis_protocol::{Constraints, Registry, Value, validate};

/// Fields of the new-item form, in visual order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    /// Short summary of the work.
    #[default]
    Title,
    /// Detailed description.
    Description,
    /// Headcount, 1 to 5.
    People,
}

impl FormField {
    /// Returns the next field (wrapping around).
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Title => Self::Description,
            Self::Description => Self::People,
            Self::People => Self::Title,
        }
    }

    /// Returns the previous field (wrapping around).
    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Title => Self::People,
            Self::Description => Self::Title,
            Self::People => Self::Description,
        }
    }

    /// Returns the display label for this field.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Description => "Description",
            Self::People => "People",
        }
    }

    /// Returns all fields in visual order.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Title, Self::Description, Self::People]
    }
}

/// A text buffer with a cursor, for editing one field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputBuffer {
    value: String,
    cursor: usize,
}

impl InputBuffer {
    /// The current text.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The cursor position in bytes.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Inserts a character at the cursor position.
    pub fn insert_char(&mut self, ch: char) {
        self.value.insert(self.cursor, ch);
        self.cursor += ch.len_utf8();
    }

    /// Deletes the character before the cursor (backspace).
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let prev = self.value[..self.cursor]
            .char_indices()
            .next_back()
            .map_or(0, |(idx, _)| idx);
        self.value.remove(prev);
        self.cursor = prev;
    }
}

/// The new-item form state.
///
/// # Examples
///
/// ```
/// use trellis_protocol::Registry;
/// use trellis_tui::FormState;
///
/// let registry = Registry::new();
/// let mut form = FormState::new();
///
/// for ch in "Build API".chars() {
///     form.insert_char(ch);
/// }
/// // Description and people are still blank, so this fails validation.
/// assert!(!form.submit(&registry));
/// assert!(form.error().is_some());
/// assert!(registry.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct FormState {
    focused: FormField,
    title: InputBuffer,
    description: InputBuffer,
    people: InputBuffer,
    error: Option<String>,
}

impl FormState {
    /// Creates an empty form focused on the title field.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently focused field.
    #[must_use]
    pub const fn focused(&self) -> FormField {
        self.focused
    }

    /// The buffer for the given field.
    #[must_use]
    pub const fn buffer(&self, field: FormField) -> &InputBuffer {
        match field {
            FormField::Title => &self.title,
            FormField::Description => &self.description,
            FormField::People => &self.people,
        }
    }

    /// The current validation failure message, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Moves focus to the next field.
    pub fn focus_next(&mut self) {
        self.focused = self.focused.next();
    }

    /// Moves focus to the previous field.
    pub fn focus_prev(&mut self) {
        self.focused = self.focused.prev();
    }

    /// Inserts a character into the focused field.
    ///
    /// The people field only accepts ASCII digits; everything else is
    /// dropped before it can turn into a parse failure at submit time.
    pub fn insert_char(&mut self, ch: char) {
        if self.focused == FormField::People && !ch.is_ascii_digit() {
            return;
        }
        self.focused_buffer_mut().insert_char(ch);
        self.error = None;
    }

    /// Deletes the character before the cursor in the focused field.
    pub fn backspace(&mut self) {
        self.focused_buffer_mut().backspace();
        self.error = None;
    }

    /// Validates the form and, on success, adds the item to the registry.
    ///
    /// Returns `true` when the item was added (the caller closes the form).
    /// On validation failure a user-visible message is recorded, no registry
    /// call happens, and the form stays open.
    pub fn submit(&mut self, registry: &Registry) -> bool {
        let title = self.title.value().trim();
        let description = self.description.value().trim();
        let people: Option<i64> = self.people.value().trim().parse().ok();

        let title_ok = validate(Value::Text(title), &Constraints::new().required());
        let description_ok = validate(
            Value::Text(description),
            &Constraints::new().required().min_length(5),
        );
        let people_ok = people.is_some_and(|count| {
            validate(
                Value::Number(count),
                &Constraints::new().required().min(1).max(5),
            )
        });

        if !(title_ok && description_ok && people_ok) {
            self.error = Some("Invalid input, please try again".to_string());
            return false;
        }

        // Validation bounds people to 1..=5, so the cast cannot truncate.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let people = people.unwrap_or(1) as u32;
        match registry.add(title, description, people) {
            Ok(_) => true,
            Err(err) => {
                self.error = Some(err.to_string());
                false
            }
        }
    }

    const fn focused_buffer_mut(&mut self) -> &mut InputBuffer {
        match self.focused {
            FormField::Title => &mut self.title,
            FormField::Description => &mut self.description,
            FormField::People => &mut self.people,
        }
    }
}
