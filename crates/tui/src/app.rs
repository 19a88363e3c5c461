//! Main application struct and run loop.
//!
//! This module provides the `App` struct which orchestrates the TUI
//! application lifecycle including event handling, state updates, and
//! rendering. Pointer messages are translated here into the drag protocol:
//! press arms a gesture, motion fires "over"/"leave" at the listing under
//! the pointer, release drops.

use std::rc::Rc;
use std::time::Duration;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use trellis_protocol::{Message, Registry};

use crate::{
    AppState, FormState,
    event::{event_to_message, poll_event},
    layout::{CARD_HEIGHT, HEADER_HEIGHT, MIN_HEIGHT, MIN_WIDTH, STATUS_BAR_HEIGHT},
    terminal::AppTerminal,
    widgets::{
        column_areas, listing::calculate_scroll_offset, render_board, render_detail_panel,
        render_form, render_help_overlay, render_status_bar,
    },
};

/// Default event poll interval.
const DEFAULT_TICK: Duration = Duration::from_millis(100);

/// The main application struct.
///
/// Manages the application state and provides the main event loop.
#[derive(Debug)]
pub struct App {
    state: AppState,
    should_quit: bool,
    tick_rate: Duration,
    /// A press landed on a row; the next motion starts a drag.
    pointer_armed: bool,
}

impl App {
    /// Creates a new application around the given registry handle.
    ///
    /// # Examples
    ///
    /// ```
    /// use trellis_protocol::Registry;
    /// use trellis_tui::App;
    ///
    /// let app = App::new(Registry::shared());
    /// ```
    #[must_use]
    pub fn new(registry: Rc<Registry>) -> Self {
        Self {
            state: AppState::new(registry),
            should_quit: false,
            tick_rate: DEFAULT_TICK,
            pointer_armed: false,
        }
    }

    /// Sets the event poll interval.
    #[must_use]
    pub const fn with_tick_rate(mut self, tick_rate: Duration) -> Self {
        self.tick_rate = tick_rate;
        self
    }

    /// Returns a reference to the application state.
    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Updates the application state based on a message.
    ///
    /// The open form captures its own messages first; when the help overlay
    /// is visible, most messages dismiss it instead of their normal action.
    pub fn update(&mut self, msg: Message) {
        // The form owns the keyboard while it is open
        if self.state.form.is_some() {
            self.update_form(msg);
            return;
        }

        // When help is visible, most keys should dismiss it
        if self.state.help_visible {
            match msg {
                Message::Quit => {
                    self.should_quit = true;
                }
                Message::ToggleHelp | Message::Escape => {
                    self.state.toggle_help();
                }
                // Any other key dismisses help
                _ => {
                    let _ = self.state.dismiss_help();
                }
            }
            return;
        }

        match msg {
            Message::Quit => {
                self.should_quit = true;
            }
            Message::Escape => {
                // Contextual escape: cancel the drag, close the detail
                // panel, or clear the selection
                if self.state.drag.is_active() {
                    self.state.cancel_drag();
                } else if self.state.detail_visible {
                    self.state.toggle_detail();
                } else {
                    self.state.clear_selection();
                }
            }
            Message::NavigateLeft => {
                if !self.state.detail_visible {
                    self.state.navigate_left();
                }
            }
            Message::NavigateRight => {
                if !self.state.detail_visible {
                    self.state.navigate_right();
                }
            }
            Message::NavigateUp => {
                if self.state.detail_visible {
                    self.state.scroll_detail(-1);
                } else {
                    self.state.navigate_up();
                }
            }
            Message::NavigateDown => {
                if self.state.detail_visible {
                    self.state.scroll_detail(1);
                } else {
                    self.state.navigate_down();
                }
            }
            Message::Select => {
                // Enter commits an active drag; otherwise it opens details
                if self.state.drag.is_active() {
                    let _ = self.state.drop_active();
                } else if self.state.detail_visible {
                    self.state.toggle_detail();
                } else if self.state.selected_item().is_some() {
                    self.state.toggle_detail();
                }
            }
            Message::Grab => {
                if self.state.drag.is_active() {
                    self.state.cancel_drag();
                } else {
                    let _ = self.state.grab_selected();
                }
            }
            Message::Drop => {
                let _ = self.state.drop_active();
            }
            Message::NewItem => {
                if self.state.drag.is_active() {
                    self.state.cancel_drag();
                }
                self.state.form = Some(FormState::new());
            }
            Message::ToggleHelp => {
                self.state.toggle_help();
            }
            Message::PointerDown { column, row } => self.pointer_down(column, row),
            Message::PointerDrag { column, row } => self.pointer_drag(column, row),
            Message::PointerUp { column, row } => self.pointer_up(column, row),
            // Form messages are meaningless while the form is closed
            Message::FormInput { .. }
            | Message::FormBackspace
            | Message::FormNextField
            | Message::FormPrevField
            | Message::FormSubmit => {}
        }
    }

    /// Handles a message while the new-item form is open.
    fn update_form(&mut self, msg: Message) {
        let Some(form) = self.state.form.as_mut() else {
            return;
        };

        match msg {
            Message::Quit => {
                self.should_quit = true;
            }
            Message::Escape => {
                self.state.form = None;
            }
            Message::FormInput { ch } => form.insert_char(ch),
            Message::FormBackspace => form.backspace(),
            Message::FormNextField => form.focus_next(),
            Message::FormPrevField => form.focus_prev(),
            Message::FormSubmit => {
                if form.submit(&self.state.registry) {
                    self.state.form = None;
                }
            }
            _ => {}
        }
    }

    /// A left press selects the listing and row under the pointer and arms
    /// the drag gesture.
    fn pointer_down(&mut self, column: u16, row: u16) {
        if self.state.detail_visible {
            return;
        }
        let Some(listing_idx) = self.listing_at(column) else {
            return;
        };

        self.state.set_focused_listing(listing_idx);
        self.state.selected_row = self.row_at(listing_idx, row);
        self.pointer_armed = self.state.selected_row.is_some();
    }

    /// Pointer motion with the button held: start the drag on first
    /// movement, then keep the drop candidate under the pointer.
    fn pointer_drag(&mut self, column: u16, _row: u16) {
        if !self.state.drag.is_active() {
            if !self.pointer_armed {
                return;
            }
            if !self.state.grab_selected() {
                self.pointer_armed = false;
                return;
            }
        }
        self.state.hover_listing(self.listing_at(column));
    }

    /// Release drops on the listing under the pointer, if any.
    fn pointer_up(&mut self, column: u16, _row: u16) {
        self.pointer_armed = false;
        if !self.state.drag.is_active() {
            return;
        }
        self.state.hover_listing(self.listing_at(column));
        let _ = self.state.drop_active();
    }

    /// The index of the listing column at the given terminal column, using
    /// the areas from the last render.
    fn listing_at(&self, column: u16) -> Option<usize> {
        let board = self.state.board_area.get();
        if board.width == 0 || column < board.x || column >= board.x + board.width {
            return None;
        }

        column_areas(board, self.state.listings.len())
            .iter()
            .position(|area| column >= area.x && column < area.x + area.width)
    }

    /// The index of the item row at the given terminal row within a listing
    /// column, honoring the scroll offset the last render used.
    fn row_at(&self, listing_idx: usize, row: u16) -> Option<usize> {
        let board = self.state.board_area.get();
        let listing = self.state.listings.get(listing_idx)?;
        // Cards start below the column's top border
        let top = board.y + 1;
        if row < top {
            return None;
        }

        let visible_rows = ((board.height.saturating_sub(2)) / CARD_HEIGHT).max(1) as usize;
        let selected = if listing_idx == self.state.focused_listing {
            self.state.selected_row
        } else {
            None
        };
        let offset = calculate_scroll_offset(selected, listing.len(), visible_rows);

        let idx = ((row - top) / CARD_HEIGHT) as usize + offset;
        (idx < listing.len()).then_some(idx)
    }

    /// Renders the application UI to the given frame.
    pub fn view(&self, frame: &mut Frame) {
        let area = frame.area();

        if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
            let notice = Paragraph::new("Terminal too small").alignment(Alignment::Center);
            frame.render_widget(notice, area);
            return;
        }

        // Header + content + status bar
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(STATUS_BAR_HEIGHT),
            ])
            .split(area);

        self.render_header(frame, chunks[0]);

        // Render either the board or the detail screen
        let detail_item = self
            .state
            .detail_visible
            .then(|| self.state.selected_item())
            .flatten();
        if let Some(item) = detail_item {
            let buf = frame.buffer_mut();
            render_detail_panel(&item, self.state.detail_scroll, chunks[1], buf);
        } else {
            // Remember where the board is so pointer events can be mapped
            // back onto listings and rows
            self.state.board_area.set(chunks[1]);
            let buf = frame.buffer_mut();
            render_board(
                &self.state.listings,
                self.state.focused_listing,
                self.state.selected_row,
                self.state.dragged_id(),
                chunks[1],
                buf,
            );
        }

        let buf = frame.buffer_mut();
        render_status_bar(self.state.drag.is_active(), chunks[2], buf);

        // Overlays on top
        if let Some(form) = &self.state.form {
            render_form(form, area, buf);
        }
        if self.state.help_visible {
            render_help_overlay(area, buf);
        }
    }

    /// Runs the main application loop.
    ///
    /// This function blocks until the user quits the application.
    /// It polls for events, updates state, and renders the UI.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal operations fail.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use trellis_protocol::Registry;
    /// use trellis_tui::{App, terminal};
    ///
    /// #[tokio::main]
    /// async fn main() -> anyhow::Result<()> {
    ///     let mut terminal = terminal::setup_terminal(true)?;
    ///     let mut app = App::new(Registry::shared());
    ///     app.run(&mut terminal).await?;
    ///     terminal::restore_terminal(&mut terminal)?;
    ///     Ok(())
    /// }
    /// ```
    pub async fn run(&mut self, terminal: &mut AppTerminal) -> anyhow::Result<()> {
        loop {
            // Render
            terminal.draw(|frame| self.view(frame))?;

            // Poll for events
            if let Some(event) = poll_event(self.tick_rate)?
                && let Some(msg) = event_to_message(&event, self.state.form.is_some())
            {
                self.update(msg);
            }

            // Check for quit
            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Renders the header bar with title and help cue.
    fn render_header(&self, frame: &mut Frame, area: Rect) {
        // Create the block first to get inner area (with rounded borders)
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded);

        let inner = block.inner(area);
        frame.render_widget(block, area);

        // Split inner area: title left, help cue right
        let [title_area, help_area] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(17), // "Press ? for help" = 16 chars + padding
        ])
        .areas(inner);

        // Render title on left
        let title = Paragraph::new(Line::from(vec![
            Span::styled(
                "trellis",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" - "),
            Span::styled("Project Board", Style::default().fg(Color::White)),
        ]));
        frame.render_widget(title, title_area);

        // Render help cue on right
        let help_cue = Paragraph::new(Line::from(vec![
            Span::styled("Press ", Style::default().fg(Color::DarkGray)),
            Span::styled("?", Style::default().fg(Color::Yellow)),
            Span::styled(" for help", Style::default().fg(Color::DarkGray)),
        ]))
        .alignment(Alignment::Right);
        frame.render_widget(help_cue, help_area);
    }
}
