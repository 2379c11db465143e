//! Application state and main event loop for the TUI.
//!
//! Manages terminal setup/teardown, panic hooks, and the core render loop.
//! Activations are handed to the sink on spawned tasks; their outcomes come
//! back over a channel and are shown in the status line.

use crate::osc::{MacroSink, SendError};
use crate::panel::{Destination, PanelLayout, ParsedPanel};
use crate::tui::event::{handle_key_event, Action, Event, EventHandler};
use crate::tui::geometry::ButtonSlot;
use crate::tui::ui::render_panel;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, EventStream},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::prelude::{CrosstermBackend, Terminal};
use std::io::{self, stdout};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Name shown in the header and window title when the panel has no title.
pub const PROGRAM_NAME: &str = "macro-panel";

/// How long a status message stays in the footer.
pub const STATUS_MESSAGE_DURATION: Duration = Duration::from_secs(2);

const OUTCOME_CHANNEL_CAPACITY: usize = 64;

/// Selection movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// Result of one send, reported back to the event loop.
#[derive(Debug)]
pub enum SendOutcome {
    /// The datagram left the socket.
    Sent {
        /// Macro that was requested.
        macro_index: u32,
        /// Datagram size.
        bytes: usize,
    },
    /// Sending failed. Not retried.
    Failed {
        /// Macro that was requested.
        macro_index: u32,
        /// Why.
        error: SendError,
    },
}

/// Main application state for the TUI.
#[derive(Debug)]
pub struct App {
    /// Whether the application should exit.
    pub should_quit: bool,
    /// The panel being shown.
    pub layout: PanelLayout,
    /// Where activations are sent.
    pub destination: Destination,
    /// Refresh interval.
    pub tick_rate: Duration,
    /// Number of ticks elapsed.
    pub tick_count: u64,
    /// Selected button as `(row, column)`.
    pub selected: Option<(usize, usize)>,
    /// Transient footer message with its expiry time.
    pub status_message: Option<(String, Instant)>,
    /// Button areas from the last render, used for mouse hit-testing.
    pub button_areas: Vec<ButtonSlot>,
}

impl App {
    /// Creates the application state for a parsed panel and selects its first button.
    pub fn new(panel: ParsedPanel, tick_rate: Duration) -> Self {
        let mut app = Self {
            should_quit: false,
            layout: panel.layout,
            destination: panel.destination,
            tick_rate,
            tick_count: 0,
            selected: None,
            status_message: None,
            button_areas: Vec::new(),
        };
        app.init_selection();
        app
    }

    /// Selects the first button in row-major order, if there is one.
    pub fn init_selection(&mut self) {
        self.selected = self
            .layout
            .buttons()
            .next()
            .map(|(row, column, _)| (row, column));
    }

    /// Title for the header and the terminal window.
    pub fn window_title(&self) -> &str {
        self.layout.title().unwrap_or(PROGRAM_NAME)
    }

    /// Macro index of the selected button.
    pub fn selected_macro(&self) -> Option<u32> {
        self.selected
            .and_then(|(row, column)| self.layout.macro_at(row, column))
    }

    /// Moves the selection to the nearest button in `direction`.
    ///
    /// Left/right stay within the row. Up/down jump to the closest row that
    /// has a button and pick the button nearest the current column (the
    /// leftmost one on a tie). With nothing selected, selects the first button.
    pub fn move_selection(&mut self, direction: Direction) {
        let Some((row, column)) = self.selected else {
            self.init_selection();
            return;
        };
        let target = match direction {
            Direction::Left => self
                .layout
                .buttons()
                .filter(|(r, c, _)| *r == row && *c < column)
                .map(|(r, c, _)| (r, c))
                .last(),
            Direction::Right => self
                .layout
                .buttons()
                .find(|(r, c, _)| *r == row && *c > column)
                .map(|(r, c, _)| (r, c)),
            Direction::Up => self
                .layout
                .buttons()
                .map(|(r, _, _)| r)
                .filter(|r| *r < row)
                .max()
                .and_then(|r| self.nearest_in_row(r, column)),
            Direction::Down => self
                .layout
                .buttons()
                .map(|(r, _, _)| r)
                .find(|r| *r > row)
                .and_then(|r| self.nearest_in_row(r, column)),
        };
        if target.is_some() {
            self.selected = target;
        }
    }

    fn nearest_in_row(&self, row: usize, column: usize) -> Option<(usize, usize)> {
        self.layout
            .buttons()
            .filter(|(r, _, _)| *r == row)
            .min_by_key(|(_, c, _)| c.abs_diff(column))
            .map(|(r, c, _)| (r, c))
    }

    /// Handles a mouse event: a left click on a button selects and activates it.
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Action {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Action::None;
        }
        match self
            .button_areas
            .iter()
            .find(|slot| slot.contains(mouse.column, mouse.row))
        {
            Some(slot) => {
                self.selected = Some((slot.row, slot.column));
                Action::Activate(slot.macro_index)
            }
            None => Action::None,
        }
    }

    /// Shows `message` in the footer for [`STATUS_MESSAGE_DURATION`].
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some((message.into(), Instant::now() + STATUS_MESSAGE_DURATION));
    }

    /// Clears the status message if its expiry time has passed.
    pub fn expire_status_message(&mut self) {
        if let Some((_, expiry)) = &self.status_message {
            if Instant::now() >= *expiry {
                self.status_message = None;
            }
        }
    }

    /// Turns a send outcome into a status message.
    pub fn apply_outcome(&mut self, outcome: SendOutcome) {
        match outcome {
            SendOutcome::Sent { macro_index, .. } => {
                self.set_status(format!("Sent macro {macro_index}"));
            }
            SendOutcome::Failed { error, .. } => {
                let detail = std::error::Error::source(&error)
                    .map(|source| format!(": {source}"))
                    .unwrap_or_default();
                self.set_status(format!("{error}{detail}"));
            }
        }
    }

    /// Runs the TUI application: sets up terminal, enters event loop, restores on exit.
    pub async fn run<S: MacroSink + 'static>(&mut self, sink: Arc<S>) -> io::Result<()> {
        // Install panic hook that restores terminal before printing panic info
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = restore_terminal();
            original_hook(panic_info);
        }));

        setup_terminal(self.window_title())?;

        let result = self.event_loop(sink).await;

        restore_terminal()?;
        result
    }

    /// Main event loop: renders UI and processes events.
    async fn event_loop<S: MacroSink + 'static>(&mut self, sink: Arc<S>) -> io::Result<()> {
        let backend = CrosstermBackend::new(stdout());
        let mut terminal = Terminal::new(backend)?;
        let event_handler = EventHandler::new(self.tick_rate);
        let mut reader = EventStream::new();
        let (outcome_tx, mut outcome_rx) = mpsc::channel::<SendOutcome>(OUTCOME_CHANNEL_CAPACITY);

        loop {
            while let Ok(outcome) = outcome_rx.try_recv() {
                self.apply_outcome(outcome);
            }

            terminal.draw(|frame| {
                render_panel(frame, self);
            })?;

            let action = match event_handler.next(&mut reader).await? {
                Event::Key(key) => handle_key_event(self, key),
                Event::Mouse(mouse) => self.handle_mouse_event(mouse),
                Event::Tick => {
                    self.tick_count += 1;
                    self.expire_status_message();
                    Action::None
                }
                Event::Resize(_, _) => Action::None,
            };

            match action {
                Action::Quit => {
                    self.should_quit = true;
                    return Ok(());
                }
                Action::Activate(macro_index) => {
                    tracing::debug!(macro_index, "button activated");
                    dispatch_activation(
                        Arc::clone(&sink),
                        self.destination,
                        macro_index,
                        outcome_tx.clone(),
                    );
                }
                Action::None => {}
            }
        }
    }
}

/// Sends one activation on its own task and reports the outcome on `outcomes`.
///
/// Returns immediately; the caller never waits for the send.
pub fn dispatch_activation<S: MacroSink + 'static>(
    sink: Arc<S>,
    destination: Destination,
    macro_index: u32,
    outcomes: mpsc::Sender<SendOutcome>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let outcome = match sink.send(destination, macro_index).await {
            Ok(bytes) => SendOutcome::Sent { macro_index, bytes },
            Err(error) => {
                tracing::warn!(macro_index, %destination, "macro request failed: {}", error);
                SendOutcome::Failed { macro_index, error }
            }
        };
        if outcomes.send(outcome).await.is_err() {
            tracing::debug!(macro_index, "event loop gone, dropping send outcome");
        }
    })
}

/// Enables raw mode, switches to the alternate screen and sets the window title.
fn setup_terminal(title: &str) -> io::Result<()> {
    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen, EnableMouseCapture, SetTitle(title))?;
    Ok(())
}

/// Restores the terminal to its original state.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
    Ok(())
}

#[cfg(test)]
mod tests;
