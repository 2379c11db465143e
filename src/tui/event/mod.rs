//! Event handling for the TUI.
//!
//! Wraps crossterm events and adds a tick variant for periodic UI refresh.

use crate::tui::app::{App, Direction};
use crossterm::event::{
    Event as CrosstermEvent, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
    MouseEvent,
};
use futures::StreamExt;
use std::time::Duration;
use tokio::time::interval;

/// Application-level event variants.
#[derive(Debug, Clone, Copy)]
pub enum Event {
    /// A key was pressed.
    Key(KeyEvent),
    /// A mouse event occurred.
    Mouse(MouseEvent),
    /// Terminal was resized.
    Resize(u16, u16),
    /// Periodic tick for UI refresh.
    Tick,
}

/// Event handler that merges terminal input events with periodic ticks.
pub struct EventHandler {
    /// Tick interval duration.
    tick_rate: Duration,
}

impl EventHandler {
    /// Creates a new EventHandler with the specified tick rate.
    pub fn new(tick_rate: Duration) -> Self {
        Self { tick_rate }
    }

    /// Waits for the next event, returning either a terminal event or a tick.
    pub async fn next(&self, reader: &mut EventStream) -> std::io::Result<Event> {
        let mut tick = interval(self.tick_rate);
        // Consume the first immediate tick
        tick.tick().await;

        loop {
            tokio::select! {
                maybe_event = reader.next() => {
                    match maybe_event {
                        Some(Ok(CrosstermEvent::Key(key))) => return Ok(Event::Key(key)),
                        Some(Ok(CrosstermEvent::Mouse(mouse))) => return Ok(Event::Mouse(mouse)),
                        Some(Ok(CrosstermEvent::Resize(w, h))) => return Ok(Event::Resize(w, h)),
                        Some(Err(e)) => return Err(e),
                        // Ignore focus, paste events
                        Some(Ok(_)) => continue,
                        None => return Err(std::io::Error::new(
                            std::io::ErrorKind::UnexpectedEof,
                            "event stream ended",
                        )),
                    }
                }
                _ = tick.tick() => {
                    return Ok(Event::Tick);
                }
            }
        }
    }
}

/// Action produced by handling an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// No action to take.
    None,
    /// Quit the application.
    Quit,
    /// Fire the macro with the given index.
    Activate(u32),
}

/// Handles a key event, updating the selection and returning the resulting action.
pub fn handle_key_event(app: &mut App, key: KeyEvent) -> Action {
    // Releases and repeats are reported on some platforms; act on presses only.
    if key.kind != KeyEventKind::Press {
        return Action::None;
    }
    if should_quit(key) {
        return Action::Quit;
    }

    match key.code {
        KeyCode::Char('h') | KeyCode::Left => {
            app.move_selection(Direction::Left);
            Action::None
        }
        KeyCode::Char('l') | KeyCode::Right => {
            app.move_selection(Direction::Right);
            Action::None
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.move_selection(Direction::Up);
            Action::None
        }
        KeyCode::Char('j') | KeyCode::Down => {
            app.move_selection(Direction::Down);
            Action::None
        }
        KeyCode::Enter | KeyCode::Char(' ') => app
            .selected_macro()
            .map_or(Action::None, Action::Activate),
        KeyCode::Esc => {
            // Esc clears selection (defocus)
            app.selected = None;
            Action::None
        }
        _ => Action::None,
    }
}

/// Returns true if the key event should trigger application quit.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q'))
        || (key.modifiers.contains(KeyModifiers::CONTROL) && matches!(key.code, KeyCode::Char('c')))
}
