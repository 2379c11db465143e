//! Shared test utilities for TUI testing with ratatui TestBackend.
//!
//! Provides helper functions for creating test terminals, extracting buffer
//! content, asserting colors, and building apps from configuration text.

#![cfg(test)]

use crate::panel::parse;
use crate::tui::app::App;
use ratatui::{backend::TestBackend, buffer::Buffer, style::Color, Terminal};
use std::time::Duration;

/// Creates a Terminal with TestBackend at the specified dimensions.
pub fn test_terminal(width: u16, height: u16) -> Terminal<TestBackend> {
    let backend = TestBackend::new(width, height);
    Terminal::new(backend).expect("failed to create test terminal")
}

/// Extracts all text from a specific row in the buffer as a single String.
pub fn row_text(buffer: &Buffer, row: u16) -> String {
    let area = buffer.area();
    if row >= area.height {
        return String::new();
    }
    (0..area.width)
        .map(|col| {
            buffer
                .cell((col, row))
                .map(|cell| cell.symbol())
                .unwrap_or(" ")
        })
        .collect()
}

/// Checks if a specific row contains the given substring.
pub fn row_contains(buffer: &Buffer, row: u16, text: &str) -> bool {
    row_text(buffer, row).contains(text)
}

/// Finds the first row index that contains the given text, or None if not found.
pub fn find_row_with_text(buffer: &Buffer, text: &str) -> Option<u16> {
    let area = buffer.area();
    (0..area.height).find(|row| row_contains(buffer, *row, text))
}

/// Column of the first occurrence of `text` in `row`.
///
/// Border glyphs are multi-byte, so the byte offset is converted to a cell
/// count.
pub fn find_column_of_text(buffer: &Buffer, row: u16, text: &str) -> Option<u16> {
    let row_string = row_text(buffer, row);
    let byte = row_string.find(text)?;
    u16::try_from(row_string[..byte].chars().count()).ok()
}

/// Asserts that the cell at (col, row) has the specified foreground color.
pub fn assert_fg_color(buffer: &Buffer, col: u16, row: u16, color: Color) {
    let cell = buffer
        .cell((col, row))
        .unwrap_or_else(|| panic!("cell at ({}, {}) does not exist", col, row));
    assert_eq!(
        cell.fg, color,
        "expected fg color {:?} at ({}, {}), got {:?}",
        color, col, row, cell.fg
    );
}

/// Asserts that the cell at (col, row) has the specified background color.
pub fn assert_bg_color(buffer: &Buffer, col: u16, row: u16, color: Color) {
    let cell = buffer
        .cell((col, row))
        .unwrap_or_else(|| panic!("cell at ({}, {}) does not exist", col, row));
    assert_eq!(
        cell.bg, color,
        "expected bg color {:?} at ({}, {}), got {:?}",
        color, col, row, cell.bg
    );
}

/// Checks the foreground color of the first character of `text` in `row`.
pub fn assert_text_fg_in_row(buffer: &Buffer, row: u16, text: &str, color: Color) {
    let col = find_column_of_text(buffer, row, text)
        .unwrap_or_else(|| panic!("text '{}' not found in row {}", text, row));
    assert_fg_color(buffer, col, row, color);
}

/// Checks the background color of the first character of `text` in `row`.
pub fn assert_text_bg_in_row(buffer: &Buffer, row: u16, text: &str, color: Color) {
    let col = find_column_of_text(buffer, row, text)
        .unwrap_or_else(|| panic!("text '{}' not found in row {}", text, row));
    assert_bg_color(buffer, col, row, color);
}

/// Parses `config` and wraps it in an [`App`] with a 250ms tick.
pub fn make_app(config: &str) -> App {
    let panel = parse(config).expect("test config should parse");
    App::new(panel, Duration::from_millis(250))
}

/// Renders the full panel to a buffer and returns the buffer for inspection.
pub fn render_panel_to_buffer(app: &mut App, width: u16, height: u16) -> Buffer {
    let mut terminal = test_terminal(width, height);
    terminal
        .draw(|frame| {
            crate::tui::ui::render_panel(frame, app);
        })
        .expect("draw failed");
    terminal.backend().buffer().clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_has_requested_size() {
        let terminal = test_terminal(80, 24);
        let size = terminal.size().expect("should have size");
        assert_eq!(size.width, 80);
        assert_eq!(size.height, 24);
    }

    #[test]
    fn row_text_extracts_row_content() {
        let mut terminal = test_terminal(20, 5);
        terminal
            .draw(|frame| {
                let area = frame.area();
                let para = ratatui::widgets::Paragraph::new("Hello World");
                frame.render_widget(para, area);
            })
            .expect("draw failed");
        let buffer = terminal.backend().buffer();
        assert!(row_text(buffer, 0).contains("Hello World"));
        assert_eq!(row_text(buffer, 99), "");
    }

    #[test]
    fn find_column_counts_cells_not_bytes() {
        let mut terminal = test_terminal(20, 3);
        terminal
            .draw(|frame| {
                let para = ratatui::widgets::Paragraph::new("│─x");
                frame.render_widget(para, frame.area());
            })
            .expect("draw failed");
        let buffer = terminal.backend().buffer();
        assert_eq!(find_column_of_text(buffer, 0, "x"), Some(2));
        assert_eq!(find_column_of_text(buffer, 0, "y"), None);
    }
}
