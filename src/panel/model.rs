//! In-memory panel layout produced by the parser.
//!
//! Everything here is read-only once parsing succeeds. Rows and cells keep
//! document order, which is also visual order.

use crate::panel::color::Color;
use crate::panel::style::ButtonStyle;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

/// Where activation messages are sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Destination {
    /// Remote IP address.
    pub ip: IpAddr,
    /// Remote UDP port (never zero).
    pub port: u16,
}

impl Destination {
    /// Creates a destination from an address and port.
    pub fn new(ip: IpAddr, port: u16) -> Self {
        Self { ip, port }
    }

    /// Returns the destination as a socket address.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.ip, self.port)
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.socket_addr().fmt(f)
    }
}

/// A clickable button and everything needed to draw it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonCell {
    /// Text shown on the button.
    pub label: String,
    /// Macro fired when the button is activated.
    pub macro_index: u32,
    /// Fill colour.
    pub background: Color,
    /// Label colour.
    pub foreground: Color,
    /// Style captured when the button was defined.
    pub style: ButtonStyle,
}

/// One grid position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    /// A button.
    Button(ButtonCell),
    /// A placeholder that occupies a column and draws nothing.
    Empty,
}

impl Cell {
    /// Returns the button if this cell holds one.
    pub fn as_button(&self) -> Option<&ButtonCell> {
        match self {
            Cell::Button(button) => Some(button),
            Cell::Empty => None,
        }
    }
}

/// Grid of cells plus the window title.
///
/// There is always at least one row; each `newline` directive adds another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelLayout {
    title: Option<String>,
    rows: Vec<Vec<Cell>>,
}

impl Default for PanelLayout {
    fn default() -> Self {
        Self {
            title: None,
            rows: vec![Vec::new()],
        }
    }
}

impl PanelLayout {
    pub(crate) fn from_parts(title: Option<String>, rows: Vec<Vec<Cell>>) -> Self {
        debug_assert!(!rows.is_empty(), "a layout always has at least one row");
        Self { title, rows }
    }

    /// Window title, if one was configured.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Rows in document order.
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Number of rows (`newline` directives + 1).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of grid columns: the highest column holding a button, plus one.
    ///
    /// Empty cells occupy positions but do not widen the grid on their own.
    pub fn column_count(&self) -> usize {
        self.buttons()
            .map(|(_, column, _)| column + 1)
            .max()
            .unwrap_or(0)
    }

    /// Returns the cell at the given position.
    pub fn cell(&self, row: usize, column: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|cells| cells.get(column))
    }

    /// Returns the macro index of the button at the given position.
    pub fn macro_at(&self, row: usize, column: usize) -> Option<u32> {
        self.cell(row, column)
            .and_then(Cell::as_button)
            .map(|button| button.macro_index)
    }

    /// Iterates over all buttons as `(row, column, button)` in document order.
    pub fn buttons(&self) -> impl Iterator<Item = (usize, usize, &ButtonCell)> + '_ {
        self.rows.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter_map(move |(column, cell)| cell.as_button().map(|b| (row, column, b)))
        })
    }

    /// Number of buttons in the layout.
    pub fn button_count(&self) -> usize {
        self.buttons().count()
    }
}

/// Successful parse result: the layout and where its buttons send to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPanel {
    /// The button grid.
    pub layout: PanelLayout,
    /// Destination for activation messages.
    pub destination: Destination,
}
