//! Grid geometry: converts the pixel-based button styles into terminal cell
//! rectangles.
//!
//! Columns and rows auto-size like a table layout: every column is as wide as
//! its widest button (plus margins) and every row as tall as its tallest.
//! Empty cells take a column position but contribute no size.

use crate::panel::{ButtonStyle, PanelLayout};
use ratatui::layout::{Position, Rect};

/// Horizontal pixels per terminal column.
pub const PIXELS_PER_COLUMN: u16 = 8;

/// Vertical pixels per terminal row.
pub const PIXELS_PER_ROW: u16 = 16;

/// Smallest button box (borders plus one line of label).
pub const MIN_BUTTON_CELLS: u16 = 3;

/// Where one button landed on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonSlot {
    /// Grid row.
    pub row: usize,
    /// Grid column.
    pub column: usize,
    /// Macro fired by this button.
    pub macro_index: u32,
    /// Screen area, already clipped to the panel area.
    pub area: Rect,
}

impl ButtonSlot {
    /// Returns `true` if the screen position falls on this button.
    pub fn contains(&self, column: u16, row: u16) -> bool {
        self.area.contains(Position { x: column, y: row })
    }
}

fn px_to_cells(px: u16, per_cell: u16) -> u16 {
    px.div_ceil(per_cell)
}

/// Button box size in terminal cells as `(width, height)`.
pub fn button_extent(style: &ButtonStyle) -> (u16, u16) {
    (
        px_to_cells(style.width, PIXELS_PER_COLUMN).max(MIN_BUTTON_CELLS),
        px_to_cells(style.height, PIXELS_PER_ROW).max(MIN_BUTTON_CELLS),
    )
}

/// Margin in terminal cells as `(horizontal, vertical)`.
pub fn margin_extent(style: &ButtonStyle) -> (u16, u16) {
    (
        px_to_cells(style.margin, PIXELS_PER_COLUMN),
        px_to_cells(style.margin, PIXELS_PER_ROW),
    )
}

/// Lays out every button of `layout` inside `area`.
///
/// Buttons that fall entirely outside `area` are omitted; partially visible
/// ones are clipped.
pub fn layout_slots(layout: &PanelLayout, area: Rect) -> Vec<ButtonSlot> {
    let column_total = layout.rows().iter().map(Vec::len).max().unwrap_or(0);
    let mut column_widths = vec![0u32; column_total];
    let mut row_heights = vec![0u32; layout.row_count()];

    for (row, column, button) in layout.buttons() {
        let (w, h) = button_extent(&button.style);
        let (mx, my) = margin_extent(&button.style);
        column_widths[column] = column_widths[column].max(u32::from(w) + 2 * u32::from(mx));
        row_heights[row] = row_heights[row].max(u32::from(h) + 2 * u32::from(my));
    }

    let column_offsets = offsets(&column_widths);
    let row_offsets = offsets(&row_heights);

    layout
        .buttons()
        .filter_map(|(row, column, button)| {
            let (w, h) = button_extent(&button.style);
            let (mx, my) = margin_extent(&button.style);
            let x = u32::from(area.x) + column_offsets[column] + u32::from(mx);
            let y = u32::from(area.y) + row_offsets[row] + u32::from(my);
            let unclipped = Rect {
                x: clamp_u16(x),
                y: clamp_u16(y),
                width: w,
                height: h,
            };
            let clipped = unclipped.intersection(area);
            if clipped.is_empty() || x > u32::from(u16::MAX) || y > u32::from(u16::MAX) {
                return None;
            }
            Some(ButtonSlot {
                row,
                column,
                macro_index: button.macro_index,
                area: clipped,
            })
        })
        .collect()
}

fn offsets(sizes: &[u32]) -> Vec<u32> {
    sizes
        .iter()
        .scan(0u32, |acc, size| {
            let start = *acc;
            *acc = acc.saturating_add(*size);
            Some(start)
        })
        .collect()
}

fn clamp_u16(value: u32) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}
