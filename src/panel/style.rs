//! Running button style: the size, margin and font applied to buttons as they
//! are defined.

use std::ops::RangeInclusive;

/// Accepted range for button width, height and margin, in pixels.
pub const PIXEL_RANGE: RangeInclusive<u16> = 1..=500;

/// Accepted range for font sizes, in points.
pub const FONT_SIZE_RANGE: RangeInclusive<u16> = 1..=120;

/// Default button width in pixels.
pub const DEFAULT_WIDTH: u16 = 120;
/// Default button height in pixels.
pub const DEFAULT_HEIGHT: u16 = 120;
/// Default margin around each button in pixels.
pub const DEFAULT_MARGIN: u16 = 10;
/// Default font family.
pub const DEFAULT_FONT_FAMILY: &str = "Montserrat";
/// Default font size in points.
pub const DEFAULT_FONT_SIZE: u16 = 14;

/// Font descriptor for button labels.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Font {
    /// Font family name (never empty).
    pub family: String,
    /// Size in points, within [`FONT_SIZE_RANGE`].
    pub size: u16,
    /// Bold weight.
    pub bold: bool,
    /// Italic slant.
    pub italic: bool,
}

impl Default for Font {
    fn default() -> Self {
        Self {
            family: DEFAULT_FONT_FAMILY.to_string(),
            size: DEFAULT_FONT_SIZE,
            bold: true,
            italic: false,
        }
    }
}

/// Style in effect for the next `button` directive.
///
/// Each button captures a copy of this value when it is defined, so later
/// `size`, `margin` or `font` directives never affect earlier buttons.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ButtonStyle {
    /// Width in pixels.
    pub width: u16,
    /// Height in pixels.
    pub height: u16,
    /// Margin on every side, in pixels.
    pub margin: u16,
    /// Label font.
    pub font: Font,
}

impl Default for ButtonStyle {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            margin: DEFAULT_MARGIN,
            font: Font::default(),
        }
    }
}
