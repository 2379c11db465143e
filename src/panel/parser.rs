//! Line-oriented panel configuration parser.
//!
//! Each line is split on `:` and dispatched on its first field. Lines are
//! first turned into a [`Directive`], which performs all validation, and then
//! folded into a [`ParseState`] that carries the running style, the grid and
//! the destination. The first invalid line aborts the parse.

use crate::panel::color::Color;
use crate::panel::error::{LineError, PanelError};
use crate::panel::model::{ButtonCell, Cell, Destination, PanelLayout, ParsedPanel};
use crate::panel::style::{ButtonStyle, Font, FONT_SIZE_RANGE, PIXEL_RANGE};
use std::net::{IpAddr, Ipv6Addr};
use std::ops::RangeInclusive;

/// Field separator within a line.
pub const FIELD_SEPARATOR: char = ':';

const KEYWORD_IP: &str = "ip";
const KEYWORD_TITLE: &str = "title";
const KEYWORD_SIZE: &str = "size";
const KEYWORD_MARGIN: &str = "margin";
const KEYWORD_FONT: &str = "font";
const KEYWORD_BUTTON: &str = "button";
const KEYWORD_EMPTY: &str = "empty";
const KEYWORD_NEWLINE: &str = "newline";

const PORT_RANGE: RangeInclusive<i64> = 1..=65535;

/// One validated configuration line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    /// `ip:<address>:<port>`
    Ip(Destination),
    /// `title:<text>`
    Title(String),
    /// `size:<width>:<height>`
    Size {
        /// Button width in pixels.
        width: u16,
        /// Button height in pixels.
        height: u16,
    },
    /// `margin:<pixels>`
    Margin(u16),
    /// `font:<family>:<size>[:bold][:italic]`
    Font(Font),
    /// `button:<label>:<macro>:<background>:<foreground>`
    Button {
        /// Label text.
        label: String,
        /// Macro fired on activation.
        macro_index: u32,
        /// Fill colour.
        background: Color,
        /// Label colour.
        foreground: Color,
    },
    /// `empty`
    Empty,
    /// `newline`
    Newline,
}

impl Directive {
    /// Parses and validates a single line.
    pub fn parse(line: &str) -> Result<Self, LineError> {
        let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
        match fields[0] {
            KEYWORD_IP => parse_ip(&fields),
            KEYWORD_TITLE => {
                expect_fields(&fields, KEYWORD_TITLE, 1)?;
                Ok(Directive::Title(fields[1].to_string()))
            }
            KEYWORD_SIZE => {
                expect_fields(&fields, KEYWORD_SIZE, 2)?;
                let width = parse_pixels(fields[1]).ok_or(LineError::InvalidWidth)?;
                let height = parse_pixels(fields[2]).ok_or(LineError::InvalidHeight)?;
                Ok(Directive::Size { width, height })
            }
            KEYWORD_MARGIN => {
                expect_fields(&fields, KEYWORD_MARGIN, 1)?;
                let margin = parse_pixels(fields[1]).ok_or(LineError::InvalidMargin)?;
                Ok(Directive::Margin(margin))
            }
            KEYWORD_FONT => parse_font(&fields),
            KEYWORD_BUTTON => parse_button(&fields),
            // Extra fields after `empty` / `newline` are tolerated.
            KEYWORD_EMPTY => Ok(Directive::Empty),
            KEYWORD_NEWLINE => Ok(Directive::Newline),
            _ => Err(LineError::InvalidKeyword),
        }
    }
}

fn expect_fields(fields: &[&str], keyword: &'static str, expected: usize) -> Result<(), LineError> {
    if fields.len() == expected + 1 {
        Ok(())
    } else {
        Err(LineError::FieldCount { keyword, expected })
    }
}

/// Parses a signed decimal integer the way the config format allows:
/// surrounding whitespace and a leading `+` are accepted.
fn parse_int(field: &str) -> Option<i64> {
    field.trim().parse::<i32>().ok().map(i64::from)
}

fn parse_in_range(field: &str, range: RangeInclusive<i64>) -> Option<i64> {
    parse_int(field).filter(|value| range.contains(value))
}

fn parse_pixels(field: &str) -> Option<u16> {
    let range = i64::from(*PIXEL_RANGE.start())..=i64::from(*PIXEL_RANGE.end());
    parse_in_range(field, range).and_then(|v| u16::try_from(v).ok())
}

fn parse_ip(fields: &[&str]) -> Result<Directive, LineError> {
    let (address, port) = match fields.len() {
        3 => (
            fields[1]
                .trim()
                .parse::<IpAddr>()
                .map_err(|_| LineError::InvalidAddress)?,
            fields[2],
        ),
        // An IPv6 address contains the separator itself; accept it when the
        // middle fields rejoin into a valid one.
        n if n > 3 => {
            let joined = fields[1..n - 1].join(":");
            let trimmed = joined.trim();
            let bare = trimmed
                .strip_prefix('[')
                .and_then(|s| s.strip_suffix(']'))
                .unwrap_or(trimmed);
            let v6 = bare.parse::<Ipv6Addr>().map_err(|_| LineError::FieldCount {
                keyword: KEYWORD_IP,
                expected: 2,
            })?;
            (IpAddr::V6(v6), fields[n - 1])
        }
        _ => {
            return Err(LineError::FieldCount {
                keyword: KEYWORD_IP,
                expected: 2,
            })
        }
    };
    let port = parse_in_range(port, PORT_RANGE)
        .and_then(|v| u16::try_from(v).ok())
        .ok_or(LineError::InvalidPort)?;
    Ok(Directive::Ip(Destination::new(address, port)))
}

fn parse_font(fields: &[&str]) -> Result<Directive, LineError> {
    if fields.len() < 3 {
        return Err(LineError::TooFewFields {
            keyword: KEYWORD_FONT,
            minimum: 2,
        });
    }
    let family = fields[1];
    if family.trim().is_empty() {
        return Err(LineError::InvalidFontName);
    }
    let size_range = i64::from(*FONT_SIZE_RANGE.start())..=i64::from(*FONT_SIZE_RANGE.end());
    let size = parse_in_range(fields[2], size_range)
        .and_then(|v| u16::try_from(v).ok())
        .ok_or(LineError::InvalidFontSize)?;

    // Flags start cleared on every font line; unknown tokens are ignored.
    let flags = &fields[3..];
    Ok(Directive::Font(Font {
        family: family.to_string(),
        size,
        bold: flags.contains(&"bold"),
        italic: flags.contains(&"italic"),
    }))
}

fn parse_button(fields: &[&str]) -> Result<Directive, LineError> {
    expect_fields(fields, KEYWORD_BUTTON, 4)?;
    let macro_index = parse_int(fields[2])
        .and_then(|v| u32::try_from(v).ok())
        .ok_or(LineError::InvalidMacroIndex)?;
    let background = fields[3]
        .parse::<Color>()
        .map_err(|_| LineError::InvalidBackground)?;
    let foreground = fields[4]
        .parse::<Color>()
        .map_err(|_| LineError::InvalidForeground)?;
    Ok(Directive::Button {
        label: fields[1].to_string(),
        macro_index,
        background,
        foreground,
    })
}

/// Accumulator folded over the directives of one file.
///
/// Only [`ParseState::apply`] changes it, so the grid always holds at least
/// one row and the cursor is always the end of the last row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseState {
    style: ButtonStyle,
    title: Option<String>,
    rows: Vec<Vec<Cell>>,
    destination: Option<Destination>,
}

impl Default for ParseState {
    fn default() -> Self {
        Self {
            style: ButtonStyle::default(),
            title: None,
            rows: vec![Vec::new()],
            destination: None,
        }
    }
}

impl ParseState {
    /// Current cursor position as `(row, column)`.
    pub fn cursor(&self) -> (usize, usize) {
        self.rows
            .last()
            .map_or((0, 0), |row| (self.rows.len() - 1, row.len()))
    }

    /// Style applied to the next button.
    pub fn style(&self) -> &ButtonStyle {
        &self.style
    }

    /// Title set so far.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Destination set so far.
    pub fn destination(&self) -> Option<Destination> {
        self.destination
    }

    /// Applies one directive, returning the updated state.
    pub fn apply(mut self, directive: Directive) -> Self {
        match directive {
            Directive::Ip(destination) => self.destination = Some(destination),
            Directive::Title(title) => self.title = Some(title),
            Directive::Size { width, height } => {
                self.style.width = width;
                self.style.height = height;
            }
            Directive::Margin(margin) => self.style.margin = margin,
            Directive::Font(font) => self.style.font = font,
            Directive::Button {
                label,
                macro_index,
                background,
                foreground,
            } => {
                let cell = Cell::Button(ButtonCell {
                    label,
                    macro_index,
                    background,
                    foreground,
                    style: self.style.clone(),
                });
                self.push_cell(cell);
            }
            Directive::Empty => self.push_cell(Cell::Empty),
            Directive::Newline => self.rows.push(Vec::new()),
        }
        self
    }

    fn push_cell(&mut self, cell: Cell) {
        match self.rows.last_mut() {
            Some(row) => row.push(cell),
            None => self.rows.push(vec![cell]),
        }
    }

    /// Runs the end-of-input checks and produces the final panel.
    pub fn finish(mut self) -> Result<ParsedPanel, PanelError> {
        let destination = self.destination.ok_or(PanelError::MissingDestination)?;
        if self.rows.is_empty() {
            self.rows.push(Vec::new());
        }
        Ok(ParsedPanel {
            layout: PanelLayout::from_parts(self.title, self.rows),
            destination,
        })
    }
}

/// Parses a whole configuration text.
///
/// Line numbers in errors are one-based. A trailing newline at the end of the
/// text does not count as an extra (empty) line.
pub fn parse(text: &str) -> Result<ParsedPanel, PanelError> {
    let state = text
        .lines()
        .enumerate()
        .try_fold(ParseState::default(), |state, (index, line)| {
            let directive = Directive::parse(line).map_err(|reason| PanelError::Line {
                line: index + 1,
                reason,
            })?;
            Ok::<_, PanelError>(state.apply(directive))
        })?;
    state.finish()
}
