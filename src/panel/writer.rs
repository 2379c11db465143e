//! Renders a parsed panel back into configuration directives.
//!
//! Style directives are only emitted when a button's captured style differs
//! from the style the parser would be carrying at that point, so the output
//! stays close to what a person would write by hand.

use crate::panel::model::{Cell, Destination, PanelLayout};
use crate::panel::parser::FIELD_SEPARATOR;
use crate::panel::style::{ButtonStyle, Font};
use std::fmt::Write as _;
use thiserror::Error;

/// A layout that cannot be expressed in the line format.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WriteError {
    /// The title contains the field separator.
    #[error("title '{0}' contains ':' and cannot be written")]
    UnrepresentableTitle(String),
    /// A button label contains the field separator.
    #[error("button label '{0}' contains ':' and cannot be written")]
    UnrepresentableLabel(String),
    /// A font family contains the field separator.
    #[error("font family '{0}' contains ':' and cannot be written")]
    UnrepresentableFont(String),
}

/// Writes `layout` and `destination` as configuration text.
///
/// Parsing the result yields an equal layout and destination.
pub fn to_directives(layout: &PanelLayout, destination: &Destination) -> Result<String, WriteError> {
    let mut out = String::new();
    // fmt::Write into a String cannot fail.
    let _ = writeln!(out, "ip:{}:{}", destination.ip, destination.port);

    if let Some(title) = layout.title() {
        if title.contains(FIELD_SEPARATOR) {
            return Err(WriteError::UnrepresentableTitle(title.to_string()));
        }
        let _ = writeln!(out, "title:{title}");
    }

    let mut running = ButtonStyle::default();
    for (index, row) in layout.rows().iter().enumerate() {
        if index > 0 {
            out.push_str("newline\n");
        }
        for cell in row {
            match cell {
                Cell::Empty => out.push_str("empty\n"),
                Cell::Button(button) => {
                    if button.label.contains(FIELD_SEPARATOR) {
                        return Err(WriteError::UnrepresentableLabel(button.label.clone()));
                    }
                    write_style_changes(&mut out, &running, &button.style)?;
                    running = button.style.clone();
                    let _ = writeln!(
                        out,
                        "button:{}:{}:{}:{}",
                        button.label, button.macro_index, button.background, button.foreground
                    );
                }
            }
        }
    }
    Ok(out)
}

fn write_style_changes(
    out: &mut String,
    running: &ButtonStyle,
    wanted: &ButtonStyle,
) -> Result<(), WriteError> {
    if (running.width, running.height) != (wanted.width, wanted.height) {
        let _ = writeln!(out, "size:{}:{}", wanted.width, wanted.height);
    }
    if running.margin != wanted.margin {
        let _ = writeln!(out, "margin:{}", wanted.margin);
    }
    if running.font != wanted.font {
        out.push_str(&font_directive(&wanted.font)?);
        out.push('\n');
    }
    Ok(())
}

fn font_directive(font: &Font) -> Result<String, WriteError> {
    if font.family.contains(FIELD_SEPARATOR) {
        return Err(WriteError::UnrepresentableFont(font.family.clone()));
    }
    let mut line = format!("font:{}:{}", font.family, font.size);
    if font.bold {
        line.push_str(":bold");
    }
    if font.italic {
        line.push_str(":italic");
    }
    Ok(line)
}
