//! Panel configuration: the directive parser and the layout model it builds.

/// Button colour parsing.
pub mod color;

/// Error types for loading and parsing.
pub mod error;

/// File loading.
pub mod loader;

/// Layout model types.
pub mod model;

/// Directive parser.
pub mod parser;

/// Running button style.
pub mod style;

/// Layout-to-directives writer.
pub mod writer;

pub use color::Color;
pub use error::{LineError, PanelError};
pub use loader::PanelLoader;
pub use model::{ButtonCell, Cell, Destination, PanelLayout, ParsedPanel};
pub use parser::parse;
pub use style::{ButtonStyle, Font};
