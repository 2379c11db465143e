//! Error types for reading and parsing panel configuration files.

use std::path::PathBuf;
use thiserror::Error;

/// Why a single configuration line was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LineError {
    /// The directive has the wrong number of `:`-separated fields.
    #[error("Row with keyword '{keyword}' should contain {}.", data_columns(*expected))]
    FieldCount {
        /// Directive keyword.
        keyword: &'static str,
        /// Number of fields required after the keyword.
        expected: usize,
    },

    /// A variable-length directive has too few fields.
    #[error("Row with keyword '{keyword}' should contain at least {}.", data_columns(*minimum))]
    TooFewFields {
        /// Directive keyword.
        keyword: &'static str,
        /// Minimum number of fields required after the keyword.
        minimum: usize,
    },

    #[error("Invalid IP address.")]
    InvalidAddress,

    #[error("Invalid port.")]
    InvalidPort,

    #[error("Invalid width.")]
    InvalidWidth,

    #[error("Invalid height.")]
    InvalidHeight,

    #[error("Invalid margin.")]
    InvalidMargin,

    #[error("Invalid font name.")]
    InvalidFontName,

    #[error("Invalid font size.")]
    InvalidFontSize,

    #[error("Invalid macro index.")]
    InvalidMacroIndex,

    #[error("Invalid background color.")]
    InvalidBackground,

    #[error("Invalid foreground color.")]
    InvalidForeground,

    /// The first field is not a known directive.
    #[error("Invalid keyword.")]
    InvalidKeyword,
}

fn data_columns(count: usize) -> String {
    if count == 1 {
        "1 data column".to_string()
    } else {
        format!("{count} data columns")
    }
}

/// Errors that abort loading a panel configuration.
#[derive(Error, Debug)]
pub enum PanelError {
    /// The configuration file could not be read.
    #[error("Couldn't read configuration file '{}': {source}", path.display())]
    Read {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A line was malformed. Parsing stops at the first such line.
    #[error("Line {line}: {reason}")]
    Line {
        /// One-based line number.
        line: usize,
        /// What was wrong with it.
        #[source]
        reason: LineError,
    },

    /// No `ip` directive appeared anywhere in the file.
    #[error("No IP endpoint provided.")]
    MissingDestination,
}

impl PanelError {
    /// One-based line number for line-level errors.
    pub fn line(&self) -> Option<usize> {
        match self {
            PanelError::Line { line, .. } => Some(*line),
            _ => None,
        }
    }
}
