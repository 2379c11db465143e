//! Error types for loading and interpreting the TOML settings file.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading application settings.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// Failed to read the settings file from disk.
    #[error("Failed to read settings file: {}", path.display())]
    ReadError {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("Invalid settings at {}:{line}:{column}: {message}", path.display())]
    ParseError {
        /// Path to the file containing the error.
        path: PathBuf,
        /// One-based line index of the error (0 if unknown).
        line: usize,
        /// One-based column index of the error (0 if unknown).
        column: usize,
        /// Human-readable description of the parse failure.
        message: String,
    },

    /// A duration string was not understood.
    #[error("Invalid duration '{value}' for {key}: {message}")]
    InvalidDuration {
        /// Dotted settings key, e.g. `tui.tick_rate`.
        key: &'static str,
        /// The offending value.
        value: String,
        /// Parser message.
        message: String,
    },
}
