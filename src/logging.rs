//! Logging initialization.
//!
//! Configures the `tracing` subscriber with level filtering via the
//! `MACRO_PANEL_LOG` environment variable, falling back to the level from the
//! settings file.
//!
//! The terminal is owned by the panel UI while it runs, so logs go to a file
//! by default (see [`crate::settings::xdg::log_path`]).
//!
//! ```bash
//! # Debug level
//! MACRO_PANEL_LOG=debug macro-panel
//!
//! # Module-specific filtering
//! MACRO_PANEL_LOG=osc_macro_panel::osc=trace,warn macro-panel
//! ```

use crate::settings::{xdg, LogSettings};
use std::fs::{self, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding filter directives.
pub const LOG_ENV: &str = "MACRO_PANEL_LOG";

/// Where log records are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Standard error.
    Stderr,
    /// Append to a file.
    File(PathBuf),
}

impl LogTarget {
    /// Resolves the target from the `[log] file` setting.
    pub fn from_settings(settings: &LogSettings) -> Self {
        match settings.file.trim() {
            "" => LogTarget::File(xdg::log_path()),
            "stderr" | "-" => LogTarget::Stderr,
            path => LogTarget::File(xdg::expand_tilde(path)),
        }
    }
}

/// Builds the level filter: `MACRO_PANEL_LOG` if valid, else the settings level.
pub fn build_filter(settings: &LogSettings) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(settings.level.as_directive()))
}

/// Initialize the global tracing subscriber.
///
/// Returns an error if the log file cannot be opened. Should only be called
/// once, at startup; later calls are ignored.
pub fn init(settings: &LogSettings) -> io::Result<()> {
    let filter = build_filter(settings);
    let builder = fmt().with_env_filter(filter).with_target(false);

    let result = match LogTarget::from_settings(settings) {
        LogTarget::Stderr => builder.with_writer(io::stderr).try_init(),
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(&path)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
    };
    if result.is_err() {
        tracing::debug!("tracing subscriber already initialised");
    }
    Ok(())
}
