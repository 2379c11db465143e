//! Reads a panel configuration file and hands it to the parser.

use std::fs;
use std::path::Path;

use crate::panel::error::PanelError;
use crate::panel::model::ParsedPanel;
use crate::panel::parser;

/// Stateless panel configuration loader.
pub struct PanelLoader;

impl PanelLoader {
    /// Loads and parses the configuration file at `path`.
    ///
    /// The file is read in one blocking call. A leading UTF-8 byte order mark
    /// is skipped so files saved by Windows editors parse the same way.
    pub fn load_from_path(path: &Path) -> Result<ParsedPanel, PanelError> {
        tracing::debug!("loading panel configuration from {:?}", path);
        let content = fs::read_to_string(path).map_err(|e| PanelError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        let text = content.strip_prefix('\u{feff}').unwrap_or(&content);
        let panel = parser::parse(text)?;
        tracing::info!(
            rows = panel.layout.row_count(),
            columns = panel.layout.column_count(),
            buttons = panel.layout.button_count(),
            destination = %panel.destination,
            "panel configuration loaded"
        );
        Ok(panel)
    }
}
