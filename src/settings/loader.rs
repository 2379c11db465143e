//! Settings file loader with position-aware error reporting.
//!
//! Settings are optional: when the default file does not exist,
//! `Settings::default()` is returned.

use std::fs;
use std::path::Path;

use crate::settings::error::SettingsError;
use crate::settings::schema::Settings;
use crate::settings::xdg;

/// Stateless settings loader.
pub struct SettingsLoader;

impl SettingsLoader {
    /// Load settings from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Settings, SettingsError> {
        let content = fs::read_to_string(path).map_err(|e| SettingsError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse_toml(&content, path)
    }

    /// Load settings from the default location, or defaults if there is no file.
    pub fn load_default() -> Result<Settings, SettingsError> {
        let path = xdg::settings_path();
        if path.exists() {
            Self::load_from_path(&path)
        } else {
            tracing::debug!("No settings file at {:?}, using defaults", path);
            Ok(Settings::default())
        }
    }

    /// Parse a TOML string into `Settings` with position-aware error reporting.
    fn parse_toml(content: &str, path: &Path) -> Result<Settings, SettingsError> {
        toml::from_str(content).map_err(|e| {
            let (line, column) = e
                .span()
                .map(|span| {
                    let line = content[..span.start].matches('\n').count() + 1;
                    let last_newline = content[..span.start]
                        .rfind('\n')
                        .map(|p| p + 1)
                        .unwrap_or(0);
                    let column = span.start - last_newline + 1;
                    (line, column)
                })
                .unwrap_or((0, 0));
            SettingsError::ParseError {
                path: path.to_path_buf(),
                line,
                column,
                message: e.message().to_string(),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::schema::LogLevel;
    use serial_test::serial;
    use std::path::PathBuf;

    /// Run a closure with `XDG_CONFIG_HOME` temporarily set, then restore.
    fn with_xdg_config<F: FnOnce()>(value: &str, f: F) {
        let original = std::env::var("XDG_CONFIG_HOME").ok();
        std::env::set_var("XDG_CONFIG_HOME", value);
        f();
        match original {
            Some(v) => std::env::set_var("XDG_CONFIG_HOME", v),
            None => std::env::remove_var("XDG_CONFIG_HOME"),
        }
    }

    // -----------------------------------------------------------------------
    // parse_toml
    // -----------------------------------------------------------------------

    #[test]
    fn parse_partial_settings_fills_defaults() {
        let toml_str = "[log]\nlevel = \"debug\"\n";
        let path = PathBuf::from("partial.toml");
        let settings =
            SettingsLoader::parse_toml(toml_str, &path).expect("partial settings should parse");
        assert_eq!(settings.log.level, LogLevel::Debug);
        assert_eq!(settings.tui.tick_rate, "250ms");
        assert_eq!(settings.osc.source_port, 9700);
    }

    #[test]
    fn parse_invalid_toml_returns_parse_error_with_position() {
        let toml_str = "[osc]\nsource_port = \ninvalid";
        let path = PathBuf::from("bad.toml");
        let err = SettingsLoader::parse_toml(toml_str, &path).expect_err("should fail");
        match err {
            SettingsError::ParseError {
                path: p,
                line,
                column,
                message,
            } => {
                assert_eq!(p, path);
                assert!(line > 1, "line should point past the section header");
                assert!(column > 0, "column should be > 0 for known span");
                assert!(!message.is_empty(), "message should not be empty");
            }
            other => panic!("expected ParseError, got: {other:?}"),
        }
    }

    #[test]
    fn parse_error_for_wrong_type() {
        let toml_str = "[tui]\ntick_rate = 42\n";
        let path = PathBuf::from("wrong_type.toml");
        let err = SettingsLoader::parse_toml(toml_str, &path).expect_err("should fail");
        assert!(matches!(err, SettingsError::ParseError { .. }));
    }

    // -----------------------------------------------------------------------
    // load_from_path
    // -----------------------------------------------------------------------

    #[test]
    fn load_from_path_valid_file() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let file = dir.path().join("settings.toml");
        fs::write(&file, "[osc]\nsource_port = 0\n").expect("failed to write temp file");
        let settings = SettingsLoader::load_from_path(&file).expect("should load");
        assert_eq!(settings.osc.source_port, 0);
    }

    #[test]
    fn load_from_path_directory_returns_read_error() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let err = SettingsLoader::load_from_path(dir.path()).expect_err("should fail");
        match err {
            SettingsError::ReadError { path, .. } => assert_eq!(path, dir.path()),
            other => panic!("expected ReadError, got: {other:?}"),
        }
    }

    // -----------------------------------------------------------------------
    // load_default
    // -----------------------------------------------------------------------

    #[test]
    #[serial]
    fn load_default_with_no_file_returns_defaults() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        with_xdg_config(dir.path().to_str().expect("non-utf8 path"), || {
            let settings = SettingsLoader::load_default().expect("should return defaults");
            assert_eq!(settings, Settings::default());
        });
    }

    #[test]
    #[serial]
    fn load_default_with_existing_file_parses_it() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let settings_dir = dir.path().join("osc-macro-panel");
        fs::create_dir_all(&settings_dir).expect("failed to create settings dir");
        fs::write(settings_dir.join("settings.toml"), "[log]\nlevel = \"warn\"\n")
            .expect("failed to write settings");
        with_xdg_config(dir.path().to_str().expect("non-utf8 path"), || {
            let settings = SettingsLoader::load_default().expect("should load");
            assert_eq!(settings.log.level, LogLevel::Warn);
        });
    }
}
