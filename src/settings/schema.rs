//! TOML settings schema.
//!
//! All structs derive `Deserialize` and `Serialize` with defaults via
//! `#[serde(default)]`, so a missing or partial file is always valid.
//!
//! Durations are human-readable strings (e.g. `"250ms"`) parsed with
//! `humantime` when read.

use crate::osc::DEFAULT_SOURCE_PORT;
use crate::settings::error::SettingsError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

// ---------------------------------------------------------------------------
// Top-level Settings
// ---------------------------------------------------------------------------

/// Root settings.
///
/// ```toml
/// [tui]
/// [osc]
/// [log]
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Terminal UI behaviour.
    pub tui: TuiSettings,
    /// Outbound OSC transport.
    pub osc: OscSettings,
    /// Logging.
    pub log: LogSettings,
}

// ---------------------------------------------------------------------------
// TUI
// ---------------------------------------------------------------------------

/// Terminal UI settings.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct TuiSettings {
    /// Interval between passive redraws (e.g. `"250ms"`).
    pub tick_rate: String,
}

impl Default for TuiSettings {
    fn default() -> Self {
        Self {
            tick_rate: "250ms".to_string(),
        }
    }
}

impl TuiSettings {
    /// Parses `tick_rate`. Zero durations are rejected.
    pub fn tick_rate(&self) -> Result<Duration, SettingsError> {
        let invalid = |message: String| SettingsError::InvalidDuration {
            key: "tui.tick_rate",
            value: self.tick_rate.clone(),
            message,
        };
        let rate = humantime::parse_duration(&self.tick_rate).map_err(|e| invalid(e.to_string()))?;
        if rate.is_zero() {
            return Err(invalid("must be greater than zero".to_string()));
        }
        Ok(rate)
    }
}

// ---------------------------------------------------------------------------
// OSC
// ---------------------------------------------------------------------------

/// OSC transport settings.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OscSettings {
    /// Local UDP port requests are sent from; 0 picks an ephemeral port.
    pub source_port: u16,
}

impl Default for OscSettings {
    fn default() -> Self {
        Self {
            source_port: DEFAULT_SOURCE_PORT,
        }
    }
}

// ---------------------------------------------------------------------------
// Logging
// ---------------------------------------------------------------------------

/// Logging settings from the `[log]` section.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct LogSettings {
    /// Verbosity when `MACRO_PANEL_LOG` is unset.
    pub level: LogLevel,
    /// Log file path. Empty means the default file in the state directory;
    /// `"stderr"` writes to standard error.
    pub file: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            file: String::new(),
        }
    }
}

/// Log verbosity levels (kebab-case in TOML).
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum LogLevel {
    /// Only errors.
    Error,
    /// Errors and warnings.
    Warn,
    /// Informational messages (default).
    Info,
    /// Debug-level detail.
    Debug,
    /// Full trace output.
    Trace,
}

impl LogLevel {
    /// Filter directive understood by `tracing_subscriber::EnvFilter`.
    pub fn as_directive(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_settings_all_fields() {
        let toml_str = r#"
[tui]
tick_rate = "100ms"

[osc]
source_port = 0

[log]
level = "debug"
file = "/var/log/macro-panel.log"
"#;
        let settings: Settings = toml::from_str(toml_str).expect("valid TOML should parse");
        assert_eq!(settings.tui.tick_rate, "100ms");
        assert_eq!(settings.osc.source_port, 0);
        assert_eq!(settings.log.level, LogLevel::Debug);
        assert_eq!(settings.log.file, "/var/log/macro-panel.log");
    }

    #[test]
    fn parse_empty_string_uses_all_defaults() {
        let settings: Settings = toml::from_str("").expect("empty string should parse");
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn parse_unknown_fields_are_ignored() {
        let toml_str = r#"
unknown_key = "hello"

[tui]
future_field = 42
"#;
        let settings: Settings =
            toml::from_str(toml_str).expect("unknown fields should be ignored");
        assert_eq!(settings.tui.tick_rate, "250ms");
    }

    #[test]
    fn default_source_port_is_9700() {
        assert_eq!(Settings::default().osc.source_port, 9700);
    }

    #[test]
    fn default_tick_rate_parses() {
        let rate = Settings::default()
            .tui
            .tick_rate()
            .expect("default tick rate should parse");
        assert_eq!(rate, Duration::from_millis(250));
    }

    #[test]
    fn invalid_tick_rate_is_reported() {
        let tui = TuiSettings {
            tick_rate: "soon".to_string(),
        };
        let err = tui.tick_rate().expect_err("should fail");
        assert!(matches!(err, SettingsError::InvalidDuration { key: "tui.tick_rate", .. }));
    }

    #[test]
    fn zero_tick_rate_is_rejected() {
        let tui = TuiSettings {
            tick_rate: "0s".to_string(),
        };
        assert!(tui.tick_rate().is_err());
    }

    #[test]
    fn log_level_all_variants() {
        for (input, expected) in [
            ("error", LogLevel::Error),
            ("warn", LogLevel::Warn),
            ("info", LogLevel::Info),
            ("debug", LogLevel::Debug),
            ("trace", LogLevel::Trace),
        ] {
            let toml_str = format!("level = \"{}\"", input);
            let log: LogSettings = toml::from_str(&toml_str).expect("log level should parse");
            assert_eq!(log.level, expected);
            assert_eq!(log.level.as_directive(), input);
        }
    }

    #[test]
    fn invalid_log_level_returns_error() {
        let result: Result<LogSettings, _> = toml::from_str(r#"level = "verbose""#);
        assert!(result.is_err());
    }

    #[test]
    fn out_of_range_port_returns_error() {
        let result: Result<OscSettings, _> = toml::from_str("source_port = 70000");
        assert!(result.is_err());
    }

    #[test]
    fn roundtrip_serialize_deserialize() {
        let settings = Settings::default();
        let toml_str = toml::to_string(&settings).expect("serialization should succeed");
        let parsed: Settings = toml::from_str(&toml_str).expect("roundtrip should parse");
        assert_eq!(settings, parsed);
    }
}
