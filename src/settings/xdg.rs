//! Platform-aware path resolution for settings and log files.
//!
//! On **Linux**, follows the XDG Base Directory Specification:
//! - Settings: `$XDG_CONFIG_HOME/osc-macro-panel` or `~/.config/osc-macro-panel`
//! - Logs: `$XDG_STATE_HOME/osc-macro-panel` or `~/.local/state/osc-macro-panel`
//!
//! On other platforms the `dirs` crate's native locations are used, with the
//! same XDG environment variables taking precedence when set.

use std::path::PathBuf;

const APP_NAME: &str = "osc-macro-panel";

/// File name of the settings file inside [`config_dir`].
pub const SETTINGS_FILE: &str = "settings.toml";

/// File name of the default log file inside [`state_dir`].
pub const LOG_FILE: &str = "macro-panel.log";

/// Returns the settings directory.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/osc-macro-panel` (if set, any platform)
/// 2. `~/.config/osc-macro-panel` on Linux, the native config dir elsewhere
pub fn config_dir() -> PathBuf {
    if let Some(xdg) = non_empty_env("XDG_CONFIG_HOME") {
        return PathBuf::from(xdg).join(APP_NAME);
    }
    platform_config_dir().join(APP_NAME)
}

fn platform_config_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        home_dir().join(".config")
    }
    #[cfg(not(target_os = "linux"))]
    {
        dirs::config_dir().unwrap_or_else(std::env::temp_dir)
    }
}

/// Returns the path to the settings file.
pub fn settings_path() -> PathBuf {
    config_dir().join(SETTINGS_FILE)
}

/// Returns the directory for persistent logs.
///
/// Resolution order:
/// 1. `$XDG_STATE_HOME/osc-macro-panel` (if set, any platform)
/// 2. The native state dir, falling back to the cache dir, then the temp dir
pub fn state_dir() -> PathBuf {
    if let Some(xdg) = non_empty_env("XDG_STATE_HOME") {
        return PathBuf::from(xdg).join(APP_NAME);
    }
    dirs::state_dir()
        .or_else(dirs::cache_dir)
        .unwrap_or_else(std::env::temp_dir)
        .join(APP_NAME)
}

/// Returns the default log file path.
pub fn log_path() -> PathBuf {
    state_dir().join(LOG_FILE)
}

/// Expands a leading `~` in a path string to the user's home directory.
///
/// If the path does not start with `~`, it is returned as-is.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        home_dir().join(rest)
    } else if path == "~" {
        home_dir()
    } else {
        PathBuf::from(path)
    }
}

fn home_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(std::env::temp_dir)
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.is_empty())
}
