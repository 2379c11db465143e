/// Settings error types.
pub mod error;

/// Settings file loader.
pub mod loader;

/// TOML settings schema types.
pub mod schema;

/// XDG Base Directory path resolution utilities.
pub mod xdg;

pub use error::SettingsError;
pub use loader::SettingsLoader;
pub use schema::{LogLevel, LogSettings, OscSettings, Settings, TuiSettings};
