//! OSC Macro Panel library
//!
//! Parses the line-oriented panel configuration into an immutable button grid
//! and fires OSC macro execution requests when buttons are activated.
//!
//! - [`panel`]: configuration parser, layout model, loader and writer
//! - [`osc`]: OSC 1.0 encoding and the UDP sink
//! - [`tui`]: terminal front end
//! - [`settings`] and [`logging`]: application settings and tracing setup

/// Tracing subscriber setup from the `[log]` settings.
pub mod logging;
/// OSC 1.0 message encoding and the UDP macro sink.
pub mod osc;
/// Panel configuration: colours, styles, parser, layout model, loader and writer.
pub mod panel;
/// Optional TOML application settings and XDG path resolution.
pub mod settings;
/// Terminal front end: event loop, rendering and button hit-testing.
pub mod tui;

pub use osc::{MacroSink, SendError, UdpSink};
pub use panel::{parse, Destination, PanelError, PanelLayout, PanelLoader, ParsedPanel};
pub use settings::{Settings, SettingsError, SettingsLoader};
