//! Outbound OSC transport for button activations.

/// OSC packet encoding.
pub mod message;

/// UDP sink.
pub mod sink;

pub use message::{exec_request, OscBundle, OscMessage};
pub use sink::{MacroSink, SendError, UdpSink, DEFAULT_SOURCE_PORT};
