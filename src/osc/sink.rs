//! Fire-and-forget delivery of macro execution requests over UDP.

use crate::osc::message::exec_request;
use crate::panel::Destination;
use std::future::Future;
use std::io;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use thiserror::Error;
use tokio::net::UdpSocket;

/// Default local port requests are sent from.
pub const DEFAULT_SOURCE_PORT: u16 = 9700;

/// Errors raised while binding or sending. None of them are retried.
#[derive(Error, Debug)]
pub enum SendError {
    /// The local source socket could not be bound.
    #[error("Failed to bind OSC source socket {addr}")]
    Bind {
        /// Local address that was requested.
        addr: SocketAddr,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The datagram could not be sent.
    #[error("Failed to send macro {macro_index} to {destination}")]
    Send {
        /// Macro that was being requested.
        macro_index: u32,
        /// Where it was going.
        destination: Destination,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

/// Receives button activations.
///
/// Implementations must not block: the UI spawns each call as its own task
/// and never waits for acknowledgement.
pub trait MacroSink: Send + Sync {
    /// Sends one request for `macro_index` to `destination`, returning the
    /// number of bytes written.
    fn send(
        &self,
        destination: Destination,
        macro_index: u32,
    ) -> impl Future<Output = Result<usize, SendError>> + Send;
}

/// UDP sink bound once to a fixed (or ephemeral) local port.
#[derive(Debug)]
pub struct UdpSink {
    socket: UdpSocket,
}

impl UdpSink {
    /// Binds the source socket for sending to `destination`.
    ///
    /// The unspecified address of the destination's family is used so IPv6
    /// destinations work. `source_port` 0 picks an ephemeral port.
    pub async fn bind(destination: &Destination, source_port: u16) -> Result<Self, SendError> {
        let addr = if destination.ip.is_ipv6() {
            SocketAddr::from((Ipv6Addr::UNSPECIFIED, source_port))
        } else {
            SocketAddr::from((Ipv4Addr::UNSPECIFIED, source_port))
        };
        let socket = UdpSocket::bind(addr)
            .await
            .map_err(|source| SendError::Bind { addr, source })?;
        tracing::debug!("OSC source socket bound to {:?}", socket.local_addr().ok());
        Ok(Self { socket })
    }

    /// Local address of the source socket.
    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.socket.local_addr()
    }
}

impl MacroSink for UdpSink {
    async fn send(&self, destination: Destination, macro_index: u32) -> Result<usize, SendError> {
        let packet = exec_request(macro_index).encode();
        let sent = self
            .socket
            .send_to(&packet, destination.socket_addr())
            .await
            .map_err(|source| SendError::Send {
                macro_index,
                destination,
                source,
            })?;
        tracing::debug!(macro_index, %destination, bytes = sent, "sent macro request");
        Ok(sent)
    }
}
