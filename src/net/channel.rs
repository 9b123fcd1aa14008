//! UDP command channel.
//!
//! # Responsibilities
//! - Bind the command socket on the configured port
//! - Receive one datagram at a time and decode it into a [`Command`]
//! - Send best-effort replies back to the sender
//!
//! # Design Decisions
//! - Fixed 1024-byte receive buffer; longer datagrams are truncated silently
//! - Every socket error is surfaced as [`ChannelError`] and treated as fatal
//!   by the caller; nothing here retries

use std::net::SocketAddr;
use thiserror::Error;
use tokio::net::UdpSocket;

use crate::config::ListenerConfig;
use crate::protocol::Command;

/// Largest datagram payload that is processed. Extra bytes are dropped.
pub const MAX_DATAGRAM_SIZE: usize = 1024;

/// Error type for channel operations.
#[derive(Debug, Error)]
pub enum ChannelError {
    #[error("could not bind udp socket on {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("could not read from udp socket: {0}")]
    Receive(#[source] std::io::Error),

    #[error("could not write to {addr}: {source}")]
    Send {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("could not resolve local address: {0}")]
    LocalAddr(#[source] std::io::Error),
}

/// The UDP endpoint commands arrive on.
///
/// Single reader and writer: the dispatcher owns the channel exclusively.
#[derive(Debug)]
pub struct CommandChannel {
    socket: UdpSocket,
    buf: Vec<u8>,
}

impl CommandChannel {
    /// Bind on the configured port across all local interfaces.
    pub async fn open(config: &ListenerConfig) -> Result<Self, ChannelError> {
        Self::bind(config.bind_address()).await
    }

    /// Bind on an explicit address.
    pub async fn bind(addr: SocketAddr) -> Result<Self, ChannelError> {
        let socket = UdpSocket::bind(addr)
            .await
            .map_err(|source| ChannelError::Bind { addr, source })?;

        let local_addr = socket.local_addr().map_err(ChannelError::LocalAddr)?;
        tracing::info!(address = %local_addr, "Listening for commands");

        Ok(Self {
            socket,
            buf: vec![0u8; MAX_DATAGRAM_SIZE],
        })
    }

    pub fn local_addr(&self) -> Result<SocketAddr, ChannelError> {
        self.socket.local_addr().map_err(ChannelError::LocalAddr)
    }

    /// Wait for the next datagram and decode it.
    pub async fn receive(&mut self) -> Result<Command, ChannelError> {
        let (len, sender) = self
            .socket
            .recv_from(&mut self.buf)
            .await
            .map_err(ChannelError::Receive)?;

        let command = Command::decode(&self.buf[..len], sender);
        tracing::info!(
            sender = %sender,
            text = %command.raw_text,
            "Received packet"
        );

        Ok(command)
    }

    /// Send `payload` to `addr` once. No retry, no confirmation.
    pub async fn reply(&self, addr: SocketAddr, payload: &[u8]) -> Result<(), ChannelError> {
        let sent = self
            .socket
            .send_to(payload, addr)
            .await
            .map_err(|source| ChannelError::Send { addr, source })?;

        if sent != payload.len() {
            return Err(ChannelError::Send {
                addr,
                source: std::io::Error::new(
                    std::io::ErrorKind::WriteZero,
                    format!("short write: {} of {} bytes", sent, payload.len()),
                ),
            });
        }

        tracing::debug!(addr = %addr, bytes = sent, "Reply sent");
        Ok(())
    }
}
