//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming UDP datagram
//!     → channel.rs (recv_from into fixed buffer, decode, trim)
//!     → Command handed to the dispatcher
//!     → optional reply via send_to
//! ```

pub mod channel;

pub use channel::{ChannelError, CommandChannel, MAX_DATAGRAM_SIZE};
