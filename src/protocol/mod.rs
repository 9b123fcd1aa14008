//! Control protocol.
//!
//! # Wire Format
//! ```text
//! Inbound (UDP, plaintext, ≤ 1024 bytes processed):
//!     <VERB> [args...]        surrounding whitespace is trimmed
//!
//! Verbs:
//!     EXIT       → reply "ACK: <trimmed text>\n", then exit 0
//!     UNHEALTHY  → stop the heartbeat, no reply
//!     anything   → ignored
//! ```

pub mod command;

pub use command::{Command, Verb};
