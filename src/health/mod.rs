//! Health subsystem.
//!
//! # Data Flow
//! ```text
//! heartbeat.rs:
//!     Periodic 2s timer → tick count
//!     Stop signal fired → loop returns, never restarts
//! ```

pub mod heartbeat;

pub use heartbeat::{Heartbeat, HEARTBEAT_INTERVAL};
