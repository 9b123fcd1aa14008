//! Command dispatch subsystem.
//!
//! # State Machine
//! ```text
//! Running ──EXIT (ack sent)──▶ Terminated
//!    │
//!    ├─ UNHEALTHY → fire stop signal (once), stay Running
//!    └─ other     → ignore, stay Running
//! ```
//!
//! # Design Decisions
//! - The ack is sent before terminating; a failed send is fatal instead
//! - Unrecognized verbs are tolerated, not errors

pub mod dispatcher;

pub use dispatcher::{Dispatcher, DispatcherState, Termination};
