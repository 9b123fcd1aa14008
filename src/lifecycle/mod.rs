//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Start heartbeat → Bind command socket → Run dispatcher
//!
//! Stop signal (stop.rs):
//!     UNHEALTHY → dispatcher fires once → heartbeat returns
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → log → exit(0)
//! ```
//!
//! # Design Decisions
//! - The stop signal is the only cancellation primitive
//! - Everything else ends by process exit; no draining

pub mod signals;
pub mod startup;
pub mod stop;

pub use signals::{SignalWatcher, TerminationSignal};
pub use stop::{StopListener, StopSignal};
