//! Observability subsystem.
//!
//! Every component logs through `tracing` with structured fields
//! (`sender`, `text`, `port`); logging.rs installs the subscriber.

pub mod logging;
