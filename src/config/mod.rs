//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! argv
//!     → cli.rs (clap parse, rejects bad ports)
//!     → ListenerConfig (immutable)
//!     → lifecycle::startup
//! ```
//!
//! # Design Decisions
//! - One flag, `--port`; everything else is fixed
//! - No config file; the process is stateless across restarts

pub mod cli;
pub mod schema;

pub use cli::Cli;
pub use schema::{ListenerConfig, DEFAULT_PORT};
