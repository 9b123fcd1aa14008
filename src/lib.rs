//! UDP liveness/control listener library.

pub mod config;
pub mod dispatch;
pub mod health;
pub mod lifecycle;
pub mod net;
pub mod observability;
pub mod protocol;

pub use config::{Cli, ListenerConfig};
pub use dispatch::{Dispatcher, Termination};
pub use lifecycle::{SignalWatcher, StopSignal};
pub use net::{ChannelError, CommandChannel};
