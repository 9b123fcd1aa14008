//! Startup orchestration.
//!
//! # Responsibilities
//! - Start the heartbeat with its stop listener
//! - Bind the command channel
//! - Hand control to the dispatcher until it terminates
//!
//! # Design Decisions
//! - Fail fast: a bind failure is returned, never retried

use crate::config::ListenerConfig;
use crate::dispatch::{Dispatcher, Termination};
use crate::health::heartbeat::Heartbeat;
use crate::lifecycle::stop::StopSignal;
use crate::net::{ChannelError, CommandChannel};

/// Run the listener on the configured port until a command terminates it.
pub async fn serve(config: &ListenerConfig) -> Result<Termination, ChannelError> {
    tracing::info!("Starting health ping");
    let stop = StopSignal::new();
    tokio::spawn(Heartbeat::default().run(stop.subscribe()));

    tracing::info!(port = config.port, "Starting UDP server");
    let channel = CommandChannel::open(config).await?;

    Dispatcher::new(channel, stop).run().await
}
