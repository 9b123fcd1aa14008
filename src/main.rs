//! health-ping: UDP liveness/control listener.
//!
//! # Architecture Overview
//!
//! ```text
//!   UDP datagram ──▶ net::channel ──▶ protocol::command ──▶ dispatch
//!                         ▲                                   │
//!   "ACK: ...\n" ◀────────┴───────────── EXIT ────────────────┤──▶ exit(0)
//!                                                             │
//!                                 UNHEALTHY ── fire once ──▶ health::heartbeat (2s tick)
//!
//!   SIGINT/SIGTERM ──▶ lifecycle::signals ──▶ exit(0)
//! ```

use std::process::ExitCode;

use clap::Parser;
use health_ping::config::Cli;
use health_ping::lifecycle::{startup, SignalWatcher};
use health_ping::observability::logging;
use health_ping::Termination;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init();

    // Signal handlers go in before anything else starts.
    match SignalWatcher::install() {
        Ok(watcher) => {
            watcher.spawn_exit_on_signal();
        }
        Err(e) => {
            tracing::error!(error = %e, "Could not register signal handlers");
            return ExitCode::FAILURE;
        }
    }

    let config = cli.listener_config();
    tracing::info!(port = config.port, "Configuration loaded");

    match startup::serve(&config).await {
        Ok(Termination::ExitCommand { sender }) => {
            tracing::info!(sender = %sender, "Shutdown complete");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "Fatal socket error");
            ExitCode::FAILURE
        }
    }
}
