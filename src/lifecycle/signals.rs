//! OS signal handling.
//!
//! # Responsibilities
//! - Register interest in SIGTERM/SIGINT once, at process start
//! - Exit the process with status 0 on the first delivery
//!
//! # Design Decisions
//! - Uses Tokio's signal handling (async-safe)
//! - No cleanup before exit: socket and heartbeat die with the process
//! - Handlers stay installed, so repeated deliveries are absorbed

use std::fmt;
use tokio::task::JoinHandle;

/// Which termination request was received.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationSignal {
    /// SIGINT or Ctrl-C.
    Interrupt,
    /// SIGTERM.
    Terminate,
}

impl fmt::Display for TerminationSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TerminationSignal::Interrupt => write!(f, "SIGINT"),
            TerminationSignal::Terminate => write!(f, "SIGTERM"),
        }
    }
}

/// Watches for OS termination requests.
#[derive(Debug)]
pub struct SignalWatcher {
    #[cfg(unix)]
    interrupt: tokio::signal::unix::Signal,
    #[cfg(unix)]
    terminate: tokio::signal::unix::Signal,
}

impl SignalWatcher {
    /// Register the signal handlers. Must be called from within a Tokio runtime.
    #[cfg(unix)]
    pub fn install() -> std::io::Result<Self> {
        use tokio::signal::unix::{signal, SignalKind};

        Ok(Self {
            interrupt: signal(SignalKind::interrupt())?,
            terminate: signal(SignalKind::terminate())?,
        })
    }

    #[cfg(not(unix))]
    pub fn install() -> std::io::Result<Self> {
        Ok(Self {})
    }

    /// Wait for the next termination request.
    #[cfg(unix)]
    pub async fn recv(&mut self) -> TerminationSignal {
        tokio::select! {
            Some(()) = self.interrupt.recv() => TerminationSignal::Interrupt,
            Some(()) = self.terminate.recv() => TerminationSignal::Terminate,
            // Both streams closed: no signal can arrive anymore.
            else => std::future::pending().await,
        }
    }

    #[cfg(not(unix))]
    pub async fn recv(&mut self) -> TerminationSignal {
        match tokio::signal::ctrl_c().await {
            Ok(()) => TerminationSignal::Interrupt,
            Err(e) => {
                tracing::warn!(error = %e, "Ctrl-C handler unavailable");
                std::future::pending().await
            }
        }
    }

    /// Spawn a task that exits the process with status 0 on the first signal.
    pub fn spawn_exit_on_signal(mut self) -> JoinHandle<()> {
        tokio::spawn(async move {
            let signal = self.recv().await;
            tracing::info!(signal = %signal, "Exit signal received. Shutting down.");
            std::process::exit(0);
        })
    }
}
