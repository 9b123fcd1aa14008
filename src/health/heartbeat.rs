//! Heartbeat ticker.
//!
//! # Responsibilities
//! - Tick on a fixed period while the process is healthy
//! - Stop for good once the stop signal fires

use std::time::Duration;
use tokio::time::{self, Instant, MissedTickBehavior};

use crate::lifecycle::stop::StopListener;

/// Period between heartbeat ticks.
pub const HEARTBEAT_INTERVAL: Duration = Duration::from_secs(2);

/// The process's own background liveness loop.
#[derive(Debug, Clone)]
pub struct Heartbeat {
    period: Duration,
}

impl Heartbeat {
    pub fn new(period: Duration) -> Self {
        Self { period }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Tick until `stop` fires. Returns the number of ticks observed.
    ///
    /// The first tick lands one full period after start.
    pub async fn run(self, mut stop: StopListener) -> u64 {
        let mut ticker = time::interval_at(Instant::now() + self.period, self.period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut ticks: u64 = 0;

        tracing::debug!(period = ?self.period, "Heartbeat started");

        loop {
            tokio::select! {
                // Stop wins over a tick that is due at the same time.
                biased;

                _ = stop.fired() => {
                    tracing::info!(ticks, "Heartbeat stopped");
                    return ticks;
                }
                _ = ticker.tick() => {
                    ticks += 1;
                    tracing::trace!(ticks, "Heartbeat tick");
                }
            }
        }
    }
}

impl Default for Heartbeat {
    fn default() -> Self {
        Self::new(HEARTBEAT_INTERVAL)
    }
}
