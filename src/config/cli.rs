//! Command-line arguments.

use clap::Parser;

use crate::config::schema::{ListenerConfig, DEFAULT_PORT};

#[derive(Debug, Parser)]
#[command(name = "health-ping")]
#[command(about = "UDP liveness/control listener", long_about = None)]
pub struct Cli {
    /// The port to listen to udp traffic on
    #[arg(long, default_value_t = DEFAULT_PORT)]
    pub port: u16,
}

impl Cli {
    pub fn listener_config(&self) -> ListenerConfig {
        ListenerConfig { port: self.port }
    }
}
