//! The command control loop.

use std::net::SocketAddr;

use crate::lifecycle::stop::StopSignal;
use crate::net::{ChannelError, CommandChannel};
use crate::protocol::{Command, Verb};

/// Dispatcher state. `Terminated` is final.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatcherState {
    Running,
    Terminated,
}

/// Why the dispatcher stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Termination {
    /// An `EXIT` command was acknowledged.
    ExitCommand { sender: SocketAddr },
}

/// Reads commands from the channel and acts on them.
///
/// Holds the only [`StopSignal`]: nothing else may stop the heartbeat.
#[derive(Debug)]
pub struct Dispatcher {
    channel: CommandChannel,
    stop: StopSignal,
    state: DispatcherState,
}

impl Dispatcher {
    pub fn new(channel: CommandChannel, stop: StopSignal) -> Self {
        Self {
            channel,
            stop,
            state: DispatcherState::Running,
        }
    }

    pub fn state(&self) -> DispatcherState {
        self.state
    }

    /// Serve commands until one terminates the loop.
    ///
    /// Channel errors end the loop immediately; callers treat them as fatal.
    pub async fn run(mut self) -> Result<Termination, ChannelError> {
        loop {
            let command = self.channel.receive().await?;
            if let Some(termination) = self.dispatch(command).await? {
                return Ok(termination);
            }
        }
    }

    /// Act on a single command. Returns `Some` when the dispatcher terminated.
    pub async fn dispatch(&mut self, command: Command) -> Result<Option<Termination>, ChannelError> {
        if self.state == DispatcherState::Terminated {
            return Ok(None);
        }

        match command.verb {
            Verb::Exit => {
                self.channel.reply(command.sender, &command.ack()).await?;
                tracing::info!(
                    sender = %command.sender,
                    text = %command.raw_text,
                    "Received EXIT command. Exiting."
                );
                self.state = DispatcherState::Terminated;
                Ok(Some(Termination::ExitCommand {
                    sender: command.sender,
                }))
            }
            Verb::Unhealthy => {
                if self.stop.fire() {
                    tracing::info!(sender = %command.sender, "Marked unhealthy, stopping heartbeat");
                } else {
                    tracing::debug!(sender = %command.sender, "Already unhealthy");
                }
                Ok(None)
            }
            Verb::Unknown(ref token) => {
                tracing::debug!(
                    sender = %command.sender,
                    verb = %token,
                    "Ignoring unrecognized command"
                );
                Ok(None)
            }
        }
    }
}
