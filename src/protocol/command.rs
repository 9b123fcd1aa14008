//! Inbound command decoding.

use std::fmt;
use std::net::SocketAddr;

/// Action selected by the first whitespace-delimited token of a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verb {
    /// `EXIT`: acknowledge and terminate.
    Exit,
    /// `UNHEALTHY`: stop the heartbeat.
    Unhealthy,
    /// Anything else, including the empty token. Ignored.
    Unknown(String),
}

impl Verb {
    /// Parse a verb token. Matching is case sensitive.
    pub fn parse(token: &str) -> Self {
        match token {
            "EXIT" => Verb::Exit,
            "UNHEALTHY" => Verb::Unhealthy,
            other => Verb::Unknown(other.to_string()),
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verb::Exit => write!(f, "EXIT"),
            Verb::Unhealthy => write!(f, "UNHEALTHY"),
            Verb::Unknown(token) => write!(f, "{}", token),
        }
    }
}

/// A decoded inbound datagram.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub verb: Verb,
    /// Payload bytes with leading and trailing whitespace removed.
    pub payload: Vec<u8>,
    /// `payload` as text, for matching and logging. Lossy on invalid UTF-8.
    pub raw_text: String,
    /// Where the datagram came from; replies go back here.
    pub sender: SocketAddr,
}

impl Command {
    /// Decode a datagram payload.
    ///
    /// Invalid UTF-8 is replaced rather than rejected: a garbled payload is an
    /// unknown verb, not an error. The original bytes are kept for the ack.
    pub fn decode(payload: &[u8], sender: SocketAddr) -> Self {
        let payload = trim_payload(payload).to_vec();
        let raw_text = String::from_utf8_lossy(&payload).into_owned();
        let verb = Verb::parse(raw_text.split_whitespace().next().unwrap_or(""));

        Self {
            verb,
            payload,
            raw_text,
            sender,
        }
    }

    /// Acknowledgement sent back for `EXIT`: `ACK: ` + trimmed payload + newline.
    pub fn ack(&self) -> Vec<u8> {
        let mut reply = Vec::with_capacity(self.payload.len() + 6);
        reply.extend_from_slice(b"ACK: ");
        reply.extend_from_slice(&self.payload);
        reply.push(b'\n');
        reply
    }
}

/// Strip surrounding whitespace without touching the bytes in between.
///
/// Valid UTF-8 is trimmed of Unicode whitespace; anything else (such as a
/// character split by truncation) only of ASCII whitespace.
fn trim_payload(payload: &[u8]) -> &[u8] {
    match std::str::from_utf8(payload) {
        Ok(text) => text.trim().as_bytes(),
        Err(_) => payload.trim_ascii(),
    }
}
