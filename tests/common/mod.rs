//! Shared helpers for process-level tests.

use std::process::{ExitStatus, Stdio};
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::net::UdpSocket;
use tokio::process::{Child, Command};
use tokio::sync::mpsc;

/// How long a client waits for a reply before treating it as absent.
pub const REPLY_TIMEOUT: Duration = Duration::from_millis(500);

/// A running `health-ping` process with its log lines streamed back.
pub struct Server {
    pub child: Child,
    pub port: u16,
    logs: mpsc::UnboundedReceiver<String>,
}

/// Find a UDP port that is free right now.
pub async fn free_port() -> u16 {
    let socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    socket.local_addr().unwrap().port()
}

/// Start the binary on `port` without waiting for it to be ready.
pub fn spawn(port: u16) -> Server {
    let mut child = Command::new(env!("CARGO_BIN_EXE_health-ping"))
        .args(["--port", &port.to_string()])
        .env("RUST_LOG", "health_ping=debug")
        .env("NO_COLOR", "1")
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .kill_on_drop(true)
        .spawn()
        .expect("failed to start health-ping");

    let stdout = child.stdout.take().unwrap();
    let (tx, logs) = mpsc::unbounded_channel();
    tokio::spawn(async move {
        let mut lines = BufReader::new(stdout).lines();
        while let Ok(Some(line)) = lines.next_line().await {
            if tx.send(line).is_err() {
                break;
            }
        }
    });

    Server { child, port, logs }
}

/// Start the binary and wait until its socket is bound.
pub async fn start() -> Server {
    let mut server = spawn(free_port().await);
    assert!(
        server.wait_for_log("Listening for commands", Duration::from_secs(10)).await,
        "server never became ready"
    );
    server
}

impl Server {
    /// Wait for a log line containing `needle`.
    pub async fn wait_for_log(&mut self, needle: &str, timeout: Duration) -> bool {
        let logs = &mut self.logs;
        tokio::time::timeout(timeout, async move {
            while let Some(line) = logs.recv().await {
                if line.contains(needle) {
                    return true;
                }
            }
            false
        })
        .await
        .unwrap_or(false)
    }

    /// Client socket connected to the server.
    pub async fn client(&self) -> UdpSocket {
        let socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        socket.connect(("127.0.0.1", self.port)).await.unwrap();
        socket
    }

    /// Wait for the process to exit.
    pub async fn wait_exit(&mut self, timeout: Duration) -> Option<ExitStatus> {
        tokio::time::timeout(timeout, self.child.wait())
            .await
            .ok()
            .map(|status| status.unwrap())
    }

    /// Whether the process is still running.
    pub fn is_running(&mut self) -> bool {
        self.child.try_wait().unwrap().is_none()
    }

    /// Deliver a signal by name (e.g. `TERM`) through `kill`.
    #[cfg(unix)]
    pub async fn signal(&self, name: &str) {
        let pid = self.child.id().expect("process already reaped");
        let status = Command::new("kill")
            .args([format!("-{}", name), pid.to_string()])
            .status()
            .await
            .unwrap();
        assert!(status.success());
    }
}

/// Receive one datagram as text, or `None` if nothing arrives in time.
pub async fn recv_text(socket: &UdpSocket) -> Option<String> {
    let mut buf = [0u8; 2048];
    match tokio::time::timeout(REPLY_TIMEOUT, socket.recv(&mut buf)).await {
        Ok(Ok(n)) => Some(String::from_utf8_lossy(&buf[..n]).into_owned()),
        _ => None,
    }
}
