//! End-to-end tests against the compiled binary.

use std::time::Duration;
use tokio::net::UdpSocket;

mod common;

#[tokio::test]
async fn test_exit_command_acks_and_exits_zero() {
    let mut server = common::start().await;
    let client = server.client().await;

    client.send(b"EXIT now").await.unwrap();
    assert_eq!(common::recv_text(&client).await.as_deref(), Some("ACK: EXIT now\n"));

    let status = server
        .wait_exit(Duration::from_secs(5))
        .await
        .expect("process should exit after EXIT");
    assert!(status.success(), "unexpected status: {:?}", status);
}

#[tokio::test]
async fn test_unhealthy_stops_heartbeat_and_keeps_serving() {
    let mut server = common::start().await;
    let client = server.client().await;

    client.send(b"UNHEALTHY").await.unwrap();
    assert_eq!(common::recv_text(&client).await, None, "UNHEALTHY must not be acknowledged");
    assert!(
        server.wait_for_log("Heartbeat stopped", Duration::from_secs(2)).await,
        "heartbeat should stop within one interval"
    );

    // Second UNHEALTHY is a no-op; the process is still alive and serving.
    client.send(b"UNHEALTHY").await.unwrap();
    assert_eq!(common::recv_text(&client).await, None);
    assert!(server.is_running());

    client.send(b"EXIT").await.unwrap();
    assert_eq!(common::recv_text(&client).await.as_deref(), Some("ACK: EXIT\n"));
    assert!(server.wait_exit(Duration::from_secs(5)).await.unwrap().success());
}

#[tokio::test]
async fn test_unknown_commands_are_ignored() {
    let mut server = common::start().await;
    let client = server.client().await;

    for payload in [&b""[..], b"HELLO world", b"exit"] {
        client.send(payload).await.unwrap();
        assert_eq!(common::recv_text(&client).await, None);
    }
    assert!(server.is_running());

    client.send(b"EXIT").await.unwrap();
    assert_eq!(common::recv_text(&client).await.as_deref(), Some("ACK: EXIT\n"));
}

#[cfg(unix)]
#[tokio::test]
async fn test_sigterm_exits_zero() {
    let mut server = common::start().await;
    server.signal("TERM").await;

    let status = server
        .wait_exit(Duration::from_secs(5))
        .await
        .expect("process should exit on SIGTERM");
    assert!(status.success(), "unexpected status: {:?}", status);
}

#[cfg(unix)]
#[tokio::test]
async fn test_sigint_exits_zero() {
    let mut server = common::start().await;
    server.signal("INT").await;

    let status = server.wait_exit(Duration::from_secs(5)).await.unwrap();
    assert!(status.success());
}

#[tokio::test]
async fn test_bind_failure_is_fatal() {
    let port = common::free_port().await;
    let _occupied = UdpSocket::bind(("0.0.0.0", port)).await.unwrap();

    let mut server = common::spawn(port);
    let status = server
        .wait_exit(Duration::from_secs(5))
        .await
        .expect("process should abort when the port is taken");
    assert!(!status.success());
}
