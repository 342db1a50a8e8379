//! Loopback helpers shared by integration tests.

#![allow(dead_code, clippy::expect_used)]

use std::io::{Read as _, Write as _};
use std::net::TcpListener;
use std::thread;

/// Reserve a port that nothing is listening on.
///
/// Binds an ephemeral port and immediately releases it; nothing else in
/// the test process rebinds it before the probe under test connects.
pub fn unused_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);
    port
}

/// Serve canned HTTP statuses on a loopback port, one per connection.
///
/// After the scripted statuses are exhausted the last one repeats, so a
/// `vec![200]` responder stays ready forever. The serving thread lives
/// until the test process exits.
pub fn http_responder(statuses: Vec<u16>) -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind responder");
    let port = listener.local_addr().expect("local addr").port();

    thread::spawn(move || {
        let mut script = statuses.into_iter();
        let mut current = script.next().unwrap_or(200);
        for stream in listener.incoming() {
            let Ok(mut stream) = stream else { break };
            // One read is enough for the tiny GET the probe sends.
            let mut buf = [0u8; 1024];
            let _ = stream.read(&mut buf);

            let reason = match current {
                200 => "OK",
                503 => "Service Unavailable",
                _ => "Scripted",
            };
            let body = r#"{"data":[]}"#;
            let response = format!(
                "HTTP/1.1 {current} {reason}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = stream.write_all(response.as_bytes());

            if let Some(next) = script.next() {
                current = next;
            }
        }
    });

    port
}
