//! Shared fixtures for the mock-server tests.
#![allow(dead_code)]

use std::io::{Read, Write};
use std::net::{Shutdown, TcpListener};

use mockito::{Server, ServerGuard};
use oai_speech::ClientConfig;

pub const TEST_KEY: &str = "sk-test";

/// Start a mock API server.
pub async fn server() -> ServerGuard {
    Server::new_async().await
}

/// Config pointing at the mock server.
pub fn config_for(server: &ServerGuard) -> ClientConfig {
    config_for_url(server.url())
}

pub fn config_for_url(url: impl Into<String>) -> ClientConfig {
    ClientConfig::builder()
        .api_key(TEST_KEY)
        .base_url(url)
        .build()
        .expect("valid test config")
}

/// Serve one connection: read the request, send `response` verbatim and close.
///
/// Used for replies mockito cannot produce, such as a body shorter than its
/// `Content-Length`.
pub fn raw_server(response: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind raw server");
    let addr = listener.local_addr().expect("raw server address");

    std::thread::spawn(move || {
        let Ok((mut stream, _)) = listener.accept() else {
            return;
        };
        read_request(&mut stream);
        let _ = stream.write_all(response.as_bytes());
        let _ = stream.flush();
        let _ = stream.shutdown(Shutdown::Write);
        // Drain until the client hangs up so the close is a FIN, not a RST.
        let mut sink = [0u8; 1024];
        while matches!(stream.read(&mut sink), Ok(n) if n > 0) {}
    });

    format!("http://{addr}")
}

fn read_request(stream: &mut impl Read) {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    let header_end = loop {
        match stream.read(&mut chunk) {
            Ok(0) | Err(_) => return,
            Ok(n) => buf.extend_from_slice(&chunk[..n]),
        }
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = String::from_utf8_lossy(&buf[..header_end]).to_ascii_lowercase();
    let content_length = head
        .lines()
        .find_map(|line| line.strip_prefix("content-length:"))
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(0);

    let mut remaining = content_length.saturating_sub(buf.len() - header_end);
    while remaining > 0 {
        match stream.read(&mut chunk) {
            Ok(0) | Err(_) => return,
            Ok(n) => remaining = remaining.saturating_sub(n),
        }
    }
}
