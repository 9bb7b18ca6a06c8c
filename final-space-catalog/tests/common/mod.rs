//! Shared test helpers

#![allow(dead_code)]

use final_space_catalog::{FinalSpaceSource, SourceConfig};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Skip the test when an opt-in environment variable is missing.
#[macro_export]
macro_rules! skip_unless_env {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("skipping test: environment variable {} not set", $var);
                return;
            }
        )+
    };
}

/// Assert a `Result` is `Ok` and unwrap it (failing the test otherwise).
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// Canned HTTP response served by [`serve_once`].
pub struct CannedResponse {
    pub status_line: &'static str,
    pub content_type: &'static str,
    pub body: String,
}

impl CannedResponse {
    pub fn json(body: impl Into<String>) -> Self {
        Self {
            status_line: "200 OK",
            content_type: "application/json",
            body: body.into(),
        }
    }

    pub fn status(status_line: &'static str, body: impl Into<String>) -> Self {
        Self {
            status_line,
            content_type: "text/plain",
            body: body.into(),
        }
    }
}

/// Start a one-shot HTTP responder on a random local port.
///
/// Returns the URL to request and a handle resolving to the raw request text
/// the responder received.
pub async fn serve_once(response: CannedResponse) -> (String, tokio::task::JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind local listener");
    let addr = listener.local_addr().expect("local addr");

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("accept connection");

        let mut request = Vec::new();
        let mut buf = [0_u8; 1024];
        loop {
            let n = socket.read(&mut buf).await.expect("read request");
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
            if request.windows(4).any(|w| w == b"\r\n\r\n") {
                break;
            }
        }

        let reply = format!(
            "HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            response.status_line,
            response.content_type,
            response.body.len(),
            response.body
        );
        socket
            .write_all(reply.as_bytes())
            .await
            .expect("write response");
        socket.shutdown().await.ok();

        String::from_utf8_lossy(&request).into_owned()
    });

    (format!("http://{addr}/api/v0/character"), handle)
}

/// Build a source pointed at a local responder.
pub fn local_source(base_url: String) -> FinalSpaceSource {
    FinalSpaceSource::new(SourceConfig {
        base_url,
        request_timeout_secs: 5,
        ..SourceConfig::default()
    })
    .expect("build source")
}
