//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use board_viewer_provider::{ClientOptions, HttpListingClient};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

/// 断言 `Option` 为 `Some`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_some {
    ($expr:expr $(,)?) => {{
        let opt = $expr;
        assert!(opt.is_some(), "expected Some(..), got None");
        let Some(val) = opt else {
            return;
        };
        val
    }};
}

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
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
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// A canned reply for one connection.
#[derive(Debug, Clone)]
pub enum StubReply {
    /// Status code, extra headers, body.
    Respond(u16, Vec<(&'static str, String)>, String),
    /// Accept the connection and never answer.
    Hang,
}

impl StubReply {
    pub fn json(status: u16, body: &str) -> Self {
        Self::Respond(status, Vec::new(), body.to_string())
    }

    fn to_bytes(&self) -> Option<Vec<u8>> {
        let Self::Respond(status, headers, body) = self else {
            return None;
        };
        let mut head = format!(
            "HTTP/1.1 {status} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n",
            reason(*status),
            body.len()
        );
        for (name, value) in headers {
            head.push_str(&format!("{name}: {value}\r\n"));
        }
        head.push_str("\r\n");
        let mut bytes = head.into_bytes();
        bytes.extend_from_slice(body.as_bytes());
        Some(bytes)
    }
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        401 => "Unauthorized",
        429 => "Too Many Requests",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "Status",
    }
}

/// Minimal HTTP/1.1 server answering one canned reply per connection, in order.
///
/// Records the request line of every request it sees.
pub struct StubServer {
    pub base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
    handle: JoinHandle<()>,
}

impl StubServer {
    pub async fn start(replies: Vec<StubReply>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind stub server");
        let addr = listener.local_addr().expect("stub server address");
        let requests = Arc::new(Mutex::new(Vec::new()));
        let log = Arc::clone(&requests);

        let handle = tokio::spawn(async move {
            let mut parked = Vec::new();
            for reply in replies {
                let Ok((mut stream, _)) = listener.accept().await else {
                    return;
                };
                let request_line = read_request_line(&mut stream).await;
                log.lock().expect("request log").push(request_line);

                match reply.to_bytes() {
                    Some(bytes) => {
                        let _ = stream.write_all(&bytes).await;
                        let _ = stream.shutdown().await;
                    }
                    // keep the socket open so the client waits
                    None => parked.push(stream),
                }
            }
            std::future::pending::<()>().await;
        });

        Self {
            base_url: format!("http://{addr}"),
            requests,
            handle,
        }
    }

    /// Request lines seen so far, e.g. `GET /boards?type=R&page=1&size=10 HTTP/1.1`.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().expect("request log").clone()
    }

    pub fn client(&self) -> HttpListingClient {
        self.client_with(ClientOptions::default())
    }

    pub fn client_with(&self, options: ClientOptions) -> HttpListingClient {
        HttpListingClient::new(ClientOptions {
            base_url: self.base_url.clone(),
            ..options
        })
    }
}

impl Drop for StubServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn read_request_line(stream: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0_u8; 1024];
    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut chunk).await {
            Ok(0) | Err(_) => break,
            Ok(n) => buf.extend_from_slice(&chunk[..n]),
        }
    }
    String::from_utf8_lossy(&buf)
        .lines()
        .next()
        .unwrap_or_default()
        .to_string()
}

/// A base URL nothing listens on.
pub async fn closed_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind probe listener");
    let addr = listener.local_addr().expect("probe address");
    drop(listener);
    format!("http://{addr}")
}
