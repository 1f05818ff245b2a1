//! A loopback HTTP server that answers every request with the same canned
//! response and hands the requests it saw back to the test.

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::mpsc;
use url::Url;

#[derive(Debug)]
pub(crate) struct ReceivedRequest {
    pub method: String,
    pub path: String,
    pub body: String,
}

pub(crate) struct CannedServer {
    pub url: Url,
    pub requests: mpsc::UnboundedReceiver<ReceivedRequest>,
}

/// `status` is the status line tail (`"200 OK"`), `headers` are raw
/// `Name: value\r\n` lines. The connection is closed after each response.
pub(crate) async fn serve(status: &'static str, headers: &'static str) -> CannedServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = Url::parse(&format!("http://{}/", listener.local_addr().unwrap())).unwrap();
    let (sender, requests) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        while let Ok((stream, _)) = listener.accept().await {
            let sender = sender.clone();
            tokio::spawn(async move {
                if let Some(request) = answer(stream, status, headers).await {
                    let _ = sender.send(request);
                }
            });
        }
    });

    CannedServer { url, requests }
}

async fn answer(
    mut stream: TcpStream,
    status: &str,
    headers: &str,
) -> Option<ReceivedRequest> {
    let mut buffer = Vec::new();
    let mut chunk = [0u8; 1024];

    let head_end = loop {
        let n = stream.read(&mut chunk).await.ok()?;
        if n == 0 {
            return None;
        }
        buffer.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buffer.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = String::from_utf8_lossy(&buffer[..head_end]).into_owned();
    let content_length = head
        .lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.trim().parse::<usize>().ok())
        .unwrap_or(0);

    while buffer.len() < head_end + content_length {
        let n = stream.read(&mut chunk).await.ok()?;
        if n == 0 {
            break;
        }
        buffer.extend_from_slice(&chunk[..n]);
    }

    let mut request_line = head.lines().next()?.split(' ');
    let request = ReceivedRequest {
        method: request_line.next()?.to_owned(),
        path: request_line.next()?.to_owned(),
        body: String::from_utf8_lossy(&buffer[head_end..]).into_owned(),
    };

    let response = format!("HTTP/1.1 {status}\r\n{headers}Connection: close\r\n\r\n");
    stream.write_all(response.as_bytes()).await.ok()?;
    stream.shutdown().await.ok()?;
    Some(request)
}
