use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::Router;
use axum::extract::Multipart;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::post;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

#[derive(Debug, Clone, Default)]
pub struct CapturedRequest {
    pub authorization: Option<String>,
    pub fields: HashMap<String, String>,
    pub file_name: Option<String>,
    pub file_content_type: Option<String>,
    pub file_bytes: Vec<u8>,
}

/// Stand-in for the transcription API. Shuts down when dropped.
pub struct MockUpstream {
    pub base_url: String,
    captured: Arc<Mutex<Vec<CapturedRequest>>>,
    _shutdown: oneshot::Sender<()>,
}

impl MockUpstream {
    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.captured.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.captured.lock().unwrap().len()
    }
}

pub async fn start_mock_upstream(status: u16, body: &'static str) -> MockUpstream {
    start_slow_mock_upstream(status, body, Duration::ZERO).await
}

pub async fn start_slow_mock_upstream(
    status: u16,
    body: &'static str,
    delay: Duration,
) -> MockUpstream {
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
    let captured = Arc::new(Mutex::new(Vec::new()));
    let handler_captured = Arc::clone(&captured);

    let app = Router::new().route(
        "/v1/audio/transcriptions",
        post(move |headers: HeaderMap, mut multipart: Multipart| {
            let captured = Arc::clone(&handler_captured);
            async move {
                let mut request = CapturedRequest {
                    authorization: headers
                        .get(header::AUTHORIZATION)
                        .and_then(|v| v.to_str().ok())
                        .map(String::from),
                    ..Default::default()
                };

                while let Ok(Some(field)) = multipart.next_field().await {
                    let name = field.name().unwrap_or_default().to_string();
                    if field.file_name().is_some() {
                        request.file_name = field.file_name().map(String::from);
                        request.file_content_type = field.content_type().map(String::from);
                        request.file_bytes =
                            field.bytes().await.map(|b| b.to_vec()).unwrap_or_default();
                    } else {
                        let value = field.text().await.unwrap_or_default();
                        request.fields.insert(name, value);
                    }
                }

                captured.lock().unwrap().push(request);
                tokio::time::sleep(delay).await;

                let status = StatusCode::from_u16(status).unwrap();
                (status, [(header::CONTENT_TYPE, "application/json")], body).into_response()
            }
        }),
    );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            })
            .await
            .ok();
    });

    MockUpstream {
        base_url: format!("http://{}/v1", addr),
        captured,
        _shutdown: shutdown_tx,
    }
}

/// A base URL nothing is listening on.
pub async fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/v1", addr)
}

/// Sends the status line and part of the body, then stalls before completing it.
pub async fn start_stalling_upstream(
    status_line: &'static str,
    partial_body: &'static str,
) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let Ok((mut socket, _)) = listener.accept().await else {
            return;
        };

        let mut received = Vec::new();
        let mut buf = [0u8; 4096];
        while !received.ends_with(b"--\r\n") {
            match socket.read(&mut buf).await {
                Ok(0) | Err(_) => break,
                Ok(n) => received.extend_from_slice(&buf[..n]),
            }
        }

        let head = format!(
            "HTTP/1.1 {}\r\ncontent-type: application/json\r\ncontent-length: 100\r\n\r\n",
            status_line
        );
        let _ = socket.write_all(head.as_bytes()).await;
        let _ = socket.write_all(partial_body.as_bytes()).await;
        let _ = socket.flush().await;
        tokio::time::sleep(Duration::from_secs(5)).await;
    });

    format!("http://{}/v1", addr)
}
