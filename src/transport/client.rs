//! HTTP transport posting the contact payload as JSON

use super::traits::SubmissionTransport;
use crate::contact::TransportError;
use crate::state::ContactPayload;
use async_trait::async_trait;
use std::time::Duration;
use uuid::Uuid;

/// Header carrying the per-attempt request id
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Client for the contact endpoint
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: String,
    timeout: Duration,
}

impl HttpTransport {
    /// Create a transport for `endpoint`. `timeout` bounds each request at
    /// the HTTP layer; the controller applies the same bound on top, and
    /// either one expiring is reported as [`TransportError::Timeout`].
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("atelier-tui/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| TransportError::Unavailable(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            timeout,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn classify(&self, err: reqwest::Error) -> TransportError {
        if err.is_timeout() {
            TransportError::Timeout(self.timeout)
        } else {
            TransportError::Network(err)
        }
    }
}

#[async_trait]
impl SubmissionTransport for HttpTransport {
    async fn send(&self, request_id: Uuid, payload: &ContactPayload) -> Result<(), TransportError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header(REQUEST_ID_HEADER, request_id.to_string())
            .json(payload)
            .send()
            .await
            .map_err(|err| self.classify(err))?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(TransportError::Rejected {
                status: status.as_u16(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::{ContactSubmissionController, FailureKind, SubmitError};
    use crate::state::FieldName;
    use pretty_assertions::assert_eq;
    use std::sync::Arc;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    fn payload() -> ContactPayload {
        ContactPayload {
            name: "Ana".to_string(),
            email: "ana@x.com".to_string(),
            subject: "press".to_string(),
            message: "Hello".to_string(),
        }
    }

    /// Accept one connection, answer with `status_line`, and hand back the
    /// raw request (head, body).
    async fn serve_once(status_line: &'static str) -> (String, JoinHandle<(String, String)>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = Vec::new();
            let mut chunk = [0u8; 1024];

            let head_end = loop {
                let n = socket.read(&mut chunk).await.unwrap();
                assert!(n > 0, "connection closed before headers");
                buf.extend_from_slice(&chunk[..n]);
                if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                    break pos + 4;
                }
            };

            let head = String::from_utf8_lossy(&buf[..head_end]).to_string();
            let content_length = head
                .lines()
                .find_map(|line| {
                    let (name, value) = line.split_once(':')?;
                    name.eq_ignore_ascii_case("content-length")
                        .then(|| value.trim().parse::<usize>().ok())
                        .flatten()
                })
                .unwrap_or(0);

            while buf.len() < head_end + content_length {
                let n = socket.read(&mut chunk).await.unwrap();
                if n == 0 {
                    break;
                }
                buf.extend_from_slice(&chunk[..n]);
            }
            let body = String::from_utf8_lossy(&buf[head_end..]).to_string();

            let response =
                format!("HTTP/1.1 {status_line}\r\ncontent-length: 0\r\nconnection: close\r\n\r\n");
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();

            (head, body)
        });

        (format!("http://{addr}/api/contact"), handle)
    }

    #[tokio::test]
    async fn test_success_status_is_acknowledged() {
        let (endpoint, server) = serve_once("200 OK").await;
        let transport = HttpTransport::new(endpoint, Duration::from_secs(5)).unwrap();
        let request_id = Uuid::new_v4();

        let result = transport.send(request_id, &payload()).await;
        assert!(result.is_ok());

        let (head, body) = server.await.unwrap();
        assert!(head.starts_with("POST /api/contact HTTP/1.1"));
        assert!(head
            .to_lowercase()
            .contains(&format!("{REQUEST_ID_HEADER}: {request_id}")));
        assert!(head.to_lowercase().contains("content-type: application/json"));

        let sent: ContactPayload = serde_json::from_str(&body).unwrap();
        assert_eq!(sent, payload());
    }

    #[tokio::test]
    async fn test_created_counts_as_success() {
        let (endpoint, server) = serve_once("201 Created").await;
        let transport = HttpTransport::new(endpoint, Duration::from_secs(5)).unwrap();
        assert!(transport.send(Uuid::new_v4(), &payload()).await.is_ok());
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_error_status_is_rejected() {
        let (endpoint, server) = serve_once("500 Internal Server Error").await;
        let transport = HttpTransport::new(endpoint, Duration::from_secs(5)).unwrap();

        let err = transport.send(Uuid::new_v4(), &payload()).await.unwrap_err();
        assert!(matches!(err, TransportError::Rejected { status: 500 }));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_network_error() {
        // Bind then drop to get a port nobody listens on
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let transport =
            HttpTransport::new(format!("http://{addr}/api/contact"), Duration::from_secs(5))
                .unwrap();
        let err = transport.send(Uuid::new_v4(), &payload()).await.unwrap_err();
        assert!(matches!(err, TransportError::Network(_)));
    }

    /// Accept one connection and keep it open without ever answering
    async fn serve_silently() -> (String, JoinHandle<()>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut chunk = [0u8; 1024];
            while let Ok(n) = socket.read(&mut chunk).await {
                if n == 0 {
                    break;
                }
            }
        });

        (format!("http://{addr}/api/contact"), handle)
    }

    #[tokio::test]
    async fn test_silent_endpoint_is_timeout() {
        let (endpoint, server) = serve_silently().await;
        let bound = Duration::from_millis(200);
        let transport = HttpTransport::new(endpoint, bound).unwrap();

        let err = transport.send(Uuid::new_v4(), &payload()).await.unwrap_err();
        assert!(matches!(err, TransportError::Timeout(d) if d == bound), "{err:?}");
        server.abort();
    }

    #[tokio::test]
    async fn test_silent_endpoint_times_out_through_controller() {
        // Both the HTTP client and the controller carry the same bound
        for _ in 0..5 {
            let (endpoint, server) = serve_silently().await;
            let bound = Duration::from_millis(150);
            let transport = HttpTransport::new(endpoint, bound).unwrap();
            let mut controller = ContactSubmissionController::new(Arc::new(transport), bound);
            for name in FieldName::ALL {
                controller.update_field(name, "x");
            }

            let err = controller.submit().await.unwrap_err();
            assert!(
                matches!(err, SubmitError::Transport(TransportError::Timeout(_))),
                "{err:?}"
            );
            assert_eq!(controller.failure(), Some(FailureKind::Transport));
            server.abort();
        }
    }

    #[test]
    fn test_endpoint_is_kept() {
        let transport =
            HttpTransport::new("http://localhost:3000/api/contact", Duration::from_secs(1))
                .unwrap();
        assert_eq!(transport.endpoint(), "http://localhost:3000/api/contact");
    }
}
