//! HTTP PDF fetcher backed by `reqwest`.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::ports::{FetchError, PdfFetcher};

/// Downloads documents over HTTP(S).
#[derive(Debug, Clone)]
pub struct ReqwestPdfFetcher {
    client: Client,
}

impl ReqwestPdfFetcher {
    /// Create a fetcher. `timeout` bounds each whole request; `None` means no limit.
    pub fn new(timeout: Option<Duration>) -> Result<Self, FetchError> {
        let mut builder = Client::builder().user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| FetchError::ClientSetup(e.to_string()))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl PdfFetcher for ReqwestPdfFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        tracing::debug!(url, "fetching document");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::RequestFailed {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::BadStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| FetchError::RequestFailed {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        tracing::debug!(url, size = bytes.len(), "document fetched");
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serves one canned HTTP response and returns the URL to request.
    async fn serve_once(status_line: &'static str, body: &'static [u8]) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 1024];
            let _ = socket.read(&mut buf).await;
            let head = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: application/pdf\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                body.len()
            );
            socket.write_all(head.as_bytes()).await.unwrap();
            socket.write_all(body).await.unwrap();
            socket.shutdown().await.ok();
        });
        format!("http://{addr}/megilla/Megilla_4.pdf")
    }

    #[tokio::test]
    async fn test_fetch_returns_body() {
        let url = serve_once("200 OK", b"%PDF-1.4 test").await;
        let fetcher = ReqwestPdfFetcher::new(Some(Duration::from_secs(5))).unwrap();

        let bytes = fetcher.fetch(&url).await.unwrap();
        assert_eq!(bytes, b"%PDF-1.4 test");
    }

    #[tokio::test]
    async fn test_fetch_maps_error_status() {
        let url = serve_once("404 Not Found", b"").await;
        let fetcher = ReqwestPdfFetcher::new(None).unwrap();

        let result = fetcher.fetch(&url).await;
        assert!(matches!(
            result,
            Err(FetchError::BadStatus { status: 404, .. })
        ));
    }

    #[tokio::test]
    async fn test_fetch_connection_refused() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let fetcher = ReqwestPdfFetcher::new(Some(Duration::from_secs(2))).unwrap();

        let result = fetcher.fetch(&format!("http://{addr}/x.pdf")).await;
        assert!(matches!(result, Err(FetchError::RequestFailed { .. })));
    }
}
