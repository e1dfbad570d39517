//! Remote page sources

use crate::error::{LoadError, Result};
use crate::types::PageResponse;
use async_trait::async_trait;
use tracing::debug;

/// Anything that can return one page of the character listing by number.
///
/// Pages are 1-based. Implementations make a single attempt per call; the
/// loader decides what a failure means for the whole load.
#[async_trait]
pub trait PageSource: Send + Sync {
    async fn fetch_page(&self, page: u32) -> Result<PageResponse>;
}

/// HTTP source issuing `GET {base_url}?page={n}`
pub struct HttpPageSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpPageSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self { client, base_url: base_url.into() }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl PageSource for HttpPageSource {
    async fn fetch_page(&self, page: u32) -> Result<PageResponse> {
        debug!(url = %self.base_url, page, "Fetching page");
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("page", page)])
            .send()
            .await
            .map_err(|source| LoadError::Request { page, source })?;

        let status = response.status();
        debug!(page, status = %status, "Page response received");
        if !status.is_success() {
            return Err(LoadError::Status { page, status: status.as_u16() });
        }

        response
            .json::<PageResponse>()
            .await
            .map_err(|source| LoadError::Request { page, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Status;
    use serde_json::json;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Serve a single HTTP response on a loopback port. The handle resolves to the request line.
    async fn serve_once(status_line: &'static str, body: String) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).await.unwrap();
            stream.shutdown().await.ok();
            String::from_utf8_lossy(&request).lines().next().unwrap_or_default().to_string()
        });

        (format!("http://{}/api/character", addr), handle)
    }

    fn source(url: String) -> HttpPageSource {
        let client = reqwest::Client::builder().no_proxy().build().unwrap();
        HttpPageSource::with_client(client, url)
    }

    #[tokio::test]
    async fn sends_page_query_and_decodes_body() {
        let body = json!({
            "info": { "count": 2, "pages": 3 },
            "results": [
                { "id": 3, "name": "Summer Smith", "species": "Human", "status": "Alive",
                  "location": { "name": "Earth (Replacement Dimension)" }, "image": "" },
                { "id": 4, "name": "Beth Smith", "species": "Human", "status": "Alive",
                  "location": { "name": "Earth (Replacement Dimension)" }, "image": "" }
            ]
        })
        .to_string();
        let (url, server) = serve_once("200 OK", body).await;

        let page = source(url).fetch_page(2).await.unwrap();
        let request_line = server.await.unwrap();

        assert_eq!(request_line, "GET /api/character?page=2 HTTP/1.1");
        assert_eq!(page.info.pages, 3);
        assert_eq!(page.results.len(), 2);
        assert_eq!(page.results[1].name, "Beth Smith");
        assert_eq!(page.results[1].status, Status::Alive);
    }

    #[tokio::test]
    async fn non_success_status_is_a_load_error() {
        let (url, server) = serve_once("500 Internal Server Error", "{}".to_string()).await;

        let err = source(url).fetch_page(5).await.unwrap_err();
        server.await.unwrap();

        assert!(matches!(err, LoadError::Status { page: 5, status: 500 }));
        assert_eq!(err.page(), 5);
    }

    #[tokio::test]
    async fn malformed_body_is_a_load_error() {
        let (url, server) = serve_once("200 OK", "{\"results\": []}".to_string()).await;

        let err = source(url).fetch_page(1).await.unwrap_err();
        server.await.unwrap();

        assert!(matches!(err, LoadError::Request { page: 1, .. }));
    }
}
