// src/session.rs
use crate::types::{Config, WebScoutError};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use url::Url;

/// A fetched page: final status after redirects plus the decoded body.
#[derive(Debug, Clone)]
pub struct Page {
    pub status: StatusCode,
    pub body: String,
}

impl Page {
    /// Whether the final response landed in the 2xx range.
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

/// Shared HTTP session used by the crawler and all checks.
#[derive(Clone)]
pub struct Session {
    pub client: Client,
}

impl Session {
    pub fn new(config: &Config) -> Result<Self, WebScoutError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .gzip(true)
            .deflate(true)
            .connect_timeout(Duration::from_secs(10))
            .pool_idle_timeout(Duration::from_secs(90))
            .pool_max_idle_per_host(10)
            .build()
            .map_err(|e| {
                WebScoutError::ConfigError(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(Session { client })
    }

    /// GET a URL and read the whole page. Redirects are followed; the
    /// returned status is the final one, so callers can keep inspecting
    /// it without treating non-2xx as a transport failure.
    pub async fn fetch_page(&self, url: &Url) -> Result<Page, WebScoutError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| WebScoutError::NetworkError(format!("{}: {}", url, e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| WebScoutError::NetworkError(format!("{}: {}", url, e)))?;

        Ok(Page { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_session() -> Session {
        Session::new(&Config::default()).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_page_success() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/page")
            .with_status(200)
            .with_body("<html>hello</html>")
            .create_async()
            .await;

        let session = test_session();
        let url = Url::parse(&format!("{}/page", server.url())).unwrap();
        let page = session.fetch_page(&url).await.unwrap();

        assert!(page.is_success());
        assert_eq!(page.body, "<html>hello</html>");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_fetch_page_keeps_error_status() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/missing")
            .with_status(404)
            .with_body("not here")
            .create_async()
            .await;

        let session = test_session();
        let url = Url::parse(&format!("{}/missing", server.url())).unwrap();
        let page = session.fetch_page(&url).await.unwrap();

        assert!(!page.is_success());
        assert_eq!(page.status.as_u16(), 404);
        assert_eq!(page.body, "not here");
    }

    #[tokio::test]
    async fn test_fetch_page_connection_refused() {
        // Bind then drop to get a port nothing is listening on.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let session = test_session();
        let url = Url::parse(&format!("http://127.0.0.1:{}/", port)).unwrap();
        let result = session.fetch_page(&url).await;

        assert!(matches!(result, Err(WebScoutError::NetworkError(_))));
    }
}
