//! HTTP catalogue client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::debug;

use super::{CatalogueClient, CatalogueError, Product};

/// Configuration for reaching the catalogue service.
#[derive(Debug, Clone)]
pub struct CatalogueConfig {
    /// Catalogue base URL, e.g. `"http://catalogue:8080"`.
    pub base_url: String,

    /// Per-request timeout.
    pub timeout: Duration,
}

/// Catalogue client issuing `GET {base_url}/product/{sku}`.
#[derive(Debug, Clone)]
pub struct HttpCatalogueClient {
    config: CatalogueConfig,
    http: Client,
}

impl HttpCatalogueClient {
    /// Create a new client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: CatalogueConfig) -> Result<Self, CatalogueError> {
        let http = Client::builder().timeout(config.timeout).build()?;

        Ok(Self { config, http })
    }

    fn product_url(&self, sku: &str) -> String {
        format!("{}/product/{sku}", self.config.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl CatalogueClient for HttpCatalogueClient {
    async fn product(&self, sku: &str) -> Result<Option<Product>, CatalogueError> {
        let response = self.http.get(self.product_url(sku)).send().await?;

        if response.status() != StatusCode::OK {
            debug!(sku, status = %response.status(), "catalogue has no product");

            return Ok(None);
        }

        let body = response.text().await?;

        serde_json::from_str(&body)
            .map(Some)
            .map_err(CatalogueError::Malformed)
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;
    use tokio::{
        io::{AsyncReadExt, AsyncWriteExt},
        net::TcpListener,
    };

    use super::*;

    /// Serve one canned HTTP response and hand back the request line that was received.
    async fn serve_once(
        status: &'static str,
        body: &'static str,
    ) -> TestResult<(String, tokio::task::JoinHandle<String>)> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let base_url = format!("http://{}", listener.local_addr()?);

        let handle = tokio::spawn(async move {
            let Ok((mut socket, _)) = listener.accept().await else {
                return String::new();
            };

            let mut buffer = vec![0_u8; 4_096];
            let read = socket.read(&mut buffer).await.unwrap_or(0);
            let request = String::from_utf8_lossy(buffer.get(..read).unwrap_or_default())
                .lines()
                .next()
                .unwrap_or_default()
                .to_owned();

            let response = format!(
                "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );

            _ = socket.write_all(response.as_bytes()).await;
            _ = socket.shutdown().await;

            request
        });

        Ok((base_url, handle))
    }

    fn client(base_url: String) -> TestResult<HttpCatalogueClient> {
        Ok(HttpCatalogueClient::new(CatalogueConfig {
            base_url,
            timeout: Duration::from_secs(5),
        })?)
    }

    #[tokio::test]
    async fn found_product_is_decoded() -> TestResult {
        let (base_url, request) =
            serve_once("200 OK", r#"{"sku":"TEE1","name":"Tee","price":10,"instock":3}"#).await?;

        let product = client(base_url)?.product("TEE1").await?;

        assert_eq!(
            product,
            Some(Product {
                name: "Tee".to_owned(),
                price: 10.0,
                instock: Some(3),
            })
        );
        assert_eq!(request.await?, "GET /product/TEE1 HTTP/1.1");

        Ok(())
    }

    #[tokio::test]
    async fn non_200_is_absent_product() -> TestResult {
        let (base_url, _request) = serve_once("404 Not Found", r#"{"error":"not found"}"#).await?;

        let product = client(base_url)?.product("NOPE").await?;

        assert_eq!(product, None);

        Ok(())
    }

    #[tokio::test]
    async fn malformed_body_is_an_error() -> TestResult {
        let (base_url, _request) = serve_once("200 OK", "not json").await?;

        let result = client(base_url)?.product("TEE1").await;

        assert!(
            matches!(result, Err(CatalogueError::Malformed(_))),
            "expected Malformed, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn unreachable_catalogue_is_an_error() -> TestResult {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let base_url = format!("http://{}", listener.local_addr()?);
        drop(listener);

        let result = client(base_url)?.product("TEE1").await;

        assert!(
            matches!(result, Err(CatalogueError::Http(_))),
            "expected Http error, got {result:?}"
        );

        Ok(())
    }

    #[test]
    fn product_url_tolerates_trailing_slash() -> TestResult {
        let client = client("http://catalogue:8080/".to_owned())?;

        assert_eq!(client.product_url("TEE1"), "http://catalogue:8080/product/TEE1");

        Ok(())
    }
}
