use crate::domain::ports::HttpClient;
use crate::utils::error::{PhonecatError, Result};
use async_trait::async_trait;
use reqwest::Client;
use url::Url;

/// `HttpClient` backed by reqwest. Paths are resolved against the configured origin.
#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    client: Client,
    base_url: Url,
}

impl ReqwestHttpClient {
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url).map_err(|e| PhonecatError::InvalidConfigValueError {
            field: "base_url".to_string(),
            value: base_url.to_string(),
            reason: format!("Invalid URL format: {}", e),
        })?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// An absolute path replaces whatever path the base URL carried.
    pub fn resolve(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| PhonecatError::InvalidConfigValueError {
                field: "path".to_string(),
                value: path.to_string(),
                reason: e.to_string(),
            })
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn get(&self, path: &str) -> Result<serde_json::Value> {
        let url = self.resolve(path)?;

        tracing::debug!("Making API request to: {}", url);
        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            return Err(PhonecatError::HttpStatus {
                status,
                url: url.to_string(),
            });
        }

        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[test]
    fn test_resolve_uses_absolute_path() {
        let client = ReqwestHttpClient::new("http://example.com/app/index.html").unwrap();
        let url = client.resolve("/phonecat/phones").unwrap();
        assert_eq!(url.as_str(), "http://example.com/phonecat/phones");
    }

    #[test]
    fn test_new_rejects_garbage_base_url() {
        let err = ReqwestHttpClient::new("not a url").unwrap_err();
        assert!(matches!(err, PhonecatError::InvalidConfigValueError { .. }));
    }

    #[tokio::test]
    async fn test_get_decodes_json_body() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/phonecat/phones");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!([{"name": "Nexus S", "age": 0}]));
        });

        let client = ReqwestHttpClient::new(&server.base_url()).unwrap();
        let body = client.get("/phonecat/phones").await.unwrap();

        api_mock.assert();
        assert_eq!(body, serde_json::json!([{"name": "Nexus S", "age": 0}]));
    }

    #[tokio::test]
    async fn test_get_maps_error_status() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/phonecat/phones");
            then.status(404);
        });

        let client = ReqwestHttpClient::new(&server.base_url()).unwrap();
        let err = client.get("/phonecat/phones").await.unwrap_err();

        api_mock.assert();
        match err {
            PhonecatError::HttpStatus { status, url } => {
                assert_eq!(status, reqwest::StatusCode::NOT_FOUND);
                assert!(url.ends_with("/phonecat/phones"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_get_rejects_invalid_json() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/phonecat/phones");
            then.status(200).body("<html>not json</html>");
        });

        let client = ReqwestHttpClient::new(&server.base_url()).unwrap();
        let err = client.get("/phonecat/phones").await.unwrap_err();

        assert!(matches!(err, PhonecatError::ApiError(_)));
        assert!(err.is_request_failure());
    }
}
