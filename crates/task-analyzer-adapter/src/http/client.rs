/*
[INPUT]:  HTTP configuration (base URL, timeouts)
[OUTPUT]: Configured reqwest client ready for API calls
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::http::{AnalyzerError, Result};
use crate::types::ErrorResponse;

/// Default base URL of the task analysis service
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000/api/tasks/";

/// HTTP client configuration
///
/// `timeout` is unset by default: an analysis request resolves whenever the
/// network layer resolves it.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Option<Duration>,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: None,
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// HTTP client for the task analysis service
#[derive(Debug, Clone)]
pub struct AnalyzerClient {
    http_client: Client,
    base_url: Url,
}

impl AnalyzerClient {
    /// Create a new client with default configuration and base URL
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Self::with_config_and_base_url(config, DEFAULT_BASE_URL)
    }

    /// Create a new client with custom configuration and base URL
    pub fn with_config_and_base_url(config: ClientConfig, base_url: &str) -> Result<Self> {
        let mut builder = Client::builder().connect_timeout(config.connect_timeout);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder.build()?;

        Ok(Self {
            http_client,
            base_url: normalize_base_url(base_url)?,
        })
    }

    /// Base URL all endpoints are resolved against
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build full URL for an endpoint relative to the base URL
    fn endpoint_url(&self, endpoint: &str) -> Result<Url> {
        Ok(self.base_url.join(endpoint)?)
    }

    /// Build request builder for an endpoint
    pub(crate) fn request(&self, method: Method, endpoint: &str) -> Result<RequestBuilder> {
        let url = self.endpoint_url(endpoint)?;
        Ok(self.http_client.request(method, url))
    }

    /// Send a request and decode a JSON body, mapping failure statuses to
    /// [`AnalyzerError::Service`].
    pub(crate) async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let response = builder.send().await?;
        let status = response.status();
        let body = response.bytes().await?;
        debug!(status = status.as_u16(), bytes = body.len(), "analysis service responded");

        if !status.is_success() {
            let error_body = serde_json::from_slice::<ErrorResponse>(&body).ok();
            return Err(AnalyzerError::service_error(status, error_body));
        }

        serde_json::from_slice(&body).map_err(|err| AnalyzerError::InvalidResponse(err.to_string()))
    }
}

/// Endpoints are joined relative to the base, which only works when the base
/// path ends with a slash.
fn normalize_base_url(base_url: &str) -> Result<Url> {
    let trimmed = base_url.trim();
    if trimmed.is_empty() {
        return Err(AnalyzerError::Config("base URL must not be empty".to_string()));
    }
    let mut url = Url::parse(trimmed)?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url() {
        let client = AnalyzerClient::new().expect("client init");
        assert_eq!(client.base_url().as_str(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_base_url_gets_trailing_slash() {
        let client = AnalyzerClient::with_config_and_base_url(
            ClientConfig::default(),
            "http://localhost:9000/api/tasks",
        )
        .expect("client init");
        assert_eq!(
            client.endpoint_url("analyze/").expect("join").as_str(),
            "http://localhost:9000/api/tasks/analyze/"
        );
    }

    #[test]
    fn test_empty_base_url_rejected() {
        let err = AnalyzerClient::with_config_and_base_url(ClientConfig::default(), "  ")
            .expect_err("empty base url must fail");
        assert!(matches!(err, AnalyzerError::Config(_)));
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let err = AnalyzerClient::with_config_and_base_url(ClientConfig::default(), "not a url")
            .expect_err("invalid base url must fail");
        assert!(matches!(err, AnalyzerError::UrlParse(_)));
    }
}
