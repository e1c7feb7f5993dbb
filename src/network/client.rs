//! HTTP client for fetching feed documents

use crate::config::OutgoingSettings;
use crate::error::{MatchError, SearchError};
use reqwest::{Client, Response};
use std::time::Duration;

/// HTTP response from a feed request
#[derive(Debug)]
pub struct FeedResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body as text
    pub text: String,
}

impl FeedResponse {
    /// Check if the response is exactly 200 OK
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// HTTP client wrapper configured from outgoing settings
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    user_agent: String,
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> Result<Self, SearchError> {
        Self::with_settings(&OutgoingSettings::default())
    }

    /// Create a new HTTP client with custom settings
    pub fn with_settings(settings: &OutgoingSettings) -> Result<Self, SearchError> {
        if !settings.request_timeout.is_finite() || settings.request_timeout <= 0.0 {
            return Err(SearchError::Config(format!(
                "request_timeout must be positive, got {}",
                settings.request_timeout
            )));
        }

        let mut builder = Client::builder()
            .timeout(Duration::from_secs_f64(settings.request_timeout))
            .gzip(true)
            .brotli(true);

        if !settings.verify_ssl {
            builder = builder.danger_accept_invalid_certs(true);
        }

        if let Some(ref proxy_url) = settings.proxy {
            let proxy = reqwest::Proxy::all(proxy_url)
                .map_err(|e| SearchError::Config(format!("invalid proxy: {}", e)))?;
            builder = builder.proxy(proxy);
        }

        let client = builder
            .build()
            .map_err(|e| SearchError::Config(e.to_string()))?;

        Ok(Self {
            client,
            user_agent: settings.user_agent.clone(),
        })
    }

    /// GET a feed document
    pub async fn get(&self, url: &str) -> Result<FeedResponse, MatchError> {
        let response = self
            .client
            .get(url)
            .header("User-Agent", &self.user_agent)
            .header(
                "Accept",
                "application/rss+xml, application/xml;q=0.9, text/xml;q=0.8, */*;q=0.5",
            )
            .send()
            .await
            .map_err(|e| MatchError::Network(e.to_string()))?;

        Self::parse_response(response).await
    }

    /// Parse response into FeedResponse
    async fn parse_response(response: Response) -> Result<FeedResponse, MatchError> {
        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| MatchError::Network(e.to_string()))?;

        Ok(FeedResponse { status, text })
    }

    /// Get current user agent
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_client_creation() {
        let client = HttpClient::new().unwrap();
        assert!(client.user_agent().starts_with("feedsearch/"));
    }

    #[test]
    fn test_rejects_zero_timeout() {
        let settings = OutgoingSettings {
            request_timeout: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            HttpClient::with_settings(&settings),
            Err(SearchError::Config(_))
        ));
    }

    #[tokio::test]
    async fn test_get_sends_user_agent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/feed"))
            .and(header("User-Agent", "test-agent"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<rss/>"))
            .mount(&server)
            .await;

        let settings = OutgoingSettings {
            user_agent: "test-agent".to_string(),
            ..Default::default()
        };
        let client = HttpClient::with_settings(&settings).unwrap();
        let response = client.get(&format!("{}/feed", server.uri())).await.unwrap();

        assert!(response.is_ok());
        assert_eq!(response.text, "<rss/>");
    }

    #[tokio::test]
    async fn test_non_200_body_is_kept() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/gone"))
            .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
            .mount(&server)
            .await;

        let client = HttpClient::new().unwrap();
        let response = client.get(&format!("{}/gone", server.uri())).await.unwrap();

        assert!(!response.is_ok());
        assert_eq!(response.status, 404);
        assert_eq!(response.text, "not found");
    }

    #[tokio::test]
    async fn test_unreachable_host() {
        let client = HttpClient::new().unwrap();
        let err = client.get("http://127.0.0.1:1/feed").await.unwrap_err();
        assert!(matches!(err, MatchError::Network(_)));
    }
}
