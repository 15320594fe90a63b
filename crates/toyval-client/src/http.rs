//! HTTP transport to a remote Platform.

use async_trait::async_trait;
use reqwest::StatusCode;
use std::time::Duration;
use tracing::{debug, warn};

use toyval_traits::{Document, ErrorBody, PlatformClient, PlatformError, ResultTable};

/// Path of the evaluate endpoint, relative to the base URL.
pub const EVALUATE_PATH: &str = "/api/v1/evaluate";

/// Posts documents to `<endpoint>/api/v1/evaluate`.
///
/// Errors returned by the server as `{"error": …}` are handed back exactly as
/// the server raised them. No request is ever retried.
#[derive(Debug, Clone)]
pub struct HttpPlatformClient {
    endpoint: String,
    api_key: Option<String>,
    client: reqwest::Client,
}

impl HttpPlatformClient {
    /// Creates a client.
    ///
    /// `timeout` bounds each request end to end; `None` waits indefinitely.
    pub fn new(
        endpoint: impl Into<String>,
        api_key: Option<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, PlatformError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| PlatformError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            api_key,
            client,
        })
    }

    /// Base URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn url(&self) -> String {
        format!("{}{}", self.endpoint, EVALUATE_PATH)
    }
}

fn transport_error(e: reqwest::Error) -> PlatformError {
    if e.is_timeout() {
        PlatformError::Timeout
    } else if e.is_decode() {
        PlatformError::Serialization(e.to_string())
    } else {
        PlatformError::ConnectionFailed(e.to_string())
    }
}

/// Maps a non-success response body to the error it carries.
fn error_from_response(status: StatusCode, body: &str) -> PlatformError {
    if let Ok(ErrorBody { error }) = serde_json::from_str::<ErrorBody>(body) {
        return error;
    }
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            PlatformError::AuthenticationFailed(status.to_string())
        }
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => PlatformError::Timeout,
        _ => PlatformError::Internal(format!("{status}: {body}")),
    }
}

#[async_trait]
impl PlatformClient for HttpPlatformClient {
    async fn evaluate(&self, document: &Document) -> Result<ResultTable, PlatformError> {
        let mut request = self.client.post(self.url()).json(document);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        debug!(request_id = %document.request_id, url = %self.url(), "Posting document");
        let response = request.send().await.map_err(transport_error)?;
        let status = response.status();

        if status.is_success() {
            return response.json::<ResultTable>().await.map_err(transport_error);
        }

        let body = response.text().await.map_err(transport_error)?;
        let error = error_from_response(status, &body);
        warn!(request_id = %document.request_id, %status, error = %error, "Platform returned an error");
        Err(error)
    }

    fn name(&self) -> &str {
        "http"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url() {
        let client = HttpPlatformClient::new("http://localhost:8080/", None, None).unwrap();
        assert_eq!(client.endpoint(), "http://localhost:8080");
        assert_eq!(client.url(), "http://localhost:8080/api/v1/evaluate");
    }

    #[test]
    fn test_error_body_passes_through() {
        let body = r#"{"error":{"kind":"unknown_convention","detail":"Atlantis"}}"#;
        assert_eq!(
            error_from_response(StatusCode::UNPROCESSABLE_ENTITY, body),
            PlatformError::UnknownConvention("Atlantis".into())
        );
    }

    #[test]
    fn test_status_fallbacks() {
        assert!(matches!(
            error_from_response(StatusCode::UNAUTHORIZED, ""),
            PlatformError::AuthenticationFailed(_)
        ));
        assert_eq!(
            error_from_response(StatusCode::GATEWAY_TIMEOUT, "upstream"),
            PlatformError::Timeout
        );
        assert!(matches!(
            error_from_response(StatusCode::BAD_GATEWAY, "oops"),
            PlatformError::Internal(ref m) if m.contains("oops")
        ));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint() {
        // Port 9 (discard) is closed on test machines.
        let client = HttpPlatformClient::new("http://127.0.0.1:9", None, Some(Duration::from_secs(2))).unwrap();
        let doc = Document::new(toyval_traits::NodeId::new("x"), Vec::new());
        let err = client.evaluate(&doc).await.unwrap_err();
        assert!(matches!(err, PlatformError::ConnectionFailed(_) | PlatformError::Timeout));
    }
}
