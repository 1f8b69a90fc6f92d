use std::time::Duration;

use async_trait::async_trait;
use url::Url;

/// A JSON `POST` ready to go on the wire.
#[derive(Debug, Clone)]
pub struct PostRequest {
    pub url: Url,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl PostRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Response as received, before any interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    /// Raw `Content-Type` header, if the server sent one.
    pub content_type: Option<String>,
    pub body: String,
}

/// HTTP transport trait - abstraction over the client issuing requests.
///
/// One call is one attempt; implementations must not retry.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn post(&self, request: PostRequest) -> Result<RawResponse, TransportError>;
}

/// Transport errors - the request did not complete.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("Connection failed: {0}")]
    Connect(String),

    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    #[error("Request failed: {0}")]
    Request(String),
}
