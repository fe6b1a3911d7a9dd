use std::fmt;

use async_trait::async_trait;
use futures_util::StreamExt;
use reqwest::Client;
use tokio::time::Instant;
use tracing::debug;

/// What a transport reports for a request that produced a response.
#[derive(Debug, Clone, Copy)]
pub struct TransportResponse {
    pub status: u16,
    /// When the response head arrived. Body transfer is not part of the probe latency.
    pub received_at: Instant,
}

impl TransportResponse {
    /// 2xx and 3xx count as success; everything else is a failed response.
    #[must_use]
    pub const fn is_success(self) -> bool {
        self.status >= 200 && self.status < 400
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportErrorKind {
    Timeout,
    Connect,
    Other,
}

impl TransportErrorKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            TransportErrorKind::Timeout => "timeout",
            TransportErrorKind::Connect => "connect",
            TransportErrorKind::Other => "other",
        }
    }
}

/// A request that never produced a response.
#[derive(Debug, Clone)]
pub struct TransportError {
    pub kind: TransportErrorKind,
    pub message: String,
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} error: {}", self.kind.as_str(), self.message)
    }
}

impl std::error::Error for TransportError {}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        let kind = if err.is_timeout() {
            TransportErrorKind::Timeout
        } else if err.is_connect() {
            TransportErrorKind::Connect
        } else {
            TransportErrorKind::Other
        };
        Self {
            kind,
            message: err.to_string(),
        }
    }
}

/// Issues GET requests on behalf of the probe engine. Implementations must
/// tolerate many concurrent in-flight calls.
#[async_trait]
pub trait ProbeTransport: Send + Sync {
    async fn get(&self, url: &str) -> Result<TransportResponse, TransportError>;
}

/// [`ProbeTransport`] backed by a pooled `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    #[must_use]
    pub const fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ProbeTransport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<TransportResponse, TransportError> {
        let response = self.client.get(url).send().await?;
        let received_at = Instant::now();
        let status = response.status().as_u16();

        // The connection only goes back to the pool once the body is consumed.
        if let Err(err) = drain_response_body(response).await {
            debug!("Failed to drain response body from {}: {}", url, err);
        }

        Ok(TransportResponse {
            status,
            received_at,
        })
    }
}

async fn drain_response_body(response: reqwest::Response) -> Result<(), reqwest::Error> {
    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        chunk?;
    }
    Ok(())
}
