//! HTTP transport port

use async_trait::async_trait;
use thiserror::Error;
use url::Url;

use costealo_domain::{ApiRequest, ResponseEnvelope};

/// Errors raised below the status-code layer.
///
/// These are the failures the gateway logs and re-throws unchanged: the
/// exchange itself failed, or the reply body was not the JSON the API
/// promises. Server-signaled failures (4xx/5xx statuses) are not
/// transport errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    /// The connection could not be established.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// The exchange timed out.
    #[error("request timed out")]
    Timeout,

    /// The response body could not be read.
    #[error("failed to read response body: {0}")]
    BodyRead(String),

    /// The response body was not valid JSON.
    #[error("malformed response body: {0}")]
    MalformedResponse(String),

    /// Any other transport failure.
    #[error("{0}")]
    Other(String),
}

/// Port for executing one HTTP exchange.
///
/// The transport applies the method, headers and body from the request
/// verbatim against the resolved URL. One call, one exchange: no
/// retries, no queuing, no cancellation.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Executes the request and returns the raw response envelope.
    async fn execute(
        &self,
        url: Url,
        request: &ApiRequest,
    ) -> Result<ResponseEnvelope, TransportError>;
}
