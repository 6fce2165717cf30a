//! Raw response type and transport trait.

use super::TransportError;

/// The raw result of a completed transport exchange.
///
/// This is what the wire produced before any validation: optional HTTP
/// status metadata and optional body bytes. Transport-level failures are
/// reported separately through the `Err` arm of [`Transport::get`], so a
/// `RawResponse` always represents an exchange that completed.
///
/// `status` is `None` when the exchange produced nothing interpretable as
/// an HTTP response (no status line). `body` is `None` when the server
/// returned no body bytes.
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// HTTP status metadata, absent if the response was not valid HTTP.
    pub status: Option<http::StatusCode>,
    /// Response body bytes (fully buffered), absent if none were returned.
    pub body: Option<Vec<u8>>,
}

impl RawResponse {
    /// Creates a raw response from status metadata and body bytes.
    #[must_use]
    pub const fn new(status: Option<http::StatusCode>, body: Option<Vec<u8>>) -> Self {
        Self { status, body }
    }

    /// Creates a well-formed HTTP response with the given status and body.
    #[must_use]
    pub const fn http(status: http::StatusCode, body: Vec<u8>) -> Self {
        Self {
            status: Some(status),
            body: Some(body),
        }
    }

    /// Returns true if status metadata is present and in the 2xx range.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_some_and(|s| s.is_success())
    }
}

/// Trait for issuing a single GET request.
///
/// # Design
///
/// This trait abstracts the HTTP client implementation, enabling:
/// - Dependency injection for testing with mock transports
/// - Swapping HTTP libraries without changing the fetch layer
///
/// # Example
///
/// ```ignore
/// use json_fetch::transport::{Transport, RawResponse, TransportError};
///
/// struct MockTransport {
///     response: RawResponse,
/// }
///
/// impl Transport for MockTransport {
///     async fn get(&self, _url: url::Url) -> Result<RawResponse, TransportError> {
///         Ok(self.response.clone())
///     }
/// }
/// ```
pub trait Transport: Send + Sync {
    /// Issues a GET request to the given URL and returns the raw result.
    ///
    /// # Arguments
    ///
    /// * `url` - The parsed target URL
    ///
    /// # Returns
    ///
    /// The raw response on a completed exchange, or a [`TransportError`]
    /// when the exchange itself fails.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] when:
    /// - Network connection fails ([`TransportError::Connection`])
    /// - The request times out ([`TransportError::Timeout`])
    fn get(
        &self,
        url: url::Url,
    ) -> impl std::future::Future<Output = Result<RawResponse, TransportError>> + Send;
}
