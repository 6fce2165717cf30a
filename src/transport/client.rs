//! Production transport implementation using reqwest.

use super::{RawResponse, Transport, TransportError};

/// Production transport using reqwest.
///
/// This is a thin wrapper around `reqwest::Client` that implements the
/// [`Transport`] trait. It inherits reqwest's default configuration
/// including connection pooling, redirect policy, and timeouts.
///
/// # Example
///
/// ```no_run
/// use json_fetch::transport::{ReqwestTransport, Transport};
/// use url::Url;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let transport = ReqwestTransport::new();
/// let url = Url::parse("https://api.example.com/users/1")?;
/// let raw = transport.get(url).await?;
/// println!("Status: {:?}", raw.status);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    inner: reqwest::Client,
}

impl ReqwestTransport {
    /// Creates a new transport with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: reqwest::Client::new(),
        }
    }

    /// Creates a transport from an existing reqwest client.
    ///
    /// Useful when you need custom configuration (timeouts, TLS, etc.).
    #[must_use]
    pub const fn from_client(client: reqwest::Client) -> Self {
        Self { inner: client }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for ReqwestTransport {
    async fn get(&self, url: url::Url) -> Result<RawResponse, TransportError> {
        let response = self.inner.get(url.as_str()).send().await.map_err(|e| {
            if e.is_timeout() {
                TransportError::Timeout
            } else {
                TransportError::Connection(Box::new(e))
            }
        })?;

        // reqwest always surfaces a status line; body is buffered in full.
        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| TransportError::Connection(Box::new(e)))?;

        // A zero-length buffer means the server sent no body at all.
        let body = if bytes.is_empty() {
            None
        } else {
            Some(bytes.to_vec())
        };

        Ok(RawResponse::new(Some(status), body))
    }
}
