//! Typed fetch operation over a transport.

use super::{FetchError, Outcome};
use crate::transport::{ReqwestTransport, Transport};
use serde::de::DeserializeOwned;

/// Stateless client that fetches a URL and decodes the JSON body.
///
/// Runs an ordered validation chain over a single GET exchange: URL parse,
/// transport call, status-metadata check, status-range check, body-presence
/// check, JSON decode. The first failing step wins and the remaining steps
/// are skipped. At most one network request is issued per call.
///
/// The client holds no per-call state and is cheap to clone and share
/// across tasks; concurrent calls are fully independent. There is no retry
/// and no timeout configuration here (the transport's defaults apply).
///
/// # Type Parameters
///
/// - `C`: The transport implementation (defaults to [`ReqwestTransport`])
///
/// # Example
///
/// ```no_run
/// use json_fetch::fetch::FetchClient;
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct User {
///     name: String,
/// }
///
/// # async fn example() {
/// let client = FetchClient::new();
/// match client.fetch::<User>("https://api.example.com/users/1").await {
///     Ok(user) => println!("fetched {}", user.name),
///     Err(e) => eprintln!("fetch failed: {e}"),
/// }
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct FetchClient<C = ReqwestTransport> {
    transport: C,
}

impl FetchClient<ReqwestTransport> {
    /// Creates a client backed by the production reqwest transport.
    #[must_use]
    pub fn new() -> Self {
        Self {
            transport: ReqwestTransport::new(),
        }
    }
}

impl Default for FetchClient<ReqwestTransport> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> FetchClient<C> {
    /// Creates a client backed by the given transport.
    pub const fn with_transport(transport: C) -> Self {
        Self { transport }
    }

    /// Returns the underlying transport.
    pub const fn transport(&self) -> &C {
        &self.transport
    }
}

impl<C: Transport> FetchClient<C> {
    /// Fetches `url` with a single GET request and decodes the JSON body
    /// into `T`.
    ///
    /// The returned future resolves exactly once with the outcome. Dropping
    /// it before completion abandons the request; no other cancellation is
    /// exposed.
    ///
    /// # Errors
    ///
    /// Returns the error naming the first validation step that failed:
    ///
    /// - [`FetchError::InvalidUrl`] - `url` does not parse; no request is issued
    /// - [`FetchError::RequestFailed`] - the transport-level exchange failed
    /// - [`FetchError::InvalidResponse`] - no HTTP status metadata was produced
    /// - [`FetchError::InvalidStatusCode`] - the status was outside the 2xx range
    /// - [`FetchError::NoData`] - the response carried no body bytes
    /// - [`FetchError::DecodingFailed`] - the body is not valid JSON for `T`
    pub async fn fetch<T: DeserializeOwned>(&self, url: &str) -> Outcome<T> {
        let url = url::Url::parse(url).map_err(FetchError::InvalidUrl)?;

        tracing::debug!(%url, "issuing GET request");
        let raw = self
            .transport
            .get(url)
            .await
            .map_err(FetchError::RequestFailed)?;

        let Some(status) = raw.status else {
            tracing::debug!("response carried no HTTP status metadata");
            return Err(FetchError::InvalidResponse);
        };

        if !status.is_success() {
            tracing::debug!(%status, "rejecting non-2xx response");
            return Err(FetchError::InvalidStatusCode(status));
        }

        let body = match raw.body {
            Some(body) if !body.is_empty() => body,
            _ => return Err(FetchError::NoData),
        };

        serde_json::from_slice(&body).map_err(FetchError::DecodingFailed)
    }
}
