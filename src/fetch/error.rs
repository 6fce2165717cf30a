//! Error types for fetch operations.

use crate::transport::TransportError;
use thiserror::Error;

/// The single outcome of a fetch: the decoded value or a [`FetchError`].
///
/// Exactly one outcome is produced per fetch call.
pub type Outcome<T> = Result<T, FetchError>;

/// Error type for fetch operations.
///
/// A flat enumeration naming which step of the validation chain failed.
/// Every failure is terminal for that call; recovery and presentation are
/// the caller's concern. Underlying causes are preserved as sources.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The URL string failed to parse. No request was issued.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[source] url::ParseError),

    /// The transport-level exchange failed (DNS, connection, timeout).
    #[error("Request failed: {0}")]
    RequestFailed(#[source] TransportError),

    /// The exchange completed but produced no HTTP status metadata.
    #[error("Response could not be interpreted as HTTP")]
    InvalidResponse,

    /// The HTTP status code was outside the 2xx range.
    #[error("Unexpected HTTP status code: {0}")]
    InvalidStatusCode(http::StatusCode),

    /// The response carried no body bytes.
    #[error("Response contained no data")]
    NoData,

    /// The response body was not valid JSON for the target type.
    #[error("Failed to decode response body: {0}")]
    DecodingFailed(#[source] serde_json::Error),
}

impl FetchError {
    /// Returns the offending status code for [`FetchError::InvalidStatusCode`].
    #[must_use]
    pub const fn status_code(&self) -> Option<http::StatusCode> {
        match self {
            Self::InvalidStatusCode(status) => Some(*status),
            _ => None,
        }
    }
}
