//! Error types for transport operations.

use thiserror::Error;

/// Error type for transport operations.
///
/// Describes what went wrong at the network level without dictating
/// recovery strategy. The fetch layer wraps these as request failures.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    ///
    /// This includes DNS resolution failures, connection refused,
    /// and errors while reading the response body.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Request timed out.
    ///
    /// The server did not respond within the transport's default
    /// timeout period.
    #[error("Request timed out")]
    Timeout,
}
