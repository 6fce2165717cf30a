//! Transport layer for issuing HTTP GET requests.
//!
//! This module provides types and traits for:
//! - Raw transport results ([`RawResponse`])
//! - Abstracting transports ([`Transport`])
//! - Transport error reporting ([`TransportError`])
//! - Production transport implementation ([`ReqwestTransport`])

mod client;
mod error;
mod http;


pub use client::ReqwestTransport;
pub use error::TransportError;
pub use http::{RawResponse, Transport};
