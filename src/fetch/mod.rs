//! Fetch layer: validation chain, error taxonomy, and outcome delivery.
//!
//! This module provides:
//! - The typed fetch operation ([`FetchClient`])
//! - The error taxonomy and outcome type ([`FetchError`], [`Outcome`])
//! - Callback-style delivery onto a dispatcher ([`FetchService`])

mod client;
mod error;
mod service;

#[cfg(test)]
mod service_tests;

pub use client::FetchClient;
pub use error::{FetchError, Outcome};
pub use service::FetchService;
