//! json-fetch: typed HTTP GET helper
//!
//! A library for fetching a URL with a single GET request, validating the
//! response, and decoding the JSON body into a caller-specified type.

pub mod dispatch;
pub mod fetch;
pub mod transport;
