//! # Provider
//!
//! Provider defines external data interfaces for the client crates.

use anyhow::Result;
use bytes::Bytes;
use http::{Request, Response};

/// The `HttpRequest` trait defines the behavior for fetching data from the
/// backend.
pub trait HttpRequest: Send + Sync {
    /// Make outbound HTTP request.
    ///
    /// An `Err` means no response was received.
    fn fetch(
        &self, request: Request<Bytes>,
    ) -> impl Future<Output = Result<Response<Bytes>>> + Send;
}

/// The `Config` trait is used by implementers to provide configuration from
/// the host application to dependent crates.
pub trait Config: Send + Sync {
    /// Request configuration setting.
    fn get(&self, key: &str) -> impl Future<Output = Result<String>> + Send;
}
