//! HTTP requester
//!
//! The single outbound seam of the crate. Exchange clients share one
//! requester, so implementations must be safe for concurrent use.

mod client;

pub use client::{HttpConfig, ReqwestRequester};

use crate::exchange::Result;
use async_trait::async_trait;

/// Query parameters as ordered key/value pairs
pub type Query = [(&'static str, String)];

/// Trait for issuing GET requests against public exchange endpoints
#[async_trait]
pub trait HttpRequester: Send + Sync {
    /// GET `url` with `query` appended and return the full response body.
    ///
    /// The body is returned whatever the HTTP status; exchanges often signal
    /// failures inside a 200 response, so status interpretation is left to
    /// the response decoder.
    async fn get(&self, url: &str, query: &Query) -> Result<Vec<u8>>;
}
