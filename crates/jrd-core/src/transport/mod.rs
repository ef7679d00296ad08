//! Resilient HTTP transport consumed by the resolver, locator and executor.
//!
//! The pipeline depends only on the [`Transport`] trait; [`CurlTransport`]
//! is the libcurl-backed implementation carrying the timeout and retry policy.

mod easy;
mod status;

pub use easy::CurlTransport;

use std::path::Path;
use std::time::Duration;

use crate::config::JrdConfig;
use crate::retry::{RetryPolicy, TransportError};

/// The three request shapes the pipeline needs. Implementations are shared
/// across concurrent units and must hold no per-request mutable state.
///
/// All methods block; call them from `spawn_blocking` when used from async code.
pub trait Transport: Send + Sync {
    /// GET `url` without following redirects and return the final status code.
    /// A non-200 status is a normal outcome here, not an error.
    fn get_status(&self, url: &str) -> Result<u32, TransportError>;

    /// GET `url` and parse a 200 response body as JSON.
    fn get_json(&self, url: &str) -> Result<serde_json::Value, TransportError>;

    /// GET `url` and stream a 200 response body into `dest`, replacing any
    /// previous content. Returns the number of bytes written.
    fn get_to_file(&self, url: &str, dest: &Path) -> Result<u64, TransportError>;
}

/// Timeouts and retry policy applied to every request.
#[derive(Debug, Clone, Copy)]
pub struct HttpOptions {
    /// Overall per-request timeout.
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub retry: RetryPolicy,
}

impl Default for HttpOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(60),
            connect_timeout: Duration::from_secs(15),
            retry: RetryPolicy::default(),
        }
    }
}

impl HttpOptions {
    pub fn from_config(cfg: &JrdConfig) -> Self {
        Self {
            timeout: cfg.request_timeout(),
            connect_timeout: cfg.connect_timeout(),
            retry: cfg.retry_policy(),
        }
    }
}
