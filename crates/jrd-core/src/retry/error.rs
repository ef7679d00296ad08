//! Transport error type for retry classification.

use thiserror::Error;

/// Error returned by a single request (curl failure, non-OK status, bad body, or storage failure).
/// Used so we can classify and decide retries before surfacing a unit failure.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Curl reported an error (timeout, connection, etc.).
    #[error("{0}")]
    Curl(#[from] curl::Error),
    /// The exchange completed but the status was not 200.
    #[error("HTTP {0}")]
    Status(u32),
    /// Response body was not the expected JSON.
    #[error("invalid JSON body: {0}")]
    Json(#[from] serde_json::Error),
    /// Disk/storage write failed (e.g. disk full, permission denied). Not retried.
    #[error("storage: {0}")]
    Storage(#[from] std::io::Error),
    /// The blocking task running the request panicked or was cancelled.
    #[error("task join: {0}")]
    Join(String),
}
