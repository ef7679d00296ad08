//! Retry and backoff policy.
//!
//! This module encapsulates error classification (non-OK responses, timeouts,
//! connection failures) and linear backoff decisions so that every request
//! made by the transport shares one policy.

mod classify;
mod error;
mod policy;
mod run;

pub use classify::{classify, classify_curl_error};
pub use error::TransportError;
pub use policy::{ErrorKind, RetryDecision, RetryPolicy};
pub use run::run_with_retry;
