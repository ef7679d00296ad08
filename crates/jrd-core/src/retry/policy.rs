use std::fmt;
use std::time::Duration;

/// High-level classification of an error for retry purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The exchange completed with a status other than 200.
    NotOk(u32),
    /// Operation timed out (connect/overall).
    Timeout,
    /// Network-level failure (connection reset, DNS, etc.).
    Connection,
    /// Any other error.
    Other,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::NotOk(code) => write!(f, "HTTP {}", code),
            ErrorKind::Timeout => f.write_str("timed out"),
            ErrorKind::Connection => f.write_str("connection failed"),
            ErrorKind::Other => f.write_str("failed"),
        }
    }
}

/// Decision returned by the retry policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryDecision {
    /// Do not retry this error.
    NoRetry,
    /// Retry after the given delay.
    RetryAfter(Duration),
}

/// Linear backoff policy: retry `k` (1-based) waits `k * backoff_step`.
///
/// Only completed exchanges with a non-OK status are retried; transport
/// failures surface immediately to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Maximum number of retries after the first attempt.
    pub max_retries: u32,
    /// Delay unit multiplied by the retry number.
    pub backoff_step: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 5,
            backoff_step: Duration::from_secs(5),
        }
    }
}

impl RetryPolicy {
    /// Policy that never retries.
    pub fn none() -> Self {
        Self {
            max_retries: 0,
            backoff_step: Duration::ZERO,
        }
    }

    /// Delay before retry number `retry` (1-based).
    pub fn delay_for(&self, retry: u32) -> Duration {
        self.backoff_step.saturating_mul(retry)
    }

    /// Decide what to do after `attempt` (1-based, 1 = first attempt) failed with `kind`.
    pub fn decide(&self, attempt: u32, kind: ErrorKind) -> RetryDecision {
        if attempt > self.max_retries {
            return RetryDecision::NoRetry;
        }

        match kind {
            ErrorKind::NotOk(_) => RetryDecision::RetryAfter(self.delay_for(attempt)),
            ErrorKind::Timeout | ErrorKind::Connection | ErrorKind::Other => {
                RetryDecision::NoRetry
            }
        }
    }
}
