//! Classify transport errors into retry policy error kinds.

use super::error::TransportError;
use super::policy::ErrorKind;

/// Classify a curl error for retry decisions and diagnostics.
pub fn classify_curl_error(e: &curl::Error) -> ErrorKind {
    if e.is_operation_timedout() {
        return ErrorKind::Timeout;
    }
    if e.is_couldnt_connect()
        || e.is_couldnt_resolve_host()
        || e.is_couldnt_resolve_proxy()
        || e.is_read_error()
        || e.is_recv_error()
        || e.is_send_error()
        || e.is_got_nothing()
    {
        return ErrorKind::Connection;
    }
    ErrorKind::Other
}

/// Classify a transport error into an ErrorKind.
pub fn classify(e: &TransportError) -> ErrorKind {
    match e {
        TransportError::Curl(ce) => classify_curl_error(ce),
        TransportError::Status(code) => ErrorKind::NotOk(*code),
        TransportError::Json(_) | TransportError::Storage(_) | TransportError::Join(_) => {
            ErrorKind::Other
        }
    }
}
