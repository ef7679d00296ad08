//! Status-line parsing for header callbacks.

/// Parses the status code from a raw header line such as `HTTP/1.1 200 OK` or `HTTP/2 404`.
/// Returns `None` for ordinary header lines.
pub(crate) fn parse_status_line(raw: &[u8]) -> Option<u32> {
    let line = std::str::from_utf8(raw).ok()?.trim_end();
    if !line.starts_with("HTTP/") {
        return None;
    }
    line.split_whitespace().nth(1)?.parse().ok()
}
