//! Internal helpers for mapping HTTP/reqwest failures to [`Fault`]s.

use shapecall_types::Fault;

/// Map a non-success HTTP status to a transport fault.
///
/// Multi-library servers answer 404 for a path that serves no library.
pub(crate) fn map_http_status(status: reqwest::StatusCode, body: &str) -> Fault {
    let body = body.trim();
    let detail = match status.as_u16() {
        404 => "no remote library at this path",
        _ if body.is_empty() => "empty response body",
        _ => body,
    };
    Fault::transport(format!("HTTP {status}: {detail}"))
}

/// Map a [`reqwest::Error`] to a transport fault.
pub(crate) fn map_reqwest_error(err: reqwest::Error) -> Fault {
    if err.is_timeout() {
        Fault::transport(format!("request timed out: {err}"))
    } else if err.is_connect() {
        Fault::transport(format!("connection failed: {err}"))
    } else {
        Fault::transport(err.to_string())
    }
}
