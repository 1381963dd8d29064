use bytes::Bytes;
use thiserror::Error;

use crate::http::request::{Method, Request};

/// Header terminator.
pub const TERMINATOR: &[u8] = b"\r\n\r\n";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The terminator has not been seen yet.
    #[error("header terminator not found")]
    Incomplete,
    /// The request line lacks a method or a target.
    #[error("invalid request line: {0:?}")]
    InvalidRequest(String),
    /// The method token is outside the supported set.
    #[error("unsupported method: {0}")]
    UnsupportedMethod(String),
}

/// Parses a request from the accumulated connection buffer.
///
/// Everything after the terminator is handed over as the request body.
pub fn parse_http_request(buf: &[u8]) -> Result<Request, ParseError> {
    let headers_end = find_headers_end(buf).ok_or(ParseError::Incomplete)?;
    let head = String::from_utf8_lossy(&buf[..headers_end]).into_owned();
    let body = Bytes::copy_from_slice(&buf[headers_end + TERMINATOR.len()..]);

    let request_line = head.split("\r\n").next().unwrap_or_default();
    let mut parts = request_line.split(' ');

    let method_str = parts.next().unwrap_or_default();
    let method = Method::from_str(method_str)
        .ok_or_else(|| ParseError::UnsupportedMethod(method_str.to_string()))?;

    let target = parts
        .next()
        .filter(|target| target.starts_with('/'))
        .ok_or_else(|| ParseError::InvalidRequest(request_line.to_string()))?
        .to_string();

    Ok(Request {
        method,
        target,
        head,
        body,
    })
}

/// Returns the offset of the terminator, if present.
pub fn find_headers_end(buf: &[u8]) -> Option<usize> {
    buf.windows(TERMINATOR.len()).position(|w| w == TERMINATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_first_terminator() {
        assert_eq!(find_headers_end(b"GET / HTTP/1.0\r\n\r\n"), Some(14));
        assert_eq!(find_headers_end(b"a\r\n\r\nb\r\n\r\n"), Some(1));
        assert_eq!(find_headers_end(b"GET / HTTP/1.0\r\n"), None);
        assert_eq!(find_headers_end(b""), None);
    }

    #[test]
    fn parse_simple_get() {
        let req = b"GET / HTTP/1.0\r\nHost: example.com\r\n\r\n";

        let parsed = parse_http_request(req).unwrap();

        assert_eq!(parsed.method, Method::GET);
        assert_eq!(parsed.target, "/");
        assert!(parsed.body.is_empty());
    }
}
