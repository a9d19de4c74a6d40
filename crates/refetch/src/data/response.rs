use std::fmt;
use std::pin::Pin;

use bytes::Bytes;
use futures_util::Stream;

use crate::error::FetchError;

/// Boxed byte stream used for response bodies.
pub type BodyStream = Pin<Box<dyn Stream<Item = Result<Bytes, FetchError>> + Send + 'static>>;

/// Ordered multi-map of response headers.
///
/// Preserves insertion order and allows repeated names; lookup is
/// case-insensitive and returns the first match.
#[derive(Debug, Clone, Default)]
pub struct Headers(Vec<(String, String)>);

impl Headers {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Append a header, keeping any existing entries with the same name.
    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.push((name.into(), value.into()));
    }

    /// First value for `name`, compared case-insensitively.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Iterate over all entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A transport response: status line metadata, headers and an optional
/// streaming byte body.
///
/// Immutable once produced by a transport; progress instrumentation
/// re-wraps it (same metadata, transformed body) rather than mutating it.
pub struct Response {
    /// HTTP status code.
    pub status: u16,

    /// Status text as reported by the transport.
    pub status_text: String,

    /// Response headers in arrival order.
    pub headers: Headers,

    /// Streaming body, if the transport produced one.
    ///
    /// Reading the body consumes it; a re-wrapped response owns the only
    /// remaining reader for the original bytes.
    pub body: Option<BodyStream>,
}

impl Response {
    /// Create a body-less response with empty headers.
    pub fn new(status: u16, status_text: impl Into<String>) -> Self {
        Self {
            status,
            status_text: status_text.into(),
            headers: Headers::new(),
            body: None,
        }
    }

    /// Append a header.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.append(name, value);
        self
    }

    /// Attach a streaming body.
    #[must_use]
    pub fn body(mut self, body: BodyStream) -> Self {
        self.body = Some(body);
        self
    }

    /// Declared `Content-Length`, if present and parseable.
    #[must_use]
    pub fn content_length(&self) -> Option<u64> {
        self.headers
            .get("Content-Length")
            .and_then(|v| v.trim().parse::<u64>().ok())
    }
}

impl fmt::Debug for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Response")
            .field("status", &self.status)
            .field("status_text", &self.status_text)
            .field("headers", &self.headers)
            .field("body", &self.body.as_ref().map(|_| "{ stream }"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_lookup_is_case_insensitive() {
        let response = Response::new(200, "OK").header("Content-Length", "42");
        assert_eq!(response.headers.get("content-length"), Some("42"));
        assert_eq!(response.headers.get("CONTENT-LENGTH"), Some("42"));
        assert_eq!(response.headers.get("content-type"), None);
    }

    #[test]
    fn repeated_headers_keep_order_and_first_wins() {
        let response = Response::new(200, "OK")
            .header("Set-Cookie", "a=1")
            .header("Set-Cookie", "b=2");
        assert_eq!(response.headers.get("set-cookie"), Some("a=1"));
        let all: Vec<_> = response.headers.iter().collect();
        assert_eq!(all, vec![("Set-Cookie", "a=1"), ("Set-Cookie", "b=2")]);
    }

    #[test]
    fn content_length_parses_or_is_absent() {
        assert_eq!(
            Response::new(200, "OK")
                .header("Content-Length", "100")
                .content_length(),
            Some(100)
        );
        assert_eq!(
            Response::new(200, "OK")
                .header("Content-Length", "junk")
                .content_length(),
            None
        );
        assert_eq!(Response::new(200, "OK").content_length(), None);
    }
}
