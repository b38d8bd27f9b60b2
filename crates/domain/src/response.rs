//! Synthesized response types
//!
//! Responses here are fabricated from scripts, never received from a
//! network. The status line carries no reason phrase and the header
//! collection is always empty.

use std::io::{Cursor, Read};

use crate::request::Headers;

/// HTTP status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StatusCode(pub u16);

impl StatusCode {
    /// 200 OK, the status used when a script does not name one.
    pub const OK: Self = Self(200);

    /// Creates a new `StatusCode`.
    #[must_use]
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    /// Returns the numeric status code.
    #[must_use]
    pub const fn as_u16(self) -> u16 {
        self.0
    }

    /// Returns true if this is a 2xx success status.
    #[must_use]
    pub const fn is_success(self) -> bool {
        self.0 >= 200 && self.0 < 300
    }
}

impl Default for StatusCode {
    fn default() -> Self {
        Self::OK
    }
}

impl std::fmt::Display for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u16> for StatusCode {
    fn from(code: u16) -> Self {
        Self(code)
    }
}

/// A response fabricated by the scripted transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockResponse {
    /// The URL of the request this response answers
    pub url: String,
    /// Scripted status code
    pub status: StatusCode,
    /// Status message; always empty for fabricated responses
    pub message: String,
    /// Response headers; always empty for fabricated responses
    pub headers: Headers,
    /// Response body bytes
    pub body: Vec<u8>,
}

impl MockResponse {
    /// Creates a response for the given request URL.
    #[must_use]
    pub fn new(url: impl Into<String>, status: StatusCode, body: Vec<u8>) -> Self {
        Self {
            url: url.into(),
            status,
            message: String::new(),
            headers: Headers::new(),
            body,
        }
    }

    /// Returns a reader over the body bytes.
    #[must_use]
    pub fn reader(&self) -> impl Read + '_ {
        Cursor::new(self.body.as_slice())
    }

    /// Returns the body as a lossy UTF-8 string.
    ///
    /// Invalid UTF-8 sequences are replaced with the replacement character.
    #[must_use]
    pub fn body_as_string_lossy(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_status_code_default_is_ok() {
        assert_eq!(StatusCode::default(), StatusCode::OK);
        assert_eq!(StatusCode::OK.as_u16(), 200);
    }

    #[test]
    fn test_status_code_success_range() {
        assert!(StatusCode::new(200).is_success());
        assert!(StatusCode::new(204).is_success());
        assert!(!StatusCode::new(199).is_success());
        assert!(!StatusCode::new(404).is_success());
    }

    #[test]
    fn test_response_carries_no_message_or_headers() {
        let response = MockResponse::new("http://test.com/a", StatusCode::OK, b"body".to_vec());
        assert_eq!(response.url, "http://test.com/a");
        assert_eq!(response.message, "");
        assert!(response.headers.is_empty());
    }

    #[test]
    fn test_reader_yields_body_bytes() {
        let response = MockResponse::new("http://test.com/a", StatusCode::OK, b"hello".to_vec());

        let mut buf = String::new();
        response.reader().read_to_string(&mut buf).unwrap();
        assert_eq!(buf, "hello");
    }

    #[test]
    fn test_body_as_string_lossy() {
        let response =
            MockResponse::new("http://test.com/a", StatusCode::new(500), vec![0xff, 0x61]);
        assert_eq!(response.body_as_string_lossy(), "\u{fffd}a");
    }
}
