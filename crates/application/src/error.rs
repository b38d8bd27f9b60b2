//! Transport error types
//!
//! Every error here is fatal to the test that triggered it; the engine
//! never retries or recovers.

use thiserror::Error;
use understudy_domain::{HttpMethod, SimulatedError};

use crate::ports::FixtureError;

/// Errors raised while matching a request or playing its script.
#[derive(Debug, Error)]
pub enum TransportError {
    /// A request arrived with no expectations left in the queue.
    #[error("unexpected {method} {url}: no expectations remain")]
    UnexpectedRequest {
        /// Method of the offending request
        method: HttpMethod,
        /// URL of the offending request
        url: String,
    },

    /// The request does not match the head expectation. The mismatched
    /// expectation has been consumed.
    #[error("out of order: got {actual_method} {actual_url}, expected {expected_method} {expected_url}")]
    OutOfOrder {
        /// Method actually requested
        actual_method: HttpMethod,
        /// URL actually requested
        actual_url: String,
        /// Method the head expectation declared
        expected_method: HttpMethod,
        /// URL the head expectation declared
        expected_url: String,
    },

    /// A write request carried a body other than the declared one. Both
    /// bodies are rendered escaped so control characters stay visible.
    #[error("request body mismatch at {url}: got {actual:?}, expected {expected:?}")]
    BodyMismatch {
        /// URL of the offending request
        url: String,
        /// Body actually sent; empty if the request had none
        actual: String,
        /// Body the expectation declared
        expected: String,
    },

    /// The request's Content-Type header differs from the declared one.
    #[error("content type mismatch at {url}: got {actual:?}, expected {expected:?}")]
    ContentTypeMismatch {
        /// URL of the offending request
        url: String,
        /// Content-Type actually sent, if any
        actual: Option<String>,
        /// Content-Type the expectation declared
        expected: String,
    },

    /// A fixture file could not be read.
    #[error(transparent)]
    Fixture(#[from] FixtureError),

    /// The matched expectation scripted a failure; the boxed error is
    /// the very value the test injected.
    #[error("scripted transport failure: {0}")]
    Scripted(SimulatedError),

    /// No handler in the client's chain claimed the request.
    #[error("no transport accepts {method} {url}")]
    NoTransport {
        /// Method of the unclaimed request
        method: HttpMethod,
        /// URL of the unclaimed request
        url: String,
    },
}

/// Result type alias for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_body_mismatch_renders_escaped() {
        let err = TransportError::BodyMismatch {
            url: "http://test.com/data".to_string(),
            actual: "line\none".to_string(),
            expected: "line two".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "request body mismatch at http://test.com/data: got \"line\\none\", expected \"line two\""
        );
    }

    #[test]
    fn test_out_of_order_names_both_pairs() {
        let err = TransportError::OutOfOrder {
            actual_method: HttpMethod::Get,
            actual_url: "http://test.com/b".to_string(),
            expected_method: HttpMethod::Put,
            expected_url: "http://test.com/a".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "out of order: got GET http://test.com/b, expected PUT http://test.com/a"
        );
    }

    #[test]
    fn test_missing_content_type_shows_none() {
        let err = TransportError::ContentTypeMismatch {
            url: "http://test.com/data".to_string(),
            actual: None,
            expected: "text/xml".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "content type mismatch at http://test.com/data: got None, expected \"text/xml\""
        );
    }
}
