//! Declared expectations
//!
//! An expectation names the one request a test allows next and the
//! script to run when it arrives. Write requests (PUT, POST) must also
//! declare the body they are expected to carry; read requests (GET,
//! DELETE) cannot. The constructors enforce both rules, so a queued
//! expectation is always well-formed.

use std::fmt;

use crate::request::HttpMethod;
use crate::script::{BodySource, ResponseScript};

/// The body a write request is expected to carry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BodyExpectation {
    /// Expected body content
    pub body: BodySource,
    /// Expected Content-Type header, compared byte-for-byte when set
    pub content_type: Option<String>,
}

impl BodyExpectation {
    /// Expects the given literal text as the request body.
    #[must_use]
    pub fn text(expected: impl Into<String>) -> Self {
        Self {
            body: BodySource::Text(expected.into()),
            content_type: None,
        }
    }

    /// Expects the request body to equal the contents of a fixture file.
    #[must_use]
    pub fn fixture(name: impl Into<String>) -> Self {
        Self {
            body: BodySource::Fixture(name.into()),
            content_type: None,
        }
    }

    /// Additionally requires the request's Content-Type header to equal
    /// the given value.
    #[must_use]
    pub fn with_content_type(mut self, value: impl Into<String>) -> Self {
        self.content_type = Some(value.into());
        self
    }
}

/// One declared request: the method and URL the test allows next, the
/// body validation to apply, and the script to run on a match.
#[derive(Debug)]
pub struct Expectation {
    method: HttpMethod,
    url: String,
    expected: Option<BodyExpectation>,
    script: ResponseScript,
}

impl Expectation {
    /// Expects a GET request to the given URL.
    #[must_use]
    pub fn get(url: impl Into<String>, script: impl Into<ResponseScript>) -> Self {
        Self {
            method: HttpMethod::Get,
            url: url.into(),
            expected: None,
            script: script.into(),
        }
    }

    /// Expects a DELETE request to the given URL.
    #[must_use]
    pub fn delete(url: impl Into<String>, script: impl Into<ResponseScript>) -> Self {
        Self {
            method: HttpMethod::Delete,
            url: url.into(),
            expected: None,
            script: script.into(),
        }
    }

    /// Expects a PUT request to the given URL carrying the given body.
    #[must_use]
    pub fn put(
        url: impl Into<String>,
        expected: BodyExpectation,
        script: impl Into<ResponseScript>,
    ) -> Self {
        Self {
            method: HttpMethod::Put,
            url: url.into(),
            expected: Some(expected),
            script: script.into(),
        }
    }

    /// Expects a POST request to the given URL carrying the given body.
    #[must_use]
    pub fn post(
        url: impl Into<String>,
        expected: BodyExpectation,
        script: impl Into<ResponseScript>,
    ) -> Self {
        Self {
            method: HttpMethod::Post,
            url: url.into(),
            expected: Some(expected),
            script: script.into(),
        }
    }

    /// The expected HTTP method.
    #[must_use]
    pub const fn method(&self) -> HttpMethod {
        self.method
    }

    /// The expected URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The declared body expectation, present exactly when the method is
    /// write-class.
    #[must_use]
    pub const fn expected_body(&self) -> Option<&BodyExpectation> {
        self.expected.as_ref()
    }

    /// The script to run once the request has matched.
    #[must_use]
    pub const fn script(&self) -> &ResponseScript {
        &self.script
    }

    /// Consumes the expectation, returning its script.
    #[must_use]
    pub fn into_script(self) -> ResponseScript {
        self.script
    }
}

impl fmt::Display for Expectation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.url)
    }
}
