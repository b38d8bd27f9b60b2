//! Response scripts
//!
//! Each expectation carries a script telling the transport what to do
//! once the request has been matched: play back a canned response or
//! fail with an injected error.

use crate::response::StatusCode;

/// Where a scripted body's bytes come from.
///
/// Declaring a body means choosing exactly one variant; inline text and
/// fixture files cannot be combined or both omitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodySource {
    /// Literal text, used as-is.
    Text(String),
    /// Name of a file under the fixtures root, read whole when needed.
    Fixture(String),
}

/// A canned response: a body source plus a status code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CannedResponse {
    /// Body to play back
    pub body: BodySource,
    /// Status code, 200 unless overridden
    pub status: StatusCode,
}

impl CannedResponse {
    /// Creates a canned response with an inline text body.
    #[must_use]
    pub fn text(body: impl Into<String>) -> Self {
        Self {
            body: BodySource::Text(body.into()),
            status: StatusCode::OK,
        }
    }

    /// Creates a canned response whose body is read from a fixture file.
    #[must_use]
    pub fn fixture(name: impl Into<String>) -> Self {
        Self {
            body: BodySource::Fixture(name.into()),
            status: StatusCode::OK,
        }
    }

    /// Overrides the status code.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<StatusCode>) -> Self {
        self.status = status.into();
        self
    }
}

/// An arbitrary failure a test injects in place of a response.
///
/// The boxed error passes through the transport untouched, so tests can
/// downcast it back to the concrete type they supplied.
pub type SimulatedError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// What the transport does after a request matches its expectation.
#[derive(Debug)]
pub enum ResponseScript {
    /// Fabricate the canned response.
    Respond(CannedResponse),
    /// Fail before any response exists, surfacing the injected error.
    Fail(SimulatedError),
}

impl ResponseScript {
    /// Script a plain-text response.
    #[must_use]
    pub fn text(body: impl Into<String>) -> Self {
        Self::Respond(CannedResponse::text(body))
    }

    /// Script a response read from a fixture file.
    #[must_use]
    pub fn fixture(name: impl Into<String>) -> Self {
        Self::Respond(CannedResponse::fixture(name))
    }

    /// Script a transport failure.
    #[must_use]
    pub fn fail(error: impl Into<SimulatedError>) -> Self {
        Self::Fail(error.into())
    }
}

impl From<CannedResponse> for ResponseScript {
    fn from(canned: CannedResponse) -> Self {
        Self::Respond(canned)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_text_defaults_to_200() {
        let canned = CannedResponse::text("hello");
        assert_eq!(canned.status, StatusCode::OK);
        assert_eq!(canned.body, BodySource::Text("hello".to_string()));
    }

    #[test]
    fn test_with_status_override() {
        let canned = CannedResponse::fixture("error.html").with_status(503);
        assert_eq!(canned.status, StatusCode::new(503));
    }

    #[test]
    fn test_fail_keeps_the_injected_error() {
        let script = ResponseScript::fail(std::io::Error::other("wire cut"));
        match script {
            ResponseScript::Fail(err) => {
                assert!(err.downcast_ref::<std::io::Error>().is_some());
            }
            ResponseScript::Respond(_) => panic!("expected a failure script"),
        }
    }

    #[test]
    fn test_canned_response_converts_to_script() {
        let script: ResponseScript = CannedResponse::text("ok").with_status(201).into();
        match script {
            ResponseScript::Respond(canned) => assert_eq!(canned.status.as_u16(), 201),
            ResponseScript::Fail(_) => panic!("expected a respond script"),
        }
    }
}
