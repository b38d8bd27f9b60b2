//! Request matching and response synthesis
//!
//! `ScriptedTransport` is the engine: for every request it claims, it
//! pops the head expectation, validates the request against it, and
//! plays the script, either fabricating a response or surfacing an
//! injected failure. Requests are handled strictly one at a time, in
//! order.

use async_trait::async_trait;
use understudy_domain::{
    BodyExpectation, BodySource, MockResponse, RequestRecord, ResponseScript,
};
use url::Url;

use crate::error::{TransportError, TransportResult};
use crate::ports::{FixtureSource, Transport};
use crate::queue::ExpectationQueue;

/// Transport that answers requests from a queue of expectations.
#[derive(Debug, Clone)]
pub struct ScriptedTransport<F> {
    queue: ExpectationQueue,
    fixtures: F,
}

impl<F: FixtureSource> ScriptedTransport<F> {
    /// Creates a transport answering from `queue`, resolving fixture
    /// bodies through `fixtures`.
    pub const fn new(queue: ExpectationQueue, fixtures: F) -> Self {
        Self { queue, fixtures }
    }

    /// Resolves a body source to its bytes.
    async fn resolve(&self, source: &BodySource) -> TransportResult<Vec<u8>> {
        match source {
            BodySource::Text(text) => Ok(text.clone().into_bytes()),
            BodySource::Fixture(name) => Ok(self.fixtures.read(name).await?),
        }
    }

    /// Validates a write request's body against its declaration.
    ///
    /// The Content-Type check runs first, then the exact body
    /// comparison; a request without a body compares as empty.
    async fn check_body(
        &self,
        request: &RequestRecord,
        expected: &BodyExpectation,
    ) -> TransportResult<()> {
        if let Some(expected_type) = expected.content_type.as_deref() {
            if request.content_type() != Some(expected_type) {
                return Err(TransportError::ContentTypeMismatch {
                    url: request.url.clone(),
                    actual: request.content_type().map(str::to_string),
                    expected: expected_type.to_string(),
                });
            }
        }

        let expected_body = match &expected.body {
            BodySource::Text(text) => text.clone(),
            BodySource::Fixture(name) => {
                String::from_utf8_lossy(&self.fixtures.read(name).await?).into_owned()
            }
        };

        let actual = request.body.as_deref().unwrap_or_default();
        if actual != expected_body {
            return Err(TransportError::BodyMismatch {
                url: request.url.clone(),
                actual: actual.to_string(),
                expected: expected_body,
            });
        }

        Ok(())
    }
}

#[async_trait]
impl<F: FixtureSource> Transport for ScriptedTransport<F> {
    fn accepts(&self, request: &RequestRecord) -> bool {
        Url::parse(&request.url).is_ok_and(|url| matches!(url.scheme(), "http" | "https"))
    }

    async fn handle(&self, request: &RequestRecord) -> TransportResult<MockResponse> {
        let Some(expectation) = self.queue.pop_next() else {
            return Err(TransportError::UnexpectedRequest {
                method: request.method,
                url: request.url.clone(),
            });
        };

        // The head entry is consumed even when it does not match.
        if request.method != expectation.method() || request.url != expectation.url() {
            return Err(TransportError::OutOfOrder {
                actual_method: request.method,
                actual_url: request.url.clone(),
                expected_method: expectation.method(),
                expected_url: expectation.url().to_string(),
            });
        }

        if let Some(expected) = expectation.expected_body() {
            self.check_body(request, expected).await?;
        }

        tracing::debug!(method = %request.method, url = %request.url, "request matched expectation");

        // An injected failure fires before any response is built.
        match expectation.into_script() {
            ResponseScript::Fail(error) => Err(TransportError::Scripted(error)),
            ResponseScript::Respond(canned) => {
                let body = self.resolve(&canned.body).await?;
                Ok(MockResponse::new(request.url.clone(), canned.status, body))
            }
        }
    }
}
