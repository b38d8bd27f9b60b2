//! Scripted-transport harness

use std::path::PathBuf;
use std::sync::Arc;

use understudy_application::{Client, ExpectationQueue, ScriptedTransport, Transport};
use understudy_domain::{BodyExpectation, Expectation, ResponseScript};

use crate::fixtures::FixtureDir;

/// Per-test assembly of queue, fixtures, and transport.
///
/// Each harness owns a fresh expectation queue, so tests stay isolated
/// without any global state. Expectations are declared up front, in the
/// order the code under test must issue them; at the end of the test
/// every one must have been consumed, which [`verify`](Self::verify)
/// asserts and `Drop` re-checks.
#[derive(Debug)]
pub struct Harness {
    queue: ExpectationQueue,
    fixtures: FixtureDir,
}

impl Harness {
    /// Creates a harness resolving fixtures against the current directory.
    #[must_use]
    pub fn new() -> Self {
        Self::with_fixtures(".")
    }

    /// Creates a harness resolving fixtures against the given directory.
    #[must_use]
    pub fn with_fixtures(dir: impl Into<PathBuf>) -> Self {
        Self {
            queue: ExpectationQueue::new(),
            fixtures: FixtureDir::new(dir),
        }
    }

    /// Queues an expectation.
    pub fn expect(&self, expectation: Expectation) -> &Self {
        self.queue.push(expectation);
        self
    }

    /// Expects a GET request to `url`, answered by `script`.
    pub fn expect_get(&self, url: impl Into<String>, script: impl Into<ResponseScript>) -> &Self {
        self.expect(Expectation::get(url, script))
    }

    /// Expects a DELETE request to `url`, answered by `script`.
    pub fn expect_delete(
        &self,
        url: impl Into<String>,
        script: impl Into<ResponseScript>,
    ) -> &Self {
        self.expect(Expectation::delete(url, script))
    }

    /// Expects a PUT request to `url` carrying `expected`, answered by
    /// `script`.
    pub fn expect_put(
        &self,
        url: impl Into<String>,
        expected: BodyExpectation,
        script: impl Into<ResponseScript>,
    ) -> &Self {
        self.expect(Expectation::put(url, expected, script))
    }

    /// Expects a POST request to `url` carrying `expected`, answered by
    /// `script`.
    pub fn expect_post(
        &self,
        url: impl Into<String>,
        expected: BodyExpectation,
        script: impl Into<ResponseScript>,
    ) -> &Self {
        self.expect(Expectation::post(url, expected, script))
    }

    /// Returns the scripted transport as a handler for manual wiring.
    ///
    /// Every call builds a fresh handler over the same queue, so wiring
    /// is repeatable within one test.
    #[must_use]
    pub fn handler(&self) -> Arc<dyn Transport> {
        Arc::new(ScriptedTransport::new(
            self.queue.clone(),
            self.fixtures.clone(),
        ))
    }

    /// Builds a client whose only handler is the scripted transport.
    #[must_use]
    pub fn client(&self) -> Client {
        Client::from_handlers([self.handler()])
    }

    /// Builds a client from the caller's handlers, consulted in order,
    /// with the scripted transport appended last.
    #[must_use]
    pub fn client_with(&self, handlers: impl IntoIterator<Item = Arc<dyn Transport>>) -> Client {
        let mut chain: Vec<Arc<dyn Transport>> = handlers.into_iter().collect();
        chain.push(self.handler());
        Client::from_handlers(chain)
    }

    /// Resolves a fixture name against the harness's fixtures root.
    #[must_use]
    pub fn fixture_path(&self, name: &str) -> PathBuf {
        self.fixtures.path(name)
    }

    /// Lists expectations not yet consumed, head first.
    #[must_use]
    pub fn pending(&self) -> Vec<String> {
        self.queue.pending()
    }

    /// Asserts that every declared expectation was consumed.
    ///
    /// # Panics
    ///
    /// Panics, failing the test, if expectations remain in the queue.
    pub fn verify(&self) {
        let pending = self.queue.pending();
        assert!(
            pending.is_empty(),
            "unconsumed expectations at teardown: {}",
            pending.join(", ")
        );
    }
}

impl Default for Harness {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Harness {
    fn drop(&mut self) {
        // Skipped when already panicking so the original failure stays
        // the one reported.
        if !std::thread::panicking() {
            self.verify();
        }
    }
}
