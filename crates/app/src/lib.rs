//! Understudy - a scripted, in-process HTTP transport double for tests
//!
//! Declare, in order, the requests your code is expected to issue and
//! the responses it should receive. Requests run through a client that
//! never touches the network; the harness fails the test on any
//! unexpected, out-of-order, or mismatching request, and again at
//! teardown if a declared request never arrived.
//!
//! # Example
//!
//! ```
//! use understudy::{BodyExpectation, Harness, RequestRecord, ResponseScript};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let harness = Harness::new();
//! harness
//!     .expect_get("http://test.com/data", ResponseScript::text("<data/>"))
//!     .expect_put(
//!         "http://test.com/data",
//!         BodyExpectation::text("<data rev=\"2\"/>"),
//!         ResponseScript::text("stored"),
//!     );
//!
//! let client = harness.client();
//!
//! let fetched = client
//!     .execute(&RequestRecord::get("http://test.com/data"))
//!     .await?;
//! assert_eq!(fetched.body_as_string_lossy(), "<data/>");
//!
//! let stored = client
//!     .execute(&RequestRecord::put("http://test.com/data").with_body("<data rev=\"2\"/>"))
//!     .await?;
//! assert_eq!(stored.status.as_u16(), 200);
//!
//! harness.verify();
//! # Ok(())
//! # }
//! ```

pub use understudy_application::{
    Client, ExpectationQueue, FixtureError, FixtureSource, ScriptedTransport, Transport,
    TransportError, TransportResult,
};
pub use understudy_domain::{
    BodyExpectation, BodySource, CannedResponse, DomainError, DomainResult, Expectation, Header,
    Headers, HttpMethod, MockResponse, RequestRecord, ResponseScript, SimulatedError, StatusCode,
};
pub use understudy_infrastructure::{FixtureDir, Harness};
