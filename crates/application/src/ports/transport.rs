//! Transport handler port

use async_trait::async_trait;
use understudy_domain::{MockResponse, RequestRecord};

use crate::error::TransportResult;

/// One handler in a client's transport chain.
///
/// The client walks its handlers in order and hands each request to the
/// first one that claims it. Handlers are trait objects so callers can
/// mix their own transports with the scripted one.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Returns whether this handler claims the given request.
    ///
    /// The default claims everything.
    fn accepts(&self, _request: &RequestRecord) -> bool {
        true
    }

    /// Answers the request.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`](crate::error::TransportError) when the
    /// request cannot be answered; every such error is fatal to the
    /// current test.
    async fn handle(&self, request: &RequestRecord) -> TransportResult<MockResponse>;
}
