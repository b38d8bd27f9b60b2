//! Client over an ordered transport chain

use std::fmt;
use std::sync::Arc;

use understudy_domain::{MockResponse, RequestRecord};

use crate::error::{TransportError, TransportResult};
use crate::ports::Transport;

/// An HTTP client assembled from an ordered list of transport handlers.
///
/// Each request goes to the first handler that claims it. Tests usually
/// obtain one from the harness with the scripted transport appended
/// last, after any handlers of their own.
#[derive(Clone)]
pub struct Client {
    handlers: Vec<Arc<dyn Transport>>,
}

impl Client {
    /// Builds a client from handlers, consulted in the given order.
    pub fn from_handlers(handlers: impl IntoIterator<Item = Arc<dyn Transport>>) -> Self {
        Self {
            handlers: handlers.into_iter().collect(),
        }
    }

    /// Executes a request through the first handler that claims it.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::NoTransport`] when no handler claims the
    /// request, or whatever error the claiming handler raised.
    pub async fn execute(&self, request: &RequestRecord) -> TransportResult<MockResponse> {
        for handler in &self.handlers {
            if handler.accepts(request) {
                return handler.handle(request).await;
            }
        }

        tracing::debug!(method = %request.method, url = %request.url, "no handler claimed request");
        Err(TransportError::NoTransport {
            method: request.method,
            url: request.url.clone(),
        })
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}
