//! Port definitions (interfaces)
//!
//! Ports define the boundaries of the matching engine: the transport
//! seam the code under test calls through, and the fixture store that
//! scripted bodies are read from.

mod fixtures;
mod transport;

pub use fixtures::{FixtureError, FixtureSource};
pub use transport::Transport;
