//! Understudy Application - Matching engine and ports
//!
//! This crate defines the engine that answers requests from declared
//! expectations:
//! - Port traits (the transport seam and the fixture source)
//! - The shared expectation queue
//! - The scripted transport that matches requests and plays scripts
//! - The client assembled from an ordered handler chain

pub mod client;
pub mod error;
pub mod matcher;
pub mod ports;
pub mod queue;

pub use client::Client;
pub use error::{TransportError, TransportResult};
pub use matcher::ScriptedTransport;
pub use ports::{FixtureError, FixtureSource, Transport};
pub use queue::ExpectationQueue;
