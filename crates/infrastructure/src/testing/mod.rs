//! Test harness assembly
//!
//! This module provides the harness that wires a fresh expectation
//! queue, a fixture directory, and the scripted transport into a client.

mod harness;

pub use harness::Harness;
