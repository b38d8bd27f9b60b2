//! Understudy Infrastructure - Adapters and the test harness
//!
//! This crate provides concrete implementations of the ports defined
//! in the application layer, plus the per-test harness that assembles
//! them into a client.

pub mod fixtures;
pub mod testing;

pub use fixtures::FixtureDir;
pub use testing::Harness;
