//! Understudy Domain - Core types for the scripted HTTP test double
//!
//! This crate defines the data model shared by the matching engine and
//! the test harness: requests as the transport sees them, expectations
//! as tests declare them, and the responses the engine fabricates.
//! All types here are pure Rust with no I/O dependencies.

pub mod error;
pub mod expectation;
pub mod request;
pub mod response;
pub mod script;

pub use error::{DomainError, DomainResult};
pub use expectation::{BodyExpectation, Expectation};
pub use request::{Header, Headers, HttpMethod, RequestRecord};
pub use response::{MockResponse, StatusCode};
pub use script::{BodySource, CannedResponse, ResponseScript, SimulatedError};
