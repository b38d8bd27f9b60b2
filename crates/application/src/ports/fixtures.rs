//! Fixture source port

use std::future::Future;
use std::path::PathBuf;

use thiserror::Error;

/// Error returned when a fixture cannot be read.
///
/// The underlying I/O error is kept as the source, untranslated; a
/// missing file stays a `NotFound`.
#[derive(Debug, Error)]
#[error("failed to read fixture {}: {source}", path.display())]
pub struct FixtureError {
    /// Path the implementation tried to read
    pub path: PathBuf,
    /// The I/O error as reported
    #[source]
    pub source: std::io::Error,
}

/// Source of fixture file contents.
///
/// Fixtures are read whole and fresh on every call; implementations must
/// not cache between reads.
pub trait FixtureSource: Send + Sync {
    /// Reads the named fixture in full.
    ///
    /// # Errors
    ///
    /// Returns a [`FixtureError`] carrying whatever the underlying store
    /// reported.
    fn read(&self, name: &str) -> impl Future<Output = Result<Vec<u8>, FixtureError>> + Send;
}
