//! Filesystem fixture source

use std::path::PathBuf;

use tokio::fs;
use understudy_application::ports::{FixtureError, FixtureSource};

/// Fixture source reading files under a root directory via `tokio::fs`.
///
/// Every read opens the file fresh; nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct FixtureDir {
    root: PathBuf,
}

impl FixtureDir {
    /// Creates a source rooted at the given directory.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the path the given fixture name resolves to.
    #[must_use]
    pub fn path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}

impl FixtureSource for FixtureDir {
    async fn read(&self, name: &str) -> Result<Vec<u8>, FixtureError> {
        let path = self.path(name);
        tracing::trace!(path = %path.display(), "reading fixture");
        fs::read(&path)
            .await
            .map_err(|source| FixtureError { path, source })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_reads_file_contents() {
        let dir = tempdir().expect("Failed to create temp directory");
        std::fs::write(dir.path().join("body.xml"), b"<result/>").unwrap();

        let fixtures = FixtureDir::new(dir.path());
        let bytes = fixtures.read("body.xml").await.unwrap();

        assert_eq!(bytes, b"<result/>");
    }

    #[tokio::test]
    async fn test_rereads_fresh_on_every_call() {
        let dir = tempdir().expect("Failed to create temp directory");
        let file = dir.path().join("body.txt");
        std::fs::write(&file, b"first").unwrap();

        let fixtures = FixtureDir::new(dir.path());
        assert_eq!(fixtures.read("body.txt").await.unwrap(), b"first");

        std::fs::write(&file, b"second").unwrap();
        assert_eq!(fixtures.read("body.txt").await.unwrap(), b"second");
    }

    #[tokio::test]
    async fn test_missing_file_keeps_io_error() {
        let dir = tempdir().expect("Failed to create temp directory");
        let fixtures = FixtureDir::new(dir.path());

        let err = fixtures.read("absent.txt").await.unwrap_err();

        assert_eq!(err.source.kind(), std::io::ErrorKind::NotFound);
        assert_eq!(err.path, dir.path().join("absent.txt"));
    }

    #[test]
    fn test_path_joins_root_and_name() {
        let fixtures = FixtureDir::new("/fixtures");
        assert_eq!(fixtures.path("a.xml"), PathBuf::from("/fixtures/a.xml"));
    }
}
