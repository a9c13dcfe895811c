use std::error::Error;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Error returned when a directory cannot be listed.
///
/// Raised when the path handed to the directory-listing primitive does not
/// exist, is not a directory, or is inaccessible due to permissions. Because
/// traversal is lazy, the error reaches the consumer on the pull that scans
/// the offending directory rather than when the walker is built; paths
/// yielded before that pull remain valid results.
#[derive(Debug)]
pub struct WalkError {
    path: PathBuf,
    source: io::Error,
}

impl WalkError {
    pub(crate) fn new(path: PathBuf, source: io::Error) -> Self {
        Self { path, source }
    }

    /// Returns the directory whose listing failed.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl fmt::Display for WalkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "failed to list directory '{}': {}",
            self.path.display(),
            self.source
        )
    }
}

impl Error for WalkError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.source)
    }
}
