use crate::depth::Depth;
use crate::walker::{DirectoryWalker, FileWalker, Traversal};
use std::path::PathBuf;

/// Configures a filesystem traversal rooted at a specific path.
///
/// Building a walker performs no filesystem access; the root is first read
/// when the walker's initial element is pulled, so a missing or unreadable
/// root surfaces as an error on that pull rather than here.
#[derive(Clone, Debug)]
pub struct WalkBuilder {
    root: PathBuf,
    max_depth: Depth,
    suffix: Option<String>,
}

impl WalkBuilder {
    /// Creates a new builder that will traverse the provided root path.
    #[must_use]
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self {
            root: root.into(),
            max_depth: Depth::Unbounded,
            suffix: None,
        }
    }

    /// Limits how many directory levels the traversal may list.
    ///
    /// Defaults to [`Depth::Unbounded`]. See [`Depth`] for the exact
    /// accounting.
    #[must_use]
    pub const fn max_depth(mut self, depth: Depth) -> Self {
        self.max_depth = depth;
        self
    }

    /// Restricts file traversal to paths ending with `suffix`.
    ///
    /// Matching is case-insensitive and literal: the suffix is compared
    /// verbatim against the end of each file's path, so `".jpg"` and `"jpg"`
    /// both match `photo.jpg`. Callers supply any leading dot themselves.
    /// Directory traversal ignores the filter.
    #[must_use]
    pub fn suffix<S: Into<String>>(mut self, suffix: S) -> Self {
        self.suffix = Some(suffix.into());
        self
    }

    /// Builds an iterator over the subdirectories beneath the root.
    #[must_use]
    pub fn directories(self) -> DirectoryWalker {
        DirectoryWalker::new(Traversal::new(self.root, self.max_depth))
    }

    /// Builds an iterator over the files beneath the root, honouring the
    /// configured suffix filter.
    #[must_use]
    pub fn files(self) -> FileWalker {
        FileWalker::new(Traversal::new(self.root, self.max_depth), self.suffix)
    }
}
