use crate::depth::Depth;
use crate::error::WalkError;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::trace;

/// Iterator over the subdirectory paths beneath a root.
///
/// Yields every directory discovered within the configured depth, in
/// depth-first pre-order with each directory's entries visited in ascending
/// name order. Files are skipped. Created by
/// [`WalkBuilder::directories`](crate::WalkBuilder::directories).
#[derive(Debug)]
pub struct DirectoryWalker {
    inner: Traversal,
}

impl DirectoryWalker {
    pub(crate) fn new(inner: Traversal) -> Self {
        Self { inner }
    }
}

impl Iterator for DirectoryWalker {
    type Item = Result<PathBuf, WalkError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.inner.advance()? {
                Ok(entry) if entry.kind == EntryKind::Directory => {
                    return Some(Ok(entry.path));
                }
                Ok(_) => {}
                Err(error) => return Some(Err(error)),
            }
        }
    }
}

/// Iterator over the file paths beneath a root.
///
/// Yields every file discovered within the configured depth, in depth-first
/// pre-order with each directory's entries visited in ascending name order.
/// Directories are never yielded but are still descended into. When a suffix
/// filter is configured, only files whose path ends with the filter
/// (compared case-insensitively) are yielded. Created by
/// [`WalkBuilder::files`](crate::WalkBuilder::files).
#[derive(Debug)]
pub struct FileWalker {
    inner: Traversal,
    suffix: Option<String>,
}

impl FileWalker {
    pub(crate) fn new(inner: Traversal, suffix: Option<String>) -> Self {
        let suffix = suffix.map(|s| s.to_lowercase());
        Self { inner, suffix }
    }

    fn matches(&self, path: &Path) -> bool {
        match &self.suffix {
            None => true,
            Some(suffix) => path.to_string_lossy().to_lowercase().ends_with(suffix),
        }
    }
}

impl Iterator for FileWalker {
    type Item = Result<PathBuf, WalkError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.inner.advance()? {
                Ok(entry) if entry.kind == EntryKind::File && self.matches(&entry.path) => {
                    return Some(Ok(entry.path));
                }
                Ok(_) => {}
                Err(error) => return Some(Err(error)),
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum EntryKind {
    Directory,
    File,
}

#[derive(Clone, Debug)]
pub(crate) struct ScannedEntry {
    pub(crate) path: PathBuf,
    pub(crate) kind: EntryKind,
}

/// Shared pre-order traversal engine behind both walkers.
///
/// Directory scans are deferred: when an entry turns out to be a directory
/// with depth budget left, its path is parked in `pending` and scanned at the
/// start of the next pull, after the entry itself has been delivered. This
/// keeps listing failures from invalidating results already handed out.
#[derive(Debug)]
pub(crate) struct Traversal {
    pending: Option<(PathBuf, Depth)>,
    stack: Vec<DirectoryState>,
    finished: bool,
}

impl Traversal {
    pub(crate) fn new(root: PathBuf, max_depth: Depth) -> Self {
        Self {
            pending: Some((root, max_depth)),
            stack: Vec::new(),
            finished: false,
        }
    }

    fn advance(&mut self) -> Option<Result<ScannedEntry, WalkError>> {
        if self.finished {
            return None;
        }

        loop {
            if let Some((path, depth)) = self.pending.take() {
                if !depth.is_exhausted() {
                    match DirectoryState::scan(path, depth) {
                        Ok(state) => self.stack.push(state),
                        Err(error) => {
                            self.finished = true;
                            return Some(Err(error));
                        }
                    }
                }
            }

            let (entry, remaining) = {
                let state = self.stack.last_mut()?;
                if let Some(entry) = state.next_entry() {
                    (entry, state.remaining)
                } else {
                    self.stack.pop();
                    continue;
                }
            };

            if entry.kind == EntryKind::Directory && !remaining.is_exhausted() {
                self.pending = Some((entry.path.clone(), remaining));
            }
            return Some(Ok(entry));
        }
    }
}

#[derive(Debug)]
struct DirectoryState {
    entries: Vec<ScannedEntry>,
    index: usize,
    remaining: Depth,
}

impl DirectoryState {
    /// Lists `path` in one pass, sorts the entries by name, and releases the
    /// listing handle before returning.
    fn scan(path: PathBuf, depth: Depth) -> Result<Self, WalkError> {
        let read_dir = fs::read_dir(&path).map_err(|error| WalkError::new(path.clone(), error))?;

        let mut named: Vec<(OsString, ScannedEntry)> = Vec::new();
        for entry in read_dir {
            let entry = entry.map_err(|error| WalkError::new(path.clone(), error))?;
            let entry_path = entry.path();
            if let Some(kind) = classify(&entry, &entry_path) {
                named.push((entry.file_name(), ScannedEntry { path: entry_path, kind }));
            }
        }
        named.sort_by(|a, b| a.0.cmp(&b.0));

        trace!(
            path = %path.display(),
            entries = named.len(),
            "scanned directory"
        );

        Ok(Self {
            entries: named.into_iter().map(|(_, entry)| entry).collect(),
            index: 0,
            remaining: depth.descend(),
        })
    }

    fn next_entry(&mut self) -> Option<ScannedEntry> {
        let entry = self.entries.get(self.index)?.clone();
        self.index += 1;
        Some(entry)
    }
}

/// Classifies an entry, following symlinks per the platform default.
/// Dangling symlinks are neither directories nor files and are skipped.
fn classify(entry: &fs::DirEntry, path: &Path) -> Option<EntryKind> {
    let file_type = entry.file_type().ok()?;
    let file_type = if file_type.is_symlink() {
        fs::metadata(path).ok()?.file_type()
    } else {
        file_type
    };

    if file_type.is_dir() {
        Some(EntryKind::Directory)
    } else if file_type.is_file() {
        Some(EntryKind::File)
    } else {
        None
    }
}
