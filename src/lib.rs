#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `seek` provides depth-bounded, lazily evaluated filesystem traversal. Two
//! walkers cover the common enumeration tasks: [`DirectoryWalker`] yields the
//! subdirectory paths beneath a root, and [`FileWalker`] yields the file paths
//! beneath a root, optionally restricted to paths ending with a
//! case-insensitive suffix. Both sort each directory's entries by name before
//! yielding them, so output order is deterministic and reproducible across
//! runs and across filesystems whose native listing order is unspecified.
//!
//! # Design
//!
//! - [`WalkBuilder`] configures a traversal: the root path, an optional
//!   [`Depth`] bound, and (for file traversal) an optional suffix filter.
//!   Building a walker performs no filesystem access.
//! - [`DirectoryWalker`] and [`FileWalker`] implement [`Iterator`] and yield
//!   `Result<PathBuf, WalkError>` values in depth-first pre-order: a
//!   directory's own entry is delivered before anything found inside it, and a
//!   directory's contents are exhausted before the walker moves to the next
//!   sibling.
//! - [`Depth`] bounds how many directory levels a traversal may list.
//!   `Depth::Limit(1)` lists only the root's immediate entries;
//!   [`Depth::Unbounded`] (the default) walks the full subtree.
//!
//! # Invariants
//!
//! - Every yielded path is the configured root joined with the names of the
//!   entries on the way down; the walker never normalises or absolutises
//!   paths, so a relative root produces relative results.
//! - Each directory on the path from the root to a yielded entry is scanned at
//!   most once per traversal, and its listing handle is released before the
//!   scan's first entry is yielded.
//! - Traversal is lazy: each pull performs at most one directory scan, and a
//!   consumer that stops pulling leaves the rest of the tree untouched.
//!
//! # Errors
//!
//! Listing a directory that does not exist, is not a directory, or cannot be
//! read surfaces as a [`WalkError`] carrying the offending path and the
//! underlying [`io::Error`](std::io::Error). Because traversal is lazy, the
//! error is delivered on the pull that reaches the offending directory, which
//! for the root means the first pull. Paths yielded before the failing pull
//! remain valid results; after an error the iterator is exhausted.
//!
//! # Examples
//!
//! Enumerate the `.jpg` files in a temporary tree:
//!
//! ```
//! use seek::WalkBuilder;
//! use std::fs;
//!
//! # fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let temp = tempfile::tempdir()?;
//! let root = temp.path().join("photos");
//! fs::create_dir_all(root.join("raw"))?;
//! fs::write(root.join("a.jpg"), b"")?;
//! fs::write(root.join("notes.txt"), b"")?;
//! fs::write(root.join("raw").join("b.JPG"), b"")?;
//!
//! let files = WalkBuilder::new(&root)
//!     .suffix(".jpg")
//!     .files()
//!     .collect::<Result<Vec<_>, _>>()?;
//! assert_eq!(files, vec![root.join("a.jpg"), root.join("raw").join("b.JPG")]);
//! # Ok(())
//! # }
//! # demo().unwrap();
//! ```
//!
//! Enumerate subdirectories one level deep:
//!
//! ```
//! use seek::{Depth, WalkBuilder};
//! use std::fs;
//!
//! # fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let temp = tempfile::tempdir()?;
//! fs::create_dir_all(temp.path().join("a").join("nested"))?;
//! fs::create_dir(temp.path().join("b"))?;
//!
//! let dirs = WalkBuilder::new(temp.path())
//!     .max_depth(Depth::Limit(1))
//!     .directories()
//!     .collect::<Result<Vec<_>, _>>()?;
//! assert_eq!(dirs, vec![temp.path().join("a"), temp.path().join("b")]);
//! # Ok(())
//! # }
//! # demo().unwrap();
//! ```

mod builder;
mod depth;
mod error;
mod walker;

pub use builder::WalkBuilder;
pub use depth::Depth;
pub use error::WalkError;
pub use walker::{DirectoryWalker, FileWalker};
