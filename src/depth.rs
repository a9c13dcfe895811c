/// Number of directory levels a traversal may list beneath its root.
///
/// The budget is consumed once per directory scan: `Depth::Limit(1)` lists
/// only the root's immediate entries, `Depth::Limit(2)` additionally lists
/// the entries of the root's subdirectories, and `Depth::Limit(0)` lists
/// nothing at all (the root is never scanned). [`Depth::Unbounded`] walks the
/// full subtree and is the default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Depth {
    /// No limit: descend through every reachable directory.
    #[default]
    Unbounded,
    /// Descend at most this many levels from the root.
    Limit(usize),
}

impl Depth {
    /// Budget left after spending one level on the current scan.
    pub(crate) const fn descend(self) -> Self {
        match self {
            Self::Unbounded => Self::Unbounded,
            Self::Limit(levels) => Self::Limit(levels.saturating_sub(1)),
        }
    }

    /// Reports whether the budget permits scanning another directory.
    pub(crate) const fn is_exhausted(self) -> bool {
        matches!(self, Self::Limit(0))
    }
}
