//! Pointer into the action tree's key hierarchy.

/// Pointer into the loaded tree's hierarchy.
///
/// Holds indices into each parent sibling list rather than references, so the
/// state machine never borrows the tree it is navigating. The path is only
/// ever extended through a successful group match against the same tree, so
/// resolving it back cannot fail within a session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Cursor {
    /// Indices into the parent sibling lists for each descent step.
    path: Vec<u32>,
}

impl Cursor {
    /// Logical depth equals the number of elements in the path (root = 0).
    pub fn depth(&self) -> usize {
        self.path.len()
    }

    /// Push an index step into the path.
    pub fn push(&mut self, idx: u32) {
        self.path.push(idx);
    }

    /// Clear the path, returning to root.
    pub fn clear(&mut self) {
        self.path.clear();
    }

    /// Borrow the immutable path for resolution or logging.
    pub fn path(&self) -> &[u32] {
        &self.path
    }
}
