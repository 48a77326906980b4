//! Per-kind op counts.

use crate::op::DiffOp;

/// Statistics from a diff
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use]
pub struct Stats {
    /// Number of inserted lines
    pub added: usize,
    /// Number of deleted lines
    pub removed: usize,
    /// Number of lines present on both sides
    pub unchanged: usize,
}

impl Stats {
    /// Count ops by kind in a single pass.
    pub fn aggregate<'a>(ops: impl IntoIterator<Item = &'a DiffOp>) -> Self {
        ops.into_iter().fold(Self::default(), |mut stats, op| {
            match op {
                DiffOp::Equal { .. } => stats.unchanged += 1,
                DiffOp::Insert { .. } => stats.added += 1,
                DiffOp::Delete { .. } => stats.removed += 1,
            }
            stats
        })
    }

    /// Total number of changed lines (not counting unchanged)
    pub fn changes(&self) -> usize {
        self.added + self.removed
    }

    /// Check if there are no changes
    pub fn is_identical(&self) -> bool {
        self.changes() == 0
    }

    /// Total number of ops
    pub fn total(&self) -> usize {
        self.changes() + self.unchanged
    }

    /// Line count of the old text
    pub fn old_lines(&self) -> usize {
        self.unchanged + self.removed
    }

    /// Line count of the new text
    pub fn new_lines(&self) -> usize {
        self.unchanged + self.added
    }

    /// Stats of the same diff read in the other direction
    pub fn inverted(&self) -> Self {
        Self {
            added: self.removed,
            removed: self.added,
            unchanged: self.unchanged,
        }
    }
}
