//! Line diff engine.
//!
//! Pure function from two texts to a [`DiffResult`]:
//!
//! ```text
//! tokenize -> intern -> LcsTable::build -> backtrack -> number_lines -> Stats
//! ```
//!
//! The table costs O(m * n) time and memory, so the input is checked against
//! [`DiffConfig`] before anything is allocated. Input over the ceiling yields
//! [`DiffError::ResourceExceeded`]; no partial result is ever returned.

use log::{debug, warn};

use crate::backtrack::backtrack;
use crate::error::{DiffError, DiffOutcome, ResourceLimit};
use crate::intern::intern;
use crate::number::number_lines;
use crate::result::DiffResult;
use crate::table::LcsTable;
use crate::tokenize::{LineSequence, tokenize};

/// Default maximum lines per side.
const DEFAULT_MAX_LINES: usize = 20_000;

/// Default maximum LCS table cells (100 MB of `u32`).
const DEFAULT_MAX_CELLS: usize = 25_000_000;

/// Hard line ceiling: line symbols and table cells are `u32`.
const HARD_MAX_LINES: usize = (u32::MAX / 2) as usize;

// =============================================================================
// DiffConfig
// =============================================================================

/// Resource ceiling for the engine.
///
/// Use this to tune how much input a caller accepts:
/// - Increase limits for large files (generated code, data dumps)
/// - Decrease limits for interactive use where each keystroke re-diffs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiffConfig {
    /// Maximum number of lines on either side.
    /// Default: 20000
    pub max_lines: usize,
    /// Maximum LCS table size, `(m + 1) * (n + 1)`.
    /// Default: 25000000
    pub max_cells: usize,
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self {
            max_lines: DEFAULT_MAX_LINES,
            max_cells: DEFAULT_MAX_CELLS,
        }
    }
}

impl DiffConfig {
    /// Create config with custom limits.
    pub fn new(max_lines: usize, max_cells: usize) -> Self {
        Self { max_lines, max_cells }
    }

    /// Config for large inputs (higher limits).
    pub fn large() -> Self {
        Self {
            max_lines: 200_000,
            max_cells: 400_000_000,
        }
    }

    /// Config for interactive use (lower limits, faster refusal).
    pub fn small() -> Self {
        Self {
            max_lines: 2_000,
            max_cells: 1_000_000,
        }
    }

    /// No ceiling beyond what the table's `u32` cells can index.
    pub fn unbounded() -> Self {
        Self {
            max_lines: HARD_MAX_LINES,
            max_cells: usize::MAX,
        }
    }

    /// Set the per-side line limit.
    pub fn with_max_lines(mut self, max_lines: usize) -> Self {
        self.max_lines = max_lines;
        self
    }

    /// Set the table cell limit.
    pub fn with_max_cells(mut self, max_cells: usize) -> Self {
        self.max_cells = max_cells;
        self
    }

    /// Check line counts against the ceiling.
    pub fn check(&self, old_lines: usize, new_lines: usize) -> DiffOutcome<()> {
        let max_lines = self.max_lines.min(HARD_MAX_LINES);
        let exceeded = |limit| DiffError::ResourceExceeded {
            old_lines,
            new_lines,
            limit,
        };

        if old_lines > max_lines || new_lines > max_lines {
            return Err(exceeded(ResourceLimit::Lines(max_lines)));
        }

        let cells = (old_lines + 1).checked_mul(new_lines + 1);
        match cells {
            Some(cells) if cells <= self.max_cells => Ok(()),
            _ => Err(exceeded(ResourceLimit::Cells(self.max_cells))),
        }
    }
}

// =============================================================================
// Main API
// =============================================================================

/// Diff two texts line by line with the default ceiling.
pub fn diff(old_text: &str, new_text: &str) -> DiffOutcome<DiffResult> {
    diff_with_config(old_text, new_text, &DiffConfig::default())
}

/// Diff two texts line by line with a custom ceiling.
pub fn diff_with_config(
    old_text: &str,
    new_text: &str,
    config: &DiffConfig,
) -> DiffOutcome<DiffResult> {
    diff_lines(&tokenize(old_text), &tokenize(new_text), config)
}

/// Diff two already tokenized line sequences.
pub fn diff_lines(
    old: &LineSequence<'_>,
    new: &LineSequence<'_>,
    config: &DiffConfig,
) -> DiffOutcome<DiffResult> {
    if let Err(err) = config.check(old.len(), new.len()) {
        warn!("refusing to diff: {err}");
        return Err(err);
    }

    let interned = intern(old, new);
    let table = LcsTable::build(&interned.old, &interned.new);
    debug!(
        "lcs table {}x{} ({} cells, {} distinct lines), lcs length {}",
        old.len() + 1,
        new.len() + 1,
        table.cell_count(),
        interned.distinct,
        table.lcs_len()
    );

    let edits = backtrack(&table, &interned.old, &interned.new);
    let result = DiffResult::from_ops(number_lines(&edits, old.as_slice(), new.as_slice()));
    debug!(
        "diff: +{} -{} ={}",
        result.stats.added, result.stats.removed, result.stats.unchanged
    );

    Ok(result)
}

// =============================================================================
// Tests
// =============================================================================
