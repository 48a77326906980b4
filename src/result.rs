//! Diff result and its render-facing views.
//!
//! A [`DiffResult`] is pure data. Renderers pick the arrangement they need:
//!
//! ```text
//! old_pane()  -> Equal + Delete, numbered by old line   (split view, left)
//! new_pane()  -> Equal + Insert, numbered by new line   (split view, right)
//! unified()   -> every op, both numbers where present   (unified view)
//! hunks(n)    -> changes grouped with n context lines    (patch-like view)
//! ```

use std::fmt;

use smallvec::SmallVec;

use crate::op::{DiffOp, OpKind};
use crate::stats::Stats;
use crate::tokenize::LINE_BREAK;

// =============================================================================
// DiffResult
// =============================================================================

/// Ordered diff ops in document order, plus their counts.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[must_use]
pub struct DiffResult {
    /// Ops in top-to-bottom document order
    pub ops: Vec<DiffOp>,
    /// Counts by kind
    pub stats: Stats,
}

impl DiffResult {
    /// Wrap an op list, computing its stats.
    pub fn from_ops(ops: Vec<DiffOp>) -> Self {
        let stats = Stats::aggregate(&ops);
        Self { ops, stats }
    }

    /// Check if any line was inserted or deleted
    pub fn has_changes(&self) -> bool {
        !self.stats.is_identical()
    }

    /// Full op list with both gutter numbers, for a unified view.
    #[inline]
    pub fn unified(&self) -> &[DiffOp] {
        &self.ops
    }

    /// Left pane of a split view: Equal and Delete lines, old numbering.
    pub fn old_pane(&self) -> impl Iterator<Item = PaneLine<'_>> + '_ {
        self.ops.iter().filter_map(|op| {
            op.old_line().map(|line_no| PaneLine {
                line_no,
                kind: op.kind(),
                content: op.content(),
            })
        })
    }

    /// Right pane of a split view: Equal and Insert lines, new numbering.
    pub fn new_pane(&self) -> impl Iterator<Item = PaneLine<'_>> + '_ {
        self.ops.iter().filter_map(|op| {
            op.new_line().map(|line_no| PaneLine {
                line_no,
                kind: op.kind(),
                content: op.content(),
            })
        })
    }

    /// Rebuild the old text from Equal and Delete lines.
    pub fn old_text(&self) -> String {
        join_lines(self.old_pane().map(|line| line.content))
    }

    /// Rebuild the new text from Equal and Insert lines.
    pub fn new_text(&self) -> String {
        join_lines(self.new_pane().map(|line| line.content))
    }

    /// The same diff read from new to old: Insert and Delete swap, and so do
    /// the gutter numbers.
    ///
    /// This reuses the computed script. It is not guaranteed to equal
    /// `diff(new, old)`, which applies the tie-break in the other direction
    /// and may pick a different (equally long) common subsequence.
    pub fn inverted(&self) -> Self {
        Self {
            ops: self.ops.iter().map(DiffOp::inverted).collect(),
            stats: self.stats.inverted(),
        }
    }

    /// Group changes into hunks with up to `context` unchanged lines around
    /// them. Hunks whose context would touch or overlap are merged.
    pub fn hunks(&self, context: usize) -> Vec<Hunk> {
        let mut ranges: Vec<(usize, usize)> = Vec::new();
        for (idx, op) in self.ops.iter().enumerate() {
            if op.is_equal() {
                continue;
            }
            let start = idx.saturating_sub(context);
            let end = idx.saturating_add(context).saturating_add(1).min(self.ops.len());
            match ranges.last_mut() {
                Some(last) if start <= last.1 => last.1 = end,
                _ => ranges.push((start, end)),
            }
        }

        // Old/new lines seen before the current position.
        let mut pos = 0;
        let mut old_seen = 0;
        let mut new_seen = 0;
        let mut hunks = Vec::with_capacity(ranges.len());

        for (start, end) in ranges {
            for op in &self.ops[pos..start] {
                old_seen += usize::from(op.old_line().is_some());
                new_seen += usize::from(op.new_line().is_some());
            }

            let ops: SmallVec<[DiffOp; 8]> = self.ops[start..end].iter().cloned().collect();
            let old_len = ops.iter().filter(|op| op.old_line().is_some()).count();
            let new_len = ops.iter().filter(|op| op.new_line().is_some()).count();

            hunks.push(Hunk {
                old_start: hunk_start(old_seen, old_len),
                old_len,
                new_start: hunk_start(new_seen, new_len),
                new_len,
                ops,
            });

            old_seen += old_len;
            new_seen += new_len;
            pos = end;
        }

        hunks
    }
}

/// Hunk start line. An empty side points at the line it follows.
fn hunk_start(seen: usize, len: usize) -> usize {
    if len == 0 { seen } else { seen + 1 }
}

fn join_lines<'a>(lines: impl Iterator<Item = &'a str>) -> String {
    let mut out = String::new();
    for (i, line) in lines.enumerate() {
        if i > 0 {
            out.push(LINE_BREAK);
        }
        out.push_str(line);
    }
    out
}

// =============================================================================
// PaneLine
// =============================================================================

/// One row of a split-view pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaneLine<'a> {
    /// 1-based line number on this pane's side
    pub line_no: usize,
    /// Equal, or the pane's change kind
    pub kind: OpKind,
    pub content: &'a str,
}

// =============================================================================
// Hunk
// =============================================================================

/// A contiguous group of changes with surrounding context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hunk {
    /// First old line covered (or the line it follows, when `old_len == 0`)
    pub old_start: usize,
    pub old_len: usize,
    /// First new line covered (or the line it follows, when `new_len == 0`)
    pub new_start: usize,
    pub new_len: usize,
    /// Ops in the hunk, context included
    pub ops: SmallVec<[DiffOp; 8]>,
}

impl Hunk {
    /// `@@ -a,b +c,d @@` header line.
    pub fn header(&self) -> String {
        format!(
            "@@ -{},{} +{},{} @@",
            self.old_start, self.old_len, self.new_start, self.new_len
        )
    }
}

impl fmt::Display for Hunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.header())?;
        for op in &self.ops {
            write!(f, "{}{}", LINE_BREAK, op)?;
        }
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================
