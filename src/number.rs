//! Line numbering.
//!
//! Turns the positional edit script into [`DiffOp`]s carrying content and
//! 1-based gutter numbers. Two running counters start at 1: `Equal` takes and
//! advances both, `Delete` only the old one, `Insert` only the new one. The
//! numbers serve a split view (each pane reads its own side) and a unified
//! view (both columns) alike.

use crate::backtrack::Edit;
use crate::op::DiffOp;

/// Attach content and line numbers to a document-order edit script.
pub fn number_lines(edits: &[Edit], old: &[&str], new: &[&str]) -> Vec<DiffOp> {
    let mut old_line_no = 1;
    let mut new_line_no = 1;
    let mut ops = Vec::with_capacity(edits.len());

    for edit in edits {
        let op = match *edit {
            Edit::Equal { old_idx, new_idx } => {
                debug_assert_eq!(old_idx + 1, old_line_no);
                debug_assert_eq!(new_idx + 1, new_line_no);
                let op = DiffOp::Equal {
                    content: old[old_idx].into(),
                    old_line: old_line_no,
                    new_line: new_line_no,
                };
                old_line_no += 1;
                new_line_no += 1;
                op
            }
            Edit::Delete { old_idx } => {
                debug_assert_eq!(old_idx + 1, old_line_no);
                let op = DiffOp::Delete {
                    content: old[old_idx].into(),
                    old_line: old_line_no,
                };
                old_line_no += 1;
                op
            }
            Edit::Insert { new_idx } => {
                debug_assert_eq!(new_idx + 1, new_line_no);
                let op = DiffOp::Insert {
                    content: new[new_idx].into(),
                    new_line: new_line_no,
                };
                new_line_no += 1;
                op
            }
        };
        ops.push(op);
    }

    ops
}
