//! Backtracking reconstruction of the edit script.
//!
//! Walks the LCS table from `(m, n)` back to `(0, 0)`:
//!
//! 1. items equal: emit `Equal`, step diagonally;
//! 2. `j > 0` and (`i == 0` or `table[i][j-1] >= table[i-1][j]`): emit
//!    `Insert`, step left;
//! 3. otherwise emit `Delete`, step up.
//!
//! The `>=` in rule 2 is the tie-break: when the insert path and the delete
//! path carry the same LCS length, the insert is taken first while walking
//! backwards, which places it *after* the competing deletes in document
//! order. Among the equally minimal scripts this selects exactly one, and the
//! output must match it edit for edit.
//!
//! Edits are collected end-to-start and reversed before returning.

use crate::table::LcsTable;

/// One edit of the script, by 0-based position in the old/new sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edit {
    /// old[old_idx] == new[new_idx], kept
    Equal { old_idx: usize, new_idx: usize },
    /// new[new_idx] inserted
    Insert { new_idx: usize },
    /// old[old_idx] deleted
    Delete { old_idx: usize },
}

impl Edit {
    /// Check if this is an Equal edit
    pub fn is_equal(&self) -> bool {
        matches!(self, Edit::Equal { .. })
    }

    /// 0-based old position, if the edit touches the old side.
    pub fn old_idx(&self) -> Option<usize> {
        match *self {
            Edit::Equal { old_idx, .. } | Edit::Delete { old_idx } => Some(old_idx),
            Edit::Insert { .. } => None,
        }
    }

    /// 0-based new position, if the edit touches the new side.
    pub fn new_idx(&self) -> Option<usize> {
        match *self {
            Edit::Equal { new_idx, .. } | Edit::Insert { new_idx } => Some(new_idx),
            Edit::Delete { .. } => None,
        }
    }
}

/// Reconstruct the document-order edit script from a filled table.
///
/// `table` must have been built from exactly `old` and `new`.
pub fn backtrack<T: PartialEq>(table: &LcsTable, old: &[T], new: &[T]) -> Vec<Edit> {
    debug_assert_eq!(table.old_len(), old.len());
    debug_assert_eq!(table.new_len(), new.len());

    let mut edits = Vec::with_capacity(old.len() + new.len() - table.lcs_len());
    let mut i = old.len();
    let mut j = new.len();

    while i > 0 || j > 0 {
        if i > 0 && j > 0 && old[i - 1] == new[j - 1] {
            edits.push(Edit::Equal {
                old_idx: i - 1,
                new_idx: j - 1,
            });
            i -= 1;
            j -= 1;
        } else if j > 0 && (i == 0 || table.get(i, j - 1) >= table.get(i - 1, j)) {
            edits.push(Edit::Insert { new_idx: j - 1 });
            j -= 1;
        } else {
            edits.push(Edit::Delete { old_idx: i - 1 });
            i -= 1;
        }
    }

    edits.reverse();
    edits
}

#[cfg(test)]
mod tests {
    use super::*;

    fn script(old: &[&str], new: &[&str]) -> Vec<Edit> {
        let table = LcsTable::build(old, new);
        backtrack(&table, old, new)
    }

    #[test]
    fn test_substitution_orders_delete_before_insert() {
        let edits = script(&["a", "b", "c"], &["a", "x", "c"]);
        assert_eq!(
            edits,
            vec![
                Edit::Equal { old_idx: 0, new_idx: 0 },
                Edit::Delete { old_idx: 1 },
                Edit::Insert { new_idx: 1 },
                Edit::Equal { old_idx: 2, new_idx: 2 },
            ]
        );
    }

    #[test]
    fn test_tie_break_prefers_insert_when_walking_back() {
        // Both "keep x" and "keep y" are valid LCS choices; the tie-break keeps
        // the later new item aligned and inserts the earlier one.
        let edits = script(&["x", "y"], &["y", "x"]);
        assert_eq!(
            edits,
            vec![
                Edit::Delete { old_idx: 0 },
                Edit::Equal { old_idx: 1, new_idx: 0 },
                Edit::Insert { new_idx: 1 },
            ]
        );
    }

    #[test]
    fn test_disjoint_deletes_then_inserts() {
        let edits = script(&["p", "q", "r"], &["s", "t"]);
        assert_eq!(
            edits,
            vec![
                Edit::Delete { old_idx: 0 },
                Edit::Delete { old_idx: 1 },
                Edit::Delete { old_idx: 2 },
                Edit::Insert { new_idx: 0 },
                Edit::Insert { new_idx: 1 },
            ]
        );
    }

    #[test]
    fn test_empty_sides() {
        assert_eq!(
            script(&[], &["a", "b"]),
            vec![Edit::Insert { new_idx: 0 }, Edit::Insert { new_idx: 1 }]
        );
        assert_eq!(script(&["a"], &[]), vec![Edit::Delete { old_idx: 0 }]);
        assert!(script(&[], &[]).is_empty());
    }

    #[test]
    fn test_equal_count_matches_lcs_len() {
        let old = ["a", "b", "c", "b", "d", "a", "b"];
        let new = ["b", "d", "c", "a", "b", "a"];
        let table = LcsTable::build(&old, &new);
        let edits = backtrack(&table, &old, &new);
        let kept = edits.iter().filter(|e| e.is_equal()).count();
        assert_eq!(kept, table.lcs_len());
        assert_eq!(edits.len(), old.len() + new.len() - kept);
    }

    #[test]
    fn test_indices_are_monotonic() {
        let old = ["1", "2", "3", "4", "5"];
        let new = ["0", "2", "4", "5", "6"];
        let edits = script(&old, &new);

        let olds: Vec<_> = edits.iter().filter_map(Edit::old_idx).collect();
        let news: Vec<_> = edits.iter().filter_map(Edit::new_idx).collect();
        assert_eq!(olds, (0..old.len()).collect::<Vec<_>>());
        assert_eq!(news, (0..new.len()).collect::<Vec<_>>());
    }
}
