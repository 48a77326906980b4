//! LCS length table.
//!
//! `table[i][j]` holds the length of the longest common subsequence of the
//! first `i` old items and the first `j` new items. The grid is stored in one
//! contiguous buffer indexed by `i * (n + 1) + j`.
//!
//! # Recurrence
//!
//! ```text
//! table[0][*] = table[*][0] = 0
//! table[i][j] = table[i-1][j-1] + 1              if old[i-1] == new[j-1]
//!             = max(table[i-1][j], table[i][j-1]) otherwise
//! ```
//!
//! # Complexity
//!
//! - Time: O(m * n)
//! - Space: O(m * n)
//!
//! The engine checks its resource ceiling before calling [`LcsTable::build`];
//! this module never refuses input on its own.

/// Dense (m+1) x (n+1) LCS length grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LcsTable {
    rows: usize,
    cols: usize,
    cells: Vec<u32>,
}

impl LcsTable {
    /// Fill the table for two sequences.
    pub fn build<T: PartialEq>(old: &[T], new: &[T]) -> Self {
        let rows = old.len() + 1;
        let cols = new.len() + 1;
        let mut cells = vec![0u32; rows * cols];

        for i in 1..rows {
            let (prev, cur) = cells[(i - 1) * cols..(i + 1) * cols].split_at_mut(cols);
            let item = &old[i - 1];
            for j in 1..cols {
                cur[j] = if *item == new[j - 1] {
                    prev[j - 1] + 1
                } else {
                    prev[j].max(cur[j - 1])
                };
            }
        }

        Self { rows, cols, cells }
    }

    /// Cell `table[i][j]`.
    ///
    /// # Panics
    ///
    /// Panics if `i > m` or `j > n`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> u32 {
        assert!(i < self.rows && j < self.cols, "LCS table index ({i}, {j}) out of bounds");
        self.cells[i * self.cols + j]
    }

    /// Number of old items, `m`.
    #[inline]
    pub fn old_len(&self) -> usize {
        self.rows - 1
    }

    /// Number of new items, `n`.
    #[inline]
    pub fn new_len(&self) -> usize {
        self.cols - 1
    }

    /// Length of the LCS of the full sequences, `table[m][n]`.
    #[inline]
    pub fn lcs_len(&self) -> usize {
        self.cells[self.cells.len() - 1] as usize
    }

    /// Total number of cells, `(m + 1) * (n + 1)`.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Row `i` as a slice of `n + 1` cells.
    pub fn row(&self, i: usize) -> &[u32] {
        &self.cells[i * self.cols..(i + 1) * self.cols]
    }
}
