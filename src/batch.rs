//! Batch diffing of independent text pairs.
//!
//! A single diff is sequential (table fill, then backtrack). Batches of
//! unrelated pairs, such as every file of a changeset, are independent and run
//! in parallel with rayon when the `parallel` feature is enabled. Output order
//! always matches input order.

use crate::engine::{DiffConfig, diff_with_config};
use crate::error::DiffOutcome;
use crate::result::DiffResult;

/// Diff every `(old, new)` pair under one config.
///
/// Each pair succeeds or fails on its own; one oversized pair does not
/// abort the rest.
#[cfg(feature = "parallel")]
pub fn diff_batch<S>(pairs: &[(S, S)], config: &DiffConfig) -> Vec<DiffOutcome<DiffResult>>
where
    S: AsRef<str> + Sync,
{
    use rayon::prelude::*;

    pairs
        .par_iter()
        .map(|(old, new)| diff_with_config(old.as_ref(), new.as_ref(), config))
        .collect()
}

/// Diff every `(old, new)` pair under one config.
///
/// Each pair succeeds or fails on its own; one oversized pair does not
/// abort the rest.
#[cfg(not(feature = "parallel"))]
pub fn diff_batch<S>(pairs: &[(S, S)], config: &DiffConfig) -> Vec<DiffOutcome<DiffResult>>
where
    S: AsRef<str> + Sync,
{
    pairs
        .iter()
        .map(|(old, new)| diff_with_config(old.as_ref(), new.as_ref(), config))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_preserves_order() {
        let pairs = vec![("a", "a"), ("a", "b"), ("x\ny", "y")];
        let results = diff_batch(&pairs, &DiffConfig::default());

        assert_eq!(results.len(), 3);
        assert!(!results[0].as_ref().unwrap().has_changes());
        assert_eq!(results[1].as_ref().unwrap().stats.added, 1);
        assert_eq!(results[2].as_ref().unwrap().stats.removed, 1);
    }

    #[test]
    fn test_batch_isolates_failures() {
        let big = "l\n".repeat(10);
        let pairs = vec![(big, String::from("l")), (String::from("a"), String::from("b"))];
        let results = diff_batch(&pairs, &DiffConfig::default().with_max_lines(5));

        assert!(results[0].as_ref().is_err_and(|e| e.is_resource_exceeded()));
        assert!(results[1].is_ok());
    }
}
