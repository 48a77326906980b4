//! tola-linediff - Line-level LCS Diff Engine
//!
//! ## Core Concepts
//!
//! **Deterministic edit scripts**: two texts are split into lines, a classic
//! O(m * n) LCS table is filled, and a backtrack with a fixed tie-break
//! (insert preferred while walking back) yields exactly one script among the
//! equally minimal ones. The same inputs always produce the same ops.
//!
//! ## Modules
//! - `tokenize`: text to `LineSequence`
//! - `table`: flat LCS length table
//! - `backtrack`: edit script reconstruction
//! - `number`: 1-based gutter numbering
//! - `stats`: per-kind counts
//! - `engine`: `diff`, `diff_with_config`, resource ceiling
//! - `result`: split/unified/hunk views
//! - `export`: `+`/`-` textual interchange format
//! - `cache`: memoization keyed by blake3 hashes of the inputs
//!
//! ## Usage
//!
//! ```
//! use tola_linediff::{diff, to_text, ExportConfig, OpKind};
//!
//! let result = diff("a\nb\nc", "a\nx\nc").unwrap();
//! let kinds: Vec<_> = result.ops.iter().map(|op| op.kind()).collect();
//! assert_eq!(kinds, [OpKind::Equal, OpKind::Delete, OpKind::Insert, OpKind::Equal]);
//! assert_eq!(to_text(&result, &ExportConfig::PLAIN), "  a\n- b\n+ x\n  c");
//! ```

// =============================================================================
// Algorithm modules
// =============================================================================

/// Tokenizer: raw text to lines
pub mod tokenize;

/// Line interning for integer comparisons
pub mod intern;

/// LCS length table
pub mod table;

/// Edit script reconstruction
pub mod backtrack;

/// Gutter line numbering
pub mod number;

/// Op counts
pub mod stats;

/// Diff ops
pub mod op;

/// Engine entry points and resource ceiling
pub mod engine;

// =============================================================================
// Result, export and host helpers
// =============================================================================

/// Diff result and views
pub mod result;

/// Textual export
pub mod export;

/// Deterministic hashing
pub mod hash;

/// Memoized diffs
pub mod cache;

/// Batch diffing
pub mod batch;

/// Persisted diffs
pub mod serialize;

/// Error types
pub mod error;

/// Prelude for common imports
pub mod prelude;

// =============================================================================
// Re-exports
// =============================================================================

// Engine
pub use engine::{DiffConfig, diff, diff_lines, diff_with_config};

// Building blocks
pub use backtrack::{Edit, backtrack};
pub use number::number_lines;
pub use table::LcsTable;
pub use tokenize::{LineSequence, tokenize};

// Data
pub use op::{DiffOp, OpKind};
pub use result::{DiffResult, Hunk, PaneLine};
pub use stats::Stats;

// Export
pub use export::{ExportConfig, to_text, to_text_bytes};

// Host helpers
pub use batch::diff_batch;
pub use cache::{CacheKey, DiffCache, SharedDiffCache};
pub use hash::StableHasher;

// Error types
pub use error::{DiffError, DiffOutcome, ResourceLimit};

// =============================================================================
// Tests
// =============================================================================
