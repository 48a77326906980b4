//! Prelude module for common imports.
//!
//! ```ignore
//! use tola_linediff::prelude::*;
//! ```

// Engine
pub use crate::engine::{DiffConfig, diff, diff_lines, diff_with_config};

// Data
pub use crate::op::{DiffOp, OpKind};
pub use crate::result::{DiffResult, Hunk, PaneLine};
pub use crate::stats::Stats;
pub use crate::tokenize::{LineSequence, tokenize};

// Export
pub use crate::export::{ExportConfig, to_text, to_text_bytes};

// Host helpers
pub use crate::batch::diff_batch;
pub use crate::cache::{CacheKey, DiffCache, SharedDiffCache};

// Error
pub use crate::error::{DiffError, DiffOutcome, ResourceLimit};

// Serialization
#[cfg(feature = "cache")]
pub use crate::serialize::{SCHEMA_VERSION, from_bytes, to_bytes};
