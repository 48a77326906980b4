//! Error types for tola-linediff.
//!
//! The engine itself has one failure mode for string input: refusing to
//! allocate an LCS table above the configured ceiling. The remaining variants
//! belong to persisted results and to host-level validation.

use std::fmt;

use thiserror::Error;

/// Which ceiling a refused input crossed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceLimit {
    /// Maximum number of lines on either side.
    Lines(usize),
    /// Maximum number of LCS table cells, `(m + 1) * (n + 1)`.
    Cells(usize),
}

impl fmt::Display for ResourceLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lines(n) => write!(f, "{n} lines per side"),
            Self::Cells(n) => write!(f, "{n} table cells"),
        }
    }
}

/// Errors that can occur while diffing or loading a persisted diff.
#[derive(Debug, Error)]
pub enum DiffError {
    /// Input too large to diff under the configured ceiling.
    #[error("input too large to diff: {old_lines} old x {new_lines} new lines exceeds {limit}")]
    ResourceExceeded {
        /// Line count of the old text
        old_lines: usize,
        /// Line count of the new text
        new_lines: usize,
        /// The ceiling that was crossed
        limit: ResourceLimit,
    },

    /// Input refused by host-level validation before reaching the engine.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Persisted schema version mismatch
    #[error("diff archive version mismatch: expected v{expected}, found v{found}")]
    VersionMismatch {
        /// Expected schema version
        expected: u32,
        /// Found schema version
        found: u32,
    },

    /// Persisted data is corrupted or internally inconsistent
    #[error("diff archive corrupted: {0}")]
    Corrupted(String),

    /// Serialization/deserialization failed
    #[error("serialization error: {0}")]
    Serialize(String),

    /// Magic bytes validation failed
    #[error("invalid diff archive: expected magic bytes {expected:?}, found {found:?}")]
    InvalidMagic {
        /// Expected magic bytes
        expected: [u8; 4],
        /// Found magic bytes
        found: [u8; 4],
    },
}

/// Result type alias for diff operations.
pub type DiffOutcome<T> = Result<T, DiffError>;

impl DiffError {
    /// Create an invalid-input error with a message.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a corruption error with a message.
    pub fn corrupted(msg: impl Into<String>) -> Self {
        Self::Corrupted(msg.into())
    }

    /// Create a serialization error from any error type.
    pub fn serialize(err: impl std::error::Error) -> Self {
        Self::Serialize(err.to_string())
    }

    /// Whether this error is the resource ceiling refusal.
    pub fn is_resource_exceeded(&self) -> bool {
        matches!(self, Self::ResourceExceeded { .. })
    }
}

#[cfg(feature = "cache")]
impl From<rkyv::rancor::Error> for DiffError {
    fn from(err: rkyv::rancor::Error) -> Self {
        Self::Serialize(err.to_string())
    }
}
