//! Serialization support for diff results.
//!
//! Encodes a [`DiffResult`] as an rkyv archive with magic bytes and a schema
//! version, so hosts can persist a computed diff and reload it without
//! re-diffing. Stats are not stored; they are recomputed on load, and the
//! gutter numbers are checked for consistency.

use crate::error::{DiffError, DiffOutcome};
use crate::result::DiffResult;

/// Current schema version for archive validation.
/// Increment this when making breaking changes to SerDiff structure.
pub const SCHEMA_VERSION: u32 = 1;

/// Magic bytes for tola-linediff archives.
const MAGIC: [u8; 4] = *b"TLDF";

#[cfg(feature = "cache")]
mod concrete {
    //! Concrete serialization types.
    //!
    //! Op kinds are stored as a tag byte and absent line numbers as 0, which
    //! keeps every op the same flat shape.

    use rkyv::{Archive, Deserialize as RkyvDeserialize, Serialize as RkyvSerialize};

    pub const TAG_EQUAL: u8 = 0;
    pub const TAG_INSERT: u8 = 1;
    pub const TAG_DELETE: u8 = 2;

    /// Serializable diff.
    #[derive(Archive, RkyvSerialize, RkyvDeserialize, Debug)]
    pub struct SerDiff {
        /// Magic bytes for validation
        pub magic: [u8; 4],
        /// Schema version for compatibility checking
        pub schema_version: u32,
        pub ops: Vec<SerOp>,
    }

    /// Serializable op.
    #[derive(Archive, RkyvSerialize, RkyvDeserialize, Debug)]
    pub struct SerOp {
        pub tag: u8,
        pub content: String,
        /// 0 when the op has no old line
        pub old_line: u64,
        /// 0 when the op has no new line
        pub new_line: u64,
    }
}

#[cfg(feature = "cache")]
use concrete::*;

#[cfg(feature = "cache")]
use rkyv::rancor::Error as RkyvError;

/// Serialize a diff result to bytes.
#[cfg(feature = "cache")]
pub fn to_bytes(result: &DiffResult) -> DiffOutcome<Vec<u8>> {
    let ser = to_serializable(result);
    let bytes = rkyv::to_bytes::<RkyvError>(&ser)?;
    Ok(bytes.to_vec())
}

/// Deserialize bytes to a diff result.
///
/// # Errors
///
/// Returns an error if:
/// - Magic bytes don't match (not a tola-linediff archive)
/// - Schema version is incompatible
/// - Archive data is corrupted, or its line numbers are inconsistent
#[cfg(feature = "cache")]
pub fn from_bytes(bytes: &[u8]) -> DiffOutcome<DiffResult> {
    let mut aligned = rkyv::util::AlignedVec::<16>::with_capacity(bytes.len());
    aligned.extend_from_slice(bytes);

    let archived = rkyv::access::<ArchivedSerDiff, RkyvError>(&aligned)
        .map_err(|e| DiffError::corrupted(format!("failed to access archived data: {e}")))?;

    // Validate magic bytes
    let magic: [u8; 4] = archived.magic;
    if magic != MAGIC {
        return Err(DiffError::InvalidMagic {
            expected: MAGIC,
            found: magic,
        });
    }

    // Validate schema version
    let version: u32 = archived.schema_version.into();
    if version != SCHEMA_VERSION {
        return Err(DiffError::VersionMismatch {
            expected: SCHEMA_VERSION,
            found: version,
        });
    }

    from_serializable(archived)
}

// =============================================================================
// Conversion functions
// =============================================================================

#[cfg(feature = "cache")]
fn to_serializable(result: &DiffResult) -> SerDiff {
    use crate::op::DiffOp;

    let ops = result
        .ops
        .iter()
        .map(|op| {
            let tag = match op {
                DiffOp::Equal { .. } => TAG_EQUAL,
                DiffOp::Insert { .. } => TAG_INSERT,
                DiffOp::Delete { .. } => TAG_DELETE,
            };
            SerOp {
                tag,
                content: op.content().to_string(),
                old_line: op.old_line().unwrap_or(0) as u64,
                new_line: op.new_line().unwrap_or(0) as u64,
            }
        })
        .collect();

    SerDiff {
        magic: MAGIC,
        schema_version: SCHEMA_VERSION,
        ops,
    }
}

#[cfg(feature = "cache")]
fn from_serializable(archived: &ArchivedSerDiff) -> DiffOutcome<DiffResult> {
    use crate::op::DiffOp;

    let mut old_no = 1usize;
    let mut new_no = 1usize;
    let mut ops = Vec::with_capacity(archived.ops.len());

    for (idx, op) in archived.ops.iter().enumerate() {
        let old_line = op.old_line.to_native() as usize;
        let new_line = op.new_line.to_native() as usize;
        let content = op.content.as_str().into();

        let expect = |field: &str, found: usize, expected: usize| {
            if found == expected {
                Ok(())
            } else {
                Err(DiffError::corrupted(format!(
                    "op {idx}: {field} line {found}, expected {expected}"
                )))
            }
        };

        let decoded = match op.tag {
            TAG_EQUAL => {
                expect("old", old_line, old_no)?;
                expect("new", new_line, new_no)?;
                old_no += 1;
                new_no += 1;
                DiffOp::Equal {
                    content,
                    old_line,
                    new_line,
                }
            }
            TAG_INSERT => {
                expect("old", old_line, 0)?;
                expect("new", new_line, new_no)?;
                new_no += 1;
                DiffOp::Insert { content, new_line }
            }
            TAG_DELETE => {
                expect("old", old_line, old_no)?;
                expect("new", new_line, 0)?;
                old_no += 1;
                DiffOp::Delete { content, old_line }
            }
            tag => return Err(DiffError::corrupted(format!("op {idx}: unknown tag {tag}"))),
        };
        ops.push(decoded);
    }

    Ok(DiffResult::from_ops(ops))
}

// =============================================================================
// Non-cache stubs
// =============================================================================

#[cfg(not(feature = "cache"))]
pub fn to_bytes(_result: &DiffResult) -> DiffOutcome<Vec<u8>> {
    Err(DiffError::Serialize(
        "serialization requires 'cache' feature".to_string(),
    ))
}

#[cfg(not(feature = "cache"))]
pub fn from_bytes(_bytes: &[u8]) -> DiffOutcome<DiffResult> {
    Err(DiffError::Serialize(
        "deserialization requires 'cache' feature".to_string(),
    ))
}

// =============================================================================
// Tests
// =============================================================================
