//! Classified diff lines.

use std::fmt;

use compact_str::CompactString;

/// Kind of a diff line, without payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpKind {
    Equal,
    Insert,
    Delete,
}

impl OpKind {
    /// Two-character prefix used by the textual export format.
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Equal => "  ",
            Self::Insert => "+ ",
            Self::Delete => "- ",
        }
    }

    /// Kind with Insert and Delete swapped.
    pub const fn inverted(self) -> Self {
        match self {
            Self::Equal => Self::Equal,
            Self::Insert => Self::Delete,
            Self::Delete => Self::Insert,
        }
    }
}

/// One line of a diff, with its 1-based gutter numbers.
///
/// `Equal` is present on both sides, `Insert` only in the new text and
/// `Delete` only in the old text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffOp {
    /// Line present in both texts
    Equal {
        content: CompactString,
        old_line: usize,
        new_line: usize,
    },
    /// Line added in the new text
    Insert { content: CompactString, new_line: usize },
    /// Line removed from the old text
    Delete { content: CompactString, old_line: usize },
}

impl DiffOp {
    #[inline]
    pub fn kind(&self) -> OpKind {
        match self {
            Self::Equal { .. } => OpKind::Equal,
            Self::Insert { .. } => OpKind::Insert,
            Self::Delete { .. } => OpKind::Delete,
        }
    }

    /// Line content, without any line break.
    #[inline]
    pub fn content(&self) -> &str {
        match self {
            Self::Equal { content, .. } | Self::Insert { content, .. } | Self::Delete { content, .. } => {
                content.as_str()
            }
        }
    }

    /// 1-based line number in the old text, if present there.
    #[inline]
    pub fn old_line(&self) -> Option<usize> {
        match *self {
            Self::Equal { old_line, .. } | Self::Delete { old_line, .. } => Some(old_line),
            Self::Insert { .. } => None,
        }
    }

    /// 1-based line number in the new text, if present there.
    #[inline]
    pub fn new_line(&self) -> Option<usize> {
        match *self {
            Self::Equal { new_line, .. } | Self::Insert { new_line, .. } => Some(new_line),
            Self::Delete { .. } => None,
        }
    }

    pub fn is_equal(&self) -> bool {
        matches!(self, Self::Equal { .. })
    }

    pub fn is_change(&self) -> bool {
        !self.is_equal()
    }

    /// The same line seen from the other direction: Insert and Delete swap,
    /// and so do the old/new numbers.
    pub fn inverted(&self) -> Self {
        match self {
            Self::Equal {
                content,
                old_line,
                new_line,
            } => Self::Equal {
                content: content.clone(),
                old_line: *new_line,
                new_line: *old_line,
            },
            Self::Insert { content, new_line } => Self::Delete {
                content: content.clone(),
                old_line: *new_line,
            },
            Self::Delete { content, old_line } => Self::Insert {
                content: content.clone(),
                new_line: *old_line,
            },
        }
    }
}

/// Renders as one line of the textual export format, e.g. `"+ added"`.
impl fmt::Display for DiffOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.kind().prefix(), self.content())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let op = DiffOp::Equal {
            content: "same".into(),
            old_line: 3,
            new_line: 5,
        };
        assert_eq!(op.kind(), OpKind::Equal);
        assert_eq!(op.content(), "same");
        assert_eq!(op.old_line(), Some(3));
        assert_eq!(op.new_line(), Some(5));
        assert!(!op.is_change());

        let op = DiffOp::Insert {
            content: "new".into(),
            new_line: 2,
        };
        assert_eq!(op.old_line(), None);
        assert_eq!(op.new_line(), Some(2));
        assert!(op.is_change());
    }

    #[test]
    fn test_display_prefixes() {
        let ins = DiffOp::Insert { content: "x".into(), new_line: 1 };
        let del = DiffOp::Delete { content: "y".into(), old_line: 1 };
        let eq = DiffOp::Equal {
            content: "z".into(),
            old_line: 1,
            new_line: 1,
        };
        assert_eq!(ins.to_string(), "+ x");
        assert_eq!(del.to_string(), "- y");
        assert_eq!(eq.to_string(), "  z");
    }

    #[test]
    fn test_inverted_swaps_sides() {
        let del = DiffOp::Delete { content: "gone".into(), old_line: 4 };
        assert_eq!(
            del.inverted(),
            DiffOp::Insert {
                content: "gone".into(),
                new_line: 4
            }
        );
        assert_eq!(del.inverted().inverted(), del);
        assert_eq!(OpKind::Insert.inverted(), OpKind::Delete);
        assert_eq!(OpKind::Equal.inverted(), OpKind::Equal);
    }
}
